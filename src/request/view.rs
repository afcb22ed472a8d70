use std::cell::OnceCell;

use super::{DEFAULT_METHOD, DEFAULT_PATH, PATH_INFO, REQUEST_METHOD, RequestEnv};
use crate::tools::trim_trailing_absent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Segments<'e> {
    first: Option<&'e str>,
    second: Option<&'e str>,
}

/// Cheap per-request view over the first two path segments, used to reject
/// routes before any regex runs. Segments are split once, on first access.
///
/// Not `Sync`; build one view per request.
#[derive(Debug)]
pub struct RequestSegments<'e, E: ?Sized> {
    env: &'e E,
    segments: OnceCell<Segments<'e>>,
}

impl<'e, E: RequestEnv + ?Sized> RequestSegments<'e, E> {
    pub fn new(env: &'e E) -> Self {
        Self {
            env,
            segments: OnceCell::new(),
        }
    }

    pub fn method(&self) -> &'e str {
        E::lookup(self.env, REQUEST_METHOD).unwrap_or(DEFAULT_METHOD)
    }

    pub fn path(&self) -> &'e str {
        E::lookup(self.env, PATH_INFO).unwrap_or(DEFAULT_PATH)
    }

    pub fn first_segment(&self) -> Option<&'e str> {
        self.segments().first
    }

    pub fn second_segment(&self) -> Option<&'e str> {
        self.segments().second
    }

    fn segments(&self) -> Segments<'e> {
        *self.segments.get_or_init(|| split_segments(self.path()))
    }
}

/// Splits on `/`, `.` and `?`. Token 0 is whatever precedes the first
/// delimiter (empty for rooted paths); empty tokens at the end are dropped.
#[tracing::instrument(level = "trace", skip(path), fields(path_len=path.len() as u64))]
fn split_segments(path: &str) -> Segments<'_> {
    let bytes = path.as_bytes();
    let mut tokens: Vec<Option<&str>> = Vec::new();
    let mut start = 0usize;

    while let Some(pos) = memchr::memchr3(b'/', b'.', b'?', &bytes[start..]) {
        tokens.push(non_empty(&path[start..start + pos]));
        start += pos + 1;
    }
    tokens.push(non_empty(&path[start..]));
    trim_trailing_absent(&mut tokens);

    let at = |idx: usize| tokens.get(idx).map(|token| token.unwrap_or(""));
    Segments {
        first: at(1),
        second: at(2),
    }
}

fn non_empty(token: &str) -> Option<&str> {
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(
        method: Option<&'static str>,
        path: Option<&'static str>,
    ) -> HashMap<&'static str, &'static str> {
        let mut env = HashMap::new();
        if let Some(method) = method {
            env.insert(REQUEST_METHOD, method);
        }
        if let Some(path) = path {
            env.insert(PATH_INFO, path);
        }
        env
    }

    #[test]
    fn exposes_first_two_segments() {
        let env = env(Some("POST"), Some("/users/42/edit"));
        let view = RequestSegments::new(&env);
        assert_eq!(view.method(), "POST");
        assert_eq!(view.first_segment(), Some("users"));
        assert_eq!(view.second_segment(), Some("42"));
    }

    #[test]
    fn dots_and_queries_delimit_segments() {
        let env = env(None, Some("/report.pdf?download=1"));
        let view = RequestSegments::new(&env);
        assert_eq!(view.first_segment(), Some("report"));
        assert_eq!(view.second_segment(), Some("pdf"));
    }

    #[test]
    fn defaults_apply_to_missing_entries() {
        let env = env(None, None);
        let view = RequestSegments::new(&env);
        assert_eq!(view.method(), "GET");
        assert_eq!(view.path(), "/");
        assert_eq!(view.first_segment(), None);
        assert_eq!(view.second_segment(), None);
    }

    #[test]
    fn trailing_empty_tokens_are_absent() {
        let foo = split_segments("/foo/");
        assert_eq!((foo.first, foo.second), (Some("foo"), None));
        let bar = split_segments("//bar");
        assert_eq!((bar.first, bar.second), (Some(""), Some("bar")));
        assert_eq!(split_segments("/"), Segments::default());
    }

    #[test]
    fn split_is_computed_once() {
        let env = env(None, Some("/a/b"));
        let view = RequestSegments::new(&env);
        assert!(view.segments.get().is_none());
        assert_eq!(view.first_segment(), Some("a"));
        let cached = view.segments.get().copied().expect("cached after first access");
        assert_eq!(cached.second, Some("b"));
        assert_eq!(view.second_segment(), Some("b"));
    }
}
