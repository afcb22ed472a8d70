use regex::Regex;

use super::{PatternError, PatternResult};
use crate::capture::{CaptureResult, CaptureTree, NameList, extract_tree, strip_shim};
use crate::tools::trim_trailing_absent;
use crate::types::{CaptureList, RouteParams};

/// Engine-ready route regex plus the positional table of group names.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
    names: NameList,
}

impl CompiledPattern {
    /// Builds a pattern from anchored source in shim or native syntax. Shim
    /// markers are stripped before the source reaches the regex engine.
    pub fn from_source<S: Into<String>>(source: S) -> PatternResult<Self> {
        let source = source.into();
        let (clean, names) = strip_shim(&source)?;
        let regex = Regex::new(&clean).map_err(|error| PatternError::Regex {
            compiled: clean.clone(),
            error,
        })?;

        Ok(Self {
            source,
            regex,
            names,
        })
    }

    /// Source as emitted by the compiler, markers included.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// One entry per capturing group in order of appearance.
    pub fn names(&self) -> &[Option<String>] {
        &self.names
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().filter_map(|name| name.as_deref())
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Matches `path` and binds every named group through the name table.
    /// Positional values cover every capture group, named or not, so they
    /// line up with [`names`](Self::names).
    #[tracing::instrument(level = "trace", skip(self, path), fields(path_len=path.len() as u64))]
    pub fn captures(&self, path: &str) -> Option<RouteParams> {
        let caps = self.regex.captures(path)?;
        let mut named = CaptureList::new();
        let mut values = Vec::new();

        for (group, name) in self.names.iter().enumerate() {
            let matched = caps.get(group + 1);
            if let (Some(name), Some(m)) = (name, matched) {
                named.push((name.clone(), (m.start(), m.len())));
            }
            values.push(matched.map(|m| m.as_str().to_string()));
        }

        trim_trailing_absent(&mut values);
        Some(RouteParams::new(path, named, values))
    }

    pub fn capture_tree(&self) -> CaptureResult<CaptureTree> {
        extract_tree(self)
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for CompiledPattern {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shim_source_compiles_without_markers() {
        let pattern = CompiledPattern::from_source(r"^a/({id}[^/]+)$").expect("valid source");
        assert_eq!(pattern.regex().as_str(), r"^a/([^/]+)$");
        assert_eq!(pattern.source(), r"^a/({id}[^/]+)$");
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn binds_names_positionally() {
        let pattern =
            CompiledPattern::from_source(r"^({a}[^/]+)(/({b}[^/]+))?$").expect("valid source");
        let params = pattern.captures("x/y").expect("should match");
        assert_eq!(params.get("a"), Some("x"));
        assert_eq!(params.get("b"), Some("y"));
        assert_eq!(params.offset("b"), Some((2, 1)));

        let params = pattern.captures("x").expect("should match");
        assert_eq!(params.get("b"), None);
        assert_eq!(params.positional(), &[Some("x".to_string())]);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn positional_values_follow_the_name_table() {
        let pattern =
            CompiledPattern::from_source(r"^foo(\.({ext}.+))?$").expect("valid source");
        assert_eq!(pattern.names(), &[None, Some("ext".to_string())]);

        let params = pattern.captures("foo.txt").expect("should match");
        assert_eq!(
            params.positional(),
            &[Some(".txt".to_string()), Some("txt".to_string())]
        );
        let bare = pattern.captures("foo").expect("should match");
        assert!(bare.positional().is_empty());
    }

    #[test]
    fn iterates_named_values_in_order() {
        let pattern = CompiledPattern::from_source(r"^/({user}[^/]+)/({post}[^/]+)$")
            .expect("valid source");
        let params = pattern.captures("/ann/42").expect("should match");
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("user", "ann"), ("post", "42")]);
    }

    #[test]
    fn rejected_source_reports_engine_error() {
        let err = CompiledPattern::from_source("^a{2,1}$").unwrap_err();
        assert!(matches!(err, PatternError::Regex { .. }));
    }
}
