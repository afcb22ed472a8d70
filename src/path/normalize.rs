/// Canonicalizes a route path: a leading slash is always present, runs of
/// slashes collapse to one and trailing slashes are removed. The empty
/// result is the root `/`.
#[inline]
#[tracing::instrument(level = "trace", skip(path), fields(path_len=path.len() as u64))]
pub fn normalize_path(path: &str) -> String {
    let mut output = String::with_capacity(path.len() + 1);
    output.push('/');
    let mut prev_was_slash = true;

    for ch in path.chars() {
        if ch == '/' {
            if prev_was_slash {
                continue;
            }
            prev_was_slash = true;
        } else {
            prev_was_slash = false;
        }
        output.push(ch);
    }

    while output.len() > 1 && output.ends_with('/') {
        output.pop();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_canonical_paths() {
        assert_eq!(normalize_path("/foo"), "/foo");
    }

    #[test]
    fn trims_trailing_slash() {
        assert_eq!(normalize_path("/foo/"), "/foo");
    }

    #[test]
    fn prepends_missing_slash() {
        assert_eq!(normalize_path("foo"), "/foo");
    }

    #[test]
    fn empty_path_is_root() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn collapses_duplicates_and_trims_trailing_slashes() {
        assert_eq!(normalize_path("//foo///bar/"), "/foo/bar");
    }

    #[test]
    fn leaves_non_ascii_segments_untouched() {
        assert_eq!(normalize_path("/こんにちは//x"), "/こんにちは/x");
    }
}
