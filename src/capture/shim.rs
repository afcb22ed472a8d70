use crate::pattern::NamedCaptureSyntax;
use crate::pattern::lexer::is_identifier_byte;

use super::{CaptureError, CaptureResult};

/// Positional group names: one entry per capturing group, in order of the
/// opening parenthesis. Unnamed groups hold `None`.
pub type NameList = Vec<Option<String>>;

/// What follows an unescaped `(`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GroupOpen<'a> {
    /// `({name}`; the marker spans `marker_len` bytes after the paren.
    Shim { name: &'a str, marker_len: usize },
    /// `(?<name>` or `(?P<name>`.
    Native { name: &'a str, marker_len: usize },
    /// `(?:`, inline flags, lookaround; no capture slot.
    NonCapturing,
    Plain,
}

impl GroupOpen<'_> {
    pub(crate) fn is_capturing(&self) -> bool {
        !matches!(self, Self::NonCapturing)
    }
}

/// Classifies the group whose `(` sits right before `rest`.
pub(crate) fn classify_group(rest: &str) -> GroupOpen<'_> {
    if let Some(after) = rest.strip_prefix('{')
        && let Some(name) = leading_name(after, '}')
    {
        return GroupOpen::Shim {
            name,
            marker_len: name.len() + 2,
        };
    }

    let Some(after) = rest.strip_prefix('?') else {
        return GroupOpen::Plain;
    };

    let (after, prefix_len) = match after.strip_prefix("P<") {
        Some(after) => (after, 3),
        None => match after.strip_prefix('<') {
            Some(after) => (after, 2),
            None => return GroupOpen::NonCapturing,
        },
    };

    match leading_name(after, '>') {
        Some(name) => GroupOpen::Native {
            name,
            marker_len: prefix_len + name.len() + 1,
        },
        // lookbehind such as `(?<=` or `(?<!`
        None => GroupOpen::NonCapturing,
    }
}

fn leading_name(text: &str, terminator: char) -> Option<&str> {
    let end = text.find(terminator)?;
    let name = &text[..end];
    if name.is_empty() || !name.bytes().all(is_identifier_byte) {
        return None;
    }
    Some(name)
}

/// Writes the opening of a named group in the requested syntax.
pub(crate) fn open_named_group(out: &mut String, name: &str, syntax: NamedCaptureSyntax) {
    match syntax {
        NamedCaptureSyntax::Shim => {
            out.push_str("({");
            out.push_str(name);
            out.push('}');
        }
        NamedCaptureSyntax::Native => {
            out.push_str("(?<");
            out.push_str(name);
            out.push('>');
        }
    }
}

/// Returns the byte offset just past the `]` closing the class opened at
/// `start`. Nested classes (`[a-z&&[^x]]`) and escapes are honoured.
pub(crate) fn class_end(source: &str, start: usize) -> CaptureResult<usize> {
    let bytes = source.as_bytes();
    let mut idx = start + 1;
    if bytes.get(idx) == Some(&b'^') {
        idx += 1;
    }
    // a leading `]` is a literal member
    if bytes.get(idx) == Some(&b']') {
        idx += 1;
    }

    let mut depth = 1usize;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' => idx += 2,
            b'[' => {
                depth += 1;
                idx += 1;
            }
            b']' => {
                depth -= 1;
                idx += 1;
                if depth == 0 {
                    return Ok(idx);
                }
            }
            _ => idx += 1,
        }
    }

    Err(CaptureError::UnterminatedClass {
        pattern: source.to_string(),
        index: start,
    })
}

/// Removes shim name markers from `source`, leaving plain capture groups
/// the regex engine understands, and collects the positional name list.
///
/// Native `(?<name>` groups are left in place but still reported, so callers
/// see the same list whichever syntax produced the source.
#[tracing::instrument(level = "trace", skip(source), fields(source_len=source.len() as u64))]
pub fn strip_shim(source: &str) -> CaptureResult<(String, NameList)> {
    let mut clean = String::with_capacity(source.len());
    let mut names = NameList::new();
    let mut idx = 0usize;

    while let Some(ch) = source[idx..].chars().next() {
        match ch {
            '\\' => {
                let Some(escaped) = source[idx + 1..].chars().next() else {
                    return Err(CaptureError::TrailingEscape {
                        pattern: source.to_string(),
                    });
                };
                clean.push('\\');
                clean.push(escaped);
                idx += 1 + escaped.len_utf8();
            }
            '[' => {
                let end = class_end(source, idx)?;
                clean.push_str(&source[idx..end]);
                idx = end;
            }
            '(' => {
                clean.push('(');
                idx += 1;
                match classify_group(&source[idx..]) {
                    GroupOpen::Shim { name, marker_len } => {
                        names.push(Some(name.to_string()));
                        idx += marker_len;
                    }
                    GroupOpen::Native { name, .. } => names.push(Some(name.to_string())),
                    GroupOpen::NonCapturing => {}
                    GroupOpen::Plain => names.push(None),
                }
            }
            _ => {
                clean.push(ch);
                idx += ch.len_utf8();
            }
        }
    }

    Ok((clean, names))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_shim_markers_positionally() {
        let (clean, names) = strip_shim(r"^foo(\.({ext}[^/]+))?$").expect("valid source");
        assert_eq!(clean, r"^foo(\.([^/]+))?$");
        assert_eq!(names, vec![None, Some("ext".to_string())]);
    }

    #[test]
    fn reports_native_names_without_rewriting() {
        let source = r"^(?<a>x)(?P<b>y)(z)$";
        let (clean, names) = strip_shim(source).expect("valid source");
        assert_eq!(clean, source);
        assert_eq!(
            names,
            vec![Some("a".to_string()), Some("b".to_string()), None]
        );
    }

    #[test]
    fn non_capturing_groups_take_no_slot() {
        let (_, names) = strip_shim(r"^(?:a|b)(?i)({c}x)(?<=y)$").expect("valid source");
        assert_eq!(names, vec![Some("c".to_string())]);
    }

    #[test]
    fn escaped_and_class_parens_are_literal() {
        let (clean, names) = strip_shim(r"^\(a\)[(){x}]({n}.)$").expect("valid source");
        assert_eq!(clean, r"^\(a\)[(){x}](.)$");
        assert_eq!(names, vec![Some("n".to_string())]);
    }

    #[test]
    fn dangling_escape_is_rejected() {
        assert!(matches!(
            strip_shim("^abc\\"),
            Err(CaptureError::TrailingEscape { .. })
        ));
    }

    #[test]
    fn unterminated_class_is_rejected() {
        assert!(matches!(
            strip_shim("^[abc"),
            Err(CaptureError::UnterminatedClass { index: 1, .. })
        ));
    }

    #[test]
    fn nested_classes_close_at_the_outer_bracket() {
        assert_eq!(class_end("[a-z&&[^x]]b", 0), Ok(11));
        assert_eq!(class_end("[]a]", 0), Ok(4));
        assert_eq!(class_end("[[:alpha:]]", 0), Ok(11));
    }
}
