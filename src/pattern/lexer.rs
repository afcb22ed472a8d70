/// One lexical unit of the route DSL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Unescaped literal text; consecutive characters are coalesced.
    Literal(String),
    /// `:name`
    Param(&'a str),
    /// `*name`
    Splat(&'a str),
    /// `(` opening an optional group, with its byte offset.
    OptionalOpen(usize),
    /// `)` closing an optional group, with its byte offset.
    OptionalClose(usize),
}

/// Splits a route pattern into tokens in a single pass.
///
/// A backslash makes the following character literal, so `\(`, `\:` and
/// `\*` never open groups or placeholders. `:` or `*` not followed by an
/// identifier is plain text.
#[tracing::instrument(level = "trace", skip(pattern), fields(pattern_len=pattern.len() as u64))]
pub fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.char_indices();

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some((_, escaped)) => literal.push(escaped),
                None => literal.push('\\'),
            },
            ':' | '*' => {
                let name = identifier_at(pattern, idx + 1);
                if name.is_empty() {
                    literal.push(ch);
                    continue;
                }
                flush_literal(&mut tokens, &mut literal);
                tokens.push(if ch == ':' {
                    Token::Param(name)
                } else {
                    Token::Splat(name)
                });
                // identifiers are ASCII, one byte per char
                for _ in 0..name.len() {
                    chars.next();
                }
            }
            '(' => {
                flush_literal(&mut tokens, &mut literal);
                tokens.push(Token::OptionalOpen(idx));
            }
            ')' => {
                flush_literal(&mut tokens, &mut literal);
                tokens.push(Token::OptionalClose(idx));
            }
            _ => literal.push(ch),
        }
    }

    flush_literal(&mut tokens, &mut literal);
    tokens
}

#[inline]
pub(crate) fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn identifier_at(pattern: &str, start: usize) -> &str {
    let rest = &pattern[start..];
    let len = rest
        .bytes()
        .position(|b| !is_identifier_byte(b))
        .unwrap_or(rest.len());
    &rest[..len]
}

fn flush_literal(tokens: &mut Vec<Token<'_>>, literal: &mut String) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }
}
