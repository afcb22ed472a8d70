use smallvec::SmallVec;

use super::lexer::{Token, tokenize};
use super::options::SPLAT_PATTERN;
use super::{CompiledPattern, CompilerOptions, PatternError, PatternResult, Requirements};
use crate::capture::open_named_group;

/// Either route DSL text or a pattern that is already compiled.
#[derive(Debug, Clone)]
pub enum PatternInput<'a> {
    Dsl(&'a str),
    Compiled(CompiledPattern),
}

impl<'a> From<&'a str> for PatternInput<'a> {
    fn from(pattern: &'a str) -> Self {
        Self::Dsl(pattern)
    }
}

impl<'a> From<&'a String> for PatternInput<'a> {
    fn from(pattern: &'a String) -> Self {
        Self::Dsl(pattern)
    }
}

impl From<CompiledPattern> for PatternInput<'_> {
    fn from(pattern: CompiledPattern) -> Self {
        Self::Compiled(pattern)
    }
}

/// Compiles a route pattern. Already compiled input is returned unchanged.
pub fn compile<'a, P>(
    input: P,
    requirements: &Requirements,
    options: &CompilerOptions,
) -> PatternResult<CompiledPattern>
where
    P: Into<PatternInput<'a>>,
{
    match input.into() {
        PatternInput::Compiled(pattern) => Ok(pattern),
        PatternInput::Dsl(pattern) => {
            CompiledPattern::from_source(compile_source(pattern, requirements, options)?)
        }
    }
}

/// Translates route DSL into anchored regex source.
///
/// Literal text is escaped, `:name` becomes a named group constrained by its
/// requirement, `*name` a named group matching `.+`, and `( ... )` an
/// optional group.
#[tracing::instrument(level = "trace", skip(requirements, options), fields(requirements=requirements.len() as u64))]
pub fn compile_source(
    pattern: &str,
    requirements: &Requirements,
    options: &CompilerOptions,
) -> PatternResult<String> {
    let resolved = requirements.resolve(options)?;
    let mut body = String::with_capacity(pattern.len() * 2);
    let mut open: SmallVec<[usize; 4]> = SmallVec::new();
    let mut seen: SmallVec<[&str; 4]> = SmallVec::new();

    for token in tokenize(pattern) {
        match token {
            Token::Literal(text) => body.push_str(&regex::escape(&text)),
            Token::Param(name) => {
                claim_name(&mut seen, name, pattern)?;
                push_group(&mut body, name, resolved.constraint_for(name), options);
            }
            Token::Splat(name) => {
                claim_name(&mut seen, name, pattern)?;
                push_group(&mut body, name, SPLAT_PATTERN, options);
            }
            Token::OptionalOpen(index) => {
                open.push(index);
                body.push('(');
            }
            Token::OptionalClose(index) => {
                if open.pop().is_none() {
                    return Err(PatternError::UnexpectedOptionalClose {
                        pattern: pattern.to_string(),
                        index,
                    });
                }
                body.push_str(")?");
            }
        }
    }

    if let Some(&index) = open.last() {
        return Err(PatternError::UnclosedOptional {
            pattern: pattern.to_string(),
            index,
        });
    }

    Ok(format!("^{body}$"))
}

fn claim_name<'a>(
    seen: &mut SmallVec<[&'a str; 4]>,
    name: &'a str,
    pattern: &str,
) -> PatternResult<()> {
    if seen.contains(&name) {
        return Err(PatternError::DuplicateParamName {
            param: name.to_string(),
            pattern: pattern.to_string(),
        });
    }
    seen.push(name);
    Ok(())
}

fn push_group(body: &mut String, name: &str, constraint: &str, options: &CompilerOptions) {
    open_named_group(body, name, options.syntax);
    body.push_str(constraint);
    body.push(')');
}
