use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SEPARATORS: [char; 3] = ['/', '.', '?'];
/// Splat placeholders always swallow the remainder, separators included.
pub const SPLAT_PATTERN: &str = ".+";
pub const UNSEPARATED_PARAM_PATTERN: &str = ".+";

const RESERVED_SEPARATORS: [char; 5] = [':', '*', '(', ')', '\\'];

/// How compiled patterns spell group names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NamedCaptureSyntax {
    /// `({name}...)`; stripped before the source reaches the regex engine and
    /// kept in a positional side table instead.
    #[default]
    Shim,
    /// `(?<name>...)`, understood by the regex engine directly.
    Native,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerOptions {
    pub separators: Vec<char>,
    pub syntax: NamedCaptureSyntax,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_vec(),
            syntax: NamedCaptureSyntax::default(),
        }
    }
}

impl CompilerOptions {
    pub fn builder() -> CompilerOptionsBuilder {
        CompilerOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        for (idx, &separator) in self.separators.iter().enumerate() {
            if RESERVED_SEPARATORS.contains(&separator) {
                return Err(OptionsError::ReservedSeparator { separator });
            }
            if self.separators[..idx].contains(&separator) {
                return Err(OptionsError::DuplicateSeparator { separator });
            }
        }
        Ok(())
    }

    /// Constraint used for `:name` placeholders without an explicit
    /// requirement: anything but a separator, or `.+` when there are none.
    pub fn default_param_pattern(&self) -> String {
        if self.separators.is_empty() {
            return UNSEPARATED_PARAM_PATTERN.to_string();
        }

        let mut class = String::from("[^");
        for separator in &self.separators {
            class.push_str(&regex::escape(separator.encode_utf8(&mut [0u8; 4])));
        }
        class.push_str("]+");
        class
    }
}

#[derive(Debug, Default, Clone)]
pub struct CompilerOptionsBuilder {
    options: CompilerOptions,
}

impl CompilerOptionsBuilder {
    pub fn separators<I>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.options.separators = separators.into_iter().collect();
        self
    }

    pub fn syntax(mut self, syntax: NamedCaptureSyntax) -> Self {
        self.options.syntax = syntax;
        self
    }

    pub fn build(self) -> Result<CompilerOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("separator '{separator}' is listed more than once")]
    DuplicateSeparator { separator: char },
    #[error("separator '{separator}' is reserved by the pattern syntax")]
    ReservedSeparator { separator: char },
}
