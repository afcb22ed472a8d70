mod compiled;
mod compiler;
mod error;
pub(crate) mod lexer;
mod options;
mod requirement;

pub use compiled::CompiledPattern;
pub use compiler::{PatternInput, compile, compile_source};
pub use error::{PatternError, PatternResult};
pub use lexer::{Token, tokenize};
pub use options::{
    CompilerOptions, CompilerOptionsBuilder, DEFAULT_SEPARATORS, NamedCaptureSyntax,
    OptionsError, SPLAT_PATTERN, UNSEPARATED_PARAM_PATTERN,
};
pub use requirement::{Requirement, Requirements};
