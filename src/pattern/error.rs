use crate::capture::CaptureError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("optional group opened at byte {index} in '{pattern}' is never closed")]
    UnclosedOptional { pattern: String, index: usize },
    #[error("')' at byte {index} in '{pattern}' does not close an optional group")]
    UnexpectedOptionalClose { pattern: String, index: usize },
    #[error("duplicate parameter name '{param}' in pattern '{pattern}'")]
    DuplicateParamName { param: String, pattern: String },
    #[error("requirement for parameter '{name}' is not a valid regex: {message}")]
    RequirementInvalid { name: String, message: String },
    #[error("regex engine rejected compiled pattern '{compiled}'")]
    Regex {
        compiled: String,
        #[source]
        error: regex::Error,
    },
    #[error(transparent)]
    Capture(#[from] CaptureError),
}

pub type PatternResult<T> = Result<T, PatternError>;
