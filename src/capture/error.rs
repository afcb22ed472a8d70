use thiserror::Error;

/// Malformed input to the shim translator or the capture tree extractor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("pattern '{pattern}' is not anchored with '^'")]
    NotAnchored { pattern: String },
    #[error("unbalanced ')' at byte {index} in '{pattern}'")]
    UnbalancedClose { pattern: String, index: usize },
    #[error("{open} group(s) left open at end of '{pattern}'")]
    UnclosedGroup { pattern: String, open: usize },
    #[error("character class starting at byte {index} in '{pattern}' is never closed")]
    UnterminatedClass { pattern: String, index: usize },
    #[error("pattern '{pattern}' ends with a dangling escape")]
    TrailingEscape { pattern: String },
    #[error("capture group #{group} in '{pattern}' has no entry in the name list")]
    NameListExhausted { pattern: String, group: usize },
}

pub type CaptureResult<T> = Result<T, CaptureError>;
