use crate::capture::CaptureError;
use crate::pattern::{OptionsError, PatternError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    Options(#[from] OptionsError),
}

pub type Result<T> = std::result::Result<T, Error>;
