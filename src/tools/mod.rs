mod trim;

pub use trim::{trim_trailing_absent, trimmed};
