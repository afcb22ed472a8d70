mod significance;

pub use significance::{key_frequencies, significant_keys};
