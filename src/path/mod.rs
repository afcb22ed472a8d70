mod normalize;

pub use normalize::normalize_path;
