mod env;
mod view;

pub use env::{DEFAULT_METHOD, DEFAULT_PATH, PATH_INFO, REQUEST_METHOD, RequestEnv};
pub use view::RequestSegments;
