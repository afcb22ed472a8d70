use std::collections::HashMap;
use std::hash::BuildHasher;

pub const REQUEST_METHOD: &str = "REQUEST_METHOD";
pub const PATH_INFO: &str = "PATH_INFO";
pub const DEFAULT_METHOD: &str = "GET";
pub const DEFAULT_PATH: &str = "/";

/// Read-only key/value view of an incoming request.
pub trait RequestEnv {
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> RequestEnv for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<S: BuildHasher> RequestEnv for HashMap<&str, &str, S> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).copied()
    }
}

impl<S: BuildHasher> RequestEnv for hashbrown::HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<E: RequestEnv + ?Sized> RequestEnv for &E {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}
