pub mod capture;
pub mod errors;
pub mod keys;
pub mod path;
pub mod pattern;
pub mod request;
pub mod tools;
pub mod types;

pub use capture::{CaptureElement, CaptureNode, CaptureTree, extract_tree, strip_shim};
pub use errors::{Error, Result};
pub use keys::significant_keys;
pub use path::normalize_path;
pub use pattern::{
    CompiledPattern, CompilerOptions, NamedCaptureSyntax, Requirement, Requirements, compile,
};
pub use request::{RequestEnv, RequestSegments};
pub use tools::trim_trailing_absent;
pub use types::RouteParams;

/// A route pattern compiled together with its capture tree, ready for a
/// dispatcher to register.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    compiled: CompiledPattern,
    tree: CaptureTree,
}

impl RoutePattern {
    /// Compiles `pattern` and extracts its capture tree eagerly, so malformed
    /// routes fail at registration time.
    pub fn new(
        pattern: &str,
        requirements: &Requirements,
        options: &CompilerOptions,
    ) -> Result<Self> {
        options.validate()?;
        let compiled = compile(pattern, requirements, options)?;
        let tree = compiled.capture_tree()?;
        Ok(Self { compiled, tree })
    }

    pub fn compiled(&self) -> &CompiledPattern {
        &self.compiled
    }

    pub fn tree(&self) -> &CaptureTree {
        &self.tree
    }

    pub fn captures(&self, path: &str) -> Option<RouteParams> {
        self.compiled.captures(path)
    }
}
