mod error;
mod extract;
mod node;
mod shim;

pub use error::{CaptureError, CaptureResult};
pub use extract::{extract_tree, extract_tree_from_source, extract_tree_with_names};
pub use node::{CaptureElement, CaptureNode, CaptureTree};
pub use shim::{NameList, strip_shim};

pub(crate) use shim::open_named_group;
