// Content module system for the platform core
//
// Modules describe themselves with a small descriptor; the registry resolves
// each descriptor to a configuration resource, decodes it into a content
// holder tree, and maintains the ordered collection the rest of the
// application renders from.

pub mod descriptor;
pub mod holder;
pub mod registry;
pub mod selection;

pub use descriptor::{BundleLocator, ModuleDescriptor, ResourceLocator};
pub use holder::{ContentHolder, IconType};
pub use registry::ModuleRegistry;
pub use selection::SelectionState;

/// Content errors
///
/// These never escape the registry's public operations; they are logged and
/// the failing descriptor is substituted with a placeholder holder.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Content resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Failed to decode content resource {0}: {1}")]
    DecodeFailure(String, String),
}
