//! Module descriptors and resource location
//!
//! A descriptor is the lightweight pointer a module registers at startup:
//! which bundle it ships in and which file holds its content configuration.
//! The registry itself never defines descriptors, it only consumes them.
//! Explicit registration replaces the original platform's runtime scan for
//! conforming classes.

use std::path::PathBuf;

/// Identifies where one module's content resource lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// Bundle name fragment, joined to the application's identifier prefix
    /// and used as the resource subdirectory
    pub bundle_fragment: String,

    /// Resource file name without extension
    pub resource_name: String,

    /// Resource file extension ("json", "yaml")
    pub resource_ext: String,
}

impl ModuleDescriptor {
    pub fn new(
        bundle_fragment: impl Into<String>,
        resource_name: impl Into<String>,
        resource_ext: impl Into<String>,
    ) -> Self {
        Self {
            bundle_fragment: bundle_fragment.into(),
            resource_name: resource_name.into(),
            resource_ext: resource_ext.into(),
        }
    }

    /// Full resource file name, e.g. "Fighter.json".
    pub fn resource_file_name(&self) -> String {
        format!("{}.{}", self.resource_name, self.resource_ext)
    }
}

/// Resource-locator capability consumed by the registry.
pub trait ResourceLocator: Send + Sync {
    /// Resolve a descriptor to the path of its content resource, or `None`
    /// when no backing file exists.
    fn locate(&self, descriptor: &ModuleDescriptor) -> Option<PathBuf>;
}

/// Filesystem locator searching a fixed list of root directories.
///
/// For each root, the bundle subdirectory is tried before the root itself,
/// mirroring the original bundle-then-main-bundle lookup.
#[derive(Debug, Clone)]
pub struct BundleLocator {
    roots: Vec<PathBuf>,
}

impl BundleLocator {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }
}

impl ResourceLocator for BundleLocator {
    fn locate(&self, descriptor: &ModuleDescriptor) -> Option<PathBuf> {
        let file_name = descriptor.resource_file_name();

        for root in &self.roots {
            let bundled = root.join(&descriptor.bundle_fragment).join(&file_name);
            if bundled.is_file() {
                return Some(bundled);
            }

            let flat = root.join(&file_name);
            if flat.is_file() {
                return Some(flat);
            }
        }

        None
    }
}
