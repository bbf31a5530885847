//! Configuration loading and caching
//!
//! Resolves a named resource against the primary directory, then the
//! fallback directory, and decodes it into a [`ConfigDocument`]. Loading
//! fails softly: a missing or unparseable resource is logged and replaced
//! with a fully-defaulted document so the platform always reaches a running
//! state.

use super::{paths, schema::ConfigDocument};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Extensions tried, in order, when a resource name carries none.
const RESOURCE_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Configuration store
///
/// Owns the loaded documents; consumers receive shared read-only handles.
/// Documents are cached for the lifetime of the store, there is no reload
/// operation.
#[derive(Debug)]
pub struct ConfigStore {
    primary: PathBuf,
    fallback: PathBuf,
    cache: RwLock<HashMap<String, Arc<ConfigDocument>>>,
}

impl ConfigStore {
    /// Create a store over the default resource directories.
    pub fn new() -> Self {
        Self::with_roots(paths::config_dir(), paths::data_dir())
    }

    /// Create a store over explicit primary and fallback directories.
    pub fn with_roots(primary: PathBuf, fallback: PathBuf) -> Self {
        Self {
            primary,
            fallback,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn primary_root(&self) -> &Path {
        &self.primary
    }

    pub fn fallback_root(&self) -> &Path {
        &self.fallback
    }

    /// Load the named document, reading it from disk on first access and
    /// from the cache afterwards.
    ///
    /// Never fails: read and parse errors are logged and a defaulted
    /// document is cached and returned in their place.
    pub fn load(&self, resource_name: &str) -> Arc<ConfigDocument> {
        if let Some(doc) = self.cache.read().unwrap().get(resource_name) {
            return Arc::clone(doc);
        }

        let doc = Arc::new(self.load_uncached(resource_name));
        self.cache
            .write()
            .unwrap()
            .insert(resource_name.to_string(), Arc::clone(&doc));
        doc
    }

    fn load_uncached(&self, resource_name: &str) -> ConfigDocument {
        match self.try_load(resource_name) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(
                    "Falling back to default configuration for '{}': {:#}",
                    resource_name,
                    e
                );
                ConfigDocument::default()
            }
        }
    }

    fn try_load(&self, resource_name: &str) -> Result<ConfigDocument> {
        let path = self
            .locate(resource_name)
            .with_context(|| format!("Resource not found: {}", resource_name))?;

        tracing::debug!("Loading configuration from: {}", path.display());
        read_resource(&path)
    }

    /// Resolve a resource name to a file path, trying the primary directory
    /// before the fallback directory.
    pub fn locate(&self, resource_name: &str) -> Option<PathBuf> {
        for root in [&self.primary, &self.fallback] {
            for candidate in candidate_names(resource_name) {
                let path = root.join(&candidate);
                if path.is_file() {
                    return Some(path);
                }
            }
        }
        None
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

fn candidate_names(resource_name: &str) -> Vec<String> {
    if Path::new(resource_name).extension().is_some() {
        return vec![resource_name.to_string()];
    }
    RESOURCE_EXTENSIONS
        .iter()
        .map(|ext| format!("{}.{}", resource_name, ext))
        .collect()
}

/// Read and decode one resource file, picking the parser by extension.
pub(crate) fn read_resource<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read resource: {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    match extension {
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON resource: {}", path.display())),
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML resource: {}", path.display())),
        other => Err(anyhow::anyhow!(
            "Unsupported resource extension '{}': {}",
            other,
            path.display()
        )),
    }
}
