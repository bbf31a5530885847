//! Module registry
//!
//! Materializes one content holder per registered descriptor and maintains
//! the priority-ordered collection downstream list rendering depends on.
//! Individual resolution failures are isolated: the failing module becomes a
//! placeholder holder and the discovery pass continues.

use std::sync::Arc;

use tokio::sync::broadcast;

use super::descriptor::{ModuleDescriptor, ResourceLocator};
use super::holder::ContentHolder;
use super::ContentError;
use crate::config::loader::read_resource;
use crate::events::{EventChannel, ModulesLoaded};

/// Module registry
///
/// Owns the canonical holder instances; consumers receive shared read-only
/// handles into the collection.
pub struct ModuleRegistry {
    locator: Box<dyn ResourceLocator>,
    descriptors: Vec<ModuleDescriptor>,
    holders: Vec<Arc<ContentHolder>>,
    events: EventChannel<ModulesLoaded>,
}

impl ModuleRegistry {
    pub fn new(locator: Box<dyn ResourceLocator>) -> Self {
        Self {
            locator,
            descriptors: Vec::new(),
            holders: Vec::new(),
            events: EventChannel::new(),
        }
    }

    /// Register a module descriptor. Modules call this at startup; the
    /// registration order is the tie-break for equal priorities.
    pub fn register(&mut self, descriptor: ModuleDescriptor) {
        tracing::debug!(
            "Registered module descriptor: {}",
            descriptor.resource_file_name()
        );
        self.descriptors.push(descriptor);
    }

    /// Materialize every registered descriptor and rebuild the ordered
    /// collection.
    ///
    /// The result is sorted ascending by priority; equal priorities keep
    /// their registration order. Zero registered descriptors yield an empty
    /// collection, not an error. A `ModulesLoaded` event is published on
    /// completion.
    pub fn discover(&mut self) -> &[Arc<ContentHolder>] {
        let mut holders = Vec::with_capacity(self.descriptors.len());

        for descriptor in &self.descriptors {
            let holder = match materialize(self.locator.as_ref(), descriptor) {
                Ok(holder) => holder,
                Err(e) => {
                    tracing::warn!(
                        "Substituting placeholder for module '{}': {}",
                        descriptor.resource_file_name(),
                        e
                    );
                    ContentHolder::placeholder()
                }
            };
            holders.push(Arc::new(holder));
        }

        // Stable: equal priorities preserve registration order
        holders.sort_by_key(|holder| holder.priority);
        self.holders = holders;

        tracing::info!("Discovered {} content module(s)", self.holders.len());
        self.events.publish(ModulesLoaded {
            count: self.holders.len(),
        });

        &self.holders
    }

    /// The ordered collection from the last discovery pass.
    pub fn collection(&self) -> &[Arc<ContentHolder>] {
        &self.holders
    }

    /// Find a holder by its identifier.
    pub fn get(&self, identifier: &str) -> Option<&Arc<ContentHolder>> {
        self.holders
            .iter()
            .find(|holder| holder.identifier == identifier)
    }

    pub fn len(&self) -> usize {
        self.holders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }

    /// Subscribe to `ModulesLoaded` events.
    pub fn subscribe(&self) -> broadcast::Receiver<ModulesLoaded> {
        self.events.subscribe()
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("descriptors", &self.descriptors.len())
            .field("holders", &self.holders.len())
            .finish()
    }
}

fn materialize(
    locator: &dyn ResourceLocator,
    descriptor: &ModuleDescriptor,
) -> Result<ContentHolder, ContentError> {
    let path = locator
        .locate(descriptor)
        .ok_or_else(|| ContentError::ResourceNotFound(descriptor.resource_file_name()))?;

    tracing::debug!("Decoding content resource: {}", path.display());

    read_resource(&path).map_err(|e| {
        ContentError::DecodeFailure(descriptor.resource_file_name(), format!("{:#}", e))
    })
}
