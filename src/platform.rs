//! Platform facade
//!
//! Constructs and wires the core components in their required order: the
//! configuration document loads first, then module discovery and the network
//! profile read from it. Consumers hold the platform and reach the parts
//! through it instead of through globals.

use std::sync::Arc;

use crate::config::schema::ConfigDocument;
use crate::config::ConfigStore;
use crate::content::{BundleLocator, ModuleDescriptor, ModuleRegistry, SelectionState};
use crate::net::NetworkProfile;

/// Resource name of the master configuration document.
pub const MASTER_RESOURCE: &str = "platform";

/// The assembled platform core.
pub struct Platform {
    store: ConfigStore,
    config: Arc<ConfigDocument>,
    registry: ModuleRegistry,
    selection: SelectionState,
    network: NetworkProfile,
}

impl Platform {
    /// Start the platform over the default resource directories.
    pub fn start(descriptors: Vec<ModuleDescriptor>) -> Self {
        Self::start_with(ConfigStore::new(), descriptors)
    }

    /// Start the platform over an explicitly configured store.
    ///
    /// Loads the master document, registers and discovers the given module
    /// descriptors, and derives the network profile. Never fails; a missing
    /// or corrupt installation yields a defaulted, empty-but-running
    /// platform.
    pub fn start_with(store: ConfigStore, descriptors: Vec<ModuleDescriptor>) -> Self {
        let config = store.load(MASTER_RESOURCE);

        let locator = BundleLocator::new(vec![
            store.primary_root().to_path_buf(),
            store.fallback_root().to_path_buf(),
        ]);
        let mut registry = ModuleRegistry::new(Box::new(locator));
        for descriptor in descriptors {
            registry.register(descriptor);
        }
        registry.discover();

        let network = NetworkProfile::new(config.network.clone());

        tracing::debug!("Platform started: {} module(s)", registry.len());

        Self {
            store,
            config,
            registry,
            selection: SelectionState::new(),
            network,
        }
    }

    pub fn config(&self) -> &ConfigDocument {
        &self.config
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ModuleRegistry {
        &mut self.registry
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    pub fn network(&self) -> &NetworkProfile {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut NetworkProfile {
        &mut self.network
    }

    /// Current state in a formatted string, for startup logging.
    pub fn debug_status(&self) -> String {
        let app = &self.config.app;

        let mut status = format!(
            "-- Application --\n\nname: {}\nversion: {}\nbuild date: {}\norganization: {}\nbundle prefix: {}\n",
            app.name,
            app.version_and_build(),
            app.build_date,
            app.organization,
            app.prefix,
        );

        status.push_str("\n\n-- Content Holders --\n\n");
        if self.registry.is_empty() {
            status.push_str("<none>\n");
        } else {
            for holder in self.registry.collection() {
                status.push_str(&format!("{}\n", holder));
            }
        }

        status.push_str("\n\n-- Network --\n\n");
        match self.network.base_endpoint() {
            Some(endpoint) => status.push_str(&format!(
                "base url: {}\nreachable: {}\n",
                endpoint,
                self.network.is_reachable()
            )),
            None => status.push_str("base url: <not set>\n"),
        }

        status
    }
}

impl std::fmt::Debug for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Platform")
            .field("modules", &self.registry.len())
            .field("selected", &self.selection.current().is_some())
            .finish()
    }
}
