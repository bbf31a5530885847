//! Appdeck Platform Core
//!
//! This library provides the foundation layer of a modular application
//! platform: content module discovery and registration, layered configuration
//! loading with defaulting, theme resolution, selection tracking, and a
//! derived network profile.
//!
//! Components are explicitly constructed and wired together (see
//! [`platform::Platform`]); nothing in this crate is a global singleton.

pub mod config;
pub mod content;
pub mod events;
pub mod logging;
pub mod net;
pub mod platform;

// Re-export commonly used types for convenience
pub use config::{
    AppInfo, ConfigDocument, ConfigStore, Component, FontSpec, NetworkConfig, ThemeColor,
    ThemeDocument, ThemeError, ThemeResolver,
};
pub use content::{
    BundleLocator, ContentHolder, IconType, ModuleDescriptor, ModuleRegistry, ResourceLocator,
    SelectionState,
};
pub use events::{EventChannel, ModulesLoaded, NetworkStatusChanged, SelectionChanged};
pub use net::{Endpoint, NetworkProfile, ReachabilityProbe};
pub use platform::Platform;
