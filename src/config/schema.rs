//! Configuration schema definitions
//!
//! Defines the structure of the master configuration document using serde.
//! Every field decodes try-or-default: missing and malformed values both take
//! the documented default, so a partially corrupt document still yields all
//! of its intact fields.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::lenient::{self, not_set};

/// Root configuration document.
///
/// Produced once by [`ConfigStore::load`](super::ConfigStore::load) and
/// treated as immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    /// Application identity and build metadata
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub app: AppInfo,

    /// Base endpoint settings consumed by the network profile
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub network: NetworkConfig,

    /// Color/font settings consumed by the theme resolver
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub theme: ThemeDocument,
}

/// Application identity values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    #[serde(default = "not_set", deserialize_with = "lenient::or_not_set")]
    pub name: String,

    #[serde(default = "not_set", deserialize_with = "lenient::or_not_set")]
    pub version: String,

    #[serde(default = "not_set", deserialize_with = "lenient::or_not_set")]
    pub build: String,

    #[serde(default = "not_set", deserialize_with = "lenient::or_not_set")]
    pub organization: String,

    #[serde(default = "not_set", deserialize_with = "lenient::or_not_set")]
    pub build_date: String,

    /// Reverse-DNS identifier prefix shared by all of the app's bundles
    #[serde(default = "not_set", deserialize_with = "lenient::or_not_set")]
    pub prefix: String,
}

impl AppInfo {
    /// Combined version and build number, e.g. "1.5.11 (4)".
    pub fn version_and_build(&self) -> String {
        format!("{} ({})", self.version, self.build)
    }

    /// Append a fragment to the identifier prefix.
    ///
    /// With prefix "com.foo" and fragment "Fighter" the result is
    /// "com.foo.Fighter".
    pub fn prefixed(&self, fragment: &str) -> String {
        format!("{}.{}", self.prefix, fragment)
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: not_set(),
            version: not_set(),
            build: not_set(),
            organization: not_set(),
            build_date: not_set(),
            prefix: not_set(),
        }
    }
}

/// Base endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Remote host; empty means no endpoint is configured
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub host: String,

    /// Remote port as written in the document; empty means unconfigured
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub port: String,

    #[serde(default = "default_scheme", deserialize_with = "lenient::or_default")]
    pub scheme: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout", deserialize_with = "lenient::or_default")]
    pub timeout_interval_for_request: f64,

    /// Whole-transfer timeout in seconds
    #[serde(default = "default_timeout", deserialize_with = "lenient::or_default")]
    pub timeout_interval_for_resource: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: String::new(),
            scheme: default_scheme(),
            timeout_interval_for_request: default_timeout(),
            timeout_interval_for_resource: default_timeout(),
        }
    }
}

/// Theme document: global color/font values plus per-component overrides
/// keyed by component name ("NavigationBar", "TabBar", ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    /// Global background color token, used when a component has no
    /// specific entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// Global font, same fallback role as `background_color`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSpec>,

    #[serde(flatten)]
    pub components: HashMap<String, ComponentTheme>,
}

impl ThemeDocument {
    pub fn component(&self, name: &str) -> Option<&ComponentTheme> {
        self.components.get(name)
    }
}

/// Theme values for one named UI component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTheme {
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSpec>,

    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
}

/// Font reference as written in theme documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontSpec {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,

    #[serde(default = "default_font_size", deserialize_with = "lenient::or_default")]
    pub size: f64,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            size: default_font_size(),
        }
    }
}

// Default value functions
fn default_scheme() -> String {
    "https".to_string()
}

fn default_timeout() -> f64 {
    10.0
}

fn default_font_size() -> f64 {
    17.0
}

pub(crate) fn default_true() -> bool {
    true
}
