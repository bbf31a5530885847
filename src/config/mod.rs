//! Configuration system for the platform core.
//!
//! Loads the master configuration document from JSON or YAML resources,
//! decodes it with per-field defaulting so a bad value can never prevent
//! startup, and resolves theme values through a layered component lookup.

pub mod lenient;
pub mod loader;
pub mod paths;
pub mod schema;
pub mod theme;

pub use loader::ConfigStore;
pub use schema::{AppInfo, ConfigDocument, ComponentTheme, FontSpec, NetworkConfig, ThemeDocument};
pub use theme::{Component, ThemeColor, ThemeError, ThemeResolver};

/// Get a configuration value by key (dot notation).
///
/// The document is immutable after load, so there is no matching setter.
pub fn get_config_value(doc: &ConfigDocument, key: &str) -> anyhow::Result<String> {
    match key {
        "app.name" => Ok(doc.app.name.clone()),
        "app.organization" => Ok(doc.app.organization.clone()),
        "app.prefix" => Ok(doc.app.prefix.clone()),
        "app.version" => Ok(doc.app.version.clone()),
        "app.build" => Ok(doc.app.build.clone()),
        "app.buildDate" => Ok(doc.app.build_date.clone()),
        "network.host" => Ok(doc.network.host.clone()),
        "network.port" => Ok(doc.network.port.clone()),
        "network.scheme" => Ok(doc.network.scheme.clone()),
        "network.timeoutIntervalForRequest" => {
            Ok(doc.network.timeout_interval_for_request.to_string())
        }
        "network.timeoutIntervalForResource" => {
            Ok(doc.network.timeout_interval_for_resource.to_string())
        }
        "theme.backgroundColor" => Ok(doc.theme.background_color.clone().unwrap_or_default()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_keys() {
        let mut doc = ConfigDocument::default();
        doc.network.host = "www.example.com".to_string();
        doc.network.port = "443".to_string();

        assert_eq!(
            get_config_value(&doc, "network.host").unwrap(),
            "www.example.com"
        );
        assert_eq!(get_config_value(&doc, "network.port").unwrap(), "443");
        assert_eq!(get_config_value(&doc, "network.scheme").unwrap(), "https");
    }

    #[test]
    fn test_get_unknown_key() {
        let doc = ConfigDocument::default();
        assert!(get_config_value(&doc, "network.bogus").is_err());
    }
}
