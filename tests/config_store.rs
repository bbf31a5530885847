//! Integration tests for configuration loading, layering, and defaulting.

use appdeck::config::{get_config_value, ConfigStore};
use tempfile::TempDir;

struct Roots {
    _temp: TempDir,
    store: ConfigStore,
    primary: std::path::PathBuf,
    fallback: std::path::PathBuf,
}

fn roots() -> Roots {
    let temp = TempDir::new().unwrap();
    let primary = temp.path().join("primary");
    let fallback = temp.path().join("fallback");
    std::fs::create_dir_all(&primary).unwrap();
    std::fs::create_dir_all(&fallback).unwrap();
    let store = ConfigStore::with_roots(primary.clone(), fallback.clone());
    Roots {
        _temp: temp,
        store,
        primary,
        fallback,
    }
}

#[test]
fn missing_installation_yields_running_defaults() {
    let r = roots();
    let doc = r.store.load("platform");

    assert!(doc.network.host.is_empty());
    assert_eq!(doc.network.scheme, "https");
    assert_eq!(doc.network.timeout_interval_for_request, 10.0);
    assert_eq!(doc.app.name, "<not set>");
}

#[test]
fn corrupt_document_yields_running_defaults() {
    let r = roots();
    std::fs::write(r.primary.join("platform.json"), "]]] definitely not json").unwrap();

    let doc = r.store.load("platform");
    assert_eq!(doc.network.scheme, "https");
}

#[test]
fn malformed_fields_default_independently() {
    let r = roots();
    std::fs::write(
        r.primary.join("platform.json"),
        r#"{
            "app": {"name": "Demo", "version": 7},
            "network": {
                "host": "www.example.com",
                "port": "443",
                "timeoutIntervalForRequest": "soon"
            }
        }"#,
    )
    .unwrap();

    let doc = r.store.load("platform");
    // Intact fields survive their corrupt siblings
    assert_eq!(doc.app.name, "Demo");
    assert_eq!(doc.network.host, "www.example.com");
    assert_eq!(doc.network.port, "443");
    // Corrupt fields fall back to their own defaults
    assert_eq!(doc.app.version, "<not set>");
    assert_eq!(doc.network.timeout_interval_for_request, 10.0);
}

#[test]
fn primary_location_wins() {
    let r = roots();
    std::fs::write(
        r.primary.join("platform.json"),
        r#"{"app": {"organization": "Primary Org"}}"#,
    )
    .unwrap();
    std::fs::write(
        r.fallback.join("platform.json"),
        r#"{"app": {"organization": "Fallback Org"}}"#,
    )
    .unwrap();

    assert_eq!(r.store.load("platform").app.organization, "Primary Org");
}

#[test]
fn fallback_location_is_used_when_primary_is_absent() {
    let r = roots();
    std::fs::write(
        r.fallback.join("platform.yaml"),
        "app:\n  organization: Fallback Org\n",
    )
    .unwrap();

    assert_eq!(r.store.load("platform").app.organization, "Fallback Org");
}

#[test]
fn documents_are_cached_per_resource_name() {
    let r = roots();
    std::fs::write(
        r.primary.join("platform.json"),
        r#"{"app": {"name": "One"}}"#,
    )
    .unwrap();

    let first = r.store.load("platform");
    std::fs::remove_file(r.primary.join("platform.json")).unwrap();
    let second = r.store.load("platform");

    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(second.app.name, "One");
}

#[test]
fn dot_notation_reads() {
    let r = roots();
    std::fs::write(
        r.primary.join("platform.json"),
        r#"{
            "app": {"prefix": "com.example", "version": "1.5.11", "build": "4"},
            "network": {"host": "www.example.com", "port": "443"}
        }"#,
    )
    .unwrap();

    let doc = r.store.load("platform");
    assert_eq!(
        get_config_value(&doc, "network.host").unwrap(),
        "www.example.com"
    );
    assert_eq!(get_config_value(&doc, "app.prefix").unwrap(), "com.example");
    assert_eq!(get_config_value(&doc, "app.version").unwrap(), "1.5.11");
    assert!(get_config_value(&doc, "nonsense.key").is_err());
    assert_eq!(doc.app.version_and_build(), "1.5.11 (4)");
}
