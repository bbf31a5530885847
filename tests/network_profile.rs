//! Integration tests for base endpoint derivation and reachability events.

use std::sync::{Arc, Mutex};

use appdeck::{NetworkConfig, NetworkProfile, ReachabilityProbe};

type ChangeCallback = Box<dyn Fn(bool) + Send + Sync>;

/// Probe the tests drive by hand.
#[derive(Clone, Default)]
struct ScriptedProbe {
    reachable: Arc<Mutex<bool>>,
    callback: Arc<Mutex<Option<ChangeCallback>>>,
}

impl ScriptedProbe {
    fn fire(&self, status: bool) {
        *self.reachable.lock().unwrap() = status;
        if let Some(cb) = self.callback.lock().unwrap().as_ref() {
            cb(status);
        }
    }
}

impl ReachabilityProbe for ScriptedProbe {
    fn is_reachable(&self) -> bool {
        *self.reachable.lock().unwrap()
    }

    fn subscribe(&self, on_change: ChangeCallback) {
        *self.callback.lock().unwrap() = Some(on_change);
    }
}

fn config(host: &str, port: &str) -> NetworkConfig {
    NetworkConfig {
        host: host.to_string(),
        port: port.to_string(),
        ..NetworkConfig::default()
    }
}

#[test]
fn endpoint_is_null_when_host_and_port_default_to_empty() {
    let profile = NetworkProfile::new(config("", ""));
    assert!(profile.base_endpoint().is_none());
}

#[test]
fn endpoint_is_null_when_either_part_is_empty() {
    assert!(NetworkProfile::new(config("www.example.com", ""))
        .base_endpoint()
        .is_none());
    assert!(NetworkProfile::new(config("", "443"))
        .base_endpoint()
        .is_none());
}

#[test]
fn endpoint_resolves_when_fully_configured() {
    let profile = NetworkProfile::new(config("www.example.com", "443"));
    let endpoint = profile.base_endpoint().unwrap();

    assert_eq!(endpoint.scheme, "https");
    assert_eq!(endpoint.host, "www.example.com");
    assert_eq!(endpoint.port, "443");

    let url = profile.base_url().unwrap();
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.port_or_known_default(), Some(443));
}

#[test]
fn timeouts_default_to_ten_seconds() {
    let profile = NetworkProfile::new(NetworkConfig::default());
    assert_eq!(profile.config().timeout_interval_for_request, 10.0);
    assert_eq!(profile.config().timeout_interval_for_resource, 10.0);
}

#[test]
fn every_transition_is_rebroadcast() {
    let mut profile = NetworkProfile::new(config("www.example.com", "443"));
    let probe = ScriptedProbe::default();
    let mut rx = profile.subscribe();

    profile.start_listening(Box::new(probe.clone()));

    probe.fire(true);
    probe.fire(false);
    probe.fire(true);

    let seen: Vec<bool> = std::iter::from_fn(|| rx.try_recv().ok())
        .map(|event| event.reachable)
        .collect();
    assert_eq!(seen, [true, false, true]);
    assert!(profile.is_reachable());
}

#[test]
fn reachability_reflects_probe_state_at_attach_time() {
    let mut profile = NetworkProfile::new(config("www.example.com", "443"));
    let probe = ScriptedProbe::default();
    *probe.reachable.lock().unwrap() = true;

    profile.start_listening(Box::new(probe));
    assert!(profile.is_reachable());
}

#[test]
fn profile_without_endpoint_never_listens() {
    let mut profile = NetworkProfile::new(config("", ""));
    let probe = ScriptedProbe::default();

    profile.start_listening(Box::new(probe.clone()));
    probe.fire(true);

    assert!(!profile.is_reachable());
}
