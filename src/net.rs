//! Network profile
//!
//! Derives the base connection endpoint from the loaded configuration and
//! re-broadcasts reachability transitions reported by an injected probe.
//! The probing mechanism itself (and all request transport) lives outside
//! this crate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;
use url::Url;

use crate::config::schema::NetworkConfig;
use crate::events::{EventChannel, NetworkStatusChanged};

/// The resolved base endpoint: scheme://host:port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub scheme: String,
    pub host: String,
    pub port: String,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}

/// Reachability-probe capability.
///
/// Implementations report the current state on demand and invoke the
/// registered callback on every transition. Callbacks may arrive on an
/// arbitrary thread.
pub trait ReachabilityProbe: Send + Sync {
    fn is_reachable(&self) -> bool;

    fn subscribe(&self, on_change: Box<dyn Fn(bool) + Send + Sync>);
}

/// Network profile
pub struct NetworkProfile {
    config: NetworkConfig,
    probe: Option<Box<dyn ReachabilityProbe>>,
    reachable: Arc<AtomicBool>,
    events: EventChannel<NetworkStatusChanged>,
}

impl NetworkProfile {
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            config,
            probe: None,
            reachable: Arc::new(AtomicBool::new(false)),
            events: EventChannel::new(),
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// The base endpoint, or `None` when host or port is unconfigured.
    pub fn base_endpoint(&self) -> Option<Endpoint> {
        if self.config.host.is_empty() || self.config.port.is_empty() {
            return None;
        }

        Some(Endpoint {
            scheme: self.config.scheme.clone(),
            host: self.config.host.clone(),
            port: self.config.port.clone(),
        })
    }

    /// The base endpoint as a parsed URL.
    pub fn base_url(&self) -> Option<Url> {
        let endpoint = self.base_endpoint()?;
        match Url::parse(&endpoint.to_string()) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Base endpoint '{}' is not a valid URL: {}", endpoint, e);
                None
            }
        }
    }

    /// Attach the reachability probe and start re-broadcasting its
    /// transitions as `NetworkStatusChanged` events.
    ///
    /// Does nothing when no base endpoint is configured, matching the
    /// profile's degraded-but-running contract.
    pub fn start_listening(&mut self, probe: Box<dyn ReachabilityProbe>) {
        let Some(endpoint) = self.base_endpoint() else {
            tracing::warn!("No base URL configured; not listening for reachability");
            return;
        };

        tracing::debug!("Listening for reachability of {}", endpoint);

        self.reachable.store(probe.is_reachable(), Ordering::SeqCst);

        let reachable = Arc::clone(&self.reachable);
        let events = self.events.clone();
        probe.subscribe(Box::new(move |status| {
            tracing::debug!("Network status change heard: reachable={}", status);
            reachable.store(status, Ordering::SeqCst);
            events.publish(NetworkStatusChanged { reachable: status });
        }));

        self.probe = Some(probe);
    }

    /// Detach the probe; the profile reports unreachable afterwards.
    pub fn stop_listening(&mut self) {
        self.probe = None;
        self.reachable.store(false, Ordering::SeqCst);
    }

    /// Last known reachability. False until a probe is attached.
    pub fn is_reachable(&self) -> bool {
        self.probe.is_some() && self.reachable.load(Ordering::SeqCst)
    }

    /// Subscribe to `NetworkStatusChanged` events.
    pub fn subscribe(&self) -> broadcast::Receiver<NetworkStatusChanged> {
        self.events.subscribe()
    }
}

impl std::fmt::Debug for NetworkProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkProfile")
            .field("config", &self.config)
            .field("listening", &self.probe.is_some())
            .field("reachable", &self.reachable.load(Ordering::SeqCst))
            .finish()
    }
}
