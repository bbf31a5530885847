//! Typed event channels for cross-component change signaling.
//!
//! Each stateful component owns its own channel and publishes a typed payload
//! carrying the changed value, so subscribers do not have to re-query the
//! component after a notification. Publishing is fire-and-forget: there is no
//! acknowledgement and no subscriber is required.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::content::ContentHolder;

/// Maximum events buffered per subscriber before the oldest are dropped.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Published by the module registry when a discovery pass completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulesLoaded {
    /// Number of content holders in the discovered collection.
    pub count: usize,
}

/// Published on every call to [`SelectionState::select`], including
/// re-selection of the current value.
///
/// [`SelectionState::select`]: crate::content::SelectionState::select
#[derive(Debug, Clone)]
pub struct SelectionChanged {
    /// The holder that is now current, if any.
    pub current: Option<Arc<ContentHolder>>,
}

/// Published by the network profile on every observed reachability
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkStatusChanged {
    pub reachable: bool,
}

/// A broadcast channel scoped to the component that owns it.
///
/// Cloning the channel clones the sending side; all clones feed the same
/// subscribers.
#[derive(Debug, Clone)]
pub struct EventChannel<T> {
    tx: broadcast::Sender<T>,
}

impl<T: Clone> EventChannel<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Register a new subscriber. Only events published after this call are
    /// delivered to it.
    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.tx.subscribe()
    }

    /// Publish an event to all current subscribers.
    ///
    /// Publishing with zero subscribers is not an error; the event is simply
    /// dropped.
    pub fn publish(&self, event: T) {
        let _ = self.tx.send(event);
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone> Default for EventChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}
