//! Current selection tracking
//!
//! Holds the single "currently active" content holder as a non-owning
//! reference into the registry's collection, and broadcasts every selection
//! call.

use std::sync::{Arc, Weak};

use tokio::sync::broadcast;

use super::holder::ContentHolder;
use crate::events::{EventChannel, SelectionChanged};

/// Selection state
///
/// Single-writer: `select` is the only mutation path. The registry owns the
/// canonical holder instances; dropping a holder (e.g. on a fresh discovery
/// pass) turns a stale selection back into `None`.
#[derive(Debug, Default)]
pub struct SelectionState {
    current: Weak<ContentHolder>,
    events: EventChannel<SelectionChanged>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current selection and publish a `SelectionChanged` event.
    ///
    /// Publication is unconditional: re-selecting the value that is already
    /// current still publishes. Subscribers relying on edge-triggered
    /// behavior must de-duplicate themselves.
    pub fn select(&mut self, holder: Option<&Arc<ContentHolder>>) {
        self.current = holder.map(Arc::downgrade).unwrap_or_default();

        match holder {
            Some(holder) => tracing::debug!("Current content holder is now: {}", holder),
            None => tracing::debug!("Current content holder cleared"),
        }

        self.events.publish(SelectionChanged {
            current: self.current(),
        });
    }

    /// The currently selected holder, if any is set and still alive.
    pub fn current(&self) -> Option<Arc<ContentHolder>> {
        self.current.upgrade()
    }

    /// Subscribe to `SelectionChanged` events.
    pub fn subscribe(&self) -> broadcast::Receiver<SelectionChanged> {
        self.events.subscribe()
    }
}
