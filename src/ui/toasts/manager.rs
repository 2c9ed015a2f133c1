// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` is the single owner of the active toasts. It assigns ids,
//! applies the default-duration policy and keeps entries in insertion order.

use super::entry::{Entry, ToastId, ToastRequest};
use crate::config::DEFAULT_TOAST_DURATION_MS;
use std::time::Duration;

/// Ordered collection of the toasts currently shown (oldest first).
#[derive(Debug)]
pub struct Manager {
    toasts: Vec<Entry>,
    default_duration: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::with_default_duration(Duration::from_millis(DEFAULT_TOAST_DURATION_MS))
    }
}

impl Manager {
    /// Creates an empty manager using the 6 second default duration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager applying `default_duration` to requests without one.
    #[must_use]
    pub fn with_default_duration(default_duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            default_duration,
        }
    }

    /// Appends a new toast and returns its freshly allocated id.
    ///
    /// The category is not validated; unknown values are stored as given.
    pub fn add(&mut self, request: ToastRequest) -> ToastId {
        let entry = Entry::from_request(request, self.default_duration);
        let id = entry.id();
        tracing::debug!(
            %id,
            category = %entry.category(),
            duration = ?entry.duration(),
            "toast added"
        );
        self.toasts.push(entry);
        id
    }

    /// Removes the toast with `id`.
    ///
    /// Returns `true` if the toast was found and removed.
    pub fn remove(&mut self, id: ToastId) -> bool {
        if let Some(pos) = self.toasts.iter().position(|t| t.id() == id) {
            self.toasts.remove(pos);
            tracing::debug!(%id, remaining = self.toasts.len(), "toast removed");
            true
        } else {
            false
        }
    }

    /// Returns the active toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Entry] {
        &self.toasts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
