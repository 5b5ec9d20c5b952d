// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the single visible toast and its expiry. Showing a
//! new toast replaces the current one immediately — the replaced toast is
//! discarded without completing, matching the page removing the previous
//! overlay element before appending a new one.

use super::notification::Toast;

/// Manages the single visible toast.
#[derive(Debug, Default)]
pub struct Manager {
    active: Option<Toast>,
}

impl Manager {
    /// Creates a new empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast, replacing whatever is currently visible.
    ///
    /// Returns the replaced toast, if any; its completion never runs.
    pub fn show(&mut self, toast: Toast) -> Option<Toast> {
        self.active.replace(toast)
    }

    /// Dismisses the visible toast immediately.
    pub fn dismiss(&mut self) -> Option<Toast> {
        self.active.take()
    }

    /// Processes a tick, dismissing the toast once its duration elapsed.
    ///
    /// Should be called periodically (e.g., every 100-500ms). Returns the
    /// dismissed toast so the caller can run its completion action.
    pub fn tick(&mut self) -> Option<Toast> {
        if self.active.as_ref().is_some_and(Toast::expired) {
            self.active.take()
        } else {
            None
        }
    }

    /// Returns the currently visible toast.
    #[must_use]
    pub fn active(&self) -> Option<&Toast> {
        self.active.as_ref()
    }

    /// Returns whether a toast is on screen.
    #[must_use]
    pub fn has_toast(&self) -> bool {
        self.active.is_some()
    }
}
