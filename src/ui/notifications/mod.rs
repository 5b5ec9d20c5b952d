// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification layer following the
//! console's toast pattern: a transient overlay informs the user about an
//! action's outcome (save success, submission errors) without blocking
//! interaction, then disappears after its display duration.
//!
//! # Components
//!
//! - [`notification`] - Core `Toast` struct with severity levels
//! - [`manager`] - Single-slot `Manager` for lifecycle and expiry
//!
//! # Design Considerations
//!
//! The console shows at most one toast at a time: a new toast replaces
//! whatever is on screen, exactly as the page removes the previous overlay
//! element before appending a new one. Messages arrive already resolved —
//! localization happens in the i18n layer before a toast is built.

pub mod manager;
pub mod notification;

pub use manager::Manager;
pub use notification::{Severity, Toast};
