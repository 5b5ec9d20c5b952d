// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Locale document**: where the language description lives on the server
//! - **Cookie**: locale persistence name and expiry bounds
//! - **Toast**: display durations for feedback messages
//! - **Binding**: diagnostics for unresolved tags

// ==========================================================================
// Locale Document Defaults
// ==========================================================================

/// Server path of the locale description document, relative to the base URL.
pub const LANGUAGE_DOCUMENT_PATH: &str = "static/page/languages.xml";

/// Attribute carrying the resolution key on a taggable element.
pub const LANGTAG_ATTRIBUTE: &str = "langtag";

/// Display string used when a per-locale mapping resolves to nothing
/// during a chart overlay collapse.
pub const FALLBACK_DISPLAY: &str = "N/A";

// ==========================================================================
// Cookie Defaults
// ==========================================================================

/// Name of the cookie holding the selected locale.
pub const LOCALE_COOKIE_NAME: &str = "lang";

/// Default cookie lifetime in days.
pub const DEFAULT_COOKIE_EXPIRY_DAYS: u32 = 30;

/// Minimum allowed cookie lifetime in days.
pub const MIN_COOKIE_EXPIRY_DAYS: u32 = 1;

/// Maximum allowed cookie lifetime in days.
pub const MAX_COOKIE_EXPIRY_DAYS: u32 = 365;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Display duration for success toasts, in milliseconds.
pub const SUCCESS_TOAST_MS: u64 = 1500;

/// Display duration for error toasts, in milliseconds.
pub const ERROR_TOAST_MS: u64 = 5000;

// ==========================================================================
// Binding Defaults
// ==========================================================================

/// Background color applied to elements whose resolution key has no
/// translation, so gaps are discoverable during development.
pub const MISSING_HIGHLIGHT_COLOR: &str = "#ffeeba";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Cookie expiry validation
    assert!(MIN_COOKIE_EXPIRY_DAYS > 0);
    assert!(MAX_COOKIE_EXPIRY_DAYS >= MIN_COOKIE_EXPIRY_DAYS);
    assert!(DEFAULT_COOKIE_EXPIRY_DAYS >= MIN_COOKIE_EXPIRY_DAYS);
    assert!(DEFAULT_COOKIE_EXPIRY_DAYS <= MAX_COOKIE_EXPIRY_DAYS);

    // Toast duration validation
    assert!(SUCCESS_TOAST_MS > 0);
    assert!(ERROR_TOAST_MS >= SUCCESS_TOAST_MS);

    // Paths must be relative so they compose with the base URL
    assert!(!LANGUAGE_DOCUMENT_PATH.is_empty());
    assert!(LANGUAGE_DOCUMENT_PATH.as_bytes()[0] != b'/');
};
