// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) core for the admin console.
//!
//! This module converts the server's locale description into a lookup
//! tree, resolves display strings against a current/default locale pair
//! with graceful fallback, and computes page writes and chart-option
//! patches without touching a real DOM.
//!
//! # Features
//!
//! - Conversion of the fetched markup document into a nested tree
//! - Per-locale resolution with random variant rotation
//! - Pure-patch overlays onto externally-owned chart configurations
//! - Abstract tag binding through a page-surface collaborator
//! - Locale persistence via a single path-scoped cookie

pub mod binder;
pub mod context;
pub mod document;
pub mod overlay;
pub mod persistence;
pub mod resolver;

pub use binder::{bind_tags, BindOutcome, PageSurface, TagBinding, TargetSlot};
pub use context::{LocaleContext, LocaleMenu, LocalePair};
pub use document::LocaleNode;
pub use overlay::{ChartPatch, PatchOp};
pub use persistence::{CookieJar, LocalePersistence, MemoryJar, NavigatorLocale, SystemNavigator};
