// SPDX-License-Identifier: MPL-2.0
//! `cloudlang` is the client-side internationalization engine and
//! lightweight UI-feedback layer of a browser-based admin console.
//!
//! It converts the server's locale description into a nested lookup tree,
//! resolves per-element and per-chart display strings against a
//! current/default locale pair with graceful fallback, and computes the
//! page writes — text, placeholders, chart-option patches — without
//! depending on any UI toolkit. Page access, networking, and rendering
//! are collaborators behind small traits, so the engine is independently
//! testable and every failure mode degrades instead of throwing.

#![doc(html_root_url = "https://docs.rs/cloudlang/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod transport;
pub mod ui;
pub mod units;
