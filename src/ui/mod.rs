// SPDX-License-Identifier: MPL-2.0
//! User-facing feedback components.
//!
//! The console's visual chrome lives in the page itself; this module only
//! models the feedback state the core drives — currently the toast
//! notification layer.

pub mod notifications;
