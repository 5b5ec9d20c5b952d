// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` struct and `Severity` enum used by the
//! notification layer.

use crate::config::defaults::{ERROR_TOAST_MS, SUCCESS_TOAST_MS};
use std::time::{Duration, Instant};

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (brief display).
    #[default]
    Success,
    /// Error requiring attention (longer display).
    Error,
}

impl Severity {
    /// Returns the default display duration for this severity level.
    #[must_use]
    pub fn display_duration(&self) -> Duration {
        match self {
            Severity::Success => Duration::from_millis(SUCCESS_TOAST_MS),
            Severity::Error => Duration::from_millis(ERROR_TOAST_MS),
        }
    }
}

/// A transient message displayed to the user.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Resolved display text. Localization happens before construction.
    message: String,
    severity: Severity,
    /// How long the toast stays on screen.
    duration: Duration,
    /// When this toast was created.
    created_at: Instant,
}

impl Toast {
    /// Creates a new toast with the given severity and resolved message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            duration: severity.display_duration(),
            created_at: Instant::now(),
        }
    }

    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Sets a custom display duration, overriding the severity default.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Returns the resolved display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the configured display duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the age of this toast.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns whether the display duration has elapsed.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.age() >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_severity() {
        assert_eq!(Toast::success("ok").severity(), Severity::Success);
        assert_eq!(Toast::error("bad").severity(), Severity::Error);
    }

    #[test]
    fn severity_defaults_match_console_durations() {
        assert_eq!(
            Severity::Success.display_duration(),
            Duration::from_millis(1500)
        );
        assert_eq!(
            Severity::Error.display_duration(),
            Duration::from_millis(5000)
        );
    }

    #[test]
    fn with_duration_overrides_severity_default() {
        let toast = Toast::success("ok").with_duration(Duration::from_millis(50));
        assert_eq!(toast.duration(), Duration::from_millis(50));
    }

    #[test]
    fn fresh_toast_is_not_expired() {
        let toast = Toast::error("bad");
        assert!(!toast.expired());
    }

    #[test]
    fn zero_duration_toast_expires_immediately() {
        let toast = Toast::success("ok").with_duration(Duration::ZERO);
        assert!(toast.expired());
    }

    #[test]
    fn message_is_preserved_verbatim() {
        let toast = Toast::success("添加成功");
        assert_eq!(toast.message(), "添加成功");
    }
}
