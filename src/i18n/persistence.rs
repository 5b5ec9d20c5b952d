// SPDX-License-Identifier: MPL-2.0
//! Locale persistence: the `lang` cookie and the navigator hint.
//!
//! The selected locale survives reloads through a single cookie scoped to
//! the console's base path. This module owns the cookie string codec and
//! the initial-selection policy: persisted cookie first, then the
//! navigator-reported language, else unset (resolution falls back to the
//! document default). Writes are idempotent — switching to the locale
//! that is already persisted touches nothing.

use super::context::LocaleMenu;
use crate::config::defaults::LOCALE_COOKIE_NAME;
use chrono::{Duration, Utc};
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Access to the page's cookie string.
///
/// `read` returns the document cookie view (`name=value` pairs joined by
/// `"; "`); `write` submits one `Set-Cookie`-style string.
pub trait CookieJar {
    fn read(&self) -> String;
    fn write(&mut self, cookie: String);
}

/// In-memory jar used in tests and headless embeddings.
///
/// Counts writes so idempotence is observable.
#[derive(Debug, Clone, Default)]
pub struct MemoryJar {
    cookies: Vec<(String, String)>,
    writes: usize,
}

impl MemoryJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `write` calls accepted so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl CookieJar for MemoryJar {
    fn read(&self) -> String {
        self.cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&mut self, cookie: String) {
        self.writes += 1;
        // Attributes after the first `;` (expires, path) are metadata the
        // in-memory jar does not enforce.
        let pair = cookie.split(';').next().unwrap_or("");
        if let Some((name, value)) = pair.split_once('=') {
            let name = name.trim().to_string();
            let value = value.trim().to_string();
            match self.cookies.iter_mut().find(|(n, _)| *n == name) {
                Some(slot) => slot.1 = value,
                None => self.cookies.push((name, value)),
            }
        }
    }
}

/// Reads one cookie value out of a jar, percent-decoded.
pub fn get_cookie(jar: &dyn CookieJar, name: &str) -> Option<String> {
    let cookies = jar.read();
    for pair in cookies.split(';') {
        if let Some((key, value)) = pair.trim().split_once('=') {
            if key == name {
                return Some(
                    urlencoding::decode(value)
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| value.to_string()),
                );
            }
        }
    }
    None
}

/// Formats a `Set-Cookie`-style string with a GMT expiry and path scope.
pub fn format_cookie(name: &str, value: &str, path: &str, expiry_days: u32) -> String {
    let expires = Utc::now() + Duration::days(i64::from(expiry_days));
    format!(
        "{}={}; expires={}; path={}",
        name,
        urlencoding::encode(value),
        expires.format("%a, %d %b %Y %H:%M:%S GMT"),
        path
    )
}

/// The bridge owning the locale cookie for one console page.
#[derive(Debug, Clone)]
pub struct LocalePersistence<J: CookieJar> {
    jar: J,
    cookie_path: String,
    expiry_days: u32,
}

impl<J: CookieJar> LocalePersistence<J> {
    pub fn new(jar: J, cookie_path: impl Into<String>, expiry_days: u32) -> Self {
        Self {
            jar,
            cookie_path: cookie_path.into(),
            expiry_days,
        }
    }

    /// The persisted locale, if any.
    pub fn locale(&self) -> Option<String> {
        get_cookie(&self.jar, LOCALE_COOKIE_NAME)
    }

    /// Persists a locale selection. Returns whether an underlying write
    /// happened; re-persisting the current value is a no-op.
    pub fn set_locale(&mut self, code: &str) -> bool {
        if self.locale().as_deref() == Some(code) {
            return false;
        }
        let cookie = format_cookie(LOCALE_COOKIE_NAME, code, &self.cookie_path, self.expiry_days);
        log::debug!("persisting locale {:?}", code);
        self.jar.write(cookie);
        true
    }

    /// The jar, for surfaces that also read other cookies.
    pub fn jar(&self) -> &J {
        &self.jar
    }
}

/// Source of the browser/OS-reported language hint.
pub trait NavigatorLocale {
    fn language(&self) -> Option<String>;
}

/// Navigator hint backed by `sys-locale`.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemNavigator;

impl NavigatorLocale for SystemNavigator {
    fn language(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Normalizes a raw locale hint into a BCP 47 tag.
///
/// Strips encoding suffixes (`.UTF-8`) and variant sections (`@latin`),
/// replaces underscores with hyphens, and validates the result.
pub fn normalize_locale_tag(raw: &str) -> Option<String> {
    let stripped = raw.trim().split(['.', '@']).next()?.trim();
    if stripped.is_empty() {
        return None;
    }
    let candidate = stripped.replace('_', "-");
    LanguageIdentifier::from_str(&candidate)
        .ok()
        .map(|lang| lang.to_string())
}

/// Picks the initial locale for a freshly loaded page.
///
/// A persisted cookie wins outright (and is matched against the menu as
/// stored); otherwise the navigator hint is normalized and matched —
/// exactly first, then by primary language subtag so `zh-CN` finds a `zh`
/// menu entry. No match leaves the selection unset.
pub fn initial_locale(
    persisted: Option<&str>,
    navigator: &dyn NavigatorLocale,
    menu: &LocaleMenu,
) -> Option<String> {
    if let Some(code) = persisted {
        return match_menu(menu, code);
    }
    let hint = navigator.language()?;
    let normalized = normalize_locale_tag(&hint)?;
    match_menu(menu, &normalized)
}

fn match_menu(menu: &LocaleMenu, hint: &str) -> Option<String> {
    if menu.contains_key(hint) {
        return Some(hint.to_string());
    }
    let primary = hint.split('-').next()?;
    menu.keys()
        .find(|code| {
            code.split('-')
                .next()
                .is_some_and(|p| p.eq_ignore_ascii_case(primary))
        })
        .cloned()
}
