// SPDX-License-Identifier: MPL-2.0
//! Page-lifetime locale state.
//!
//! [`LocaleContext`] is the single owned record holding the converted
//! locale document, the locale-switcher menu, and the default/current
//! locale pair. It replaces ambient global state: every resolution and
//! binding call receives the context explicitly, and it is mutated only by
//! document load and the locale-switch action.

use super::document::LocaleNode;
use indexmap::IndexMap;

/// Menu of selectable locales: code → display name, in document order.
pub type LocaleMenu = IndexMap<String, String>;

/// The current/default locale pair driving one resolution call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalePair<'a> {
    pub current: Option<&'a str>,
    pub default: Option<&'a str>,
}

/// Process-wide locale state for one console page.
///
/// `current` starts unset when neither a persisted cookie nor the
/// navigator hint matches the menu; resolution then falls back to
/// `default` everywhere.
#[derive(Debug, Clone, Default)]
pub struct LocaleContext {
    content: LocaleNode,
    menu: LocaleMenu,
    default_locale: Option<String>,
    current: Option<String>,
}

impl LocaleContext {
    /// Builds the context from a converted locale document.
    ///
    /// The document root is expected to contain a `content` subtree with
    /// `languages` (the menu) and `default` (the fallback locale). Missing
    /// substructure degrades to an empty menu or an unset default rather
    /// than failing.
    pub fn from_document(document: &LocaleNode) -> Self {
        let content = document.get("content").cloned().unwrap_or_default();

        let mut menu = LocaleMenu::new();
        match content.get("languages") {
            Some(LocaleNode::Map(entries)) => {
                for (code, name) in entries {
                    if let Some(display) = name.as_leaf() {
                        menu.insert(code.clone(), display.to_string());
                    }
                }
            }
            _ => log::warn!("locale document has no usable content.languages menu"),
        }

        let default_locale = content
            .get("default")
            .and_then(LocaleNode::as_leaf)
            .filter(|code| !code.is_empty())
            .map(str::to_string);
        if default_locale.is_none() {
            log::warn!("locale document has no content.default locale");
        }

        Self {
            content,
            menu,
            default_locale,
            current: None,
        }
    }

    /// The converted locale document (the `content` subtree).
    pub fn content(&self) -> &LocaleNode {
        &self.content
    }

    /// The locale-switcher menu, in display order.
    pub fn menu(&self) -> &LocaleMenu {
        &self.menu
    }

    /// The fallback locale named by the document.
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }

    /// The selected locale, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Selects a locale. The persistence write happens during the next
    /// bind pass, mirroring the page's switch-then-repaint flow.
    pub fn set_current(&mut self, code: impl Into<String>) {
        self.current = Some(code.into());
    }

    /// The locale a bind pass displays: current if set, else default.
    pub fn effective_locale(&self) -> Option<&str> {
        self.current().or(self.default_locale())
    }

    /// The current/default pair for resolution calls.
    pub fn locales(&self) -> LocalePair<'_> {
        LocalePair {
            current: self.current(),
            default: self.default_locale(),
        }
    }

    /// Whether a document has been loaded. Binding against an unloaded
    /// context resolves every tag as missing.
    pub fn is_loaded(&self) -> bool {
        !self.content.is_empty()
    }
}
