// SPDX-License-Identifier: MPL-2.0
//! Tag binding: turning resolution keys into page writes.
//!
//! The page collaborator scans the DOM for elements carrying a `langtag`
//! attribute and hands the core an abstract list of [`TagBinding`]s. The
//! core only computes: each binding becomes a [`BindOutcome`] with the
//! resolved string (or a visible diagnostic) and the slot it targets. A
//! [`PageSurface`] implementation then applies the outcomes to the real
//! page. This keeps the resolution engine free of any UI toolkit and
//! independently testable.

use super::context::LocaleContext;
use super::resolver;
use crate::config::defaults::{LANGTAG_ATTRIBUTE, MISSING_HIGHLIGHT_COLOR};

/// Where a resolved string lands on the element.
///
/// Elements with a placeholder attribute receive the string there; all
/// others get it as their text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSlot {
    Text,
    Placeholder,
}

/// One tagged element reported by the page collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBinding {
    /// Opaque element handle, echoed back in the outcome.
    pub element: String,
    /// Resolution key from the `langtag` attribute, case-folded on lookup.
    pub key: String,
    pub slot: TargetSlot,
}

impl TagBinding {
    /// Binding that writes into the element's text content.
    pub fn text(element: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            key: key.into(),
            slot: TargetSlot::Text,
        }
    }

    /// Binding that writes into the element's placeholder attribute.
    pub fn placeholder(element: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            key: key.into(),
            slot: TargetSlot::Placeholder,
        }
    }

    /// Builds the binding for one scanned element, if it carries the
    /// `langtag` resolution-key attribute.
    ///
    /// This is the seam for the page collaborator's DOM query: it hands
    /// over each candidate element's attribute list, and elements with a
    /// `placeholder` attribute are routed to that slot, as on the page.
    pub fn from_element(
        element: impl Into<String>,
        attributes: &[(String, String)],
    ) -> Option<Self> {
        let key = attributes
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(LANGTAG_ATTRIBUTE))
            .map(|(_, value)| value.clone())?;
        let slot = if attributes
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("placeholder"))
        {
            TargetSlot::Placeholder
        } else {
            TargetSlot::Text
        };
        Some(Self {
            element: element.into(),
            key,
            slot,
        })
    }
}

/// Computed result for one binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindOutcome {
    pub element: String,
    pub slot: TargetSlot,
    /// The string to write: the resolved text, or the diagnostic for an
    /// unresolved key.
    pub value: String,
    /// Whether the key failed to resolve; the surface highlights these so
    /// missing translations are discoverable during development.
    pub missing: bool,
}

/// Diagnostic rendered in place of an unresolved key.
pub fn missing_diagnostic(key: &str) -> String {
    format!("Missing language string \"{}\"", key)
}

/// Resolves every binding against the context.
///
/// An unresolved tag never blocks the rest of the pass; it simply yields
/// a diagnostic outcome flagged `missing`.
pub fn bind_tags(bindings: &[TagBinding], context: &LocaleContext) -> Vec<BindOutcome> {
    bindings
        .iter()
        .map(|binding| {
            let key = binding.key.to_lowercase();
            let resolved = context
                .content()
                .get(&key)
                .and_then(|node| resolver::resolve(node, context.locales()));
            match resolved {
                Some(value) => BindOutcome {
                    element: binding.element.clone(),
                    slot: binding.slot,
                    value,
                    missing: false,
                },
                None => {
                    log::debug!("no language string for tag {:?}", binding.key);
                    BindOutcome {
                        element: binding.element.clone(),
                        slot: binding.slot,
                        value: missing_diagnostic(&binding.key),
                        missing: true,
                    }
                }
            }
        })
        .collect()
}

/// Page-side collaborator that applies computed outcomes.
///
/// Only the three write operations are mandatory; the refresh hooks
/// default to no-ops for surfaces without the corresponding widgets.
pub trait PageSurface {
    /// Writes resolved text as the element's text content.
    fn write_text(&mut self, element: &str, text: &str);

    /// Writes resolved text into the element's placeholder attribute.
    fn write_placeholder(&mut self, element: &str, text: &str);

    /// Visually highlights an element whose key did not resolve, using
    /// the given background color.
    fn flag_missing(&mut self, element: &str, color: &str);

    /// Updates the locale-switcher label with the menu display name.
    fn set_switcher_label(&mut self, _label: &str) {}

    /// Refreshes enhanced-select widgets after a repaint.
    fn refresh_select_widgets(&mut self) {}

    /// Re-localizes any data table on the page.
    fn refresh_table_locale(&mut self, _locale: &str) {}

    /// Re-renders one chart with its localized options.
    fn render_chart(&mut self, _id: &str, _options: &serde_json::Value) {}
}

/// Applies a batch of outcomes to the surface. The missing highlight
/// fires at most once per element per pass, after the slot write.
pub fn apply_outcomes(outcomes: &[BindOutcome], surface: &mut dyn PageSurface) {
    for outcome in outcomes {
        match outcome.slot {
            TargetSlot::Text => surface.write_text(&outcome.element, &outcome.value),
            TargetSlot::Placeholder => surface.write_placeholder(&outcome.element, &outcome.value),
        }
        if outcome.missing {
            surface.flag_missing(&outcome.element, MISSING_HIGHLIGHT_COLOR);
        }
    }
}
