// SPDX-License-Identifier: MPL-2.0
//! Resolution of a locale document node into a single display string.
//!
//! The fallback chain is fixed: a leaf is locale-independent and returned
//! as-is; a variant sequence picks one element uniformly at random on
//! *every* call (intentional non-determinism for rotating message text)
//! and resolves it recursively; a per-locale map prefers the current
//! locale, then the default, then reports nothing. Absence is a signal,
//! never a panic — the binder turns it into a visible diagnostic.

use super::context::LocalePair;
use super::document::LocaleNode;
use rand::Rng;

/// Resolves a locale document node to the best single string.
///
/// Returns `None` when no string is available for the current/default
/// pair: an empty variant sequence, a per-locale map missing both
/// locales, or nested combinations thereof.
pub fn resolve(node: &LocaleNode, locales: LocalePair<'_>) -> Option<String> {
    match node {
        LocaleNode::Leaf(text) => Some(text.clone()),
        LocaleNode::Variants(seq) => {
            if seq.is_empty() {
                return None;
            }
            let pick = rand::rng().random_range(0..seq.len());
            resolve(&seq[pick], locales)
        }
        LocaleNode::Map(map) => {
            let selected = locales
                .current
                .and_then(|code| map.get(code))
                .or_else(|| locales.default.and_then(|code| map.get(code)))?;
            resolve(selected, locales)
        }
    }
}

/// Translates a server reply string for the toast layer.
///
/// The reply text is normalized into a lookup key (whitespace, commas,
/// periods and question marks stripped; lower-cased) and looked up under
/// the document's `reply` subtree. When no translation exists the raw
/// reply is shown unchanged.
pub fn resolve_reply(content: &LocaleNode, locales: LocalePair<'_>, raw: &str) -> String {
    let key = normalize_reply_key(raw);
    content
        .get("reply")
        .and_then(|replies| replies.get(&key))
        .and_then(|node| resolve(node, locales))
        .unwrap_or_else(|| raw.to_string())
}

/// Normalization applied to reply strings before lookup.
fn normalize_reply_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, ',' | '.' | '?'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use std::collections::HashSet;

    fn pair<'a>(current: Option<&'a str>, default: Option<&'a str>) -> LocalePair<'a> {
        LocalePair { current, default }
    }

    fn locale_map(entries: &[(&str, &str)]) -> LocaleNode {
        let mut map = IndexMap::new();
        for (code, text) in entries {
            map.insert(code.to_string(), LocaleNode::Leaf(text.to_string()));
        }
        LocaleNode::Map(map)
    }

    #[test]
    fn leaf_resolves_to_itself_regardless_of_locales() {
        let node = LocaleNode::Leaf("fixed".to_string());
        assert_eq!(resolve(&node, pair(None, None)), Some("fixed".to_string()));
        assert_eq!(
            resolve(&node, pair(Some("zh"), Some("en"))),
            Some("fixed".to_string())
        );
    }

    #[test]
    fn map_prefers_current_locale() {
        let node = locale_map(&[("en", "Hi"), ("zh", "你好")]);
        assert_eq!(
            resolve(&node, pair(Some("zh"), Some("en"))),
            Some("你好".to_string())
        );
    }

    #[test]
    fn map_falls_back_to_default_locale() {
        let node = locale_map(&[("en", "Hi"), ("zh", "你好")]);
        assert_eq!(
            resolve(&node, pair(Some("fr"), Some("en"))),
            Some("Hi".to_string())
        );
        assert_eq!(
            resolve(&node, pair(None, Some("en"))),
            Some("Hi".to_string())
        );
    }

    #[test]
    fn map_missing_both_locales_resolves_to_none() {
        let node = locale_map(&[("en", "Hi")]);
        assert_eq!(resolve(&node, pair(Some("fr"), Some("de"))), None);
        assert_eq!(resolve(&node, pair(None, None)), None);
    }

    #[test]
    fn empty_map_resolves_to_none() {
        let node = LocaleNode::Map(IndexMap::new());
        assert_eq!(resolve(&node, pair(Some("en"), Some("en"))), None);
    }

    #[test]
    fn fallback_chain_is_total() {
        // For any pair, the result is m[current], m[default], or None —
        // in that priority order, never any other value.
        let node = locale_map(&[("en", "Hi"), ("zh", "你好")]);
        for current in [Some("en"), Some("zh"), Some("fr"), None] {
            for default in [Some("en"), Some("zh"), Some("fr"), None] {
                let resolved = resolve(&node, pair(current, default));
                let expected = match (current, default) {
                    (Some("en"), _) => Some("Hi"),
                    (Some("zh"), _) => Some("你好"),
                    (_, Some("en")) => Some("Hi"),
                    (_, Some("zh")) => Some("你好"),
                    _ => None,
                };
                assert_eq!(resolved.as_deref(), expected);
            }
        }
    }

    #[test]
    fn variant_sequence_rotates_between_elements() {
        let node = LocaleNode::Variants(vec![
            LocaleNode::Leaf("a".to_string()),
            LocaleNode::Leaf("b".to_string()),
            LocaleNode::Leaf("c".to_string()),
        ]);
        let mut seen = HashSet::new();
        for _ in 0..100 {
            if let Some(text) = resolve(&node, pair(None, None)) {
                seen.insert(text);
            }
        }
        // A fixed-first-element bug would leave exactly one entry here;
        // 100 uniform draws over 3 values miss a second one with
        // probability well below 1e-17.
        assert!(seen.len() > 1, "expected more than one distinct variant");
    }

    #[test]
    fn variant_elements_resolve_recursively() {
        let node = LocaleNode::Variants(vec![locale_map(&[("en", "Hi"), ("zh", "你好")])]);
        assert_eq!(
            resolve(&node, pair(Some("zh"), Some("en"))),
            Some("你好".to_string())
        );
    }

    #[test]
    fn empty_variant_sequence_resolves_to_none() {
        let node = LocaleNode::Variants(Vec::new());
        assert_eq!(resolve(&node, pair(Some("en"), Some("en"))), None);
    }

    #[test]
    fn reply_lookup_normalizes_punctuation_and_case() {
        let content = LocaleNode::from_xml(
            "<content><reply><addsuccess><en>Added</en><zh>添加成功</zh></addsuccess></reply></content>",
        )
        .expect("content parses")
        .get("content")
        .cloned()
        .expect("content subtree");

        let translated = resolve_reply(&content, pair(Some("zh"), Some("en")), "Add Success.");
        assert_eq!(translated, "添加成功");
    }

    #[test]
    fn unknown_reply_passes_through_unchanged() {
        let content = LocaleNode::empty();
        let raw = "Something unexpected happened?";
        assert_eq!(resolve_reply(&content, pair(None, None), raw), raw);
    }

    #[test]
    fn reply_with_untranslated_locales_passes_through() {
        let content = LocaleNode::from_xml(
            "<content><reply><oops><fr>Zut</fr></oops></reply></content>",
        )
        .expect("content parses")
        .get("content")
        .cloned()
        .expect("content subtree");
        assert_eq!(resolve_reply(&content, pair(Some("en"), None), "Oops"), "Oops");
    }

    #[test]
    fn normalize_strips_the_original_character_class() {
        assert_eq!(normalize_reply_key("Add Success."), "addsuccess");
        assert_eq!(normalize_reply_key("Are you sure?"), "areyousure");
        assert_eq!(normalize_reply_key("a, b.c ?d"), "abcd");
    }
}
