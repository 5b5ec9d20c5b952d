// SPDX-License-Identifier: MPL-2.0
//! Locale overlay for chart configuration trees.
//!
//! Chart options are externally-owned object graphs whose shape mirrors
//! the locale document structurally, but where only some leaves are
//! localized. This module computes a pure patch — key-path → resolved
//! string — from a locale subtree against a read-only view of the target;
//! the owner applies the patch to its own configuration and re-renders.
//!
//! The collapse rule is load-bearing and preserved exactly as observed in
//! the deployed console: a level whose every key produced a resolved leaf
//! is itself a terminal per-locale mapping and is reported to the parent
//! as one replaceable value. A scalar leaf paired with a non-string target
//! slot is skipped *without* clearing that flag. Do not "fix" this
//! heuristic without characterization tests against representative chart
//! documents.

use super::context::LocalePair;
use super::document::LocaleNode;
use crate::config::defaults::FALLBACK_DISPLAY;
use serde_json::{Map, Value};

/// One assignment of the patch: write `value` at `path` in the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOp {
    pub path: Vec<String>,
    pub value: String,
}

/// The computed overlay for one chart registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartPatch {
    ops: Vec<PatchOp>,
}

impl ChartPatch {
    /// The assignments, in depth-first document order.
    pub fn ops(&self) -> &[PatchOp] {
        &self.ops
    }

    /// Whether the overlay found nothing to replace.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Result of walking one subtree, as seen by the level above.
enum Walked {
    /// A locale-independent scalar leaf.
    Scalar(String),
    /// A fully-resolved per-locale mapping, collapsed to one string.
    Collapsed(String),
    /// A structural level that merged key-by-key (ops already recorded).
    Merged,
}

/// Computes the overlay patch for `subtree` against an optional view of
/// the target configuration.
///
/// Structural positions merge key-by-key, leaving target keys absent from
/// the locale subtree untouched; terminal per-locale mappings produce one
/// assignment each. An empty subtree yields an empty patch.
pub fn compute(subtree: &LocaleNode, target: Option<&Value>, locales: LocalePair<'_>) -> ChartPatch {
    let mut patch = ChartPatch::default();
    let mut path = Vec::new();
    // The top-level outcome is discarded: a subtree that is itself a
    // single scalar or terminal mapping has no slot to land in.
    let _ = walk(subtree, target, locales, &mut path, &mut patch.ops);
    patch
}

fn walk(
    node: &LocaleNode,
    target: Option<&Value>,
    locales: LocalePair<'_>,
    path: &mut Vec<String>,
    ops: &mut Vec<PatchOp>,
) -> Walked {
    if let LocaleNode::Leaf(text) = node {
        return Walked::Scalar(text.clone());
    }

    let mut all_resolved = true;
    for (key, child) in entries(node) {
        let child_target = target.and_then(|value| index_value(value, &key));
        path.push(key);
        let walked = walk(child, child_target, locales, path, ops);
        match walked {
            Walked::Scalar(text) => {
                // A bare string only replaces a slot that already held a
                // string; other shapes at this position are left alone
                // and the level can still collapse.
                if matches!(child_target, Some(Value::String(_))) {
                    ops.push(PatchOp {
                        path: path.clone(),
                        value: text,
                    });
                    all_resolved = false;
                }
            }
            Walked::Collapsed(text) => {
                ops.push(PatchOp {
                    path: path.clone(),
                    value: text,
                });
                all_resolved = false;
            }
            Walked::Merged => all_resolved = false,
        }
        path.pop();
    }

    if all_resolved {
        Walked::Collapsed(collapse(node, locales))
    } else {
        Walked::Merged
    }
}

/// Keys and children of a non-leaf node. Variant sequences expose their
/// indices as keys, matching how the page iterated repeated tags.
fn entries(node: &LocaleNode) -> Vec<(String, &LocaleNode)> {
    match node {
        LocaleNode::Map(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        LocaleNode::Variants(seq) => seq
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        LocaleNode::Leaf(_) => Vec::new(),
    }
}

/// Collapses a terminal per-locale mapping: current, then default, then
/// the literal `N/A`. Only non-empty leaf entries count, matching the
/// page's truthiness chain.
fn collapse(node: &LocaleNode, locales: LocalePair<'_>) -> String {
    let entry = |code: &str| match node {
        LocaleNode::Map(map) => map.get(code),
        LocaleNode::Variants(seq) => code.parse::<usize>().ok().and_then(|i| seq.get(i)),
        LocaleNode::Leaf(_) => None,
    };
    locales
        .current
        .and_then(entry)
        .and_then(LocaleNode::as_leaf)
        .filter(|text| !text.is_empty())
        .or_else(|| {
            locales
                .default
                .and_then(entry)
                .and_then(LocaleNode::as_leaf)
                .filter(|text| !text.is_empty())
        })
        .unwrap_or(FALLBACK_DISPLAY)
        .to_string()
}

/// Child of a configuration value by string key; array children are
/// addressed by numeric index.
fn index_value<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(seq) => key.parse::<usize>().ok().and_then(|i| seq.get(i)),
        _ => None,
    }
}

/// Applies a computed patch to the owned configuration object.
///
/// Missing object keys along a path are created; array slots are only
/// replaced when the index already exists.
pub fn apply(target: &mut Value, patch: &ChartPatch) {
    for op in patch.ops() {
        apply_op(target, &op.path, &op.value);
    }
}

fn apply_op(target: &mut Value, path: &[String], text: &str) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut cursor = target;
    for key in parents {
        cursor = match cursor {
            Value::Object(map) => map
                .entry(key.clone())
                .or_insert_with(|| Value::Object(Map::new())),
            Value::Array(seq) => match key.parse::<usize>().ok().and_then(|i| seq.get_mut(i)) {
                Some(slot) => slot,
                None => return,
            },
            _ => return,
        };
    }
    match cursor {
        Value::Object(map) => {
            map.insert(last.clone(), Value::String(text.to_string()));
        }
        Value::Array(seq) => {
            if let Some(slot) = last.parse::<usize>().ok().and_then(|i| seq.get_mut(i)) {
                *slot = Value::String(text.to_string());
            }
        }
        _ => {}
    }
}
