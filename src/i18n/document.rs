// SPDX-License-Identifier: MPL-2.0
//! Conversion of the fetched locale description into a lookup tree.
//!
//! The server publishes the locale document as a markup tree
//! (`languages.xml`). This module converts it into a [`LocaleNode`]: a
//! recursive key/value structure where repeated sibling tags merge into an
//! ordered sequence. The conversion runs once per fetch; everything
//! downstream (resolution, binding, chart overlays) works on the converted
//! tree.
//!
//! Node shapes:
//!
//! - [`LocaleNode::Leaf`] - locale-independent text content
//! - [`LocaleNode::Variants`] - ordered alternatives for one key, one of
//!   which is picked at random per resolution
//! - [`LocaleNode::Map`] - nested keys; either structural nesting or a
//!   per-locale mapping, disambiguated by the resolver

use crate::error::{Error, Result};
use indexmap::map::Entry;
use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// One node of the converted locale document.
///
/// Leaf disambiguation is structural, not tagged: a `Map` whose values are
/// leaves keyed by locale codes is a terminal per-locale string, while the
/// same shape with structural keys is plain nesting. Callers inspect the
/// shape to decide how to resolve it.
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleNode {
    Leaf(String),
    Variants(Vec<LocaleNode>),
    Map(IndexMap<String, LocaleNode>),
}

impl Default for LocaleNode {
    fn default() -> Self {
        LocaleNode::empty()
    }
}

impl LocaleNode {
    /// An empty `Map` node, the shape of an unloaded document.
    pub fn empty() -> Self {
        LocaleNode::Map(IndexMap::new())
    }

    /// Parses a locale description document.
    ///
    /// Per element, the key is its `id` attribute when present, else its
    /// tag name. Childless elements contribute their trimmed text as a
    /// leaf; elements with children recurse. A key seen twice among
    /// siblings is promoted to a two-element sequence preserving insertion
    /// order; later occurrences append.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        // One frame per open element: the key it will be stored under and
        // the children collected so far.
        struct Frame {
            key: String,
            children: IndexMap<String, LocaleNode>,
            text: String,
        }

        let mut root = IndexMap::new();
        let mut stack: Vec<Frame> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref start)) => {
                    stack.push(Frame {
                        key: element_key(start),
                        children: IndexMap::new(),
                        text: String::new(),
                    });
                }
                Ok(Event::Empty(ref start)) => {
                    let key = element_key(start);
                    let children = stack.last_mut().map_or(&mut root, |f| &mut f.children);
                    merge_child(children, key, LocaleNode::Leaf(String::new()));
                }
                Ok(Event::Text(ref text)) => {
                    if let Some(frame) = stack.last_mut() {
                        match text.unescape() {
                            Ok(value) => frame.text.push_str(&value),
                            Err(err) => return Err(Error::Document(err.to_string())),
                        }
                    }
                }
                Ok(Event::CData(ref data)) => {
                    if let Some(frame) = stack.last_mut() {
                        frame.text.push_str(&String::from_utf8_lossy(data));
                    }
                }
                Ok(Event::End(_)) => {
                    let frame = match stack.pop() {
                        Some(frame) => frame,
                        None => return Err(Error::Document("unbalanced end tag".to_string())),
                    };
                    let node = if frame.children.is_empty() {
                        LocaleNode::Leaf(frame.text.trim().to_string())
                    } else {
                        LocaleNode::Map(frame.children)
                    };
                    let children = stack.last_mut().map_or(&mut root, |f| &mut f.children);
                    merge_child(children, frame.key, node);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => return Err(Error::Document(err.to_string())),
            }
        }

        Ok(LocaleNode::Map(root))
    }

    /// Looks up a direct child by key, case-insensitively.
    ///
    /// An exact match wins; otherwise the first key equal ignoring ASCII
    /// case is used. Non-`Map` nodes have no children.
    pub fn get(&self, key: &str) -> Option<&LocaleNode> {
        let LocaleNode::Map(map) = self else {
            return None;
        };
        if let Some(node) = map.get(key) {
            return Some(node);
        }
        map.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, node)| node)
    }

    /// Walks a nested path of keys, case-insensitively at each step.
    pub fn get_path(&self, path: &[&str]) -> Option<&LocaleNode> {
        let mut node = self;
        for key in path {
            node = node.get(key)?;
        }
        Some(node)
    }

    /// The text of a `Leaf`, if this node is one.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            LocaleNode::Leaf(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this node holds nothing at all.
    pub fn is_empty(&self) -> bool {
        match self {
            LocaleNode::Leaf(text) => text.is_empty(),
            LocaleNode::Variants(seq) => seq.is_empty(),
            LocaleNode::Map(map) => map.is_empty(),
        }
    }
}

/// Key of an element: explicit `id` attribute, else the tag name.
fn element_key(start: &BytesStart<'_>) -> String {
    for attr in start.attributes() {
        if let Ok(attr) = attr {
            if attr.key.as_ref() == b"id" {
                if let Ok(value) = attr.unescape_value() {
                    return value.into_owned();
                }
            }
        }
    }
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

/// Stores `value` under `key`, merging repeats into an ordered sequence.
///
/// First occurrence stores the value directly; the second promotes the
/// stored value into a one-element sequence and appends; later occurrences
/// append to the existing sequence.
fn merge_child(children: &mut IndexMap<String, LocaleNode>, key: String, value: LocaleNode) {
    match children.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(value);
        }
        Entry::Occupied(mut slot) => match slot.get_mut() {
            LocaleNode::Variants(seq) => seq.push(value),
            existing => {
                let first = std::mem::replace(existing, LocaleNode::Variants(Vec::new()));
                if let LocaleNode::Variants(seq) = existing {
                    seq.push(first);
                    seq.push(value);
                }
            }
        },
    }
}
