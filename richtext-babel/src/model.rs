//! Block-based rich text model (Portable Text).
//!
//! These are the records the converter emits. Their serde representation is the
//! Portable Text JSON shape stored by block-based document backends: every
//! record carries a `_type` discriminator and a `_key`.

use serde::{Deserialize, Serialize};

/// Built-in mark for `<strong>` / `<b>`.
pub const STRONG: &str = "strong";
/// Built-in mark for `<em>` / `<i>`.
pub const EM: &str = "em";

/// Paragraph-level style of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    Normal,
    H1,
    H2,
    H3,
    H4,
    Blockquote,
}

impl BlockStyle {
    /// Style for a heading element of the given level, if it is one we map.
    pub fn heading(level: u8) -> Option<Self> {
        match level {
            1 => Some(BlockStyle::H1),
            2 => Some(BlockStyle::H2),
            3 => Some(BlockStyle::H3),
            4 => Some(BlockStyle::H4),
            _ => None,
        }
    }

    /// Heading level, or `None` for non-heading styles.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            BlockStyle::H1 => Some(1),
            BlockStyle::H2 => Some(2),
            BlockStyle::H3 => Some(3),
            BlockStyle::H4 => Some(4),
            BlockStyle::Normal | BlockStyle::Blockquote => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BlockStyle::Normal => "normal",
            BlockStyle::H1 => "h1",
            BlockStyle::H2 => "h2",
            BlockStyle::H3 => "h3",
            BlockStyle::H4 => "h4",
            BlockStyle::Blockquote => "blockquote",
        }
    }
}

/// List membership of a list-item block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Number,
}

impl ListKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ListKind::Bullet => "bullet",
            ListKind::Number => "number",
        }
    }
}

/// One paragraph, heading, quote or list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_type", rename = "block")]
pub struct Block {
    #[serde(rename = "_key")]
    pub key: String,
    pub style: BlockStyle,
    #[serde(rename = "markDefs", default)]
    pub mark_defs: Vec<MarkDef>,
    #[serde(default)]
    pub children: Vec<Span>,
    #[serde(rename = "listItem", default, skip_serializing_if = "Option::is_none")]
    pub list_item: Option<ListKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
}

impl Block {
    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.children.iter().map(|span| span.text.as_str()).collect()
    }

    /// Whether any span carries non-whitespace text.
    pub fn has_content(&self) -> bool {
        self.children.iter().any(|span| !span.text.trim().is_empty())
    }

    pub fn is_list_item(&self) -> bool {
        self.list_item.is_some()
    }

    /// Look up the mark definition a span mark refers to.
    pub fn mark_def(&self, key: &str) -> Option<&MarkDef> {
        self.mark_defs.iter().find(|def| def.key() == key)
    }
}

/// A run of text sharing one set of marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_type", rename = "span")]
pub struct Span {
    #[serde(rename = "_key")]
    pub key: String,
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

impl Span {
    pub fn has_mark(&self, mark: &str) -> bool {
        self.marks.iter().any(|m| m == mark)
    }
}

/// Out-of-line annotation data referenced from span marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "lowercase")]
pub enum MarkDef {
    Link {
        #[serde(rename = "_key")]
        key: String,
        href: String,
    },
}

impl MarkDef {
    pub fn key(&self) -> &str {
        match self {
            MarkDef::Link { key, .. } => key,
        }
    }
}

/// An image found in the markup, reported outside the text flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// Result of converting one HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub blocks: Vec<Block>,
    pub images: Vec<ImageRef>,
}

impl Conversion {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.images.is_empty()
    }
}

/// Drop blocks without any non-whitespace text, keeping order.
///
/// Applying this to its own output returns the same blocks.
pub fn retain_content_blocks(blocks: Vec<Block>) -> Vec<Block> {
    blocks.into_iter().filter(Block::has_content).collect()
}
