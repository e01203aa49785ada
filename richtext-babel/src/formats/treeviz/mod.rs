//! Treeviz formatter for converted documents
//!
//! Treeviz is a visual, line based representation of the block list, meant for
//! eyeballing what the converter made of a piece of markup.
//!
//! The format is:
//! <prefix><connector> <icon> <label>
//!
//! Example:
//!
//! ⧉ Document (2 blocks, 1 image)
//! ├─ § h2: Title
//! │ └─ ◦ "Title"
//! ├─ ¶ normal: Read the docs
//! │ ├─ ⊕ block0003 → http://x.test
//! │ ├─ ◦ "Read "
//! │ └─ ◦ "the docs" [strong, block0003]
//! └─ ▣ http://i.test/a.jpg (pic)
//!
//! Block and span text is truncated to 30 characters; line breaks show as `↵`.

use super::common::{one_line, truncate, LABEL_WIDTH};
use super::icons::{block_node_type, get_icon};
use crate::error::FormatError;
use crate::format::Format;
use crate::model::{Block, Conversion, ImageRef, MarkDef, Span};

/// Format implementation for the tree visualization
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree of blocks, spans and marks"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn serialize(&self, doc: &Conversion) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}

/// Render a converted document as a tree
pub fn to_treeviz_str(doc: &Conversion) -> String {
    let mut output = format!(
        "{} Document ({}, {})\n",
        get_icon("Document"),
        plural(doc.blocks.len(), "block"),
        plural(doc.images.len(), "image")
    );

    let count = doc.blocks.len() + doc.images.len();
    let nodes = doc
        .blocks
        .iter()
        .map(Node::Block)
        .chain(doc.images.iter().map(Node::Image));
    for (index, node) in nodes.enumerate() {
        format_node(&mut output, &node, "", index == count - 1);
    }
    output
}

enum Node<'a> {
    Block(&'a Block),
    MarkDef(&'a MarkDef),
    Span(&'a Span),
    Image(&'a ImageRef),
}

impl Node<'_> {
    fn icon(&self) -> &'static str {
        match self {
            Node::Block(block) => get_icon(block_node_type(block)),
            Node::MarkDef(_) => get_icon("Link"),
            Node::Span(_) => get_icon("Span"),
            Node::Image(_) => get_icon("Image"),
        }
    }

    fn label(&self) -> String {
        match self {
            Node::Block(block) => {
                let kind = match (block.list_item, block.level) {
                    (Some(list), Some(level)) => format!("{} {}", list.as_str(), level),
                    _ => block.style.as_str().to_string(),
                };
                format!("{kind}: {}", truncate(&one_line(&block.text()), LABEL_WIDTH))
            }
            Node::MarkDef(MarkDef::Link { key, href }) => format!("{key} → {href}"),
            Node::Span(span) => {
                let text = truncate(&one_line(&span.text), LABEL_WIDTH);
                if span.marks.is_empty() {
                    format!("{text:?}")
                } else {
                    format!("{text:?} [{}]", span.marks.join(", "))
                }
            }
            Node::Image(image) if image.alt.is_empty() => image.src.clone(),
            Node::Image(image) => format!("{} ({})", image.src, image.alt),
        }
    }

    fn children(&self) -> Vec<Node<'_>> {
        match self {
            Node::Block(block) => block
                .mark_defs
                .iter()
                .map(Node::MarkDef)
                .chain(block.children.iter().map(Node::Span))
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn format_node(output: &mut String, node: &Node<'_>, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{prefix}{connector} {} {}\n",
        node.icon(),
        node.label()
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let children = node.children();
    let count = children.len();
    for (index, child) in children.iter().enumerate() {
        format_node(output, child, &child_prefix, index == count - 1);
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
