//! Icon mapping for the tree visualization format

use crate::model::{Block, BlockStyle};

/// Get the Unicode icon for a node kind
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Heading" => "§",
        "Paragraph" => "¶",
        "Quote" => "❝",
        "ListItem" => "•",
        "Span" => "◦",
        "Link" => "⊕",
        "Image" => "▣",
        _ => "○",
    }
}

/// Node kind of a block, for icon lookup.
pub fn block_node_type(block: &Block) -> &'static str {
    if block.is_list_item() {
        return "ListItem";
    }
    match block.style {
        BlockStyle::H1 | BlockStyle::H2 | BlockStyle::H3 | BlockStyle::H4 => "Heading",
        BlockStyle::Blockquote => "Quote",
        BlockStyle::Normal => "Paragraph",
    }
}
