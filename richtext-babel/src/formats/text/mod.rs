//! Plain text output
//!
//! One line group per block, separated by a blank line. Headings get `#`
//! prefixes matching their level, quotes get `> `, list items get `- ` or `1. `
//! indented two spaces per level beyond the first. Consecutive list items are
//! not separated by blank lines. Marks and link targets are not rendered.

use crate::error::FormatError;
use crate::format::Format;
use crate::model::{Block, BlockStyle, Conversion, ListKind};

/// Format implementation for plain text
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text, one paragraph per block"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn serialize(&self, doc: &Conversion) -> Result<String, FormatError> {
        Ok(to_text(&doc.blocks))
    }
}

/// Render blocks as plain text
pub fn to_text(blocks: &[Block]) -> String {
    let mut output = String::new();
    let mut previous: Option<&Block> = None;
    for block in blocks {
        if let Some(prev) = previous {
            let tight = prev.is_list_item() && block.is_list_item();
            output.push_str(if tight { "\n" } else { "\n\n" });
        }
        output.push_str(&render_block(block));
        previous = Some(block);
    }
    if !output.is_empty() {
        output.push('\n');
    }
    output
}

fn render_block(block: &Block) -> String {
    let text = block.text();
    if let Some(kind) = block.list_item {
        let depth = block.level.unwrap_or(1).saturating_sub(1) as usize;
        let marker = match kind {
            ListKind::Bullet => "- ",
            ListKind::Number => "1. ",
        };
        return format!("{}{marker}{text}", "  ".repeat(depth));
    }
    match block.style {
        BlockStyle::Blockquote => text
            .lines()
            .map(|line| format!("> {line}"))
            .collect::<Vec<_>>()
            .join("\n"),
        style => match style.heading_level() {
            Some(level) => format!("{} {text}", "#".repeat(level as usize)),
            None => text,
        },
    }
}
