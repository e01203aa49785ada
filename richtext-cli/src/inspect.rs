//! Inspection views
//!
//! `richtext inspect` looks at a document at two stages of the pipeline:
//!
//! 1. **Lexing** - HTML → event stream
//!    - `events`: one event per line, as the converter receives them
//!
//! 2. **Conversion** - events → blocks and images
//!    - `treeviz`: tree of blocks, mark definitions and spans (default)
//!    - `stats`: JSON summary of what the conversion produced
//!
//! Example: `richtext inspect post.html events`

use richtext_babel::formats::treeviz::to_treeviz_str;
use richtext_babel::html::tokenize;
use richtext_babel::{convert, BlockStyle, Conversion};
use serde_json::json;
use std::collections::BTreeMap;
use std::fmt::Write;

/// All available inspection views
pub const AVAILABLE_INSPECTIONS: &[&str] = &["events", "treeviz", "stats"];

pub const DEFAULT_INSPECTION: &str = "treeviz";

/// Render `source` through the named view.
pub fn execute_inspection(source: &str, view: &str) -> Result<String, String> {
    match view {
        "events" => Ok(events_dump(source)),
        "treeviz" => Ok(to_treeviz_str(&convert(source))),
        "stats" => stats(&convert(source)),
        other => Err(format!(
            "Unknown inspection '{other}'. Available: {}",
            AVAILABLE_INSPECTIONS.join(", ")
        )),
    }
}

fn events_dump(source: &str) -> String {
    let mut output = String::new();
    for (index, event) in tokenize(source).iter().enumerate() {
        let _ = writeln!(output, "{index:>4}  {event}");
    }
    output
}

fn stats(doc: &Conversion) -> Result<String, String> {
    let mut styles: BTreeMap<&str, usize> = BTreeMap::new();
    let mut list_items = 0;
    let mut spans = 0;
    let mut links = 0;
    for block in &doc.blocks {
        if block.is_list_item() {
            list_items += 1;
        } else {
            *styles.entry(block.style.as_str()).or_default() += 1;
        }
        spans += block.children.len();
        links += block.mark_defs.len();
    }
    let headings = doc
        .blocks
        .iter()
        .filter(|b| b.style.heading_level().is_some() && !b.is_list_item())
        .count();

    let summary = json!({
        "blocks": doc.blocks.len(),
        "styles": styles,
        "headings": headings,
        "quotes": styles.get(BlockStyle::Blockquote.as_str()).copied().unwrap_or(0),
        "listItems": list_items,
        "spans": spans,
        "links": links,
        "images": doc.images.len(),
    });
    let mut out = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
    out.push('\n');
    Ok(out)
}
