//! The rich-text converter: a single-pass state machine over [`HtmlEvent`]s.
//!
//! Spans accumulate in a buffer until a block boundary (paragraph, heading,
//! quote, list or list item start/end) flushes them into a [`Block`]. Marks are
//! a stack of identifiers; every span snapshots the stack when it is created.
//!
//! Markup is never rejected. Unknown tags are ignored, unbalanced closing tags
//! remove nothing, and a link without `href` is a plain wrapper.

use super::entities;
use super::events::HtmlEvent;
use crate::model::{
    retain_content_blocks, Block, BlockStyle, Conversion, ImageRef, ListKind, MarkDef, Span, EM,
    STRONG,
};
use tracing::debug;

/// Document-scoped key allocator shared by blocks, spans and mark definitions.
#[derive(Debug, Default)]
struct KeyCounter {
    next: u32,
}

impl KeyCounter {
    fn allocate(&mut self) -> String {
        self.next += 1;
        format!("block{:04}", self.next)
    }
}

/// Converts one document. Create a fresh converter per document.
#[derive(Debug, Default)]
pub struct Converter {
    blocks: Vec<Block>,
    images: Vec<ImageRef>,
    children: Vec<Span>,
    mark_defs: Vec<MarkDef>,
    active_marks: Vec<String>,
    list_kind: Option<ListKind>,
    list_depth: u32,
    in_list_item: bool,
    open_link: Option<String>,
    keys: KeyCounter,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one parse event.
    pub fn handle(&mut self, event: HtmlEvent) {
        match event {
            HtmlEvent::StartTag { ref name, .. } => self.start_tag(name, &event),
            HtmlEvent::EndTag { name } => self.end_tag(&name),
            HtmlEvent::Text(text) => self.text(text),
            HtmlEvent::EntityRef(name) => {
                let text = entities::named_or_literal(&name);
                self.add_text(text.into_owned());
            }
            HtmlEvent::CharRef(body) => self.add_text(entities::numeric_or_literal(&body)),
        }
    }

    /// Whether a list item is currently open.
    pub fn in_list_item(&self) -> bool {
        self.in_list_item
    }

    /// Flush anything pending and return the filtered result.
    pub fn finish(mut self) -> Conversion {
        self.flush(BlockStyle::Normal, None);
        let flushed = self.blocks.len();
        let blocks = retain_content_blocks(self.blocks);
        debug!(
            blocks = blocks.len(),
            dropped = flushed - blocks.len(),
            images = self.images.len(),
            "conversion finished"
        );
        Conversion {
            blocks,
            images: self.images,
        }
    }

    fn start_tag(&mut self, name: &str, event: &HtmlEvent) {
        match name {
            "h1" | "h2" | "h3" | "h4" | "p" | "blockquote" => {
                self.flush(BlockStyle::Normal, None);
            }
            "strong" | "b" => self.active_marks.push(STRONG.to_string()),
            "em" | "i" => self.active_marks.push(EM.to_string()),
            "a" => {
                let href = event.attr("href").unwrap_or_default();
                if !href.is_empty() {
                    let key = self.keys.allocate();
                    self.mark_defs.push(MarkDef::Link {
                        key: key.clone(),
                        href: href.to_string(),
                    });
                    self.active_marks.push(key.clone());
                    self.open_link = Some(key);
                }
            }
            "ul" => self.open_list(ListKind::Bullet),
            "ol" => self.open_list(ListKind::Number),
            "li" => {
                self.flush(BlockStyle::Normal, None);
                self.in_list_item = true;
            }
            "img" => {
                let src = event.attr("src").unwrap_or_default();
                if !src.is_empty() {
                    self.images.push(ImageRef {
                        src: src.to_string(),
                        alt: event.attr("alt").unwrap_or_default().to_string(),
                    });
                }
            }
            "br" => self.add_text("\n".to_string()),
            _ => {}
        }
    }

    fn end_tag(&mut self, name: &str) {
        match name {
            "h1" | "h2" | "h3" | "h4" => {
                let style = name[1..]
                    .parse()
                    .ok()
                    .and_then(BlockStyle::heading)
                    .unwrap_or(BlockStyle::Normal);
                self.flush(style, None);
            }
            "p" => self.flush(BlockStyle::Normal, None),
            "blockquote" => self.flush(BlockStyle::Blockquote, None),
            "strong" | "b" => self.remove_mark(STRONG),
            "em" | "i" => self.remove_mark(EM),
            "a" => {
                if let Some(key) = self.open_link.take() {
                    self.remove_mark(&key);
                }
            }
            "ul" | "ol" => {
                self.flush(BlockStyle::Normal, None);
                self.list_depth = self.list_depth.saturating_sub(1);
                if self.list_depth == 0 {
                    self.list_kind = None;
                }
            }
            "li" => {
                let kind = self.list_kind.unwrap_or(ListKind::Bullet);
                let level = self.list_depth.max(1);
                self.flush(BlockStyle::Normal, Some((kind, level)));
                self.in_list_item = false;
            }
            _ => {}
        }
    }

    fn open_list(&mut self, kind: ListKind) {
        self.flush(BlockStyle::Normal, None);
        self.list_kind = Some(kind);
        self.list_depth += 1;
    }

    fn remove_mark(&mut self, mark: &str) {
        if let Some(pos) = self.active_marks.iter().position(|m| m == mark) {
            self.active_marks.remove(pos);
        }
    }

    /// Text between tags: kept when it has visible content or is a single space.
    fn text(&mut self, text: String) {
        if !text.trim().is_empty() || text == " " {
            self.add_text(text);
        }
    }

    fn add_text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        let span = Span {
            key: self.keys.allocate(),
            text,
            marks: self.active_marks.clone(),
        };
        self.children.push(span);
    }

    fn flush(&mut self, style: BlockStyle, list: Option<(ListKind, u32)>) {
        if !self.children.is_empty() {
            let block = Block {
                key: self.keys.allocate(),
                style,
                mark_defs: std::mem::take(&mut self.mark_defs),
                children: std::mem::take(&mut self.children),
                list_item: list.map(|(kind, _)| kind),
                level: list.map(|(_, level)| level),
            };
            self.blocks.push(block);
        }
        self.children.clear();
        self.mark_defs.clear();
    }
}
