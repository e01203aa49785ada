//! HTML event lexer built on the `html5ever` tokenizer.
//!
//! The tokenizer gives us browser-grade tolerance for sloppy markup (unquoted
//! attributes, stray `<`, unclosed tags) without building a DOM. We only use
//! its token stream and fold it into [`HtmlEvent`]s:
//!
//! - adjacent character tokens are coalesced, so one `Text` event covers all
//!   text between two tags (the tokenizer splits runs at newlines),
//! - character references are surfaced as `EntityRef` / `CharRef` events
//!   instead of being decoded by the tokenizer,
//! - `<script>` and `<style>` bodies are tokenized as raw text and dropped,
//! - comments, doctypes and parse errors produce no events.
//!
//! The tokenizer always resolves references itself, so before feeding it every
//! `&` is escaped as [`SHIELD`] followed by `a`. A `SHIELD` already in the input
//! is escaped as `SHIELD` followed by `e`, which keeps the mapping reversible
//! for any input. Names, text and attribute values are unescaped on the way out.

use super::entities::{self, Segment};
use super::events::HtmlEvent;
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use std::cell::{Cell, RefCell};

/// Tokenize `html` into the converter's event stream.
pub fn tokenize(html: &str) -> Vec<HtmlEvent> {
    if html.is_empty() {
        return Vec::new();
    }

    let shielded = shield(html);
    let tokenizer = Tokenizer::new(EventSink::new(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(&shielded));
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    tokenizer.sink.take_events()
}

/// Escape character for ampersands hidden from the tokenizer.
const SHIELD: char = '\u{e000}';
const SHIELDED_AMP: char = 'a';
const SHIELDED_SELF: char = 'e';

fn shield(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + html.len() / 16);
    for c in html.chars() {
        match c {
            '&' => {
                out.push(SHIELD);
                out.push(SHIELDED_AMP);
            }
            SHIELD => {
                out.push(SHIELD);
                out.push(SHIELDED_SELF);
            }
            c => out.push(c),
        }
    }
    out
}

fn unshield(s: &str) -> String {
    if !s.contains(SHIELD) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != SHIELD {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(&SHIELDED_AMP) => {
                chars.next();
                out.push('&');
            }
            Some(&SHIELDED_SELF) => {
                chars.next();
                out.push(SHIELD);
            }
            _ => out.push(c),
        }
    }
    out
}

struct EventSink {
    events: RefCell<Vec<HtmlEvent>>,
    text: RefCell<String>,
    in_raw_text: Cell<bool>,
}

impl EventSink {
    fn new() -> Self {
        EventSink {
            events: RefCell::new(Vec::new()),
            text: RefCell::new(String::new()),
            in_raw_text: Cell::new(false),
        }
    }

    fn take_events(&self) -> Vec<HtmlEvent> {
        self.flush_text();
        self.events.take()
    }

    fn flush_text(&self) {
        let text = self.text.take();
        if text.is_empty() {
            return;
        }
        let text = unshield(&text);
        let mut events = self.events.borrow_mut();
        for segment in entities::segments(&text) {
            events.push(match segment {
                Segment::Text(t) => HtmlEvent::Text(t.to_string()),
                Segment::Named(name) => HtmlEvent::EntityRef(name.to_string()),
                Segment::Numeric(body) => HtmlEvent::CharRef(body.to_string()),
            });
        }
    }

    fn push_tag(&self, tag: Tag) -> TokenSinkResult<()> {
        let name = unshield(&tag.name);
        let raw_kind = match name.as_str() {
            "script" => Some(RawKind::ScriptData),
            "style" => Some(RawKind::Rawtext),
            _ => None,
        };

        let mut events = self.events.borrow_mut();
        match tag.kind {
            TagKind::StartTag => {
                let attrs = tag
                    .attrs
                    .iter()
                    .map(|attr| {
                        let value = unshield(&attr.value);
                        (
                            unshield(&attr.name.local),
                            entities::decode_references(&value),
                        )
                    })
                    .collect();
                events.push(HtmlEvent::StartTag {
                    name: name.clone(),
                    attrs,
                });
                if tag.self_closing {
                    events.push(HtmlEvent::EndTag { name });
                } else if let Some(kind) = raw_kind {
                    self.in_raw_text.set(true);
                    return TokenSinkResult::RawData(kind);
                }
            }
            TagKind::EndTag => {
                if raw_kind.is_some() {
                    self.in_raw_text.set(false);
                }
                events.push(HtmlEvent::EndTag { name });
            }
        }
        TokenSinkResult::Continue
    }
}

impl TokenSink for EventSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(chars) => {
                if !self.in_raw_text.get() {
                    self.text.borrow_mut().push_str(&chars);
                }
            }
            Token::TagToken(tag) => {
                self.flush_text();
                return self.push_tag(tag);
            }
            Token::CommentToken(_) | Token::DoctypeToken(_) | Token::EOFToken => {
                self.flush_text();
            }
            Token::NullCharacterToken | Token::ParseError(_) => {}
        }
        TokenSinkResult::Continue
    }
}
