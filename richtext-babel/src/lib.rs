//! HTML to block-based rich text
//!
//!     This crate turns loosely-formed HTML (typically the body field of a blog post
//!     exported from a CMS) into Portable Text: an ordered list of blocks, each holding
//!     spans of text with marks, plus a side list of the images the markup referenced.
//!
//!     It does not fetch content and it does not talk to any document store. Callers
//!     hand it a string and get back a [`Conversion`] they can serialize, upload
//!     images for, and store however they like.
//!
//! Architecture
//!
//!     Conversion is a single pass over a flat event stream:
//!
//!     html string ──▶ html::lexer::tokenize ──▶ [HtmlEvent] ──▶ html::Converter ──▶ Conversion
//!
//!     The lexer leans on html5ever's tokenizer for tolerance of sloppy markup and
//!     only reshapes its tokens. The converter is an explicit state struct (span buffer,
//!     mark stack, list kind and depth, key counter) with one transition per event.
//!     Neither stage can fail: unbalanced or unknown markup is absorbed, and character
//!     references that cannot be decoded are kept literally.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── model.rs                # Block, Span, MarkDef, ImageRef, Conversion
//!     ├── limits.rs               # Input size ceiling for shells
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── html
//!     │   ├── events.rs           # HtmlEvent
//!     │   ├── lexer.rs            # html5ever token stream → HtmlEvent
//!     │   ├── entities.rs         # Character reference table and decoding
//!     │   └── converter.rs        # The state machine
//!     └── formats
//!         ├── json                # Portable Text JSON
//!         ├── treeviz             # Tree view for inspection
//!         └── text                # Plain text
//!
//! Testing
//!
//!     Unit tests live next to the code. Behavioural tests over whole documents are
//!     in tests/, grouped by concern and wired through tests/lib.rs.
//!
//! Concurrency
//!
//!     Every conversion owns its state. Independent documents can be converted on as
//!     many threads as you like; nothing is shared.

pub mod error;
pub mod format;
pub mod formats;
pub mod html;
pub mod limits;
pub mod model;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use html::{Converter, HtmlEvent};
pub use limits::InputLimit;
pub use model::{Block, BlockStyle, Conversion, ImageRef, ListKind, MarkDef, Span};
pub use registry::FormatRegistry;

use tracing::debug;

/// Convert an HTML string into blocks and image references.
///
/// Empty input gives an empty [`Conversion`]. This never fails.
pub fn convert(html: &str) -> Conversion {
    if html.is_empty() {
        return Conversion::default();
    }

    let events = html::tokenize(html);
    debug!(bytes = html.len(), events = events.len(), "tokenized html");

    let mut converter = Converter::new();
    for event in events {
        converter.handle(event);
    }
    converter.finish()
}
