//! Format implementations
//!
//! This module contains the output formats a converted document can be
//! serialized to.

pub mod common;
pub mod icons;
pub mod json;
pub mod text;
pub mod treeviz;

pub use json::JsonFormat;
pub use text::TextFormat;
pub use treeviz::TreevizFormat;
