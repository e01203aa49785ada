//! Format trait definition
//!
//! This module defines the Format trait every output format implements. Formats
//! only serialize: input is always HTML and goes through [`crate::convert`].

use crate::error::FormatError;
use crate::model::Conversion;
use std::collections::HashMap;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn serialize(&self, doc: &Conversion) -> Result<String, FormatError> {
///         Ok(format!("{} blocks", doc.blocks.len()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "json", "treeviz")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used to pick a format from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Serialize a converted document
    fn serialize(&self, doc: &Conversion) -> Result<String, FormatError>;

    /// Serialize a converted document, optionally using extra parameters.
    ///
    /// The default implementation rejects any option. Formats with knobs
    /// override it.
    fn serialize_with_options(
        &self,
        doc: &Conversion,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
