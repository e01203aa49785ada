//! Portable Text JSON output
//!
//! Writes `{"blocks": [...], "images": [...]}` with every block, span and mark
//! definition in the shape a Portable Text field stores.
//!
//! # Parameters
//!
//! - `pretty` (default `true`): indent the output.
//! - `images` (default `true`): when `false`, write only the block array, ready
//!   to be dropped into a document's rich text field.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::common::{bool_option, reject_unknown_options};
use crate::model::Conversion;
use std::collections::HashMap;

const PARAMETERS: &[&str] = &["pretty", "images"];

/// Format implementation for Portable Text JSON
pub struct JsonFormat;

impl JsonFormat {
    fn write<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, FormatError> {
        let mut out = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        out.push('\n');
        Ok(out)
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Portable Text JSON (blocks and image references)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, doc: &Conversion) -> Result<String, FormatError> {
        Self::write(doc, true)
    }

    fn serialize_with_options(
        &self,
        doc: &Conversion,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        reject_unknown_options(self.name(), options, PARAMETERS)?;
        let pretty = bool_option(options, "pretty", true)?;
        if bool_option(options, "images", true)? {
            Self::write(doc, pretty)
        } else {
            Self::write(&doc.blocks, pretty)
        }
    }
}
