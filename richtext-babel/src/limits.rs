//! Input size ceiling.
//!
//! Conversion is linear in the input, so the only knob worth having is how much
//! input a caller is willing to hand over. The converter does not apply it on
//! its own; shells check it before calling [`crate::convert`].
//!
//! [`InputLimit::read_capped`] lets a shell enforce the ceiling while reading,
//! so an oversized stream is never held in memory past `limit + 1` bytes.

use crate::error::FormatError;
use std::io::{self, Read};

/// Maximum accepted input size in bytes. `None` accepts anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLimit(Option<usize>);

impl InputLimit {
    pub fn unlimited() -> Self {
        InputLimit(None)
    }

    /// A limit of `max_bytes`; zero means unlimited.
    pub fn bytes(max_bytes: usize) -> Self {
        if max_bytes == 0 {
            InputLimit(None)
        } else {
            InputLimit(Some(max_bytes))
        }
    }

    pub fn max_bytes(&self) -> Option<usize> {
        self.0
    }

    pub fn check(&self, input: &str) -> Result<(), FormatError> {
        self.check_len(input.len())
    }

    /// Check a size known up front, such as a file's length.
    pub fn check_len(&self, size: usize) -> Result<(), FormatError> {
        match self.0 {
            Some(limit) if size > limit => Err(FormatError::InputTooLarge { size, limit }),
            _ => Ok(()),
        }
    }

    /// Read `reader` to the end, or to one byte past the limit, whichever comes
    /// first. Pass the result to [`InputLimit::check_read`].
    pub fn read_capped<R: Read>(&self, mut reader: R) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        match self.0 {
            Some(limit) => {
                let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
                reader.take(cap).read_to_end(&mut buf)?;
            }
            None => {
                reader.read_to_end(&mut buf)?;
            }
        }
        Ok(buf)
    }

    /// Check bytes returned by [`InputLimit::read_capped`]. Their length says
    /// only that the input went past the limit, not by how much.
    pub fn check_read(&self, bytes: &[u8]) -> Result<(), FormatError> {
        match self.0 {
            Some(limit) if bytes.len() > limit => Err(FormatError::InputOverLimit { limit }),
            _ => Ok(()),
        }
    }
}
