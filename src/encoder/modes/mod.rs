//! QR code data mode encoders
//!
//! This module contains encoders for the supported data modes:
//! - Alphanumeric: Letters, numbers, and symbols
//! - Byte: 8-bit ASCII data
//!
//! Numeric and Kanji are recognized but rejected as unsupported.

/// Alphanumeric mode (0010)
pub mod alphanumeric;
/// Byte mode (0100)
pub mod byte;

use crate::encoder::bitstream::BitGroup;
use crate::encoder::tables::EncodingTables;
use crate::error::{EncodeError, Result};
use crate::models::Mode;
use alphanumeric::AlphanumericEncoder;
use byte::ByteEncoder;

/// Encode `text` in `mode` into fixed-width bit groups
pub fn encode_segment(text: &str, mode: Mode, tables: &EncodingTables) -> Result<Vec<BitGroup>> {
    match mode {
        Mode::Alphanumeric => AlphanumericEncoder::encode(text, tables),
        Mode::Byte => ByteEncoder::encode(text),
        Mode::Numeric | Mode::Kanji => Err(EncodeError::UnsupportedMode(mode)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::standard_tables;

    #[test]
    fn test_unsupported_modes() {
        let tables = standard_tables();
        assert_eq!(
            encode_segment("123", Mode::Numeric, tables),
            Err(EncodeError::UnsupportedMode(Mode::Numeric))
        );
        assert_eq!(
            encode_segment("123", Mode::Kanji, tables),
            Err(EncodeError::UnsupportedMode(Mode::Kanji))
        );
    }

    #[test]
    fn test_dispatch() {
        let tables = standard_tables();
        assert_eq!(encode_segment("AB", Mode::Alphanumeric, tables).unwrap().len(), 1);
        assert_eq!(encode_segment("ab", Mode::Byte, tables).unwrap().len(), 2);
    }
}
