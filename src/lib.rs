//! RustQR encoder - builds version 1 QR symbols
//!
//! Text is encoded into a mode-tagged bit stream, packed into padded
//! codewords, and placed into a 21x21 module matrix along the zigzag path,
//! masked with one of the eight mask patterns. Error correction codewords
//! and BCH-protected format information are not generated.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (bit packing, structure, masking, placement)
pub mod encoder;
/// Error taxonomy
pub mod error;
/// Core data structures (QRCode, ModuleMatrix, Mode, ECLevel, MaskPattern)
pub mod models;
/// Text and image rendering
pub mod tools;

pub use encoder::config::EncoderConfig;
pub use encoder::qr_encoder::QrEncoder;
pub use error::{EncodeError, Result};
pub use models::{ECLevel, MaskPattern, Mode, ModuleMatrix, QRCode, Version};

/// Encode `text` into a version 1 symbol
///
/// # Arguments
/// * `text` - Input characters, valid for `mode`
/// * `mode` - Alphanumeric or Byte
/// * `ec_level` - Selects how many data codewords the padding fills
/// * `mask_id` - Mask pattern 0-7
///
/// # Example
/// ```
/// use rust_qr_encoder::{ECLevel, Mode, encode};
///
/// let qr = encode("ABCDE123", Mode::Alphanumeric, ECLevel::H, 4).unwrap();
/// assert_eq!(qr.size(), 21);
/// assert_eq!(qr.codewords(), &[0x20, 0x41, 0xCD, 0x45, 0x29, 0xDC, 0x2E, 0x80, 0xEC]);
/// ```
pub fn encode(text: &str, mode: Mode, ec_level: ECLevel, mask_id: u8) -> Result<QRCode> {
    let mask = MaskPattern::from_id(mask_id)?;
    QrEncoder::new(EncoderConfig::new(mode, ec_level, mask)).encode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_entry_point() {
        let qr = encode("ABCDE123", Mode::Alphanumeric, ECLevel::L, 4).unwrap();
        assert_eq!(qr.version(), Version::V1);
        assert_eq!(qr.error_correction(), ECLevel::L);
        assert_eq!(qr.mask_pattern(), MaskPattern::Pattern4);
        assert_eq!(qr.codewords().len(), 19);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = encode("HELLO", Mode::Alphanumeric, ECLevel::M, 2).unwrap();
        let b = encode("HELLO", Mode::Alphanumeric, ECLevel::M, 2).unwrap();
        assert_eq!(a.modules(), b.modules());
    }

    #[test]
    fn test_encode_rejects_invalid_mask() {
        assert_eq!(
            encode("HELLO", Mode::Alphanumeric, ECLevel::M, 9).err(),
            Some(EncodeError::InvalidMask(9))
        );
    }
}
