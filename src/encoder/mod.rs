//! QR code encoding modules
//!
//! This module contains the symbol-construction pipeline:
//! - Data mode encoding (alphanumeric, byte)
//! - Codeword assembly (headers, terminator, padding)
//! - Structural patterns and the reserved-region predicate
//! - Masking and zigzag placement of data bits

/// Append-only bit buffer and bit groups
pub mod bitstream;
/// Mode/count headers, terminator and pad codewords
pub mod codewords;
/// Environment-driven defaults (QR_MASK, QR_EC_LEVEL, QR_MODE, ...)
pub mod config;
/// Reserved-region predicate (finder boxes, timing/format lines, mode area)
pub mod function_mask;
/// The eight XOR mask patterns
pub mod mask;
/// Data mode encoders (alphanumeric, byte)
pub mod modes;
/// Zigzag traversal and placement cursor
pub mod placement;
/// Main QR encoder that orchestrates the pipeline
pub mod qr_encoder;
/// Finder, timing, mode and format cells
pub mod structure;
/// Alphabet, count-indicator widths and codeword targets
pub mod tables;
