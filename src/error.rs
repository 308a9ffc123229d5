//! Error taxonomy for the encoding pipeline
//!
//! Every failure carries the offending value so callers can report it
//! verbatim. None of these are retryable: the pipeline is deterministic.

use thiserror::Error;

use crate::models::Mode;

/// Errors raised while building a QR symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Input contains a character outside the active mode's alphabet.
    #[error("invalid character {character:?} at position {position} for {mode:?} mode")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Character index in the input.
        position: usize,
        /// Mode that rejected it.
        mode: Mode,
    },

    /// Character count does not fit the mode's count-indicator width.
    #[error("character count {count} does not fit in the {width}-bit count indicator of {mode:?} mode")]
    LengthOverflow {
        /// Number of characters in the input.
        count: usize,
        /// Width of the count indicator in bits.
        width: usize,
        /// Mode whose indicator overflowed.
        mode: Mode,
    },

    /// Mask identifier outside 0-7.
    #[error("this mask is invalid ({0})")]
    InvalidMask(u8),

    /// Only size 21 / version 1 is supported.
    #[error("size must be 21 but got {size}; version must be 1 but got {version}")]
    InvalidSizeOrVersion {
        /// Requested matrix size.
        size: usize,
        /// Requested version.
        version: u8,
    },

    /// The bit sequence is longer than the room available for it.
    #[error("not all values could be written: {required} bits needed, {available} available")]
    PlacementOverflow {
        /// Bits that had to be written.
        required: usize,
        /// Bits that could be written.
        available: usize,
    },

    /// Mode is known but has no encoder.
    #[error("{0:?} mode is not supported yet")]
    UnsupportedMode(Mode),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EncodeError>;
