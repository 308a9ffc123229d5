/// Byte mode encoder (Mode 0100), 8 bits per character
use crate::encoder::bitstream::BitGroup;
use crate::error::{EncodeError, Result};
use crate::models::Mode;

/// Encodes ASCII text one byte per character
pub struct ByteEncoder;

impl ByteEncoder {
    /// Encode ASCII text one byte per character
    pub fn encode(text: &str) -> Result<Vec<BitGroup>> {
        text.chars()
            .enumerate()
            .map(|(position, c)| {
                if c.is_ascii() {
                    Ok(BitGroup::new(c as u16, 8))
                } else {
                    Err(EncodeError::InvalidCharacter {
                        character: c,
                        position,
                        mode: Mode::Byte,
                    })
                }
            })
            .collect()
    }
}
