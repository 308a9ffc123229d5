//! Codeword assembly
//!
//! Prefixes the mode indicator and character-count indicator, appends the
//! terminator, byte-aligns, and fills the remaining data capacity with the
//! alternating pad codewords.

use tracing::trace;

use crate::encoder::bitstream::{BitBuffer, flatten};
use crate::encoder::modes::encode_segment;
use crate::encoder::tables::EncodingTables;
use crate::error::{EncodeError, Result};
use crate::models::{ECLevel, Mode};

/// Zero bits closing the data stream in version 1-9 symbols
pub const TERMINATOR_BITS: usize = 4;

/// Alternating pad codewords, starting with 0xEC
pub const PAD_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];

/// Width of the mode indicator
pub const MODE_INDICATOR_BITS: usize = 4;

/// Append up to `length` terminator zeros
pub fn append_terminating_bits(bits: &mut BitBuffer, length: usize) {
    for _ in 0..length {
        bits.push(false);
    }
}

/// Packs an encoded segment into the data codewords of a version 1 symbol
pub struct CodewordAssembler<'a> {
    tables: &'a EncodingTables,
}

impl<'a> CodewordAssembler<'a> {
    /// Assembler reading widths and targets from `tables`
    pub fn new(tables: &'a EncodingTables) -> Self {
        Self { tables }
    }

    /// Mode indicator followed by the character-count indicator
    ///
    /// Fails with `LengthOverflow` if `char_count` does not fit the
    /// indicator width of `mode`.
    pub fn header(&self, mode: Mode, char_count: usize) -> Result<BitBuffer> {
        let width = self.tables.char_count_bits(mode);
        if char_count >= 1usize << width {
            return Err(EncodeError::LengthOverflow {
                count: char_count,
                width,
                mode,
            });
        }
        let mut header = BitBuffer::new();
        header.push_bits(mode.indicator() as u32, MODE_INDICATOR_BITS);
        header.push_bits(char_count as u32, width);
        Ok(header)
    }

    /// Number of bits the data codewords of `level` can hold
    pub fn capacity_bits(&self, level: ECLevel) -> usize {
        self.tables.data_codewords(level) * 8
    }

    /// Assemble `data_bits` (already encoded in `mode`) into codewords
    pub fn assemble(
        &self,
        data_bits: &[bool],
        mode: Mode,
        char_count: usize,
        level: ECLevel,
    ) -> Result<Vec<u8>> {
        let mut bits = self.header(mode, char_count)?;
        let capacity = self.capacity_bits(level);
        let required = bits.len() + data_bits.len();
        if required > capacity {
            return Err(EncodeError::PlacementOverflow {
                required,
                available: capacity,
            });
        }

        bits.extend_from_slice(data_bits);
        let room = capacity - bits.len();
        append_terminating_bits(&mut bits, TERMINATOR_BITS.min(room));
        let used_bits = bits.len();

        let mut codewords = bits.into_codewords();
        let target = self.tables.data_codewords(level);
        let data_len = codewords.len();
        codewords.extend(PAD_CODEWORDS.iter().cycle().take(target - data_len));

        trace!(
            ?mode,
            ?level,
            used_bits,
            data_codewords = data_len,
            pad_codewords = target - data_len,
            "assembled codewords"
        );
        Ok(codewords)
    }
}

/// Encode `text` in `mode` and assemble the padded codewords for `level`
pub fn assemble_codewords(
    text: &str,
    mode: Mode,
    level: ECLevel,
    tables: &EncodingTables,
) -> Result<Vec<u8>> {
    let groups = encode_segment(text, mode, tables)?;
    CodewordAssembler::new(tables).assemble(&flatten(&groups), mode, text.chars().count(), level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::standard_tables;

    #[test]
    fn test_golden_codewords_level_h() {
        let codewords =
            assemble_codewords("ABCDE123", Mode::Alphanumeric, ECLevel::H, standard_tables())
                .unwrap();
        assert_eq!(
            codewords,
            vec![0x20, 0x41, 0xCD, 0x45, 0x29, 0xDC, 0x2E, 0x80, 0xEC]
        );
    }

    #[test]
    fn test_padding_alternates_up_to_target() {
        let codewords =
            assemble_codewords("ABCDE123", Mode::Alphanumeric, ECLevel::L, standard_tables())
                .unwrap();
        assert_eq!(codewords.len(), 19);
        assert_eq!(&codewords[..8], &[0x20, 0x41, 0xCD, 0x45, 0x29, 0xDC, 0x2E, 0x80]);
        for (i, &codeword) in codewords[8..].iter().enumerate() {
            assert_eq!(codeword, PAD_CODEWORDS[i % 2]);
        }
    }

    #[test]
    fn test_terminator_appended() {
        let groups = encode_segment("ABCDE123", Mode::Alphanumeric, standard_tables()).unwrap();
        let mut bits = BitBuffer::new();
        bits.extend_from_slice(&flatten(&groups));
        append_terminating_bits(&mut bits, TERMINATOR_BITS);
        assert_eq!(bits.len(), 48);
        assert!(bits.as_slice()[44..].iter().all(|&b| !b));
    }

    #[test]
    fn test_header_layout() {
        let assembler = CodewordAssembler::new(standard_tables());
        let header = assembler.header(Mode::Alphanumeric, 8).unwrap();
        let expected: Vec<bool> = "0010000001000".chars().map(|c| c == '1').collect();
        assert_eq!(header.as_slice(), expected.as_slice());

        let header = assembler.header(Mode::Byte, 2).unwrap();
        assert_eq!(header.len(), 12);
    }

    #[test]
    fn test_length_overflow_checked_first() {
        let assembler = CodewordAssembler::new(standard_tables());
        assert_eq!(
            assembler.header(Mode::Byte, 256).unwrap_err(),
            EncodeError::LengthOverflow {
                count: 256,
                width: 8,
                mode: Mode::Byte,
            }
        );
        assert!(assembler.header(Mode::Alphanumeric, 511).is_ok());
        assert!(assembler.header(Mode::Alphanumeric, 512).is_err());

        // Overflow wins even when the data would not fit either
        let err = assembler
            .assemble(&[false; 4096], Mode::Byte, 512, ECLevel::L)
            .unwrap_err();
        assert!(matches!(err, EncodeError::LengthOverflow { .. }));
    }

    #[test]
    fn test_capacity_boundary() {
        let tables = standard_tables();
        let cases = [
            (ECLevel::L, 25),
            (ECLevel::M, 20),
            (ECLevel::Q, 16),
            (ECLevel::H, 10),
        ];
        for (level, max_chars) in cases {
            let fits = "A".repeat(max_chars);
            let codewords = assemble_codewords(&fits, Mode::Alphanumeric, level, tables).unwrap();
            assert_eq!(codewords.len(), tables.data_codewords(level));

            let too_long = "A".repeat(max_chars + 1);
            let err = assemble_codewords(&too_long, Mode::Alphanumeric, level, tables).unwrap_err();
            assert!(
                matches!(err, EncodeError::PlacementOverflow { .. }),
                "{level:?}: {err:?}"
            );
        }
    }

    #[test]
    fn test_terminator_shrinks_to_remaining_room() {
        let assembler = CodewordAssembler::new(standard_tables());
        // 25 characters at L: 13 header + 138 data bits leave 1 bit of room
        let groups = encode_segment(&"A".repeat(25), Mode::Alphanumeric, standard_tables()).unwrap();
        let data_bits = flatten(&groups);
        assert_eq!(data_bits.len(), 138);

        let codewords = assembler
            .assemble(&data_bits, Mode::Alphanumeric, 25, ECLevel::L)
            .unwrap();
        assert_eq!(codewords.len(), 19);
        // No pad codewords: the tail 'A' (001010) and one terminator zero close the last byte
        assert_eq!(&codewords[..2], &[0x20, 0xC9]);
        assert_eq!(&codewords[16..], &[0x30, 0xE6, 0x14]);
    }

    #[test]
    fn test_byte_mode_codewords() {
        // 0100 | 00000010 | 01001000 | 01001001 | 0000 -> 32 bits
        let codewords = assemble_codewords("HI", Mode::Byte, ECLevel::H, standard_tables()).unwrap();
        assert_eq!(
            codewords,
            vec![0x40, 0x24, 0x84, 0x90, 0xEC, 0x11, 0xEC, 0x11, 0xEC]
        );
    }
}
