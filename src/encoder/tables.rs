use std::sync::OnceLock;

use crate::models::{ECLevel, Mode};

/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
pub const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

// Index: Mode::table_index (numeric, alphanumeric, byte, kanji), versions 1-9.
const CHAR_COUNT_BITS: [usize; 4] = [10, 9, 8, 8];

// Index: ECLevel::table_index (L, M, Q, H), version 1.
const DATA_CODEWORDS: [usize; 4] = [19, 16, 13, 9];

/// Lookup tables consumed by the encoder, built once and passed in
#[derive(Debug, Clone)]
pub struct EncodingTables {
    alphanumeric_values: [Option<u8>; 128],
    char_count_bits: [usize; 4],
    data_codewords: [usize; 4],
}

impl EncodingTables {
    /// Build the version 1 tables
    pub fn new() -> Self {
        let mut alphanumeric_values = [None; 128];
        for (value, &c) in ALPHANUMERIC_TABLE.iter().enumerate() {
            alphanumeric_values[c as usize] = Some(value as u8);
        }
        Self {
            alphanumeric_values,
            char_count_bits: CHAR_COUNT_BITS,
            data_codewords: DATA_CODEWORDS,
        }
    }

    /// Value 0-44 of an alphanumeric character, `None` outside the alphabet
    pub fn alphanumeric_value(&self, c: char) -> Option<u8> {
        if c.is_ascii() {
            self.alphanumeric_values[c as usize]
        } else {
            None
        }
    }

    /// Width in bits of the character-count indicator for `mode`
    pub fn char_count_bits(&self, mode: Mode) -> usize {
        self.char_count_bits[mode.table_index()]
    }

    /// Number of data codewords a version 1 symbol holds at `level`
    pub fn data_codewords(&self, level: ECLevel) -> usize {
        self.data_codewords[level.table_index()]
    }
}

impl Default for EncodingTables {
    fn default() -> Self {
        Self::new()
    }
}

static STANDARD_TABLES: OnceLock<EncodingTables> = OnceLock::new();

/// Process-wide tables, built on first use
pub fn standard_tables() -> &'static EncodingTables {
    STANDARD_TABLES.get_or_init(EncodingTables::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_values() {
        let tables = EncodingTables::new();
        assert_eq!(tables.alphanumeric_value('0'), Some(0));
        assert_eq!(tables.alphanumeric_value('A'), Some(10));
        assert_eq!(tables.alphanumeric_value('Z'), Some(35));
        assert_eq!(tables.alphanumeric_value(' '), Some(36));
        assert_eq!(tables.alphanumeric_value(':'), Some(44));
        assert_eq!(tables.alphanumeric_value('a'), None);
        assert_eq!(tables.alphanumeric_value('#'), None);
        assert_eq!(tables.alphanumeric_value('é'), None);
    }

    #[test]
    fn test_widths_and_targets() {
        let tables = standard_tables();
        assert_eq!(tables.char_count_bits(Mode::Numeric), 10);
        assert_eq!(tables.char_count_bits(Mode::Alphanumeric), 9);
        assert_eq!(tables.char_count_bits(Mode::Byte), 8);
        assert_eq!(tables.char_count_bits(Mode::Kanji), 8);

        assert_eq!(tables.data_codewords(ECLevel::L), 19);
        assert_eq!(tables.data_codewords(ECLevel::M), 16);
        assert_eq!(tables.data_codewords(ECLevel::Q), 13);
        assert_eq!(tables.data_codewords(ECLevel::H), 9);
    }
}
