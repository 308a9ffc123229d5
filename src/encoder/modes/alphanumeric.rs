/// Alphanumeric mode encoder (Mode 0010)
/// Pairs = 11 bits, single trailing character = 6 bits
use crate::encoder::bitstream::BitGroup;
use crate::encoder::tables::EncodingTables;
use crate::error::{EncodeError, Result};
use crate::models::Mode;

/// Encodes text over the 45-character alphanumeric alphabet
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// "AB" -> 45 * 10 + 11 = 461 -> 0b00111001101
    pub fn encode_pair(v1: u8, v2: u8) -> BitGroup {
        BitGroup::new(v1 as u16 * 45 + v2 as u16, 11)
    }

    /// Lone trailing character: its alphabet index in 6 bits
    pub fn encode_single(value: u8) -> BitGroup {
        BitGroup::new(value as u16, 6)
    }

    /// Encode two characters, looking both up in the alphabet
    pub fn encode_char_pair(c1: char, c2: char, tables: &EncodingTables) -> Result<BitGroup> {
        let v1 = Self::value_of(c1, 0, tables)?;
        let v2 = Self::value_of(c2, 1, tables)?;
        Ok(Self::encode_pair(v1, v2))
    }

    /// Encode a whole string; any character outside the alphabet fails the call
    pub fn encode(text: &str, tables: &EncodingTables) -> Result<Vec<BitGroup>> {
        let values = text
            .chars()
            .enumerate()
            .map(|(position, c)| Self::value_of(c, position, tables))
            .collect::<Result<Vec<u8>>>()?;

        let mut groups = Vec::with_capacity(values.len().div_ceil(2));
        let mut pairs = values.chunks_exact(2);
        for pair in pairs.by_ref() {
            groups.push(Self::encode_pair(pair[0], pair[1]));
        }
        if let [last] = pairs.remainder() {
            groups.push(Self::encode_single(*last));
        }
        Ok(groups)
    }

    fn value_of(c: char, position: usize, tables: &EncodingTables) -> Result<u8> {
        tables
            .alphanumeric_value(c)
            .ok_or(EncodeError::InvalidCharacter {
                character: c,
                position,
                mode: Mode::Alphanumeric,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::bitstream::flatten;
    use crate::encoder::tables::{ALPHANUMERIC_TABLE, standard_tables};
    use proptest::prelude::*;

    fn bits_of(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_encode_pairs() {
        let tables = standard_tables();
        let cases = [
            ('A', 'B', "00111001101"),
            ('C', 'D', "01000101001"),
            ('E', '1', "01001110111"),
            ('2', '3', "00001011101"),
        ];
        for (c1, c2, expected) in cases {
            let group = AlphanumericEncoder::encode_char_pair(c1, c2, tables).unwrap();
            assert_eq!(group.width, 11);
            assert_eq!(group.bits().collect::<Vec<_>>(), bits_of(expected));
        }
        assert_eq!(AlphanumericEncoder::encode_pair(10, 11).value, 461);
    }

    #[test]
    fn test_encode_string() {
        let groups = AlphanumericEncoder::encode("ABCDE123", standard_tables()).unwrap();
        assert_eq!(groups.len(), 4);
        let bits = flatten(&groups);
        assert_eq!(bits.len(), 44);
        let expected = bits_of(concat!(
            "00111001101",
            "01000101001",
            "01001110111",
            "00001011101"
        ));
        assert_eq!(bits, expected);
    }

    #[test]
    fn test_odd_length_tail_is_six_bits() {
        let groups = AlphanumericEncoder::encode("AC-42", standard_tables()).unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[2], BitGroup::new(2, 6));
        assert_eq!(flatten(&groups).len(), 28);
    }

    #[test]
    fn test_invalid_character() {
        let err = AlphanumericEncoder::encode("AB#D", standard_tables()).unwrap_err();
        assert_eq!(
            err,
            EncodeError::InvalidCharacter {
                character: '#',
                position: 2,
                mode: Mode::Alphanumeric,
            }
        );

        // A lone trailing character is validated too
        assert!(AlphanumericEncoder::encode("ABc", standard_tables()).is_err());
    }

    #[test]
    fn test_empty_input() {
        let groups = AlphanumericEncoder::encode("", standard_tables()).unwrap();
        assert!(groups.is_empty());
    }

    proptest! {
        #[test]
        fn test_pair_value_law(i1 in 0usize..45, i2 in 0usize..45) {
            let (c1, c2) = (ALPHANUMERIC_TABLE[i1], ALPHANUMERIC_TABLE[i2]);
            let group = AlphanumericEncoder::encode_char_pair(c1, c2, standard_tables()).unwrap();
            prop_assert_eq!(group.value as usize, 45 * i1 + i2);
            prop_assert_eq!(group.width, 11);
        }
    }
}
