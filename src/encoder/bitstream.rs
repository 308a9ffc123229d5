//! Append-only bit buffer and fixed-width bit groups

/// A value occupying a fixed number of bits, written MSB first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitGroup {
    /// Numeric value; only the low `width` bits are meaningful
    pub value: u16,
    /// Number of bits (at most 16)
    pub width: u8,
}

impl BitGroup {
    /// Create a group, masking `value` down to `width` bits
    pub fn new(value: u16, width: u8) -> Self {
        let width = width.min(16);
        let mask = if width == 16 {
            u16::MAX
        } else {
            (1u16 << width) - 1
        };
        Self {
            value: value & mask,
            width,
        }
    }

    /// Bits of the group, most significant first
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.width).rev().map(|i| (self.value >> i) & 1 == 1)
    }
}

/// Flatten bit groups into a single MSB-first bit sequence
pub fn flatten(groups: &[BitGroup]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(groups.iter().map(|g| g.width as usize).sum());
    for group in groups {
        bits.extend(group.bits());
    }
    bits
}

/// Ordered, append-only sequence of bits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `count` bits of `value`, MSB first
    pub fn push_bits(&mut self, value: u32, count: usize) {
        for i in (0..count).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    /// Append a single bit
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append a sequence of bits
    pub fn extend_from_slice(&mut self, bits: &[bool]) {
        self.bits.extend_from_slice(bits);
    }

    /// Number of bits written so far
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if no bits were written
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// View the bits
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Zero-pad up to the next multiple of 8 and pack into bytes
    pub fn into_codewords(mut self) -> Vec<u8> {
        while self.bits.len() % 8 != 0 {
            self.bits.push(false);
        }
        bits_to_codewords(&self.bits)
    }
}

/// Pack bits into bytes, MSB first; a trailing partial byte is dropped
pub fn bits_to_codewords(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | bit as u8))
        .collect()
}

/// Expand bytes into bits, MSB first
pub fn codewords_to_bits(codewords: &[u8]) -> Vec<bool> {
    let mut buffer = BitBuffer::new();
    for &codeword in codewords {
        buffer.push_bits(codeword as u32, 8);
    }
    buffer.bits
}
