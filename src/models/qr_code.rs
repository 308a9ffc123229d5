use std::fmt;
use std::str::FromStr;

use super::ModuleMatrix;
use crate::error::{EncodeError, Result};

/// QR code version; only version 1 (21x21) can be encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version(u8);

impl Version {
    /// Version 1, the only supported symbol size
    pub const V1: Version = Version(1);

    /// Validate a size/version pair against the supported configuration
    pub fn from_size(size: usize, version: u8) -> Result<Self> {
        let candidate = Version(version);
        if version == 1 && candidate.size() == size {
            Ok(candidate)
        } else {
            Err(EncodeError::InvalidSizeOrVersion { size, version })
        }
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * (self.0 as usize) + 17
    }
}

/// Data encoding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Digits 0-9 (mode 0001)
    Numeric,
    /// 0-9, A-Z, space and $%*+-./: (mode 0010)
    Alphanumeric,
    /// 8-bit data (mode 0100)
    Byte,
    /// Shift JIS double-byte characters (mode 1000)
    Kanji,
}

impl Mode {
    /// 4-bit mode indicator
    pub fn indicator(&self) -> u8 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
            Mode::Kanji => 0b1000,
        }
    }

    pub(crate) fn table_index(&self) -> usize {
        match self {
            Mode::Numeric => 0,
            Mode::Alphanumeric => 1,
            Mode::Byte => 2,
            Mode::Kanji => 3,
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" | "number" => Ok(Mode::Numeric),
            "alphanumeric" | "alnum" => Ok(Mode::Alphanumeric),
            "byte" => Ok(Mode::Byte),
            "kanji" => Ok(Mode::Kanji),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// Raw 2-bit value
    pub fn bits(&self) -> u8 {
        *self as u8
    }

    /// Value written into the format cells (level XOR 0b10)
    pub fn format_bits(&self) -> u8 {
        self.bits() ^ 0b10
    }

    pub(crate) fn table_index(&self) -> usize {
        self.bits() as usize
    }
}

impl FromStr for ECLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ECLevel::L),
            "M" => Ok(ECLevel::M),
            "Q" => Ok(ECLevel::Q),
            "H" => Ok(ECLevel::H),
            other => Err(format!("unknown error correction level: {other}")),
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (x + y) % 2 == 0
    Pattern0 = 0,
    /// x % 2 == 0
    Pattern1 = 1,
    /// y % 3 == 0
    Pattern2 = 2,
    /// (x + y) % 3 == 0
    Pattern3 = 3,
    /// (x/2 + y/3) % 2 == 0
    Pattern4 = 4,
    /// (x*y)%2 + (x*y)%3 == 0
    Pattern5 = 5,
    /// ((x*y)%3 + x*y) % 2 == 0
    Pattern6 = 6,
    /// ((x*y)%3 + x + y) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight patterns in identifier order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its identifier, rejecting anything above 7
    pub fn from_id(id: u8) -> Result<Self> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or(EncodeError::InvalidMask(id))
    }

    /// Identifier 0-7
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Check if module at (x, y) is inverted by this pattern
    pub fn is_masked(&self, x: usize, y: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (x + y) % 2 == 0,
            MaskPattern::Pattern1 => x % 2 == 0,
            MaskPattern::Pattern2 => y % 3 == 0,
            MaskPattern::Pattern3 => (x + y) % 3 == 0,
            MaskPattern::Pattern4 => (x / 2 + y / 3) % 2 == 0,
            MaskPattern::Pattern5 => (x * y) % 2 + (x * y) % 3 == 0,
            MaskPattern::Pattern6 => ((x * y) % 3 + x * y) % 2 == 0,
            MaskPattern::Pattern7 => ((x * y) % 3 + x + y) % 2 == 0,
        }
    }
}

impl fmt::Display for MaskPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Encoded QR symbol, read-only once returned
#[derive(Debug, Clone)]
pub struct QRCode {
    version: Version,
    mode: Mode,
    error_correction: ECLevel,
    mask_pattern: MaskPattern,
    codewords: Vec<u8>,
    modules: ModuleMatrix,
}

impl QRCode {
    pub(crate) fn new(
        version: Version,
        mode: Mode,
        error_correction: ECLevel,
        mask_pattern: MaskPattern,
        codewords: Vec<u8>,
        modules: ModuleMatrix,
    ) -> Self {
        Self {
            version,
            mode,
            error_correction,
            mask_pattern,
            codewords,
            modules,
        }
    }

    /// QR code version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.size()
    }

    /// Mode the payload was encoded in
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Error correction level
    pub fn error_correction(&self) -> ECLevel {
        self.error_correction
    }

    /// Mask pattern applied to data modules
    pub fn mask_pattern(&self) -> MaskPattern {
        self.mask_pattern
    }

    /// Padded data codewords, including mode and count headers
    pub fn codewords(&self) -> &[u8] {
        &self.codewords
    }

    /// Module matrix (true = dark, false = light)
    pub fn modules(&self) -> &ModuleMatrix {
        &self.modules
    }
}
