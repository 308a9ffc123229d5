use std::sync::OnceLock;

use crate::models::{ECLevel, MaskPattern, Mode};

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse::<T>().ok())
}

fn parse_env_u32(name: &str, default: u32) -> u32 {
    parse_env(name).unwrap_or(default)
}

static DEFAULT_MASK: OnceLock<MaskPattern> = OnceLock::new();

/// `QR_MASK`, defaulting to pattern 4
pub fn default_mask() -> MaskPattern {
    *DEFAULT_MASK.get_or_init(|| {
        parse_env::<u8>("QR_MASK")
            .and_then(|id| MaskPattern::from_id(id).ok())
            .unwrap_or(MaskPattern::Pattern4)
    })
}

static DEFAULT_EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

/// `QR_EC_LEVEL` (L, M, Q or H), defaulting to L
pub fn default_ec_level() -> ECLevel {
    *DEFAULT_EC_LEVEL.get_or_init(|| parse_env("QR_EC_LEVEL").unwrap_or(ECLevel::L))
}

static DEFAULT_MODE: OnceLock<Mode> = OnceLock::new();

/// `QR_MODE`, defaulting to alphanumeric
pub fn default_mode() -> Mode {
    *DEFAULT_MODE.get_or_init(|| parse_env("QR_MODE").unwrap_or(Mode::Alphanumeric))
}

static PNG_SCALE: OnceLock<u32> = OnceLock::new();

/// `QR_PNG_SCALE`, pixels per module in PNG output
pub fn png_scale() -> u32 {
    *PNG_SCALE.get_or_init(|| parse_env_u32("QR_PNG_SCALE", 8).clamp(1, 64))
}

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// `QR_DEBUG` present in the environment
pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("QR_DEBUG").is_ok())
}

/// Per-encode settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Data mode
    pub mode: Mode,
    /// Error correction level (selects the codeword target)
    pub ec_level: ECLevel,
    /// Mask applied to every data module
    pub mask: MaskPattern,
}

impl EncoderConfig {
    /// Explicit settings, ignoring the environment
    pub fn new(mode: Mode, ec_level: ECLevel, mask: MaskPattern) -> Self {
        Self {
            mode,
            ec_level,
            mask,
        }
    }

    /// Defaults, overridden by `QR_MODE`, `QR_EC_LEVEL` and `QR_MASK`
    pub fn from_env() -> Self {
        Self::new(default_mode(), default_ec_level(), default_mask())
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::new(Mode::Alphanumeric, ECLevel::L, MaskPattern::Pattern4)
    }
}
