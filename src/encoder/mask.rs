/// Mask engine: XOR data bits with one of the eight mask patterns
use crate::error::Result;
use crate::models::MaskPattern;

/// Apply mask `mask_id` to `bit` at (x, y)
///
/// Returns `!bit` where the pattern's predicate holds and `bit` elsewhere.
/// Fails with `InvalidMask` for identifiers above 7.
pub fn apply_mask(mask_id: u8, x: usize, y: usize, bit: bool) -> Result<bool> {
    let pattern = MaskPattern::from_id(mask_id)?;
    Ok(mask_bit(pattern, x, y, bit))
}

/// Infallible form for an already validated pattern
#[inline]
pub fn mask_bit(pattern: MaskPattern, x: usize, y: usize, bit: bool) -> bool {
    bit ^ pattern.is_masked(x, y)
}
