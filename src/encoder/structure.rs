//! Structural initialization of a fresh symbol
//!
//! Writes everything that is not data: the three finder patterns, the
//! timing lines, the dark module, the mode cell and the format cells.
//! Format bits are raw (level XOR 0b10, then the mask id), without BCH
//! protection.

use tracing::trace;

use crate::encoder::function_mask::{FORMAT_LINE, MODE_AREA, TIMING_LINE};
use crate::models::{ECLevel, MaskPattern, Mode, ModuleMatrix};

/// Side of a finder pattern
pub const FINDER_SIZE: usize = 7;

/// Build a matrix of `size` with all structural patterns in place
pub fn structured_matrix(size: usize, mode: Mode, level: ECLevel, mask: MaskPattern) -> ModuleMatrix {
    let mut matrix = ModuleMatrix::new(size);
    initialize(&mut matrix, mode, level, mask);
    matrix
}

/// Populate every non-data region of `matrix`
pub fn initialize(matrix: &mut ModuleMatrix, mode: Mode, level: ECLevel, mask: MaskPattern) {
    let size = matrix.size();

    add_finder_pattern(matrix, 0, 0); // Upper left
    add_finder_pattern(matrix, size - FINDER_SIZE, 0); // Lower left
    add_finder_pattern(matrix, 0, size - FINDER_SIZE); // Upper right

    add_timing_patterns(matrix);

    // Dark module
    matrix.set(size - 8, FORMAT_LINE, true);

    set_mode_cell(matrix, mode);
    set_format_cells(matrix, level, mask);

    trace!(
        size,
        ?mode,
        ?level,
        mask = mask.id(),
        dark = matrix.dark_count(),
        "structural patterns written"
    );
}

/// 7x7 finder: solid outer ring, light ring, solid 3x3 core
pub fn add_finder_pattern(matrix: &mut ModuleMatrix, x: usize, y: usize) {
    for i in 0..FINDER_SIZE {
        matrix.set(x + i, y, true);
        matrix.set(x + i, y + FINDER_SIZE - 1, true);
        matrix.set(x, y + i, true);
        matrix.set(x + FINDER_SIZE - 1, y + i, true);
    }
    for row in 2..5 {
        for col in 2..5 {
            matrix.set(x + row, y + col, true);
        }
    }
}

/// Alternating modules along row 6 and column 6 between the finders
pub fn add_timing_patterns(matrix: &mut ModuleMatrix) {
    let size = matrix.size();
    for i in 8..size.saturating_sub(8) {
        matrix.set(TIMING_LINE, i, i % 2 == 0);
        matrix.set(i, TIMING_LINE, i % 2 == 0);
    }
}

/// Numeric mode is dark, every other mode light
pub fn set_mode_cell(matrix: &mut ModuleMatrix, mode: Mode) {
    let corner = matrix.size() - MODE_AREA;
    matrix.set(corner, corner, mode == Mode::Numeric);
}

/// Level bits in row 8 columns 0-1, mask id in columns 2-4 (MSB first),
/// then the fixed marks around the finders
pub fn set_format_cells(matrix: &mut ModuleMatrix, level: ECLevel, mask: MaskPattern) {
    let size = matrix.size();

    let level_bits = level.format_bits();
    matrix.set(FORMAT_LINE, 0, level_bits & 0b10 != 0);
    matrix.set(FORMAT_LINE, 1, level_bits & 0b01 != 0);

    let mask_bits = mask.id();
    matrix.set(FORMAT_LINE, 2, mask_bits & 0b100 != 0);
    matrix.set(FORMAT_LINE, 3, mask_bits & 0b010 != 0);
    matrix.set(FORMAT_LINE, 4, mask_bits & 0b001 != 0);

    let marks = [
        // upper left: below and right of the finder
        (FORMAT_LINE, 7),
        (0, FORMAT_LINE),
        (2, FORMAT_LINE),
        (5, FORMAT_LINE),
        // upper right
        (FORMAT_LINE, size - 1),
        (FORMAT_LINE, size - 3),
        (FORMAT_LINE, size - 6),
        // lower left
        (size - 1, FORMAT_LINE),
        (size - 3, FORMAT_LINE),
        (size - 7, FORMAT_LINE),
    ];
    for (x, y) in marks {
        matrix.set(x, y, true);
    }
}
