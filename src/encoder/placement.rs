//! Zigzag placement of data bits
//!
//! Bits fill the matrix along a serpentine over column pairs, starting at
//! the bottom right. Inside a pair the walk alternates right column, left
//! column; after the left column it moves one row up (or down) and back to
//! the right column. At the top or bottom edge it shifts to the next pair
//! on the left and reverses direction. Reserved cells are skipped.
//!
//! Right columns have even indices (20/19, 18/17, ... 2/1), which leaves
//! column 0 as a single-column pair in a 21-module symbol.

use tracing::trace;

use crate::encoder::function_mask::FunctionMask;
use crate::encoder::mask::mask_bit;
use crate::error::{EncodeError, Result};
use crate::models::{MaskPattern, ModuleMatrix};

/// Vertical direction of the walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Towards the last row
    Down,
}

impl Direction {
    /// Opposite direction
    pub fn flipped(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Position and direction of the walk, returned by one placement call and
/// passed to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Row
    pub x: usize,
    /// Column
    pub y: usize,
    /// Current direction
    pub direction: Direction,
}

impl Cursor {
    /// Cursor at row `x`, column `y`
    pub fn new(x: usize, y: usize, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    /// First cell after the mode area: (size - 3, size - 1), moving up
    pub fn after_mode_area(size: usize) -> Self {
        Self::new(size - 3, size - 1, Direction::Up)
    }

    /// Next position on the serpentine, reserved or not; `None` once the
    /// last column has been walked
    pub fn advance(self, size: usize) -> Option<Cursor> {
        let Cursor { x, y, direction } = self;

        // Right column of a pair: step left
        if y % 2 == 0 && y > 0 {
            return Some(Cursor::new(x, y - 1, direction));
        }

        let right = if y % 2 == 0 { y } else { y + 1 };
        let next_row = match direction {
            Direction::Up => x.checked_sub(1),
            Direction::Down => Some(x + 1).filter(|&row| row < size),
        };
        match next_row {
            Some(row) => Some(Cursor::new(row, right, direction)),
            None if right >= 2 => Some(Cursor::new(x, right - 2, direction.flipped())),
            None => None,
        }
    }
}

/// Writable cells in serpentine order from a starting cursor
pub struct ZigzagPath {
    next: Option<Cursor>,
    func: FunctionMask,
}

impl ZigzagPath {
    /// Walk from `start`; empty if `start` lies outside the matrix
    pub fn new(start: Cursor, func: FunctionMask) -> Self {
        let size = func.size();
        let next = (start.x < size && start.y < size).then_some(start);
        Self { next, func }
    }

    /// Raw position the walk would continue from, `None` if exhausted
    pub fn resume_point(&self) -> Option<Cursor> {
        self.next
    }
}

impl Iterator for ZigzagPath {
    type Item = Cursor;

    fn next(&mut self) -> Option<Cursor> {
        // Reserved cells are stepped over, never turned at: turning at the
        // timing and format lines would strand part of the 182 writable cells
        while let Some(cursor) = self.next {
            self.next = cursor.advance(self.func.size());
            if !self.func.is_function(cursor.x, cursor.y) {
                return Some(cursor);
            }
        }
        None
    }
}

/// Writes masked bits into the data region of a matrix
pub struct ZigzagPlacer<'m> {
    matrix: &'m mut ModuleMatrix,
    func: FunctionMask,
    mask: MaskPattern,
}

impl<'m> ZigzagPlacer<'m> {
    /// Placer writing into `matrix` with `mask` applied
    pub fn new(matrix: &'m mut ModuleMatrix, mask: MaskPattern) -> Self {
        let func = FunctionMask::new(matrix.size());
        Self { matrix, func, mask }
    }

    /// Write `bits` from `start` onwards and return where to continue
    ///
    /// Fails with `PlacementOverflow` if the walk runs out of writable cells
    /// first. Data cells written by an earlier call are overwritten if the
    /// walk revisits them, so chained calls must pass the returned cursor.
    /// If the final bit lands on the very last cell, that cell is returned.
    pub fn place(&mut self, start: Cursor, bits: &[bool]) -> Result<Cursor> {
        let mut path = ZigzagPath::new(start, self.func);
        let mut last = start;

        for (written, &bit) in bits.iter().enumerate() {
            let cell = path.next().ok_or(EncodeError::PlacementOverflow {
                required: bits.len(),
                available: written,
            })?;
            self.matrix
                .set(cell.x, cell.y, mask_bit(self.mask, cell.x, cell.y, bit));
            last = cell;
        }

        let end = path.resume_point().unwrap_or(last);
        trace!(?start, ?end, bits = bits.len(), "placed bits");
        Ok(end)
    }
}

/// Read `count` bits back along the same walk, removing the mask
pub fn read_zigzag(
    matrix: &ModuleMatrix,
    mask: MaskPattern,
    start: Cursor,
    count: usize,
) -> Result<Vec<bool>> {
    let path = ZigzagPath::new(start, FunctionMask::new(matrix.size()));
    let bits: Vec<bool> = path
        .take(count)
        .map(|cell| mask_bit(mask, cell.x, cell.y, matrix.get(cell.x, cell.y)))
        .collect();
    if bits.len() < count {
        return Err(EncodeError::PlacementOverflow {
            required: count,
            available: bits.len(),
        });
    }
    Ok(bits)
}
