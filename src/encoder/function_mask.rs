/// Reserved (function) regions of a version 1 symbol.
///
/// Membership is a pure function of the coordinates so that structural
/// initialization and data placement can never disagree about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionMask {
    size: usize,
}

/// Side of the box around each finder pattern (7x7 finder, separator, format strip)
const FINDER_BOX: usize = 9;

/// Row and column carrying the timing patterns
pub const TIMING_LINE: usize = 6;

/// Row and column carrying the format cells
pub const FORMAT_LINE: usize = 8;

/// Side of the bottom-right mode-indicator area
pub const MODE_AREA: usize = 2;

impl FunctionMask {
    /// Predicate for a `size` x `size` symbol
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Side of the symbol in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// True for finder boxes, timing and format lines and the mode area.
    /// Coordinates outside the matrix are never reserved.
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        is_reserved(self.size, x, y)
    }

    /// Coordinates a data bit may be written to, row-major
    pub fn writable_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size)
            .flat_map(move |x| (0..self.size).map(move |y| (x, y)))
            .filter(move |&(x, y)| !self.is_function(x, y))
    }

    /// Number of writable cells (182 for version 1)
    pub fn data_modules_count(&self) -> usize {
        self.writable_cells().count()
    }
}

/// Reserved-region predicate for a `size` x `size` symbol
pub fn is_reserved(size: usize, x: usize, y: usize) -> bool {
    if x >= size || y >= size {
        return false;
    }
    let far = size.saturating_sub(FINDER_BOX);

    // Upper left, lower left, upper right finder boxes
    if x < FINDER_BOX && y < FINDER_BOX {
        return true;
    }
    if x >= far && y < FINDER_BOX {
        return true;
    }
    if x < FINDER_BOX && y >= far {
        return true;
    }

    if x == FORMAT_LINE || y == FORMAT_LINE || x == TIMING_LINE || y == TIMING_LINE {
        return true;
    }

    x >= size - MODE_AREA && y >= size - MODE_AREA
}
