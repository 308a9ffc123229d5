/// Compact square grid of QR modules (true = dark, false = light)
///
/// Coordinates are `(x, y)` with `x` the row (top to bottom) and `y` the
/// column (left to right).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    data: Vec<u8>,
}

impl ModuleMatrix {
    /// Create an all-light matrix of `size` x `size` modules
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size).div_ceil(8);
        Self {
            size,
            data: vec![0; bytes_needed],
        }
    }

    /// Get the side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether (x, y) lies inside the grid
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Get module at (x, y); out-of-bounds reads are light
    pub fn get(&self, x: usize, y: usize) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let (byte_index, bit_index) = self.locate(x, y);
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Set module at (x, y); out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if !self.in_bounds(x, y) {
            return;
        }
        let (byte_index, bit_index) = self.locate(x, y);
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Iterate rows top to bottom, each as a vector of modules
    pub fn rows(&self) -> impl Iterator<Item = Vec<bool>> + '_ {
        (0..self.size).map(move |x| (0..self.size).map(|y| self.get(x, y)).collect())
    }

    /// Count dark modules
    pub fn dark_count(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    fn locate(&self, x: usize, y: usize) -> (usize, usize) {
        let index = x * self.size + y;
        (index / 8, index % 8)
    }
}

impl Default for ModuleMatrix {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_matrix() {
        let mut matrix = ModuleMatrix::new(21);
        assert_eq!(matrix.size(), 21);
        assert_eq!(matrix.dark_count(), 0);

        matrix.set(3, 4, true);
        assert!(matrix.get(3, 4));
        assert!(!matrix.get(4, 3));
        assert_eq!(matrix.dark_count(), 1);

        matrix.set(3, 4, false);
        assert!(!matrix.get(3, 4));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut matrix = ModuleMatrix::new(21);
        matrix.set(21, 0, true); // Should not panic
        matrix.set(0, 21, true);
        assert!(!matrix.get(21, 0));
        assert!(!matrix.in_bounds(0, 21));
        assert_eq!(matrix.dark_count(), 0);
    }

    #[test]
    fn test_rows_are_row_major() {
        let mut matrix = ModuleMatrix::new(3);
        matrix.set(0, 2, true);
        let rows: Vec<Vec<bool>> = matrix.rows().collect();
        assert_eq!(rows[0], vec![false, false, true]);
        assert_eq!(rows[2], vec![false, false, false]);
    }
}
