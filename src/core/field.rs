//! Field module - the grid of locked cells
//!
//! A 10x23 grid of color ids in a flat array (row-major) for cache locality
//! and zero allocation. Rows 0..3 are the hidden overhang where pieces spawn;
//! rows 3..23 are visible. Indices are caller-validated: out-of-range access
//! is a programming error and panics, not a runtime condition.

use arrayvec::ArrayVec;

use crate::types::{ColorId, EMPTY, FIELD_HEIGHT, FIELD_WIDTH};

const FIELD_SIZE: usize = FIELD_WIDTH * FIELD_HEIGHT;

/// The playing field. Mutated only by drawing/locking piece cells and by
/// line-clear and shift operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [ColorId; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Field {
            cells: [EMPTY; FIELD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        debug_assert!(row < FIELD_HEIGHT && col < FIELD_WIDTH);
        row * FIELD_WIDTH + col
    }

    /// Color at `(row, col)`. Bounds are the caller's responsibility.
    pub fn get(&self, row: usize, col: usize) -> ColorId {
        self.cells[Self::index(row, col)]
    }

    /// Set `(row, col)` to `color`. Bounds are the caller's responsibility.
    pub fn set(&mut self, row: usize, col: usize, color: ColorId) {
        self.cells[Self::index(row, col)] = color;
    }

    /// Whether `(row, col)` holds a nonzero color.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col) != EMPTY
    }

    /// True iff every cell of `row` is nonzero.
    pub fn is_row_full(&self, row: usize) -> bool {
        let start = row * FIELD_WIDTH;
        self.cells[start..start + FIELD_WIDTH]
            .iter()
            .all(|&cell| cell != EMPTY)
    }

    /// Set every cell of `row` to empty.
    pub fn clear_row(&mut self, row: usize) {
        let start = row * FIELD_WIDTH;
        for cell in &mut self.cells[start..start + FIELD_WIDTH] {
            *cell = EMPTY;
        }
    }

    /// Compact everything above `cleared_row` downward by one: row r-1 is
    /// copied into r, r-2 into r-1, and so on. Row 0 keeps its previous
    /// content (it is hidden overhang and in practice empty).
    pub fn shift_down(&mut self, cleared_row: usize) {
        for row in (1..=cleared_row).rev() {
            let src = (row - 1) * FIELD_WIDTH;
            let dst = row * FIELD_WIDTH;
            self.cells.copy_within(src..src + FIELD_WIDTH, dst);
        }
    }

    /// Clear every full row and apply the shift rule, returning the cleared
    /// row indices in field order (top to bottom).
    ///
    /// Each cleared row's shift runs sequentially against the current,
    /// already partially shifted field, not a snapshot. At most four rows can
    /// complete in one lock event (a piece spans at most four rows).
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        for row in 0..FIELD_HEIGHT {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared.push(row);
            }
        }
        for &row in &cleared {
            self.shift_down(row);
        }
        cleared
    }

    /// Reset every cell to empty (new game).
    pub fn reset(&mut self) {
        self.cells = [EMPTY; FIELD_SIZE];
    }

    /// Row-major view of all cells, hidden rows included.
    pub fn cells(&self) -> &[ColorId] {
        &self.cells
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
