//! Piece module - a shape instance with its bounding box and field anchor
//!
//! A piece is a `size x size` color matrix plus the field coordinates of the
//! matrix's top-left corner. The matrix is stored inline in a fixed 4x4
//! array, so `Piece` is `Copy` and every piece-to-piece assignment (catalog
//! draw, generator advance, rotation candidate) is a deep copy by
//! construction - no two live pieces ever alias the same backing storage.

use crate::core::catalog::ShapeTemplate;
use crate::events::PiecePreview;
use crate::types::{ColorId, MAX_PIECE_SIZE, SPAWN_X};

/// An active or upcoming piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    size: usize,
    /// Field column of the bounding box's left edge. May be negative while
    /// every occupied cell is still in bounds.
    pub x: i32,
    /// Field row of the bounding box's top edge.
    pub y: i32,
    matrix: [[ColorId; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
}

impl Piece {
    /// Create a piece from a catalog template at its spawn anchor.
    ///
    /// The spawn row depends on the bounding-box size so that every shape's
    /// visual footprint sits at the same height in the hidden overhang.
    pub fn from_template(template: &ShapeTemplate) -> Self {
        let y = match template.size {
            3 => 1,
            2 => 2,
            _ => 0,
        };
        Piece {
            size: template.size,
            x: SPAWN_X,
            y,
            matrix: template.matrix,
        }
    }

    /// Bounding-box side length (2, 3, or 4).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Color at matrix position `(row, col)`; 0 for transparent cells.
    pub fn cell(&self, row: usize, col: usize) -> ColorId {
        self.matrix[row][col]
    }

    /// Whether the matrix cell `(row, col)` is occupied.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.matrix[row][col] != 0
    }

    /// Move the anchor. Validity is the caller's responsibility.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Occupied cells in field coordinates: `(row, col, color)`.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32, ColorId)> + '_ {
        let size = self.size;
        (0..size).flat_map(move |r| {
            (0..size).filter_map(move |c| {
                let color = self.matrix[r][c];
                (color != 0).then(|| (self.y + r as i32, self.x + c as i32, color))
            })
        })
    }

    /// Rotate the matrix anti-clockwise in place, one concentric ring at a
    /// time from the outermost inward. Rotation permutes cell positions and
    /// never changes the set of color ids.
    ///
    /// Callers rotate a copy and validate before committing; see
    /// [`crate::core::validator::is_rotate_valid`].
    pub fn rotate_anti_clockwise(&mut self) {
        let mut level = 0;
        let mut last = self.size - 1;
        while level < self.size / 2 {
            for i in ((level + 1)..=last).rev() {
                self.swap_cells((level, i), (last - i + level, level));
                self.swap_cells((level, i), (last, last - i + level));
                self.swap_cells((level, i), (i, last));
            }
            level += 1;
            last -= 1;
        }
    }

    fn swap_cells(&mut self, (r1, c1): (usize, usize), (r2, c2): (usize, usize)) {
        let tmp = self.matrix[r1][c1];
        self.matrix[r1][c1] = self.matrix[r2][c2];
        self.matrix[r2][c2] = tmp;
    }

    /// Shape snapshot for preview rendering.
    pub fn preview(&self) -> PiecePreview {
        PiecePreview {
            size: self.size,
            matrix: self.matrix,
        }
    }

    #[cfg(test)]
    pub fn from_parts(
        size: usize,
        x: i32,
        y: i32,
        matrix: [[ColorId; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
    ) -> Self {
        Piece { size, x, y, matrix }
    }
}
