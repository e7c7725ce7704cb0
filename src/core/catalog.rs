//! Piece catalog - the seven canonical shapes as color-id matrices
//!
//! Pure data. Each template is a `size x size` matrix embedded in the
//! top-left corner of a 4x4 grid: 0 is a transparent cell of the bounding
//! box, a nonzero value is an occupied cell carrying that shape's color id.
//! Every piece instance starts as a deep copy of one of these templates.

use crate::types::{ColorId, MAX_PIECE_SIZE};

/// Number of catalog entries.
pub const SHAPE_COUNT: usize = 7;

/// One canonical shape: bounding-box side length plus its color matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTemplate {
    pub size: usize,
    pub matrix: [[ColorId; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
}

/// The seven standard shapes: I, O, T, S, Z, J, L.
pub const CATALOG: [ShapeTemplate; SHAPE_COUNT] = [
    // I
    ShapeTemplate {
        size: 4,
        matrix: [
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [1, 1, 1, 1],
            [0, 0, 0, 0],
        ],
    },
    // O
    ShapeTemplate {
        size: 2,
        matrix: [
            [2, 2, 0, 0],
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ],
    },
    // T
    ShapeTemplate {
        size: 3,
        matrix: [
            [0, 0, 0, 0],
            [3, 3, 3, 0],
            [0, 3, 0, 0],
            [0, 0, 0, 0],
        ],
    },
    // S
    ShapeTemplate {
        size: 3,
        matrix: [
            [0, 0, 0, 0],
            [4, 4, 0, 0],
            [0, 4, 4, 0],
            [0, 0, 0, 0],
        ],
    },
    // Z
    ShapeTemplate {
        size: 3,
        matrix: [
            [0, 0, 0, 0],
            [0, 5, 5, 0],
            [5, 5, 0, 0],
            [0, 0, 0, 0],
        ],
    },
    // J
    ShapeTemplate {
        size: 3,
        matrix: [
            [0, 0, 0, 0],
            [6, 6, 6, 0],
            [0, 0, 6, 0],
            [0, 0, 0, 0],
        ],
    },
    // L
    ShapeTemplate {
        size: 3,
        matrix: [
            [0, 0, 0, 0],
            [7, 7, 7, 0],
            [7, 0, 0, 0],
            [0, 0, 0, 0],
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_COLOR;

    #[test]
    fn test_catalog_has_seven_shapes() {
        assert_eq!(CATALOG.len(), SHAPE_COUNT);
    }

    #[test]
    fn test_each_shape_has_a_distinct_color() {
        for (index, template) in CATALOG.iter().enumerate() {
            let expected = (index + 1) as ColorId;
            for row in &template.matrix {
                for &cell in row {
                    assert!(cell == 0 || cell == expected);
                }
            }
            assert!(expected <= MAX_COLOR);
        }
    }

    #[test]
    fn test_each_shape_occupies_four_cells() {
        for template in &CATALOG {
            let occupied: usize = template
                .matrix
                .iter()
                .flatten()
                .filter(|&&cell| cell != 0)
                .count();
            assert_eq!(occupied, 4);
        }
    }

    #[test]
    fn test_occupied_cells_stay_inside_bounding_box() {
        for template in &CATALOG {
            for (r, row) in template.matrix.iter().enumerate() {
                for (c, &cell) in row.iter().enumerate() {
                    if cell != 0 {
                        assert!(r < template.size && c < template.size);
                    }
                }
            }
        }
    }
}
