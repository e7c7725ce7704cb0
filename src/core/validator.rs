//! Validator module - pure movement, rotation, and spawn predicates
//!
//! All predicates scan only the occupied cells of the piece's bounding box;
//! transparent cells never contribute. None of them mutate anything: the
//! engine erases, moves, and redraws only after a predicate approves.

use crate::core::field::Field;
use crate::core::piece::Piece;
use crate::types::{Direction, FIELD_HEIGHT, FIELD_WIDTH};

/// True iff every occupied cell of `piece` at its spawn position maps to an
/// empty field cell. A false result means the upcoming piece cannot enter
/// the field: game over.
pub fn can_spawn(piece: &Piece, field: &Field) -> bool {
    piece
        .occupied_cells()
        .all(|(row, col, _)| !field.is_occupied(row as usize, col as usize))
}

/// True iff the piece can move down one row: no occupied cell may leave the
/// field's bottom or land on an occupied field cell.
///
/// The caller has already erased the piece's footprint from the field, so
/// there is no self-collision to account for here.
pub fn can_move_down(piece: &Piece, field: &Field) -> bool {
    let size = piece.size();
    for r in (0..size).rev() {
        for c in 0..size {
            if !piece.is_occupied(r, c) {
                continue;
            }
            let below = piece.y + r as i32 + 1;
            if below >= FIELD_HEIGHT as i32 {
                return false;
            }
            if field.is_occupied(below as usize, (piece.x + c as i32) as usize) {
                return false;
            }
        }
    }
    true
}

/// True iff the piece can move one column in `direction`.
///
/// Horizontal moves are validated while the piece's footprint is still drawn
/// into the field, so a nonzero destination cell is legal exactly when the
/// piece's own matrix occupies the corresponding cell one column over - the
/// piece sliding against its own footprint, not against locked content.
pub fn can_move_horizontal(piece: &Piece, field: &Field, direction: Direction) -> bool {
    let dx = direction.dx();
    let size = piece.size();
    for r in 0..size {
        for c in 0..size {
            if !piece.is_occupied(r, c) {
                continue;
            }
            let dest_col = piece.x + c as i32 + dx;
            if dest_col < 0 || dest_col >= FIELD_WIDTH as i32 {
                return false;
            }
            let row = (piece.y + r as i32) as usize;
            if field.is_occupied(row, dest_col as usize) {
                let neighbor = c as i32 + dx;
                if neighbor < 0 || neighbor >= size as i32 {
                    return false;
                }
                if !piece.is_occupied(r, neighbor as usize) {
                    return false;
                }
            }
        }
    }
    true
}

/// True iff every occupied cell of a rotation candidate lies within
/// horizontal bounds, above the field's bottom, and on an empty field cell.
/// Vertical overshoot into the hidden overhang is permitted.
///
/// The candidate is a working copy; the live piece's footprint has already
/// been erased from the field when this runs.
pub fn is_rotate_valid(piece: &Piece, field: &Field) -> bool {
    piece.occupied_cells().all(|(row, col, _)| {
        col >= 0
            && col < FIELD_WIDTH as i32
            && row < FIELD_HEIGHT as i32
            && !field.is_occupied(row as usize, col as usize)
    })
}
