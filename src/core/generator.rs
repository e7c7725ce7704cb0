//! Generator module - produces the active piece and the look-ahead piece
//!
//! Selection is uniform over the catalog with a single-resample bias against
//! immediate repeats: if the draw equals the previous final choice it is
//! redrawn exactly once, so a repeat can still occur with probability 1/7.
//! This is deliberately not a fair 7-bag randomizer.

use crate::core::catalog::{CATALOG, SHAPE_COUNT};
use crate::core::piece::Piece;
use crate::core::rng::SimpleRng;

/// Owns `current`, `next`, and the repeat-avoidance memory.
///
/// One generator lives for the whole engine lifetime: its RNG state and
/// last-shape memory persist across games unless the generator itself is
/// re-created.
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    rng: SimpleRng,
    last_shape: Option<usize>,
    current: Piece,
    next: Piece,
}

impl ShapeGenerator {
    /// Create a generator and draw the initial current/next pair.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut last_shape = None;
        let current = Self::generate(&mut rng, &mut last_shape);
        let next = Self::generate(&mut rng, &mut last_shape);
        ShapeGenerator {
            rng,
            last_shape,
            current,
            next,
        }
    }

    fn generate(rng: &mut SimpleRng, last_shape: &mut Option<usize>) -> Piece {
        let mut index = rng.next_range(SHAPE_COUNT as u32) as usize;
        if Some(index) == *last_shape {
            // Exactly one resample; an immediate repeat is still possible.
            index = rng.next_range(SHAPE_COUNT as u32) as usize;
        }
        *last_shape = Some(index);
        Piece::from_template(&CATALOG[index])
    }

    /// Promote `next` to `current` (a deep copy, spawn position included)
    /// and draw a fresh `next`.
    pub fn advance(&mut self) {
        self.current = self.next;
        self.next = Self::generate(&mut self.rng, &mut self.last_shape);
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Piece {
        &mut self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    /// Replace the active piece with a validated candidate (rotation commit).
    pub fn set_current(&mut self, piece: Piece) {
        self.current = piece;
    }

    #[cfg(test)]
    pub fn set_next(&mut self, piece: Piece) {
        self.next = piece;
    }
}
