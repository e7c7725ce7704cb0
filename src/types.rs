//! Core types and constants shared across the engine
//! This module contains pure data types with no external dependencies

/// Field dimensions. Rows `0..HIDDEN_ROWS` are the hidden overhang above the
/// visible play area; notifications report rows shifted by `-HIDDEN_ROWS`.
pub const FIELD_WIDTH: usize = 10;
pub const FIELD_HEIGHT: usize = 23;
pub const HIDDEN_ROWS: usize = 3;
pub const VISIBLE_HEIGHT: usize = FIELD_HEIGHT - HIDDEN_ROWS;

/// Side length of the largest piece bounding box (the I piece).
pub const MAX_PIECE_SIZE: usize = 4;

/// Spawn anchor column for every piece.
pub const SPAWN_X: i32 = 4;

/// Cell content: 0 = empty, 1..=7 = color of a locked or drawn piece.
pub type ColorId = u8;

/// The empty cell value.
pub const EMPTY: ColorId = 0;

/// Highest valid color id (one per catalog shape).
pub const MAX_COLOR: ColorId = 7;

/// Soft drop runs the clock at one-eighth of the level interval.
pub const SOFT_DROP_DIVISOR: u32 = 8;

/// Hard drop collapses the interval to the minimum; the clock then fires
/// ticks back-to-back until the piece locks.
pub const HARD_DROP_INTERVAL_MS: u32 = 1;

/// Engine run states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Initial state, before the first game starts.
    Stopped,
    Running,
    Paused,
    /// Terminal until a new game starts.
    GameOver,
}

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for this direction
    pub fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_dx() {
        assert_eq!(Direction::Left.dx(), -1);
        assert_eq!(Direction::Right.dx(), 1);
    }

    #[test]
    fn test_field_dimensions() {
        assert_eq!(VISIBLE_HEIGHT, 20);
        assert!(HIDDEN_ROWS < FIELD_HEIGHT);
    }
}
