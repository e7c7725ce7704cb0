//! Scoring module - classic line-clear points, level derivation, speed table
//!
//! Points scale with `(level + 1)`; the level is derived from total lines
//! cleared; the tick interval is a step table over the level.

/// Points by number of rows cleared in one lock event (index = rows).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points for clearing `lines` rows at `level`.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines] * (level + 1)
}

/// Level is total lines cleared divided by 10 (integer division).
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / 10
}

/// Tick interval in milliseconds for a level. Monotonically non-increasing;
/// looked up on every level change and reapplied after every lock event to
/// undo temporary soft/hard-drop overrides.
pub fn interval_for_level(level: u32) -> u32 {
    match level {
        0 => 480,
        1 => 430,
        2 => 380,
        3 => 330,
        4 => 280,
        5 => 230,
        6 => 180,
        7 => 130,
        8 => 80,
        9 => 60,
        10..=12 => 50,
        13..=15 => 40,
        16..=18 => 30,
        19..=28 => 20,
        _ => 10,
    }
}
