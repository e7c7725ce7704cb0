//! Engine module - the tick state machine
//!
//! Owns the field and the generator, runs one gravity step per tick, and
//! performs locking, line clearing, scoring, leveling, and speed control.
//! Every observable change is pushed through the engine's [`EventSink`].
//!
//! Between ticks the active piece's footprint is provisionally drawn into
//! the field (that is what the renderer sees); a tick starts by erasing it,
//! decides whether the piece falls or locks, and redraws. The redraw on the
//! lock branch is the moment the cells become permanent field content.

use crate::core::field::Field;
use crate::core::generator::ShapeGenerator;
use crate::core::piece::Piece;
use crate::core::scoring::{interval_for_level, level_for_lines, line_clear_points};
use crate::core::validator::{can_move_down, can_move_horizontal, can_spawn, is_rotate_valid};
use crate::events::{EngineEvent, EventSink};
use crate::types::{
    ColorId, Direction, RunState, EMPTY, FIELD_HEIGHT, FIELD_WIDTH, HARD_DROP_INTERVAL_MS,
    HIDDEN_ROWS, SOFT_DROP_DIVISOR,
};

/// The game engine. Created once; `start_new_game` resets the session state
/// while the generator (and its last-shape memory) lives on.
#[derive(Debug)]
pub struct Engine<S: EventSink> {
    field: Field,
    generator: ShapeGenerator,
    score: u32,
    level: u32,
    lines_cleared: u32,
    /// Level-derived interval, the authoritative speed.
    speed_ms: u32,
    /// Effective tick interval; soft/hard drop override it temporarily.
    interval_ms: u32,
    state: RunState,
    sink: S,
}

impl<S: EventSink> Engine<S> {
    /// Create an engine with a seeded generator and an event sink.
    pub fn new(seed: u32, sink: S) -> Self {
        let speed = interval_for_level(0);
        Engine {
            field: Field::new(),
            generator: ShapeGenerator::new(seed),
            score: 0,
            level: 0,
            lines_cleared: 0,
            speed_ms: speed,
            interval_ms: speed,
            state: RunState::Stopped,
            sink,
        }
    }

    // ---- lifecycle -------------------------------------------------------

    /// Reset the session and enter `Running`.
    ///
    /// The generator advances (the previous look-ahead becomes the active
    /// piece), the new look-ahead is announced, and a full-field redraw is
    /// emitted before the clock starts.
    pub fn start_new_game(&mut self, start_level: u32) {
        self.level = start_level;
        self.score = 0;
        self.lines_cleared = 0;
        self.speed_ms = interval_for_level(self.level);
        self.interval_ms = self.speed_ms;
        self.field.reset();
        self.generator.advance();
        let piece = self.generator.next().preview();
        self.sink.emit(EngineEvent::NextShapeGenerated { piece });
        self.draw_field();
        self.state = RunState::Running;
    }

    /// Stop the clock without touching any other state. Idempotent.
    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
        }
    }

    /// Restart the clock. Idempotent; does nothing after game over.
    pub fn resume(&mut self) {
        if self.state == RunState::Paused {
            self.state = RunState::Running;
        }
    }

    // ---- tick ------------------------------------------------------------

    /// One step of the state machine, invoked by the external clock while
    /// `Running`.
    ///
    /// Either the piece falls one row, or it locks: full rows are cleared
    /// and scored, the whole field is re-announced, the speed override (if
    /// any) is lifted, and the next piece enters unless its spawn cells are
    /// blocked - which ends the game.
    pub fn tick(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        self.erase_piece();
        if can_move_down(self.generator.current(), &self.field) {
            self.generator.current_mut().translate(0, 1);
            self.draw_piece();
            return;
        }
        // Landed: this redraw is the lock.
        self.draw_piece();
        self.check_lines();
        self.draw_field();
        self.interval_ms = self.speed_ms;
        if !can_spawn(self.generator.next(), &self.field) {
            self.state = RunState::GameOver;
            self.sink.emit(EngineEvent::GameOver);
            return;
        }
        self.generator.advance();
        let piece = self.generator.next().preview();
        self.sink.emit(EngineEvent::NextShapeGenerated { piece });
    }

    // ---- commands --------------------------------------------------------

    pub fn move_left(&mut self) {
        self.move_horizontal(Direction::Left);
    }

    pub fn move_right(&mut self) {
        self.move_horizontal(Direction::Right);
    }

    fn move_horizontal(&mut self, direction: Direction) {
        if self.state != RunState::Running {
            return;
        }
        // Validated against the field with the piece's own footprint still
        // drawn in; a blocked move is a silent no-op.
        if can_move_horizontal(self.generator.current(), &self.field, direction) {
            self.erase_piece();
            self.generator.current_mut().translate(direction.dx(), 0);
            self.draw_piece();
        }
    }

    /// Rotate the active piece anti-clockwise if the rotated position is
    /// legal. A rejected rotation leaves the piece unchanged but still
    /// erases and redraws to restore the visible footprint.
    pub fn rotate_anti_clockwise(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        self.erase_piece();
        let mut candidate = *self.generator.current();
        candidate.rotate_anti_clockwise();
        if is_rotate_valid(&candidate, &self.field) {
            self.generator.set_current(candidate);
        }
        self.draw_piece();
    }

    /// Soft drop: run the clock at one-eighth of the level interval and take
    /// one step immediately. The stored level interval is untouched;
    /// [`Engine::slow_down`] or the next lock restores it.
    pub fn speed_up(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        self.interval_ms = self.speed_ms / SOFT_DROP_DIVISOR;
        self.tick();
    }

    /// Restore the level-derived interval (soft-drop key released).
    pub fn slow_down(&mut self) {
        self.interval_ms = self.speed_ms;
    }

    /// Hard drop: collapse the interval to its minimum and take one step
    /// immediately. The piece still falls one row per tick; reaching the
    /// bottom is the clock firing back-to-back ticks at the minimal
    /// interval, not a bottom-seeking move.
    pub fn drop(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        self.interval_ms = HARD_DROP_INTERVAL_MS;
        self.tick();
    }

    // ---- accessors -------------------------------------------------------

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Effective tick interval for the external clock.
    pub fn tick_interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn current_piece(&self) -> &Piece {
        self.generator.current()
    }

    pub fn next_piece(&self) -> &Piece {
        self.generator.next()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    // ---- internals -------------------------------------------------------

    /// Remove the active piece's footprint from the field. Cells outside the
    /// grid (never produced by legal play) are skipped.
    fn erase_piece(&mut self) {
        let piece = *self.generator.current();
        for (row, col, _) in piece.occupied_cells() {
            if row < FIELD_HEIGHT as i32 && (0..FIELD_WIDTH as i32).contains(&col) {
                self.field.set(row as usize, col as usize, EMPTY);
                self.emit_point(row, col, EMPTY);
            }
        }
    }

    /// Draw the active piece's footprint into the field.
    fn draw_piece(&mut self) {
        let piece = *self.generator.current();
        for (row, col, color) in piece.occupied_cells() {
            self.field.set(row as usize, col as usize, color);
            self.emit_point(row, col, color);
        }
    }

    /// Announce every cell, hidden rows included; consumers drop adjusted
    /// rows outside the visible range.
    fn draw_field(&mut self) {
        for row in 0..FIELD_HEIGHT {
            for col in 0..FIELD_WIDTH {
                let color = self.field.get(row, col);
                self.emit_point(row as i32, col as i32, color);
            }
        }
    }

    fn emit_point(&mut self, row: i32, col: i32, color: ColorId) {
        self.sink.emit(EngineEvent::PointChanged {
            x: col,
            y: row - HIDDEN_ROWS as i32,
            color,
        });
    }

    /// Clear full rows, then score, count, and re-level. Score and lines
    /// notifications fire only when at least one row cleared; the level
    /// notification only when the derived level actually changed.
    fn check_lines(&mut self) {
        let cleared = self.field.clear_full_rows();
        let count = cleared.len();
        if count == 0 {
            return;
        }
        self.score += line_clear_points(count, self.level);
        self.sink.emit(EngineEvent::ScoreChanged { score: self.score });
        self.lines_cleared += count as u32;
        self.sink.emit(EngineEvent::LinesChanged {
            lines: self.lines_cleared,
        });
        let level = level_for_lines(self.lines_cleared);
        if level != self.level {
            self.level = level;
            self.speed_ms = interval_for_level(level);
            self.interval_ms = self.speed_ms;
            self.sink.emit(EngineEvent::LevelChanged { level });
        }
    }

    // ---- test support ----------------------------------------------------

    #[cfg(test)]
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    #[cfg(test)]
    pub fn set_current_piece(&mut self, piece: Piece) {
        self.generator.set_current(piece);
    }

    #[cfg(test)]
    pub fn set_next_piece(&mut self, piece: Piece) {
        self.generator.set_next(piece);
    }

    #[cfg(test)]
    pub fn set_lines_cleared(&mut self, lines: u32) {
        self.lines_cleared = lines;
    }
}
