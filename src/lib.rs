//! Rules engine for a falling-block puzzle game.
//!
//! This crate owns the playing-field state, the active/next piece, collision
//! and rotation validity, line clearing, scoring, and speed progression. It
//! has no opinion about rendering or input: an external clock drives
//! [`core::Engine::tick`], commands arrive through the engine's methods, and
//! every observable change is emitted as an [`events::EngineEvent`] through an
//! [`events::EventSink`].

pub mod clock;
pub mod core;
pub mod events;
pub mod types;

pub use crate::clock::{GameClock, TimeSource, WallClock};
pub use crate::core::{Engine, Field, Piece, ShapeGenerator};
pub use crate::events::{EngineEvent, EventSink, NullSink, PiecePreview};
pub use crate::types::{ColorId, Direction, RunState};
