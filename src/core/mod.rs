//! Core module - the game rules, with no dependency on rendering or input
//!
//! Leaf-first: catalog (shape data), rng, piece, generator, field, validator,
//! scoring, and the engine that orchestrates them.

pub mod catalog;
pub mod engine;
pub mod field;
pub mod generator;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod validator;

// Re-export commonly used types
pub use engine::Engine;
pub use field::Field;
pub use generator::ShapeGenerator;
pub use piece::Piece;
