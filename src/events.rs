//! Engine notifications consumed by the rendering collaborator.
//!
//! Each event describes a single observable change. Payloads are wire-ready
//! serde snapshots so consumers on a channel or socket can forward them
//! without re-encoding.

use serde::{Deserialize, Serialize};

use crate::types::{ColorId, MAX_PIECE_SIZE};

/// Snapshot of an upcoming piece's shape, for preview rendering.
///
/// `matrix` is the piece's bounding box embedded in the top-left corner of a
/// 4x4 grid; cells outside `0..size` are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiecePreview {
    pub size: usize,
    pub matrix: [[ColorId; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
}

/// A single engine notification.
///
/// `PointChanged` carries a hidden-row-adjusted `y` (internal row minus the
/// overhang height); consumers should ignore points with `y` outside the
/// visible range `0..=19`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    PointChanged { x: i32, y: i32, color: ColorId },
    ScoreChanged { score: u32 },
    LevelChanged { level: u32 },
    LinesChanged { lines: u32 },
    NextShapeGenerated { piece: PiecePreview },
    GameOver,
}

/// Destination for engine notifications.
///
/// Delivery is synchronous and must not fail; sinks that can lose their
/// consumer (channels) drop events silently.
pub trait EventSink {
    fn emit(&mut self, event: EngineEvent);
}

/// Collects events in order; the natural sink for tests.
impl EventSink for Vec<EngineEvent> {
    fn emit(&mut self, event: EngineEvent) {
        self.push(event);
    }
}

/// Forwards events to a threaded consumer. A disconnected receiver is not an
/// error: the game outliving its renderer just goes unobserved.
impl EventSink for std::sync::mpsc::Sender<EngineEvent> {
    fn emit(&mut self, event: EngineEvent) {
        let _ = self.send(event);
    }
}

/// Discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: EngineEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_changed_serializes_with_tag() {
        let event = EngineEvent::PointChanged { x: 4, y: -1, color: 3 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"point_changed","x":4,"y":-1,"color":3}"#);
    }

    #[test]
    fn test_game_over_round_trips() {
        let json = serde_json::to_string(&EngineEvent::GameOver).unwrap();
        let back: EngineEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EngineEvent::GameOver);
    }

    #[test]
    fn test_next_shape_payload_carries_matrix() {
        let piece = PiecePreview {
            size: 2,
            matrix: [[2, 2, 0, 0], [2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        };
        let json = serde_json::to_string(&EngineEvent::NextShapeGenerated { piece }).unwrap();
        let back: EngineEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EngineEvent::NextShapeGenerated { piece });
    }

    #[test]
    fn test_vec_sink_keeps_order() {
        let mut sink: Vec<EngineEvent> = Vec::new();
        sink.emit(EngineEvent::ScoreChanged { score: 40 });
        sink.emit(EngineEvent::LinesChanged { lines: 1 });
        assert_eq!(
            sink,
            vec![
                EngineEvent::ScoreChanged { score: 40 },
                EngineEvent::LinesChanged { lines: 1 }
            ]
        );
    }

    #[test]
    fn test_channel_sink_survives_disconnect() {
        let (tx, rx) = std::sync::mpsc::channel();
        drop(rx);
        let mut tx = tx;
        // Must not panic.
        tx.emit(EngineEvent::GameOver);
    }
}
