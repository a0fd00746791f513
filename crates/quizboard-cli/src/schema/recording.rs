use chrono::{DateTime, Utc};
use quizboard_engine::{ClueRecord, GameId, GameOutcome};
use serde::{Deserialize, Serialize};

/// A played game saved for later review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedGame {
    /// Timestamp when recording was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    pub game_id: GameId,
    pub outcome: GameOutcome,
    pub final_score: i64,
    /// Every clue played, in order
    pub history: Vec<ClueRecord>,
}
