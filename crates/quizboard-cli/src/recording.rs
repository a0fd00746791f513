use std::{
    fs::{self, File},
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::Utc;
use quizboard_engine::{GameId, GameOutcome, ScoreLedger};

use crate::schema::recording::RecordedGame;

/// Saves a finished game's ledger history to a JSON file.
///
/// The filename is generated from the game id and the current timestamp:
/// `game_{id}_{YYYYMMDD_HHMMSS}.json`. `record_dir` is created if needed.
pub fn save(
    record_dir: &Path,
    game_id: GameId,
    outcome: GameOutcome,
    ledger: &ScoreLedger,
) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(record_dir)
        .with_context(|| format!("Failed to create directory {}", record_dir.display()))?;

    let timestamp = Utc::now();
    let filename = format!("game_{game_id}_{}.json", timestamp.format("%Y%m%d_%H%M%S"));
    let filepath = record_dir.join(filename);

    let data = RecordedGame {
        recorded_at: timestamp,
        game_id,
        outcome,
        final_score: ledger.total(),
        history: ledger.history().to_vec(),
    };

    let file = File::create(&filepath)
        .with_context(|| format!("Failed to create file: {}", filepath.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &data)
        .with_context(|| format!("Failed to write JSON to {}", filepath.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output to {}", filepath.display()))?;

    log::info!("saved recording of game {game_id} to {}", filepath.display());
    Ok(filepath)
}
