use std::path::PathBuf;

use anyhow::Context as _;
use quizboard_engine::{GameController, GameId, GameOutcome, SelectionMode};
use quizboard_stats::StatsStore;

use crate::{archive::ArchiveDirectory, recording, ui::TerminalResponder};

/// Options shared by every mode that plays a game.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SessionArg {
    /// Directory holding `games/<id>.json` and `seasons.json`
    #[clap(long, default_value = "./data/archive")]
    pub(crate) archive: PathBuf,
    /// CSV file with cumulative statistics
    #[clap(long, default_value = "./data/stats.csv")]
    pub(crate) stats: PathBuf,
    /// Take clues in board order instead of choosing them
    #[clap(long)]
    pub(crate) auto: bool,
    /// Save the game recording to a file when the game ends
    #[clap(long)]
    pub(crate) save_recording: bool,
    /// Directory to save recording files
    #[clap(long, default_value = "./data/recordings/")]
    pub(crate) record_dir: PathBuf,
}

impl SessionArg {
    pub(crate) fn archive(&self) -> ArchiveDirectory {
        ArchiveDirectory::new(&self.archive)
    }

    fn mode(&self) -> SelectionMode {
        if self.auto {
            SelectionMode::Automatic
        } else {
            SelectionMode::Manual
        }
    }
}

/// Plays one game to completion or until the player quits, then folds it
/// into the cumulative stats.
pub(crate) fn play_game(arg: &SessionArg, game_id: GameId) -> anyhow::Result<GameOutcome> {
    let archive = arg.archive();
    println!("Loading game {game_id}...");
    let mut controller = GameController::start(game_id, arg.mode(), &archive)
        .with_context(|| format!("Failed to start game {game_id}"))?;

    let mut responder = TerminalResponder::default();
    let outcome = controller
        .run(&archive, &mut responder)
        .with_context(|| format!("Game {game_id} ended unexpectedly"))?;
    let ledger = controller.end_game();
    log::debug!("game {game_id} {outcome} with score {}", ledger.total());

    StatsStore::new(&arg.stats)
        .record_game(&ledger)
        .context("Failed to update statistics")?;

    if arg.save_recording {
        let path = recording::save(&arg.record_dir, game_id, outcome, &ledger)?;
        println!("Recording saved to {}", path.display());
    }
    Ok(outcome)
}
