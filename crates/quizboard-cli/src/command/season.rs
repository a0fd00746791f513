use std::path::PathBuf;

use crate::catalog::{CatalogEntry, JsonSeasonCatalog, SeasonCatalog};

use super::session::{self, SessionArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SeasonArg {
    /// Season number
    pub(crate) season: u32,
    /// JSON file tracking the next game of each season
    #[clap(long, default_value = "./data/progress.json")]
    pub(crate) progress: PathBuf,
    #[clap(flatten)]
    pub(crate) session: SessionArg,
}

pub(crate) fn run(arg: &SeasonArg) -> anyhow::Result<()> {
    let SeasonArg {
        season,
        progress,
        session: session_arg,
    } = arg;

    let mut catalog = JsonSeasonCatalog::open(&session_arg.archive.join("seasons.json"), progress)?;
    match catalog.current_game(*season)? {
        CatalogEntry::EndOfSeason => {
            println!("Season {season} is complete. Progress has been reset to its first game.");
        }
        CatalogEntry::Game(game_id) => {
            let outcome = session::play_game(session_arg, game_id)?;
            if outcome.is_completed() {
                catalog.advance(*season)?;
            } else {
                log::info!("game {game_id} abandoned, season {season} progress kept");
            }
        }
    }
    Ok(())
}
