use anyhow::Context as _;
use rand::seq::IndexedRandom as _;

use super::session::{self, SessionArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RandomArg {
    #[clap(flatten)]
    pub(crate) session: SessionArg,
}

pub(crate) fn run(arg: &RandomArg) -> anyhow::Result<()> {
    let archive = arg.session.archive();
    let ids = archive.game_ids()?;
    let game_id = *ids
        .choose(&mut rand::rng())
        .with_context(|| format!("No games found in {}", archive.root().display()))?;
    log::debug!("picked game {game_id} out of {}", ids.len());
    session::play_game(&arg.session, game_id)?;
    Ok(())
}
