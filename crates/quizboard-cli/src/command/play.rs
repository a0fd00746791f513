use quizboard_engine::GameId;

use super::session::{self, SessionArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Archive id of the game to play
    pub(crate) game_id: GameId,
    #[clap(flatten)]
    pub(crate) session: SessionArg,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    session::play_game(&arg.session, arg.game_id)?;
    Ok(())
}
