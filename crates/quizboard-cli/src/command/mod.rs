use clap::{Parser, Subcommand};

use self::{
    play::PlayArg, random::RandomArg, season::SeasonArg, session::SessionArg, stats::StatsArg,
};

mod play;
mod random;
mod season;
mod session;
mod stats;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play one archived game by id
    Play(#[clap(flatten)] PlayArg),
    /// Play the next unplayed game of a season
    Season(#[clap(flatten)] SeasonArg),
    /// Play a randomly chosen game from the archive
    Random(#[clap(flatten)] RandomArg),
    /// Show cumulative statistics
    Stats(#[clap(flatten)] StatsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Season(arg) => season::run(&arg)?,
        Mode::Random(arg) => random::run(&arg)?,
        Mode::Stats(arg) => stats::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use quizboard_engine::GameId;

    use super::*;

    #[test]
    fn test_play_defaults() {
        let args = CommandArgs::try_parse_from(["quizboard", "play", "4312"]).unwrap();
        let Mode::Play(arg) = args.mode else {
            panic!("expected play mode");
        };
        assert_eq!(arg.game_id, GameId::new(4312));
        assert!(!arg.session.auto);
        assert!(!arg.session.save_recording);
        assert_eq!(arg.session.archive, Path::new("./data/archive"));
        assert_eq!(arg.session.stats, Path::new("./data/stats.csv"));
        assert_eq!(arg.session.record_dir, Path::new("./data/recordings/"));
    }

    #[test]
    fn test_season_flags() {
        let args = CommandArgs::try_parse_from([
            "quizboard",
            "season",
            "35",
            "--auto",
            "--save-recording",
            "--progress",
            "/tmp/progress.json",
        ])
        .unwrap();
        let Mode::Season(arg) = args.mode else {
            panic!("expected season mode");
        };
        assert_eq!(arg.season, 35);
        assert_eq!(arg.progress, Path::new("/tmp/progress.json"));
        assert!(arg.session.auto);
        assert!(arg.session.save_recording);
    }

    #[test]
    fn test_mode_is_required() {
        assert!(CommandArgs::try_parse_from(["quizboard"]).is_err());
        assert!(CommandArgs::try_parse_from(["quizboard", "play"]).is_err());
        assert!(CommandArgs::try_parse_from(["quizboard", "play", "abc"]).is_err());
    }
}
