use std::path::PathBuf;

use anyhow::Context as _;
use crossterm::style::Stylize as _;
use quizboard_stats::{CumulativeStats, StatsStore};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct StatsArg {
    /// CSV file with cumulative statistics
    #[clap(long, default_value = "./data/stats.csv")]
    pub(crate) stats: PathBuf,
}

pub(crate) fn run(arg: &StatsArg) -> anyhow::Result<()> {
    let stats = StatsStore::new(&arg.stats)
        .load()
        .context("Failed to load statistics")?;
    for (label, value) in summary(&stats) {
        println!("{}{value}", format!("{label:<26}").bold());
    }
    Ok(())
}

fn summary(stats: &CumulativeStats) -> [(&'static str, String); 8] {
    let pct = |ratio: f64| format!("{:.1}%", ratio * 100.0);
    [
        ("Games played", stats.games_played().to_string()),
        ("Correct responses", stats.correct_response_total().to_string()),
        ("Correct Daily Doubles", stats.correct_daily_double_total().to_string()),
        ("Correct Final Jeopardy", stats.correct_final_jeopardy_total().to_string()),
        ("Avg correct per game", format!("{:.2}", stats.avg_correct_responses())),
        ("Avg correct rate", pct(stats.avg_correct_response_pct())),
        ("Daily Double rate", pct(stats.correct_daily_double_pct())),
        ("Final Jeopardy rate", pct(stats.correct_final_jeopardy_pct())),
    ]
}
