//! Cross-game performance statistics.
//!
//! - [`CumulativeStats`]: running totals over every completed game, with
//!   derived per-game rates
//! - [`StatsStore`]: single-row CSV file holding the latest snapshot
//!
//! # Example
//!
//! ```
//! use quizboard_engine::ScoreLedger;
//! use quizboard_stats::CumulativeStats;
//!
//! let mut ledger = ScoreLedger::new();
//! for _ in 0..30 {
//!     ledger.record_correct(false);
//! }
//! ledger.mark_complete();
//!
//! let mut stats = CumulativeStats::default();
//! assert!(stats.fold_game(&ledger));
//! assert_eq!(stats.games_played(), 1);
//! assert_eq!(stats.avg_correct_response_pct(), 0.5);
//! ```

pub use self::{cumulative::*, store::*};

mod cumulative;
mod store;
