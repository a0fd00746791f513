use std::{
    fs, io,
    path::{Path, PathBuf},
};

use quizboard_engine::ScoreLedger;
use tempfile::NamedTempFile;

use crate::CumulativeStats;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum StatsStoreError {
    #[display("stats file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },
    #[display("stats file {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
    #[display("stats file {} has no data row", path.display())]
    Empty { path: PathBuf },
}

/// A CSV file holding one header row and one snapshot row.
///
/// Every save rewrites the whole file. There is no locking; with two writers
/// the last one wins.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot. A missing file reads as an empty record.
    pub fn load(&self) -> Result<CumulativeStats, StatsStoreError> {
        let mut reader = match csv::Reader::from_path(&self.path) {
            Ok(reader) => reader,
            Err(err) if is_not_found(&err) => {
                log::debug!("no stats file at {}, starting fresh", self.path.display());
                return Ok(CumulativeStats::default());
            }
            Err(source) => return Err(self.csv_error(source)),
        };
        match reader.deserialize().next() {
            Some(row) => row.map_err(|source| self.csv_error(source)),
            None => Err(StatsStoreError::Empty {
                path: self.path.clone(),
            }),
        }
    }

    /// Replaces the snapshot.
    ///
    /// The row is written to a uniquely named temporary file in the target
    /// directory which is then renamed over the target, so readers never
    /// observe a half-written file.
    pub fn save(&self, stats: &CumulativeStats) -> Result<(), StatsStoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|source| self.io_error(source))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| self.io_error(source))?;
        let mut writer = csv::Writer::from_writer(tmp.as_file_mut());
        writer
            .serialize(stats)
            .map_err(|source| self.csv_error(source))?;
        writer.flush().map_err(|source| self.io_error(source))?;
        drop(writer);

        tmp.persist(&self.path)
            .map_err(|err| self.io_error(err.error))?;
        log::info!(
            "saved stats for {} games to {}",
            stats.games_played(),
            self.path.display()
        );
        Ok(())
    }

    /// Loads, folds `ledger` in, and saves.
    ///
    /// An incomplete game still rewrites the file with unchanged totals.
    pub fn record_game(&self, ledger: &ScoreLedger) -> Result<CumulativeStats, StatsStoreError> {
        let mut stats = self.load()?;
        if !stats.fold_game(ledger) {
            log::info!("game not complete, stats totals unchanged");
        }
        self.save(&stats)?;
        Ok(stats)
    }

    fn io_error(&self, source: io::Error) -> StatsStoreError {
        StatsStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn csv_error(&self, source: csv::Error) -> StatsStoreError {
        StatsStoreError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

fn is_not_found(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::Io(io) if io.kind() == io::ErrorKind::NotFound)
}
