//! Season catalogs: which game is next in a season.

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{self, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use quizboard_engine::GameId;

/// What a season has to offer next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEntry {
    Game(GameId),
    /// Every game of the season has been played; progress starts over.
    EndOfSeason,
}

pub trait SeasonCatalog {
    /// Returns the next unplayed game of `season`.
    ///
    /// Once the season is exhausted this returns [`CatalogEntry::EndOfSeason`]
    /// and rewinds the season to its first game.
    fn current_game(&mut self, season: u32) -> anyhow::Result<CatalogEntry>;

    /// Marks the current game of `season` as played.
    fn advance(&mut self, season: u32) -> anyhow::Result<()>;
}

/// Catalog backed by two JSON files.
///
/// The seasons file maps a season number to its ordered game ids and is
/// read-only. The progress file maps a season number to the index of the
/// next game to play; seasons absent from it start at 0.
#[derive(Debug)]
pub struct JsonSeasonCatalog {
    seasons: BTreeMap<u32, Vec<GameId>>,
    progress_path: PathBuf,
    progress: BTreeMap<u32, usize>,
}

impl JsonSeasonCatalog {
    pub fn open(seasons_path: &Path, progress_path: &Path) -> anyhow::Result<Self> {
        let seasons = read_json(seasons_path)?
            .with_context(|| format!("Season list not found: {}", seasons_path.display()))?;
        let progress = read_json(progress_path)?.unwrap_or_default();
        Ok(Self {
            seasons,
            progress_path: progress_path.to_owned(),
            progress,
        })
    }

    fn games(&self, season: u32) -> anyhow::Result<&[GameId]> {
        self.seasons
            .get(&season)
            .map(Vec::as_slice)
            .with_context(|| format!("Season {season} is not in the catalog"))
    }

    fn save_progress(&self) -> anyhow::Result<()> {
        let path = &self.progress_path;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.progress)
            .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", path.display()))?;
        Ok(())
    }
}

impl SeasonCatalog for JsonSeasonCatalog {
    fn current_game(&mut self, season: u32) -> anyhow::Result<CatalogEntry> {
        let index = self.progress.get(&season).copied().unwrap_or(0);
        if let Some(&game_id) = self.games(season)?.get(index) {
            return Ok(CatalogEntry::Game(game_id));
        }
        log::debug!("season {season} exhausted at index {index}, rewinding");
        self.progress.insert(season, 0);
        self.save_progress()?;
        Ok(CatalogEntry::EndOfSeason)
    }

    fn advance(&mut self, season: u32) -> anyhow::Result<()> {
        self.games(season)?;
        let index = self.progress.entry(season).or_insert(0);
        *index += 1;
        log::debug!("season {season} advanced to index {index}");
        self.save_progress()
    }
}

/// Reads a JSON file, returning `None` if it does not exist.
fn read_json<T>(path: &Path) -> anyhow::Result<Option<T>>
where
    T: serde::de::DeserializeOwned,
{
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read file: {}", path.display()));
        }
    };
    let value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    Ok(Some(value))
}
