use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use quizboard_engine::{ContentError, ContentProvider, FinalClue, GameId, Round, RoundContent};

use crate::schema::game::ArchivedGame;

/// Archive of games stored as one JSON file per game under `<root>/games/`.
#[derive(Debug, Clone)]
pub struct ArchiveDirectory {
    root: PathBuf,
}

impl ArchiveDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn games_dir(&self) -> PathBuf {
        self.root.join("games")
    }

    fn game_path(&self, game_id: GameId) -> PathBuf {
        self.games_dir().join(format!("{game_id}.json"))
    }

    /// Lists every game id with a file in the archive, in ascending order.
    pub fn game_ids(&self) -> anyhow::Result<Vec<GameId>> {
        let dir = self.games_dir();
        let entries = fs::read_dir(&dir)
            .with_context(|| format!("Failed to read archive directory {}", dir.display()))?;
        let mut ids = vec![];
        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to read archive directory {}", dir.display()))?
                .path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()).map(str::parse::<GameId>) {
                Some(Ok(id)) => ids.push(id),
                _ => log::warn!("ignoring unexpected archive file {}", path.display()),
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }

    fn read_game(&self, game_id: GameId) -> Result<ArchivedGame, ContentError> {
        let path = self.game_path(game_id);
        let text = fs::read_to_string(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ContentError::GameNotFound { game_id },
            _ => ContentError::Unavailable {
                game_id,
                reason: format!("failed to read {}: {err}", path.display()),
            },
        })?;
        log::debug!("loaded game {game_id} from {}", path.display());
        serde_json::from_str(&text).map_err(|err| ContentError::Unavailable {
            game_id,
            reason: format!("malformed {}: {err}", path.display()),
        })
    }
}

impl ContentProvider for ArchiveDirectory {
    fn round(&self, game_id: GameId, round: Round) -> Result<RoundContent, ContentError> {
        let game = self.read_game(game_id)?;
        let archived = match round {
            Round::Jeopardy => Some(game.jeopardy),
            Round::DoubleJeopardy => game.double_jeopardy,
        };
        archived
            .map(RoundContent::from)
            .ok_or_else(|| ContentError::Unavailable {
                game_id,
                reason: format!("no {round} round in the archive"),
            })
    }

    fn final_clue(&self, game_id: GameId) -> Result<FinalClue, ContentError> {
        self.read_game(game_id)?
            .final_jeopardy
            .map(FinalClue::from)
            .ok_or_else(|| ContentError::Unavailable {
                game_id,
                reason: "no Final round in the archive".to_owned(),
            })
    }
}
