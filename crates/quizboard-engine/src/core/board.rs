use super::{
    CATEGORY_COUNT, TIER_COUNT,
    content::{CategoryContent, Clue, ContentError, ContentProvider, GameId, RoundContent},
    coord::Coord,
    round::Round,
};

/// Board content does not have the shape of a round.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardShapeError {
    #[display("expected 6 categories, found {_0}")]
    CategoryCount(#[error(not(source))] usize),
    #[display("category {category:?} has {count} clues, expected 5")]
    ClueCount { category: String, count: usize },
}

/// Attempted to resolve a cell that is not selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("clue at {coord} is not selectable")]
pub struct ResolveError {
    pub coord: Coord,
}

/// Clue board for one round.
///
/// Tracks which clues are still in play, where the Daily Double is hidden, and
/// the traversal cursor used by automatic selection. A cell is *selectable*
/// iff it is in range and still available; `remaining` always equals the
/// number of selectable cells.
///
/// # Example
///
/// ```
/// use quizboard_engine::{Board, CategoryContent, Clue, Coord, Round, RoundContent};
///
/// let categories = (0..6)
///     .map(|c| CategoryContent {
///         name: format!("Category {c}"),
///         clues: (0..5)
///             .map(|t| Some(Clue { text: format!("clue {c}-{t}"), response: "answer".into() }))
///             .collect(),
///     })
///     .collect();
/// let content = RoundContent { categories, daily_double: Some(Coord::new(0, 3)) };
///
/// let mut board = Board::new(Round::Jeopardy, content).unwrap();
/// assert_eq!(board.remaining(), 30);
///
/// let coord = board.advance_cursor().unwrap();
/// assert_eq!(coord, Coord::FIRST);
/// board.resolve(coord).unwrap();
/// assert_eq!(board.remaining(), 29);
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    round: Round,
    tier_values: [i64; TIER_COUNT],
    categories: Vec<String>,
    clues: [[Option<Clue>; TIER_COUNT]; CATEGORY_COUNT],
    availability: [[bool; TIER_COUNT]; CATEGORY_COUNT],
    remaining: usize,
    daily_double: Option<Coord>,
    cursor: Coord,
}

impl Board {
    /// Builds a board from round content.
    ///
    /// Cells whose clue is missing from the content start out unavailable.
    /// A Daily Double location that is out of range or points at a missing
    /// clue is discarded.
    pub fn new(round: Round, content: RoundContent) -> Result<Self, BoardShapeError> {
        let RoundContent {
            categories,
            daily_double,
        } = content;
        if categories.len() != CATEGORY_COUNT {
            return Err(BoardShapeError::CategoryCount(categories.len()));
        }

        let mut names = Vec::with_capacity(CATEGORY_COUNT);
        let mut clues: [[Option<Clue>; TIER_COUNT]; CATEGORY_COUNT] = Default::default();
        for (column, CategoryContent { name, clues: column_clues }) in clues.iter_mut().zip(categories) {
            if column_clues.len() != TIER_COUNT {
                return Err(BoardShapeError::ClueCount {
                    category: name,
                    count: column_clues.len(),
                });
            }
            for (cell, clue) in column.iter_mut().zip(column_clues) {
                *cell = clue;
            }
            names.push(name);
        }

        let mut availability = [[false; TIER_COUNT]; CATEGORY_COUNT];
        for coord in Coord::all() {
            availability[coord.category][coord.tier] = clues[coord.category][coord.tier].is_some();
        }
        let remaining = availability.iter().flatten().filter(|a| **a).count();

        let daily_double = daily_double.filter(|coord| {
            let valid = coord.is_in_range() && availability[coord.category][coord.tier];
            if !valid {
                log::warn!("discarding Daily Double at {coord}: no clue at that position");
            }
            valid
        });

        Ok(Self {
            round,
            tier_values: round.tier_values(),
            categories: names,
            clues,
            availability,
            remaining,
            daily_double,
            cursor: Coord::LAST,
        })
    }

    /// Fetches round content from `provider` and builds the board.
    pub fn load<P>(round: Round, game_id: GameId, provider: &P) -> Result<Self, ContentError>
    where
        P: ContentProvider + ?Sized,
    {
        let content = provider.round(game_id, round)?;
        let board = Self::new(round, content).map_err(|e| ContentError::Unavailable {
            game_id,
            reason: format!("malformed {round} board: {e}"),
        })?;
        log::debug!(
            "loaded {round} board for game {game_id}: {} clues, Daily Double at {:?}",
            board.remaining,
            board.daily_double
        );
        Ok(board)
    }

    #[must_use]
    pub fn round(&self) -> Round {
        self.round
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn category(&self, index: usize) -> Option<&str> {
        self.categories.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn tier_values(&self) -> &[i64; TIER_COUNT] {
        &self.tier_values
    }

    #[must_use]
    pub fn tier_value(&self, tier: usize) -> Option<i64> {
        self.tier_values.get(tier).copied()
    }

    /// Returns the tier index holding `value` points, if any.
    #[must_use]
    pub fn tier_of_value(&self, value: i64) -> Option<usize> {
        self.tier_values.iter().position(|v| *v == value)
    }

    #[must_use]
    pub fn clue(&self, coord: Coord) -> Option<&Clue> {
        if !coord.is_in_range() {
            return None;
        }
        self.clues[coord.category][coord.tier].as_ref()
    }

    #[must_use]
    pub fn is_selectable(&self, coord: Coord) -> bool {
        coord.is_in_range() && self.availability[coord.category][coord.tier]
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.remaining == 0
    }

    #[must_use]
    pub fn daily_double(&self) -> Option<Coord> {
        self.daily_double
    }

    #[must_use]
    pub fn is_daily_double(&self, coord: Coord) -> bool {
        self.daily_double == Some(coord)
    }

    #[must_use]
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Marks a selectable cell as played.
    pub fn resolve(&mut self, coord: Coord) -> Result<(), ResolveError> {
        if !self.is_selectable(coord) {
            return Err(ResolveError { coord });
        }
        self.availability[coord.category][coord.tier] = false;
        self.remaining -= 1;
        Ok(())
    }

    /// Moves the cursor to the next selectable cell and returns it.
    ///
    /// The walk always leaves the current cell, visiting tiers top to bottom
    /// and categories left to right with wrap-around. A fresh board's cursor
    /// sits on the last cell, so the first advance lands on the top-left
    /// clue. Returns `None` without moving when no clues remain.
    pub fn advance_cursor(&mut self) -> Option<Coord> {
        if self.remaining == 0 {
            return None;
        }
        let mut coord = self.cursor.next();
        while !self.is_selectable(coord) {
            coord = coord.next();
        }
        self.cursor = coord;
        Some(coord)
    }
}
