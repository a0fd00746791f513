use crate::core::{Board, CATEGORY_COUNT, Coord, TIER_COUNT};

/// Player input that cannot be accepted. The prompt is repeated.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SelectionError {
    #[display("enter a category (1-6) and a tier (1-5 or its value), e.g. `3 400`")]
    Malformed,
    #[display("there is no category {_0} (choose 1-6)")]
    CategoryOutOfRange(#[error(not(source))] usize),
    #[display("there is no tier {_0} on this board")]
    TierOutOfRange(#[error(not(source))] i64),
    #[display("category {category} for {value} has already been played")]
    AlreadyPlayed { category: usize, value: i64 },
    #[display("{_0:?} is not a whole number of points")]
    MalformedWager(#[error(not(source))] String),
    #[display("a wager cannot be negative")]
    NegativeWager,
    #[display("wager {wager} exceeds the maximum of {max}")]
    WagerTooLarge { wager: i64, max: i64 },
    #[display("wager {wager} is more than a score of {total} can hold")]
    WagerOverflow { wager: i64, total: i64 },
}

/// A parsed clue-selection prompt answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Selection {
    Clue(Coord),
    /// Empty input: take the next clue in board order.
    Advance,
    Quit,
}

/// Parses a clue selection against `board`.
///
/// Accepts `<category> <tier>` where the category is 1-based and the tier is
/// either a 1-based row number or the row's point value (`3 2` and `3 400`
/// pick the same Jeopardy clue). A comma may separate the two numbers and a
/// `$` may prefix the value. The chosen clue must still be selectable.
pub fn parse_selection(input: &str, board: &Board) -> Result<Selection, SelectionError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Selection::Advance);
    }
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Ok(Selection::Quit);
    }

    let mut tokens = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());
    let (Some(category), Some(tier), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(SelectionError::Malformed);
    };

    let category = category
        .parse::<usize>()
        .map_err(|_| SelectionError::Malformed)?;
    if !(1..=CATEGORY_COUNT).contains(&category) {
        return Err(SelectionError::CategoryOutOfRange(category));
    }

    let tier = tier
        .trim_start_matches('$')
        .parse::<i64>()
        .map_err(|_| SelectionError::Malformed)?;
    let tier_index = match usize::try_from(tier) {
        Ok(row @ 1..=TIER_COUNT) => row - 1,
        _ => board
            .tier_of_value(tier)
            .ok_or(SelectionError::TierOutOfRange(tier))?,
    };

    let coord = Coord::new(category - 1, tier_index);
    if !board.is_selectable(coord) {
        return Err(SelectionError::AlreadyPlayed {
            category,
            value: board.tier_values()[tier_index],
        });
    }
    Ok(Selection::Clue(coord))
}

/// Parses a wager, rejecting negatives and anything above `max`.
pub fn parse_wager(input: &str, max: Option<i64>) -> Result<i64, SelectionError> {
    let trimmed = input.trim();
    let wager = trimmed
        .trim_start_matches('$')
        .parse::<i64>()
        .map_err(|_| SelectionError::MalformedWager(trimmed.to_owned()))?;
    if wager < 0 {
        return Err(SelectionError::NegativeWager);
    }
    if let Some(max) = max.filter(|max| wager > *max) {
        return Err(SelectionError::WagerTooLarge { wager, max });
    }
    Ok(wager)
}

/// Checks that every outcome of wagering `wager` on a score of `total` is
/// representable: a win, a loss, and a loss followed by an override.
pub fn check_wager_headroom(total: i64, wager: i64) -> Result<i64, SelectionError> {
    let fits = wager.checked_mul(2).is_some()
        && total.checked_add(wager).is_some()
        && total.checked_sub(wager).is_some();
    if fits {
        Ok(wager)
    } else {
        Err(SelectionError::WagerOverflow { wager, total })
    }
}
