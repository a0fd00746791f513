use quizboard_engine::{Board, CATEGORY_COUNT, Coord, TIER_COUNT};

const CELL_WIDTH: usize = 14;

/// Formats a dollar amount with thousands separators, e.g. `-$1,200`.
pub fn money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}${grouped}")
}

/// Lays out the board as text rows.
///
/// The first row numbers the categories as the player types them, the second
/// holds the category names, and each remaining row is one tier. Played and
/// unrevealed cells are left blank.
pub fn board_lines(board: &Board) -> Vec<String> {
    let mut lines = Vec::with_capacity(TIER_COUNT + 3);
    lines.push(row((1..=CATEGORY_COUNT).map(|n| n.to_string())));
    lines.push(row(board
        .categories()
        .iter()
        .map(|name| truncate(name, CELL_WIDTH - 2))));
    lines.push(vec!["-".repeat(CELL_WIDTH); CATEGORY_COUNT].join("+"));
    for (tier, value) in board.tier_values().iter().enumerate() {
        lines.push(row((0..CATEGORY_COUNT).map(|category| {
            if board.is_selectable(Coord::new(category, tier)) {
                money(*value)
            } else {
                String::new()
            }
        })));
    }
    lines
}

fn row<I>(cells: I) -> String
where
    I: IntoIterator<Item = String>,
{
    cells
        .into_iter()
        .map(|cell| format!("{cell:^width$}", width = CELL_WIDTH))
        .collect::<Vec<_>>()
        .join("|")
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('~');
    out
}
