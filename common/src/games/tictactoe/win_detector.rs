use super::types::{CELL_COUNT, Mark};

/// Every line that wins the game, scanned in this order: rows, columns, diagonals.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark owning the first complete pattern, or `Mark::Empty`.
///
/// Boards reached through legal alternating play have at most one winner, so
/// the scan order only matters for hand-built boards.
pub fn check_win(cells: &[Mark; CELL_COUNT]) -> Mark {
    WIN_PATTERNS
        .iter()
        .map(|&[a, b, c]| (cells[a], cells[b], cells[c]))
        .find(|&(a, b, c)| a != Mark::Empty && a == b && b == c)
        .map(|(mark, _, _)| mark)
        .unwrap_or(Mark::Empty)
}
