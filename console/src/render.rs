use common::games::tictactoe::{BOARD_SIZE, Board};
use crate::config::Symbols;

/// One line per row, cells separated by a single space.
pub fn render_board(board: &Board, symbols: &Symbols) -> String {
    let mut out = String::new();
    for row in board.cells().chunks(BOARD_SIZE) {
        let line: Vec<String> = row
            .iter()
            .map(|&mark| symbols.for_mark(mark).to_string())
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
