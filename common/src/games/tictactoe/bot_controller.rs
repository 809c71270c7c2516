use crate::games::TieBreaker;
use crate::log;
use super::board::Board;
use super::types::Mark;

/// Plies searched below each candidate move before a position counts as neutral.
pub const MAX_SEARCH_DEPTH: u32 = 5;
pub const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMoves {
    pub score: i32,
    /// Every move reaching `score`, ascending.
    pub moves: Vec<usize>,
}

/// Minimax score of `board` from the computer's point of view.
///
/// Wins score `WIN_SCORE - depth` and losses `depth - WIN_SCORE` so that
/// sooner wins and later losses are preferred. Draws and positions still open
/// at `MAX_SEARCH_DEPTH` score 0.
pub fn evaluate(board: &Board, is_maximizing: bool, depth: u32) -> i32 {
    let depth_score = depth as i32;
    match board.winner() {
        Mark::Computer => return WIN_SCORE - depth_score,
        Mark::Human => return depth_score - WIN_SCORE,
        Mark::Empty => {}
    }
    if board.is_full() || depth >= MAX_SEARCH_DEPTH {
        return 0;
    }

    let mark = if is_maximizing { Mark::Computer } else { Mark::Human };
    let scores = board
        .available_moves()
        .into_iter()
        .map(|cell| evaluate(&board.place(cell, mark), !is_maximizing, depth + 1));

    let best = if is_maximizing { scores.max() } else { scores.min() };
    // a board that is neither won nor full always has a move
    best.unwrap_or(0)
}

/// Scores every computer move on `board` and collects all moves tied for best.
///
/// Each candidate is searched with its own depth counter starting at 0,
/// regardless of how many marks are already on the board.
pub fn find_best_moves(board: &Board) -> Result<BestMoves, String> {
    if board.is_terminal() {
        return Err("Cannot search a finished game".to_string());
    }

    let mut best_score = i32::MIN;
    let mut best_moves = Vec::new();

    for cell in board.available_moves() {
        let score = evaluate(&board.place(cell, Mark::Computer), false, 0);

        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(cell);
        } else if score == best_score {
            best_moves.push(cell);
        }
    }

    Ok(BestMoves {
        score: best_score,
        moves: best_moves,
    })
}

pub fn choose_move<T: TieBreaker + ?Sized>(
    board: &Board,
    tie_breaker: &mut T,
) -> Result<usize, String> {
    let best = find_best_moves(board)?;
    let cell = tie_breaker.pick(&best.moves);
    log!(
        "Computer picked {} from {:?} (score {})",
        cell,
        best.moves,
        best.score
    );
    Ok(cell)
}
