mod board;
mod bot_controller;
mod game_state;
mod types;
mod validate;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BestMoves, MAX_SEARCH_DEPTH, WIN_SCORE, choose_move, evaluate, find_best_moves,
};
pub use types::{BOARD_SIZE, CELL_COUNT, GameStatus, Mark};
pub use validate::validate_human_move;
pub use win_detector::{WIN_PATTERNS, check_win};
