use super::board::Board;
use super::types::{GameStatus, Mark};

impl GameStatus {
    /// Winner first, then a full board; anything else is still in progress.
    pub fn from_board(board: &Board) -> Self {
        match board.winner() {
            Mark::Computer => GameStatus::ComputerWon,
            Mark::Human => GameStatus::HumanWon,
            Mark::Empty if board.is_full() => GameStatus::Draw,
            Mark::Empty => GameStatus::InProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from_str;

    #[test]
    fn test_status_follows_board() {
        assert_eq!(GameStatus::from_board(&Board::new()), GameStatus::InProgress);
        assert_eq!(
            GameStatus::from_board(&board_from_str("O O O X X - - - -")),
            GameStatus::ComputerWon
        );
        assert_eq!(
            GameStatus::from_board(&board_from_str("X O - X O - X - -")),
            GameStatus::HumanWon
        );
        assert_eq!(
            GameStatus::from_board(&board_from_str("X O X X O O O X X")),
            GameStatus::Draw
        );
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let board = board_from_str("X O X O X O O X X");
        assert!(board.is_full());
        assert_eq!(GameStatus::from_board(&board), GameStatus::HumanWon);
    }

    #[test]
    fn test_terminal_status_matches_board() {
        for layout in ["- - - - - - - - -", "O O O X X - - - -", "X O X X O O O X X"] {
            let board = board_from_str(layout);
            assert_eq!(GameStatus::from_board(&board).is_terminal(), board.is_terminal());
        }
    }
}
