use super::board::Board;
use super::types::CELL_COUNT;

/// Turns one line of human input into a free cell on `board`.
pub fn validate_human_move(board: &Board, input: &str) -> Result<usize, String> {
    let trimmed = input.trim();
    let cell: i64 = trimmed
        .parse()
        .map_err(|_| format!("'{}' is not a number", trimmed))?;

    if cell < 0 || cell >= CELL_COUNT as i64 {
        return Err(format!(
            "Cell {} is out of range 0-{}",
            cell,
            CELL_COUNT - 1
        ));
    }

    let cell = cell as usize;
    if !board.is_empty(cell) {
        return Err(format!("Cell {} is already marked", cell));
    }
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from_str;

    #[test]
    fn test_accepts_free_cell() {
        let board = board_from_str("X - - - O - - - -");
        assert_eq!(validate_human_move(&board, "8\n"), Ok(8));
        assert_eq!(validate_human_move(&board, "  1 "), Ok(1));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let board = Board::new();
        assert!(validate_human_move(&board, "9").is_err());
        assert!(validate_human_move(&board, "-1").is_err());
        assert!(validate_human_move(&board, "99999999999999999999").is_err());
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let board = board_from_str("X - - - O - - - -");
        assert_eq!(
            validate_human_move(&board, "4"),
            Err("Cell 4 is already marked".to_string())
        );
    }

    #[test]
    fn test_rejects_garbage() {
        let board = Board::new();
        assert!(validate_human_move(&board, "").is_err());
        assert!(validate_human_move(&board, "centre").is_err());
        assert!(validate_human_move(&board, "4.5").is_err());
    }
}
