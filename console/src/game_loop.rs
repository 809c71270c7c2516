use std::collections::VecDeque;
use std::io::{BufRead, Write};
use common::games::TieBreaker;
use common::games::tictactoe::{Board, GameStatus, Mark, choose_move, validate_human_move};
use common::log;
use crate::config::Symbols;
use crate::render::render_board;

pub const PROMPT: &str = "Enter your move (0-8): ";
pub const INVALID_MOVE: &str = "Invalid move. Try again.";

pub fn outcome_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::ComputerWon => "Computer wins!",
        GameStatus::HumanWon => "You win!",
        GameStatus::Draw => "It's a draw!",
        GameStatus::InProgress => "Game in progress",
    }
}

/// Drives one game over a text stream. Moves are whitespace-separated, so a
/// single line may carry several of them.
pub struct GameLoop<'a, R, W, T: ?Sized> {
    input: R,
    pending: VecDeque<String>,
    output: W,
    tie_breaker: &'a mut T,
    symbols: &'a Symbols,
}

impl<'a, R, W, T> GameLoop<'a, R, W, T>
where
    R: BufRead,
    W: Write,
    T: TieBreaker + ?Sized,
{
    pub fn new(input: R, output: W, tie_breaker: &'a mut T, symbols: &'a Symbols) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
            output,
            tie_breaker,
            symbols,
        }
    }

    pub fn play(&mut self, first: Mark) -> Result<GameStatus, String> {
        self.play_from(Board::new(), first)
    }

    /// Alternates turns starting with `to_move` until the board is terminal,
    /// then prints the final board and the outcome.
    pub fn play_from(
        &mut self,
        mut board: Board,
        mut to_move: Mark,
    ) -> Result<GameStatus, String> {
        while !board.is_terminal() {
            self.write(&render_board(&board, self.symbols))?;

            match to_move {
                Mark::Human => {
                    let Some(cell) = self.read_human_move(&board)? else {
                        continue;
                    };
                    board = board.apply_move(cell, Mark::Human)?;
                    to_move = Mark::Computer;
                }
                Mark::Computer => {
                    let cell = choose_move(&board, &mut *self.tie_breaker)?;
                    board = board.apply_move(cell, Mark::Computer)?;
                    self.write(&format!("Computer plays at position {}\n", cell))?;
                    to_move = Mark::Human;
                }
                Mark::Empty => return Err("No player to move".to_string()),
            }
        }

        let status = GameStatus::from_board(&board);
        self.write(&render_board(&board, self.symbols))?;
        self.write(&format!("{}\n", outcome_message(status)))?;
        log!("Game over: {:?}", status);
        Ok(status)
    }

    /// `Ok(None)` when the move was rejected and the turn should be retried.
    fn read_human_move(&mut self, board: &Board) -> Result<Option<usize>, String> {
        self.write(PROMPT)?;
        let token = self.next_token()?;

        match validate_human_move(board, &token) {
            Ok(cell) => Ok(Some(cell)),
            Err(reason) => {
                log!("Rejected human move: {}", reason);
                self.write(&format!("{}\n", INVALID_MOVE))?;
                Ok(None)
            }
        }
    }

    /// Next whitespace-separated word of input, reading more lines as needed.
    fn next_token(&mut self) -> Result<String, String> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| format!("Failed to read input: {}", e))?;
            if read == 0 {
                return Err("Input closed before the game finished".to_string());
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        self.pending
            .pop_front()
            .ok_or_else(|| "No input available".to_string())
    }

    fn write(&mut self, text: &str) -> Result<(), String> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| format!("Failed to write output: {}", e))
    }
}
