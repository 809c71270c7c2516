use super::types::{CELL_COUNT, Mark};
use super::win_detector::check_win;

/// A 3x3 grid stored row-major in cells 0..9.
///
/// `Board` is a plain `Copy` value: applying a move returns a new board and
/// leaves the original as it was, so the search can branch freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// `None` when `cell` is outside 0..9.
    pub fn occupant(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied()
    }

    pub fn is_empty(&self, cell: usize) -> bool {
        self.occupant(cell) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&mark| mark != Mark::Empty)
    }

    pub fn winner(&self) -> Mark {
        check_win(&self.cells)
    }

    pub fn is_terminal(&self) -> bool {
        self.winner() != Mark::Empty || self.is_full()
    }

    /// Empty cells in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(cell, _)| cell)
            .collect()
    }

    pub fn apply_move(&self, cell: usize, mark: Mark) -> Result<Board, String> {
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }
        match self.occupant(cell) {
            None => Err(format!("Cell {} is out of bounds", cell)),
            Some(Mark::Empty) => Ok(self.place(cell, mark)),
            Some(_) => Err(format!("Cell {} is already marked", cell)),
        }
    }

    /// Unchecked variant of `apply_move` for cells taken from `available_moves`.
    pub(super) fn place(&self, cell: usize, mark: Mark) -> Board {
        debug_assert!(self.cells[cell] == Mark::Empty);
        let mut cells = self.cells;
        cells[cell] = mark;
        Board { cells }
    }
}

#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Board {
    let mut cells = [Mark::Empty; CELL_COUNT];
    let chars: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(chars.len(), CELL_COUNT, "layout must describe 9 cells");
    for (cell, ch) in chars.into_iter().enumerate() {
        cells[cell] = match ch {
            'X' => Mark::Human,
            'O' => Mark::Computer,
            '-' => Mark::Empty,
            other => panic!("unexpected cell character {:?}", other),
        };
    }
    Board::from_cells(cells)
}
