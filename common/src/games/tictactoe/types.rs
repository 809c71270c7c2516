pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Human,
    Computer,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::Human => Some(Mark::Computer),
            Mark::Computer => Some(Mark::Human),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    HumanWon,
    ComputerWon,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::Human.opponent(), Some(Mark::Computer));
        assert_eq!(Mark::Computer.opponent(), Some(Mark::Human));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_only_in_progress_is_not_terminal() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::HumanWon.is_terminal());
        assert!(GameStatus::ComputerWon.is_terminal());
        assert!(GameStatus::Draw.is_terminal());
    }
}
