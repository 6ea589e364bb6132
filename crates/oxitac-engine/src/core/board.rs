use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{IllegalMove, core::mark::Mark};

const EMPTY_CHAR: char = '.';
const CELL_COUNT: usize = 9;

/// The 3x3 grid of cell occupancy.
///
/// Cells are addressed by an index in `[0, 8]`, row-major:
/// `row = index / 3`, `col = index % 3`. The board is plain storage - it
/// validates occupancy and bounds, but knows nothing about turns or wins.
///
/// `Board` is `Copy`, so hypothetical placements are cheap copy-probes:
///
/// ```
/// use oxitac_engine::{Board, Mark};
///
/// let board = Board::new();
/// let mut probe = board;
/// probe.place(4, Mark::O).unwrap();
///
/// assert_eq!(board.cell(4), None);
/// assert_eq!(probe.cell(4), Some(Mark::O));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// Number of cells on the board.
    pub const CELLS: usize = CELL_COUNT;
    /// Number of cells per row and per column.
    pub const SIDE: usize = 3;

    pub const EMPTY: Self = Self {
        cells: [None; Self::CELLS],
    };

    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns the `(row, col)` grid position of a cell index.
    #[must_use]
    pub const fn position(index: usize) -> (usize, usize) {
        (index / Self::SIDE, index % Self::SIDE)
    }

    /// Returns the occupant of the cell at `index`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `[0, 8]`.
    #[must_use]
    pub const fn cell(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }

    /// Places `mark` at `index`.
    ///
    /// Fails with [`IllegalMove::OutOfRange`] or [`IllegalMove::Occupied`];
    /// on failure no cell is touched.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), IllegalMove> {
        if index >= Self::CELLS {
            return Err(IllegalMove::OutOfRange(index));
        }
        if self.cells[index].is_some() {
            return Err(IllegalMove::Occupied(index));
        }
        self.cells[index] = Some(mark);
        Ok(())
    }

    /// Checks if no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterates over the indices of empty cells, in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
    }

    /// Counts the cells occupied by `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(mark)).count()
    }

    /// Iterates over all 9 cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = Option<Mark>> + '_ {
        self.cells.iter().copied()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Self::SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..Self::SIDE {
                if col > 0 {
                    write!(f, " ")?;
                }
                let cell = self.cells[row * Self::SIDE + col];
                write!(f, "{}", cell.map_or(EMPTY_CHAR, Mark::as_char))?;
            }
        }
        Ok(())
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Format: one char per cell in index order (e.g. "X.O.X....")
        let s: String = self
            .cells
            .iter()
            .map(|cell| cell.map_or(EMPTY_CHAR, Mark::as_char))
            .collect();
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.chars().count() != Self::CELLS {
            return Err(serde::de::Error::custom(format!(
                "invalid board: expected {} cells, got {}",
                Self::CELLS,
                s.chars().count()
            )));
        }
        let mut cells = [None; Self::CELLS];
        for (index, c) in s.chars().enumerate() {
            cells[index] = match c {
                EMPTY_CHAR => None,
                _ => Some(Mark::from_char(c).ok_or_else(|| {
                    serde::de::Error::custom(format!("invalid board cell: {c}"))
                })?),
            };
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(moves: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for (index, mark) in moves {
            board.place(*index, *mark).unwrap();
        }
        board
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().count(), Board::CELLS);
        assert_eq!(board.count(Mark::X), 0);
        assert_eq!(board.count(Mark::O), 0);
    }

    #[test]
    fn place_occupies_exactly_one_cell() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert_eq!(board.cell(4), Some(Mark::X));
        assert_eq!(board.count(Mark::X), 1);
        assert_eq!(board.empty_cells().count(), 8);
    }

    #[test]
    fn place_out_of_range_is_rejected() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Mark::X), Err(IllegalMove::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn place_on_occupied_cell_is_rejected() {
        let mut board = board_from(&[(0, Mark::X)]);
        assert_eq!(board.place(0, Mark::O), Err(IllegalMove::Occupied(0)));
        assert_eq!(board.cell(0), Some(Mark::X));
    }

    #[test]
    fn empty_cells_are_ascending() {
        let board = board_from(&[(1, Mark::X), (4, Mark::O), (7, Mark::X)]);
        let empties: Vec<_> = board.empty_cells().collect();
        assert_eq!(empties, [0, 2, 3, 5, 6, 8]);
    }

    #[test]
    fn full_board_is_detected() {
        let mut board = Board::new();
        let mut mark = Mark::X;
        for index in 0..Board::CELLS {
            board.place(index, mark).unwrap();
            mark = mark.opponent();
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn position_maps_row_major() {
        assert_eq!(Board::position(0), (0, 0));
        assert_eq!(Board::position(4), (1, 1));
        assert_eq!(Board::position(8), (2, 2));
        assert_eq!(Board::position(5), (1, 2));
    }

    #[test]
    fn display_renders_three_rows() {
        let board = board_from(&[(0, Mark::X), (4, Mark::O), (8, Mark::X)]);
        assert_eq!(board.to_string(), "X . .\n. O .\n. . X");
    }

    mod board_serialization {
        use super::*;

        #[test]
        fn empty_board_serializes_to_dots() {
            let serialized = serde_json::to_string(&Board::new()).unwrap();
            assert_eq!(serialized, "\".........\"");
        }

        #[test]
        fn known_value() {
            let board = board_from(&[(0, Mark::X), (2, Mark::O), (4, Mark::X)]);
            let serialized = serde_json::to_string(&board).unwrap();
            assert_eq!(serialized, "\"X.O.X....\"");
        }

        #[test]
        fn roundtrip() {
            let board = board_from(&[(3, Mark::O), (6, Mark::X), (8, Mark::O)]);
            let serialized = serde_json::to_string(&board).unwrap();
            let deserialized: Board = serde_json::from_str(&serialized).unwrap();
            assert_eq!(board, deserialized);
        }

        #[test]
        fn error_wrong_length() {
            let result: Result<Board, _> = serde_json::from_str("\"X.O\"");
            assert!(result.is_err());
            let err_msg = result.unwrap_err().to_string();
            assert!(err_msg.contains("invalid board"));
        }

        #[test]
        fn error_unknown_cell_char() {
            let result: Result<Board, _> = serde_json::from_str("\"X.O.x....\"");
            assert!(result.is_err());
            let err_msg = result.unwrap_err().to_string();
            assert!(err_msg.contains("invalid board cell"));
        }
    }
}
