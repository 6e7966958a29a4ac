use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::board_formatter::BoardFormatter;
use crate::config::Format;
use crate::data::{Cell, Pos};
use crate::vec2d::Vec2d;

/// A snapshot of all piece positions.
///
/// Boards are never modified after construction,
/// moving a piece always creates a new board (see `Board::with_move`)
/// so boards already sitting in a frontier or visited set stay valid.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Vec2d<Cell>,
}

impl Board {
    /// Panics if the grid is empty, not square or larger than 255x255.
    /// The parser checks all of that and returns an error instead.
    pub fn new(rows: &[Vec<Cell>]) -> Self {
        assert!(
            rows.iter().all(|row| row.len() == rows.len()),
            "Board must be square"
        );
        Board {
            grid: Vec2d::new(rows),
        }
    }

    pub fn size(&self) -> u8 {
        self.grid.rows()
    }

    pub fn cell(&self, pos: Pos) -> Cell {
        self.grid[pos]
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, char)> + '_ {
        self.grid
            .positions()
            .filter_map(move |pos| self.grid[pos].label().map(|label| (pos, label)))
    }

    /// Sorted labels of all pieces - equal for boards reachable from each other.
    pub fn labels(&self) -> Vec<char> {
        let mut labels: Vec<_> = self.pieces().map(|(_, label)| label).collect();
        labels.sort();
        labels
    }

    pub fn position_of(&self, label: char) -> Option<Pos> {
        self.pieces()
            .find(|&(_, l)| l == label)
            .map(|(pos, _)| pos)
    }

    pub(crate) fn grid(&self) -> &Vec2d<Cell> {
        &self.grid
    }

    /// Copy of this board with the piece at `from` moved to `to`.
    /// Doesn't check the move is legal.
    pub(crate) fn with_move(&self, from: Pos, to: Pos) -> Board {
        let mut grid = self.grid.clone();
        grid[to] = grid[from];
        grid[from] = Cell::Empty;
        Board { grid }
    }

    /// Order-sensitive combining hash over all cells in row-major order.
    pub fn combined_hash(&self) -> u64 {
        self.grid.iter().fold(0u64, |hash, cell| {
            hash ^ (hash << 5)
                .wrapping_add(hash >> 2)
                .wrapping_add(cell.code())
        })
    }

    pub fn format(&self, format: Format) -> BoardFormatter<'_> {
        BoardFormatter::new(self, format)
    }
}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.combined_hash());
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Format::Spaced))
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Format::Compact))
    }
}
