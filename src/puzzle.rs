use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Format;

#[derive(Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub initial: Board,
    pub goal: Board,
}

impl Puzzle {
    pub fn new(initial: Board, goal: Board) -> Self {
        Puzzle { initial, goal }
    }

    /// Whether the goal uses exactly the pieces of the initial board.
    /// If not, the goal can't be reached but searching is still allowed.
    pub fn same_pieces(&self) -> bool {
        self.initial.labels() == self.goal.labels()
    }

    /// Writes both boards in the input format - parses back into the same puzzle.
    pub fn to_input(&self) -> String {
        format!(
            "{}\n{}",
            self.initial.format(Format::Compact),
            self.goal.format(Format::Compact)
        )
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.initial)?;
        write!(f, "{}", self.goal)
    }
}

impl Debug for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_input())
    }
}
