use fnv::FnvHashMap;

use crate::board::Board;
use crate::data::Pos;

/// Target position of every piece label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets {
    targets: FnvHashMap<char, Pos>,
}

impl Targets {
    /// The reference goal layout:
    /// ```text
    /// - - - -
    /// A - D -
    /// - B C -
    /// - - - -
    /// ```
    pub fn canonical() -> Self {
        let targets = [
            ('A', Pos::new(1, 0)),
            ('B', Pos::new(2, 1)),
            ('C', Pos::new(2, 2)),
            ('D', Pos::new(1, 2)),
        ]
        .iter()
        .cloned()
        .collect();
        Targets { targets }
    }

    pub fn from_goal(goal: &Board) -> Self {
        Targets {
            targets: goal.pieces().map(|(pos, label)| (label, pos)).collect(),
        }
    }

    /// Labels without a target are measured against the top left corner.
    pub fn target(&self, label: char) -> Pos {
        self.targets
            .get(&label)
            .cloned()
            .unwrap_or_else(|| Pos::new(0, 0))
    }
}

/// Sum of Manhattan distances of all pieces to their targets. Less is better.
pub fn heuristic(board: &Board, targets: &Targets) -> u32 {
    board
        .pieces()
        .map(|(pos, label)| pos.dist(targets.target(label)))
        .sum()
}
