use std::fmt::{self, Display, Formatter};

pub(crate) const EMPTY: char = '-';

/// The order is observable - it decides tie-breaking in both searches.
pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Piece(char),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn label(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Piece(label) => Some(label),
        }
    }

    /// Value mixed into the board hash.
    pub(crate) fn code(self) -> u64 {
        match self {
            Cell::Empty => EMPTY as u64,
            Cell::Piece(label) => label as u64,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Cell::Empty => write!(f, "{}", EMPTY),
            Cell::Piece(label) => write!(f, "{}", label),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    pub fn dist(self, other: Pos) -> u32 {
        let dr = (i32::from(self.r) - i32::from(other.r)).abs();
        let dc = (i32::from(self.c) - i32::from(other.c)).abs();
        (dr + dc) as u32
    }

    /// `None` when the step would leave the top or left edge,
    /// the other two edges are up to the grid.
    pub(crate) fn step(self, dir: Dir) -> Option<Pos> {
        let (dr, dc) = dir.offset();
        let r = i16::from(self.r) + dr;
        let c = i16::from(self.c) + dc;
        if r < 0 || c < 0 {
            None
        } else {
            Some(Pos::new(r as u8, c as u8))
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    fn offset(self) -> (i16, i16) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}
