use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::{Dir, Pos};

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: u8,
    cols: u8,
}

impl<T> Vec2d<T> {
    pub(crate) fn rows(&self) -> u8 {
        self.rows
    }

    pub(crate) fn cols(&self) -> u8 {
        self.cols
    }

    /// Row-major, same order as the underlying data.
    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Pos::new(r, c)))
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub(crate) fn neighbor(&self, pos: Pos, dir: Dir) -> Option<Pos> {
        pos.step(dir)
            .filter(|new_pos| new_pos.r < self.rows && new_pos.c < self.cols)
    }
}

impl<T: Clone> Vec2d<T> {
    /// Caller guarantees all rows have the same non-zero length and there are at most 255 of both.
    pub(crate) fn new(grid: &[Vec<T>]) -> Self {
        assert!(!grid.is_empty() && !grid[0].is_empty());
        assert!(grid.len() <= 255 && grid[0].len() <= 255);

        let cols = grid[0].len();
        let mut data = Vec::with_capacity(grid.len() * cols);
        for row in grid {
            assert_eq!(row.len(), cols, "All rows must have the same length");
            data.extend_from_slice(row);
        }
        Vec2d {
            data,
            rows: grid.len() as u8,
            cols: cols as u8,
        }
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.into()) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        let index = usize::from(index.r) * usize::from(self.cols) + usize::from(index.c);
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = usize::from(index.r) * usize::from(self.cols) + usize::from(index.c);
        &mut self.data[index]
    }
}
