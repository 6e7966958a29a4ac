use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Format;
use crate::data::Pos;

pub struct BoardFormatter<'a> {
    board: &'a Board,
    format: Format,
}

impl<'a> BoardFormatter<'a> {
    pub(crate) fn new(board: &'a Board, format: Format) -> Self {
        Self { board, format }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let grid = self.board.grid();
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                let cell = grid[Pos::new(r, c)];
                match self.format {
                    Format::Spaced => write!(f, "{} ", cell)?,
                    Format::Compact => write!(f, "{}", cell)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> Display for BoardFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for BoardFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_board;

    #[test]
    fn formatting_board() {
        let compact = r"
A---
----
--D-
-BC-
"
        .trim_start_matches('\n');
        // trailing spaces are part of the spaced format
        let spaced = "
A - - - \n\
- - - - \n\
- - D - \n\
- B C - \n\
"
        .trim_start_matches('\n');

        let board = parse_board(compact).unwrap();
        assert_eq!(board.format(Format::Compact).to_string(), compact);
        assert_eq!(board.format(Format::Spaced).to_string(), spaced);
        assert_eq!(board.to_string(), spaced);
        assert_eq!(format!("{:?}", board), compact);
        assert_eq!(format!("{:?}", board.format(Format::Spaced)), spaced);
    }
}
