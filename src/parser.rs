use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::board::Board;
use crate::data::{Cell, EMPTY};
use crate::puzzle::Puzzle;

/// Max board size - positions are stored as `u8`
const MAX_SIZE: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    Pos(usize, usize),
    LineLength(usize),
    TooLarge,
    MissingLines,
    DuplicatePiece(char),
    TrailingInput(usize),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "Empty input"),
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::LineLength(r) => write!(f, "Wrong line length on line {}", r),
            ParserErr::TooLarge => write!(f, "Board larger than 255 rows/columns"),
            ParserErr::MissingLines => write!(f, "Input ended before both boards were read"),
            ParserErr::DuplicatePiece(label) => write!(f, "Piece {} is used more than once", label),
            ParserErr::TrailingInput(r) => write!(f, "Unexpected input after goal board on line {}", r),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Puzzle {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

/// Parses the initial board, a separator line and the goal board.
///
/// Board size is taken from the length of the first line.
/// The separator can contain anything, it's skipped.
pub(crate) fn parse(input: &str) -> Result<Puzzle, ParserErr> {
    let lines: Vec<_> = input.lines().map(|line| line.trim_end_matches('\r')).collect();

    let size = lines.first().map_or(0, |line| line.chars().count());
    if size == 0 {
        return Err(ParserErr::Empty);
    }
    if size > MAX_SIZE {
        return Err(ParserErr::TooLarge);
    }
    debug!("Parsing {}x{} boards", size, size);

    if lines.len() < 2 * size + 1 {
        return Err(ParserErr::MissingLines);
    }

    let initial = parse_lines(&lines[..size], 0)?;
    let goal = parse_lines(&lines[size + 1..2 * size + 1], size + 1)?;

    if let Some(offset) = lines[2 * size + 1..]
        .iter()
        .position(|line| !line.trim().is_empty())
    {
        return Err(ParserErr::TrailingInput(2 * size + 1 + offset));
    }

    Ok(Puzzle::new(initial, goal))
}

/// Parses a single board, lines don't have to be surrounded by newlines.
pub(crate) fn parse_board(board: &str) -> Result<Board, ParserErr> {
    let lines: Vec<_> = board
        .trim_matches('\n')
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .collect();
    if lines.is_empty() || lines[0].is_empty() {
        return Err(ParserErr::Empty);
    }
    let size = lines[0].chars().count();
    if size > MAX_SIZE {
        return Err(ParserErr::TooLarge);
    }
    if lines.len() > size {
        return Err(ParserErr::TrailingInput(size));
    }
    if lines.len() < size {
        return Err(ParserErr::MissingLines);
    }
    parse_lines(&lines, 0)
}

/// `first_line` is only used to report errors with the line number in the whole input.
fn parse_lines(lines: &[&str], first_line: usize) -> Result<Board, ParserErr> {
    let size = lines.len();
    let mut grid = Vec::with_capacity(size);
    let mut seen = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let r = first_line + i;
        let mut row = Vec::with_capacity(size);
        for (c, cur_char) in line.chars().enumerate() {
            if c >= size {
                return Err(ParserErr::LineLength(r));
            }
            let cell = match cur_char {
                EMPTY => Cell::Empty,
                'A'..='Z' => {
                    if seen.contains(&cur_char) {
                        return Err(ParserErr::DuplicatePiece(cur_char));
                    }
                    seen.push(cur_char);
                    Cell::Piece(cur_char)
                }
                _ => return Err(ParserErr::Pos(r, c)),
            };
            row.push(cell);
        }
        if row.len() != size {
            return Err(ParserErr::LineLength(r));
        }
        grid.push(row);
    }

    Ok(Board::new(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pos;

    #[test]
    fn reference_puzzle() {
        let input = r"
A---
----
--D-
-BC-

----
A-D-
-BC-
----
"
        .trim_start_matches('\n');
        let puzzle: Puzzle = input.parse().unwrap();
        assert_eq!(puzzle.initial.size(), 4);
        assert_eq!(puzzle.goal.size(), 4);
        assert_eq!(puzzle.initial.cell(Pos::new(0, 0)), Cell::Piece('A'));
        assert_eq!(puzzle.initial.cell(Pos::new(3, 2)), Cell::Piece('C'));
        assert_eq!(puzzle.goal.position_of('D'), Some(Pos::new(1, 2)));
        assert_eq!(puzzle.initial.labels(), puzzle.goal.labels());
    }

    #[test]
    fn separator_content_ignored() {
        let input = "AB\n--\n==========\n--\nBA";
        let puzzle: Puzzle = input.parse().unwrap();
        assert_eq!(puzzle.goal.position_of('B'), Some(Pos::new(1, 0)));
    }

    #[test]
    fn windows_line_endings() {
        let input = "A-\r\n--\r\n\r\n--\r\n-A\r\n";
        let puzzle: Puzzle = input.parse().unwrap();
        assert_eq!(puzzle.goal.position_of('A'), Some(Pos::new(1, 1)));
    }

    #[test]
    fn trailing_blank_lines() {
        let input = "A-\n--\n\n--\n-A\n\n  \n";
        assert!(input.parse::<Puzzle>().is_ok());
    }

    #[test]
    fn fail_empty() {
        assert_failure("", ParserErr::Empty);
        assert_failure("\nA-\n--", ParserErr::Empty);
    }

    #[test]
    fn fail_invalid_cell() {
        assert_failure("A-\n-x\n\n--\n-A", ParserErr::Pos(1, 1));
        assert_failure("A-\n--\n\n--\n#A", ParserErr::Pos(3, 0));
    }

    #[test]
    fn fail_line_length() {
        assert_failure("A--\n--\n---\n\n---\n---\n--A", ParserErr::LineLength(1));
        assert_failure("A-\n--\n\n--\n-A-", ParserErr::LineLength(4));
    }

    #[test]
    fn fail_missing_lines() {
        assert_failure("A-\n--\n\n--", ParserErr::MissingLines);
        assert_failure("A-\n--", ParserErr::MissingLines);
    }

    #[test]
    fn fail_duplicate_piece() {
        assert_failure("AA\n--\n\n--\nAA", ParserErr::DuplicatePiece('A'));
    }

    #[test]
    fn fail_trailing_input() {
        assert_failure("A-\n--\n\n--\n-A\n\nB-", ParserErr::TrailingInput(6));
    }

    #[test]
    fn single_board() {
        let board: Board = "\nAB\n-C\n".parse().unwrap();
        assert_eq!(board.labels(), vec!['A', 'B', 'C']);
        assert_eq!(parse_board("AB\n").unwrap_err(), ParserErr::MissingLines);
        assert_eq!(
            parse_board("A-\n--\n--").unwrap_err(),
            ParserErr::TrailingInput(2)
        );
    }

    #[test]
    fn errors_are_plain_values() {
        let err = "A-\n-x\n\n--\n-A".parse::<Puzzle>().unwrap_err();
        let copy = err;
        assert_eq!(err, copy);
        assert_eq!(copy.to_string(), "Invalid cell at pos: [1, 1]");
    }

    fn assert_failure(input: &str, expected_err: ParserErr) {
        assert_eq!(input.parse::<Puzzle>().unwrap_err(), expected_err);
    }
}
