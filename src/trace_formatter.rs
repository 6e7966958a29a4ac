use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Format;

/// Successive boards, each followed by an empty line.
pub struct TraceFormatter<'a> {
    boards: &'a [Board],
    format: Format,
}

impl<'a> TraceFormatter<'a> {
    pub(crate) fn new(boards: &'a [Board], format: Format) -> Self {
        Self { boards, format }
    }
}

impl Display for TraceFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for board in self.boards {
            writeln!(f, "{}", board.format(self.format))?;
        }
        Ok(())
    }
}

impl Debug for TraceFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
