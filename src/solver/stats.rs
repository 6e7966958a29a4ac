use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    created: usize,
    expanded: usize,
    reexpanded: usize,
    skipped: usize,
    max_frontier: usize,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    /// Boards pushed to the frontier, including the initial one.
    pub fn total_created(&self) -> usize {
        self.created
    }

    /// Boards popped from the frontier - the length of the trace.
    pub fn total_expanded(&self) -> usize {
        self.expanded
    }

    /// Popped boards which had already been expanded before.
    pub fn total_reexpanded(&self) -> usize {
        self.reexpanded
    }

    /// Successors that were not pushed because they were visited
    /// (or already queued when using the strict frontier).
    pub fn total_skipped(&self) -> usize {
        self.skipped
    }

    pub fn max_frontier(&self) -> usize {
        self.max_frontier
    }

    pub(crate) fn add_created(&mut self, frontier_len: usize) {
        self.created += 1;
        if frontier_len > self.max_frontier {
            self.max_frontier = frontier_len;
        }
    }

    /// Returns true every 10k expansions so the caller can log progress.
    pub(crate) fn add_expanded(&mut self, already_visited: bool) -> bool {
        self.expanded += 1;
        if already_visited {
            self.reexpanded += 1;
        }
        self.expanded % 10_000 == 0
    }

    pub(crate) fn add_skipped(&mut self) {
        self.skipped += 1;
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "created: {}, expanded: {}, re-expanded: {}, skipped: {}, max frontier: {}",
            self.created, self.expanded, self.reexpanded, self.skipped, self.max_frontier
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States created: {}", (self.created as u64).separated_string())?;
        writeln!(f, "States expanded: {}", (self.expanded as u64).separated_string())?;
        writeln!(f, "Re-expanded duplicates: {}", (self.reexpanded as u64).separated_string())?;
        writeln!(f, "Successors skipped: {}", (self.skipped as u64).separated_string())?;
        writeln!(f, "Largest frontier: {}", (self.max_frontier as u64).separated_string())
    }
}
