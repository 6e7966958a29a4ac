use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::board::Board;

use super::heuristic::{heuristic, Targets};

/// Boards waiting to be expanded.
pub(crate) trait Frontier {
    fn push(&mut self, board: Board);

    fn pop(&mut self) -> Option<Board>;

    fn len(&self) -> usize;
}

/// Last in, first out.
#[derive(Debug, Default)]
pub(crate) struct StackFrontier {
    stack: Vec<Board>,
}

impl StackFrontier {
    pub(crate) fn new() -> Self {
        StackFrontier::default()
    }
}

impl Frontier for StackFrontier {
    fn push(&mut self, board: Board) {
        self.stack.push(board);
    }

    fn pop(&mut self) -> Option<Board> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

#[derive(Debug)]
struct HeapEntry {
    h: u32,
    /// insertion order - ties are popped first in first out
    seq: u64,
    board: Board,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // seq is unique so the board never needs comparing
        (self.h, self.seq).cmp(&(other.h, other.seq))
    }
}

/// Lowest heuristic value first.
#[derive(Debug)]
pub(crate) struct GreedyFrontier<'a> {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    targets: &'a Targets,
    next_seq: u64,
}

impl<'a> GreedyFrontier<'a> {
    pub(crate) fn new(targets: &'a Targets) -> Self {
        GreedyFrontier {
            heap: BinaryHeap::new(),
            targets,
            next_seq: 0,
        }
    }
}

impl Frontier for GreedyFrontier<'_> {
    fn push(&mut self, board: Board) {
        let h = heuristic(&board, self.targets);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapEntry { h, seq, board }));
    }

    fn pop(&mut self) -> Option<Board> {
        self.heap.pop().map(|Reverse(entry)| entry.board)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
