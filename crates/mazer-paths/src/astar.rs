use std::cmp::Ordering;
use std::collections::BinaryHeap;

use mazer_core::{Bounds, Cell};

use crate::frontier::Frontier;
use crate::result::{SearchResult, SolveError};
use crate::search;
use crate::traits::AstarPather;

/// Sentinel g-score for cells not reached yet.
const UNREACHABLE: i32 = i32::MAX;

/// Compute a shortest path from `start` to `end` using A*.
///
/// The frontier is ordered by `f = g + h` where `h` is
/// [`AstarPather::estimate`]. Equal `f` values pop in insertion order.
pub fn astar<P: AstarPather>(
    pather: &P,
    start: Cell,
    end: Cell,
) -> Result<SearchResult, SolveError> {
    search::run(pather, Open::new(pather, end), start, end)
}

/// Heap entry. `order` is a per-search insertion counter: the start entry
/// gets 0 and every later push takes the next value.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
struct NodeRef {
    idx: usize,
    f: i32,
    order: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, order) first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open list plus g-scores and the closed set.
struct Open<'a, P> {
    pather: &'a P,
    bounds: Bounds,
    goal: Cell,
    heap: BinaryHeap<NodeRef>,
    g: Vec<i32>,
    closed: Vec<bool>,
    counter: u64,
}

impl<'a, P: AstarPather> Open<'a, P> {
    fn new(pather: &'a P, goal: Cell) -> Self {
        let bounds = pather.bounds();
        Self {
            pather,
            bounds,
            goal,
            heap: BinaryHeap::new(),
            g: vec![UNREACHABLE; bounds.len()],
            closed: vec![false; bounds.len()],
            counter: 0,
        }
    }

    fn h(&self, idx: usize) -> i32 {
        self.pather.estimate(self.bounds.cell(idx), self.goal)
    }
}

impl<P: AstarPather> Frontier for Open<'_, P> {
    fn seed(&mut self, start: usize) {
        self.g[start] = 0;
        let f = self.h(start);
        self.heap.push(NodeRef {
            idx: start,
            f,
            order: self.counter,
        });
    }

    fn pop(&mut self) -> Option<usize> {
        loop {
            let current = self.heap.pop()?;
            // Skip stale entries left behind by later improvements.
            if self.closed[current.idx] {
                continue;
            }
            self.closed[current.idx] = true;
            return Some(current.idx);
        }
    }

    fn relax(&mut self, from: usize, to: usize) -> bool {
        let tentative_g = self.g[from] + 1;
        if tentative_g >= self.g[to] {
            return false;
        }
        self.g[to] = tentative_g;
        self.counter += 1;
        let f = tentative_g + self.h(to);
        self.heap.push(NodeRef {
            idx: to,
            f,
            order: self.counter,
        });
        true
    }
}
