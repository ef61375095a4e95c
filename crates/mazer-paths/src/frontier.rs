//! Frontier disciplines plugged into the shared search driver.
//!
//! Frontiers deal in flat cell indices (see
//! [`Bounds::index`](mazer_core::Bounds::index)) so bookkeeping can live in
//! plain vectors.

use std::collections::VecDeque;

/// The working set of a search: which cell is finalized next, and whether a
/// newly seen neighbour is worth (re)scheduling.
pub(crate) trait Frontier {
    /// Schedule the start cell.
    fn seed(&mut self, start: usize);

    /// Remove and return the next cell to finalize, or `None` when the
    /// frontier is exhausted.
    fn pop(&mut self) -> Option<usize>;

    /// Offer `to`, an open neighbour of the just-finalized `from`. Returns
    /// true when `to` was scheduled through `from`, in which case the driver
    /// records `from` as its predecessor.
    fn relax(&mut self, from: usize, to: usize) -> bool;
}

/// Order in which scheduled indices come back out.
pub(crate) trait Discipline: Default {
    fn put(&mut self, idx: usize);
    fn take(&mut self) -> Option<usize>;
}

/// First in, first out.
impl Discipline for VecDeque<usize> {
    #[inline]
    fn put(&mut self, idx: usize) {
        self.push_back(idx);
    }

    #[inline]
    fn take(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

/// Last in, first out.
impl Discipline for Vec<usize> {
    #[inline]
    fn put(&mut self, idx: usize) {
        self.push(idx);
    }

    #[inline]
    fn take(&mut self) -> Option<usize> {
        self.pop()
    }
}

/// Frontier that marks cells when they are scheduled, so each cell enters
/// it at most once and keeps its first-found predecessor.
pub(crate) struct Marked<D> {
    pending: D,
    seen: Vec<bool>,
}

impl<D: Discipline> Marked<D> {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            pending: D::default(),
            seen: vec![false; len],
        }
    }

    fn schedule(&mut self, idx: usize) -> bool {
        if self.seen[idx] {
            return false;
        }
        self.seen[idx] = true;
        self.pending.put(idx);
        true
    }
}

impl<D: Discipline> Frontier for Marked<D> {
    fn seed(&mut self, start: usize) {
        self.schedule(start);
    }

    fn pop(&mut self) -> Option<usize> {
        self.pending.take()
    }

    fn relax(&mut self, _from: usize, to: usize) -> bool {
        self.schedule(to)
    }
}

/// Breadth-first frontier.
pub(crate) type Queue = Marked<VecDeque<usize>>;

/// Depth-first frontier.
pub(crate) type Stack = Marked<Vec<usize>>;
