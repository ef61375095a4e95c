//! Strategy selection by name.

use std::fmt;
use std::str::FromStr;

use mazer_core::Cell;
use thiserror::Error;

use crate::result::{SearchResult, SolveError};
use crate::traits::AstarPather;
use crate::{astar, bfs, dfs};

/// One of the interchangeable search strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Breadth-first search. Shortest path.
    #[default]
    Bfs,
    /// Depth-first search. Any path.
    Dfs,
    /// A* with the Manhattan heuristic. Shortest path.
    Astar,
}

/// A name that [`Algorithm::from_str`] does not recognise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {0:?}, expected one of: bfs, dfs, astar")]
pub struct UnknownAlgorithm(pub String);

impl Algorithm {
    /// Every strategy, in display order.
    pub const ALL: [Algorithm; 3] = [Self::Bfs, Self::Dfs, Self::Astar];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Astar => "astar",
        }
    }

    /// Lenient lookup used for client requests: case-insensitive, accepts
    /// `a*`, `astar` and `a-star`, and falls back to BFS for anything else.
    /// Surrounding whitespace is part of the name, so `" dfs "` is BFS.
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or_default()
    }

    fn lookup(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bfs" => Some(Self::Bfs),
            "dfs" => Some(Self::Dfs),
            "a*" | "astar" | "a-star" => Some(Self::Astar),
            _ => None,
        }
    }

    /// Run this strategy on `pather`.
    pub fn solve<P: AstarPather>(
        self,
        pather: &P,
        start: Cell,
        end: Cell,
    ) -> Result<SearchResult, SolveError> {
        let result = match self {
            Self::Bfs => bfs(pather, start, end),
            Self::Dfs => dfs(pather, start, end),
            Self::Astar => astar(pather, start, end),
        }?;
        log::debug!(
            "{self} {start} -> {end}: found={} steps={} visited={}",
            result.found,
            result.steps,
            result.visited_order.len()
        );
        Ok(result)
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Strict lookup for command-line input: the same aliases as
    /// [`Algorithm::from_name`] after trimming, but unknown names are an
    /// error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s.trim()).ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
