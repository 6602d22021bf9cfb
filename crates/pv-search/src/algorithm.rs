//! Algorithm selection.

use std::fmt;
use std::str::FromStr;

use pv_graph::AdjacencyList;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bfs::bfs;
use crate::dfs::dfs;
use crate::path::Path;

/// Which search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first: shortest path by edge count.
    Bfs,
    /// Depth-first: some simple path.
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::Dfs];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown algorithm '{0}' (expected bfs or dfs)")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Run `algorithm` from `start` to `end`.
pub fn find_path(algorithm: Algorithm, adj: &AdjacencyList, start: usize, end: usize) -> Path {
    match algorithm {
        Algorithm::Bfs => bfs(adj, start, end),
        Algorithm::Dfs => dfs(adj, start, end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!(" DFS ".parse::<Algorithm>(), Ok(Algorithm::Dfs));
        assert!("astar".parse::<Algorithm>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&Algorithm::Dfs).unwrap();
        assert_eq!(json, "\"dfs\"");
    }

    #[test]
    fn dispatch() {
        let adj = AdjacencyList::from_lists(vec![vec![1, 2], vec![0, 2], vec![1, 0]]);
        assert_eq!(find_path(Algorithm::Bfs, &adj, 0, 2).as_slice(), &[0, 2]);
        assert_eq!(find_path(Algorithm::Dfs, &adj, 0, 2).as_slice(), &[0, 1, 2]);
    }
}
