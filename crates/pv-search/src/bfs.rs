//! Breadth-first shortest path.

use std::collections::VecDeque;

use pv_core::timing::{Timer, solve_timing};
use pv_graph::AdjacencyList;

use crate::path::{Path, Traversal};

/// Shortest path (by edge count) from `start` to `end`.
///
/// Nodes are marked visited when enqueued and the search stops as soon as
/// `end` is dequeued. Among several shortest paths, the one discovered first
/// in adjacency order wins. Returns the empty path when `end` is unreachable
/// or either index is out of range.
pub fn bfs(adj: &AdjacencyList, start: usize, end: usize) -> Path {
    if !adj.contains(start) || !adj.contains(end) {
        tracing::warn!(start, end, len = adj.len(), "bfs index out of range");
        return Path::empty();
    }

    let timer = Timer::start("bfs");
    let mut state = Traversal::new(adj.len());
    let mut queue = VecDeque::new();

    state.visited[start] = true;
    queue.push_back(start);

    let mut dequeued = 0usize;
    while let Some(curr) = queue.pop_front() {
        dequeued += 1;
        if curr == end {
            break;
        }
        for &next in adj.neighbors(curr) {
            if !state.visited[next] {
                state.discover(next, curr);
                queue.push_back(next);
            }
        }
    }

    let path = state.reconstruct(start, end);
    tracing::debug!(start, end, dequeued, len = path.len(), "bfs finished");
    timer.stop_into(&solve_timing::BFS_CALLS);
    path
}
