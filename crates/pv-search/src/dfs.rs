//! Depth-first path.

use pv_core::timing::{Timer, solve_timing};
use pv_graph::AdjacencyList;

use crate::path::{Path, Traversal};

/// A stack frame: the node being expanded and the next neighbor to try.
struct Frame {
    node: usize,
    cursor: usize,
}

/// Some simple path from `start` to `end`, found depth-first.
///
/// Neighbors are tried in adjacency order and the search stops as soon as
/// `end` is visited, so the result is the same path a recursive search would
/// return. It is not necessarily the shortest. The frontier lives on an
/// explicit stack, so deep graphs cannot overflow the call stack.
///
/// Returns the empty path when `end` is unreachable or either index is out of
/// range.
pub fn dfs(adj: &AdjacencyList, start: usize, end: usize) -> Path {
    if !adj.contains(start) || !adj.contains(end) {
        tracing::warn!(start, end, len = adj.len(), "dfs index out of range");
        return Path::empty();
    }

    let timer = Timer::start("dfs");
    let mut state = Traversal::new(adj.len());
    state.visited[start] = true;

    let mut stack = vec![Frame {
        node: start,
        cursor: 0,
    }];
    let mut found = start == end;

    while !found {
        let Some(top) = stack.last_mut() else {
            break;
        };
        let neighbors = adj.neighbors(top.node);
        let Some(&next) = neighbors.get(top.cursor) else {
            stack.pop();
            continue;
        };
        top.cursor += 1;

        if state.visited[next] {
            continue;
        }
        state.discover(next, top.node);
        if next == end {
            found = true;
        } else {
            stack.push(Frame {
                node: next,
                cursor: 0,
            });
        }
    }

    let path = state.reconstruct(start, end);
    tracing::debug!(start, end, found, len = path.len(), "dfs finished");
    timer.stop_into(&solve_timing::DFS_CALLS);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adj(lists: &[&[usize]]) -> AdjacencyList {
        AdjacencyList::from_lists(lists.iter().map(|l| l.to_vec()).collect())
    }

    #[test]
    fn line_graph() {
        let a = adj(&[&[1], &[0, 2], &[1]]);
        assert_eq!(dfs(&a, 0, 2).as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn follows_first_branch_deep() {
        // 0 connects to 1 and 3; 1 leads on to 2 which reaches 3.
        let a = adj(&[&[1, 3], &[0, 2], &[1, 3], &[0, 2]]);
        assert_eq!(dfs(&a, 0, 3).as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn backtracks_out_of_dead_end() {
        // 0 - 1 (dead end), 0 - 2 - 3
        let a = adj(&[&[1, 2], &[0], &[0, 3], &[2]]);
        assert_eq!(dfs(&a, 0, 3).as_slice(), &[0, 2, 3]);
    }

    #[test]
    fn disconnected_is_empty() {
        let a = adj(&[&[1], &[0], &[]]);
        assert!(dfs(&a, 0, 2).is_empty());
    }

    #[test]
    fn start_equals_end() {
        let a = adj(&[&[1], &[0]]);
        assert_eq!(dfs(&a, 0, 0).as_slice(), &[0]);
    }

    #[test]
    fn long_chain_does_not_recurse() {
        let n = 200_000;
        let lists = (0..n)
            .map(|i| {
                let mut l = Vec::new();
                if i > 0 {
                    l.push(i - 1);
                }
                if i + 1 < n {
                    l.push(i + 1);
                }
                l
            })
            .collect();
        let a = AdjacencyList::from_lists(lists);
        let path = dfs(&a, 0, n - 1);
        assert_eq!(path.len(), n);
    }
}
