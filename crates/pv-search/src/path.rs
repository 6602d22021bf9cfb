//! Paths and the per-run traversal state they are reconstructed from.

use pv_graph::AdjacencyList;

/// Ordered point positions from start to end, inclusive.
///
/// An empty path means no path was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<usize>);

impl Path {
    /// The "no path" result.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges walked (0 for empty and single-point paths).
    pub fn edge_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<usize> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Consecutive `(from, to)` pairs along the path.
    pub fn segments(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// True if every consecutive pair is adjacent in `adj`.
    pub fn is_walk_in(&self, adj: &AdjacencyList) -> bool {
        self.0.iter().all(|&i| adj.contains(i))
            && self.segments().all(|(a, b)| adj.are_adjacent(a, b))
    }
}

impl From<Vec<usize>> for Path {
    fn from(v: Vec<usize>) -> Self {
        Self(v)
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(no path)");
        }
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            // canvas labels are 1-based
            write!(f, "{}", node + 1)?;
        }
        Ok(())
    }
}

/// Visited flags and discovery parents for one search run.
#[derive(Debug)]
pub(crate) struct Traversal {
    pub visited: Vec<bool>,
    pub parent: Vec<Option<usize>>,
}

impl Traversal {
    pub fn new(len: usize) -> Self {
        Self {
            visited: vec![false; len],
            parent: vec![None; len],
        }
    }

    /// Mark `node` discovered from `from`.
    pub fn discover(&mut self, node: usize, from: usize) {
        self.visited[node] = true;
        self.parent[node] = Some(from);
    }

    /// Walk parent pointers back from `end`, then reverse.
    ///
    /// The walk is only accepted if it arrives at `start`; otherwise `end` was
    /// never reached and the result is the empty path.
    pub fn reconstruct(&self, start: usize, end: usize) -> Path {
        let mut walk = vec![end];
        let mut curr = end;
        while let Some(p) = self.parent[curr] {
            walk.push(p);
            curr = p;
        }
        walk.reverse();

        if walk.first() == Some(&start) {
            Path(walk)
        } else {
            Path::empty()
        }
    }
}
