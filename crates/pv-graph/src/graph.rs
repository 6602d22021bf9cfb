//! Core graph data structures.

use core::fmt;

use pv_core::{PvResult, Real, ensure_finite, same_coordinate};

/// A point placed on the canvas.
///
/// Points carry no identity of their own: two points are the same point when
/// both coordinates are exactly equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// Create a point, rejecting NaN and infinite coordinates.
    pub fn try_new(x: Real, y: Real) -> PvResult<Self> {
        Ok(Self {
            x: ensure_finite(x, "point x")?,
            y: ensure_finite(y, "point y")?,
        })
    }

    /// Exact coordinate identity.
    pub fn same_position(&self, other: &Point) -> bool {
        same_coordinate(self.x, other.x) && same_coordinate(self.y, other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[Real; 2]> for Point {
    fn from([x, y]: [Real; 2]) -> Self {
        Self { x, y }
    }
}

/// An undirected, unweighted connection between two points.
///
/// `first`/`second` record the order the user drew them in; identity ignores
/// that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub first: Point,
    pub second: Point,
}

impl Connection {
    pub const fn new(first: Point, second: Point) -> Self {
        Self { first, second }
    }

    /// True when both connections join the same two points, in either direction.
    pub fn same_as(&self, other: &Connection) -> bool {
        (self.first.same_position(&other.first) && self.second.same_position(&other.second))
            || (self.first.same_position(&other.second)
                && self.second.same_position(&other.first))
    }

    pub fn is_loop(&self) -> bool {
        self.first.same_position(&self.second)
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.second)
    }
}

/// Neighbor lists indexed by point position.
///
/// `neighbors(i)` lists the positions connected to point `i`, in the order the
/// connections were drawn. Always rebuilt from scratch, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    pub(crate) lists: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// An adjacency list with `len` points and no connections.
    pub fn with_points(len: usize) -> Self {
        Self {
            lists: vec![Vec::new(); len],
        }
    }

    /// Build directly from neighbor lists (mainly for tests and tools).
    pub fn from_lists(lists: Vec<Vec<usize>>) -> Self {
        Self { lists }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Whether `index` refers to a point in this list.
    pub fn contains(&self, index: usize) -> bool {
        index < self.lists.len()
    }

    /// Neighbors of point `index` (empty if out of range).
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.lists.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, index: usize) -> usize {
        self.neighbors(index).len()
    }

    /// Sum of all neighbor-list lengths: twice the number of edges.
    pub fn entry_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// Whether `a` lists `b` as a neighbor.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.lists.iter().enumerate().map(|(i, n)| (i, n.as_slice()))
    }

    pub(crate) fn link(&mut self, a: usize, b: usize) {
        self.lists[a].push(b);
        self.lists[b].push(a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_identity_ignores_direction() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let c = Point::new(20.0, 0.0);
        assert!(Connection::new(a, b).same_as(&Connection::new(b, a)));
        assert!(!Connection::new(a, b).same_as(&Connection::new(a, c)));
    }

    #[test]
    fn point_rejects_non_finite() {
        assert!(Point::try_new(f64::NAN, 0.0).is_err());
        assert!(Point::try_new(0.0, f64::NEG_INFINITY).is_err());
        assert_eq!(Point::try_new(1.0, 2.0).unwrap(), Point::new(1.0, 2.0));
    }

    #[test]
    fn adjacency_accessors() {
        let adj = AdjacencyList::from_lists(vec![vec![1], vec![0, 2], vec![1]]);
        assert_eq!(adj.len(), 3);
        assert_eq!(adj.degree(1), 2);
        assert_eq!(adj.entry_count(), 4);
        assert!(adj.are_adjacent(2, 1));
        assert!(!adj.are_adjacent(0, 2));
        assert!(adj.neighbors(99).is_empty());
        assert!(!adj.contains(3));
    }

    #[test]
    fn display_formats() {
        let c = Connection::new(Point::new(1.0, 2.5), Point::new(3.0, 4.0));
        assert_eq!(c.to_string(), "(1, 2.5) - (3, 4)");
    }
}
