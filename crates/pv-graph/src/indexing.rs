//! Coordinate-to-position lookup.
//!
//! Maps a point's exact coordinates to its position in the point list, so
//! connections (which store coordinates) can be turned into index pairs.

use std::collections::HashMap;

use crate::graph::Point;

/// Exact-coordinate key. `-0.0` is folded onto `0.0` so the key agrees with
/// `==` on floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CoordKey(u64, u64);

impl CoordKey {
    fn of(point: &Point) -> Option<Self> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        Some(Self(canonical_bits(point.x), canonical_bits(point.y)))
    }
}

fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
}

/// Index map from coordinates to point positions.
///
/// When several points share coordinates, the first one wins, matching a
/// linear "find first" scan.
#[derive(Debug, Clone, Default)]
pub struct PointIndex {
    positions: HashMap<CoordKey, usize>,
}

impl PointIndex {
    /// Build an index over `points`.
    pub fn new(points: &[Point]) -> Self {
        let mut positions = HashMap::with_capacity(points.len());
        for (i, point) in points.iter().enumerate() {
            if let Some(key) = CoordKey::of(point) {
                positions.entry(key).or_insert(i);
            }
        }
        Self { positions }
    }

    /// Position of the point at these exact coordinates, if any.
    pub fn position(&self, point: &Point) -> Option<usize> {
        CoordKey::of(point).and_then(|key| self.positions.get(&key).copied())
    }
}
