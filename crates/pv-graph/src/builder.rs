//! Adjacency construction.

use pv_core::timing::{Timer, solve_timing};

use crate::graph::{AdjacencyList, Connection, Point};
use crate::indexing::PointIndex;

/// Build the adjacency list for `points` and `connections`.
///
/// The result has one neighbor list per point, in the same order as `points`.
/// Every connection whose endpoints both match a point (by exact coordinates)
/// adds each endpoint to the other's list, in connection order. Connections
/// that reference an unknown point are dropped without error.
///
/// Pure: identical inputs always produce identical output.
pub fn build_adjacency(points: &[Point], connections: &[Connection]) -> AdjacencyList {
    let timer = Timer::start("build_adjacency");
    let index = PointIndex::new(points);
    let mut adj = AdjacencyList::with_points(points.len());

    let mut dropped = 0usize;
    for conn in connections {
        match (index.position(&conn.first), index.position(&conn.second)) {
            (Some(a), Some(b)) => adj.link(a, b),
            _ => {
                dropped += 1;
                tracing::trace!(connection = %conn, "dropping connection to unknown point");
            }
        }
    }

    tracing::debug!(
        points = points.len(),
        connections = connections.len(),
        dropped,
        "adjacency rebuilt"
    );
    timer.stop_into(&solve_timing::ADJACENCY_BUILD);
    adj
}
