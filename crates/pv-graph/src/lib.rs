//! pv-graph: graph layer for pathviz.
//!
//! Provides:
//! - Point / Connection data types with exact-coordinate identity
//! - A duplicate-rejecting connection set
//! - Adjacency construction indexed by point position
//!
//! # Example
//!
//! ```
//! use pv_graph::{Connection, Point, build_adjacency};
//!
//! let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
//! let connections = [Connection::new(points[0], points[1])];
//! let adj = build_adjacency(&points, &connections);
//!
//! assert_eq!(adj.neighbors(0), &[1]);
//! assert_eq!(adj.neighbors(1), &[0]);
//! ```

pub mod builder;
pub mod connections;
pub mod error;
pub mod graph;
pub mod indexing;

// Re-exports for ergonomics
pub use builder::build_adjacency;
pub use connections::ConnectionSet;
pub use error::{GraphError, GraphResult};
pub use graph::{AdjacencyList, Connection, Point};
pub use indexing::PointIndex;
