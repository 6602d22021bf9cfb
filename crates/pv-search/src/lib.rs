//! pv-search: path finding over pathviz adjacency lists.
//!
//! - [`bfs`]: shortest path by edge count
//! - [`dfs`]: some simple path, found depth-first with an explicit stack
//!
//! Both are pure functions of their inputs and return an empty [`Path`] when
//! the end point cannot be reached from the start point.

pub mod algorithm;
pub mod bfs;
pub mod dfs;
pub mod path;

pub use algorithm::{Algorithm, ParseAlgorithmError, find_path};
pub use bfs::bfs;
pub use dfs::dfs;
pub use path::Path;
