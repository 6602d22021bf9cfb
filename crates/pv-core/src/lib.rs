//! pv-core: shared foundation for pathviz.
//!
//! Contains:
//! - ids (stable compact IDs for canvas points)
//! - numeric (Real + finiteness checks for coordinates)
//! - error (shared error types)
//! - timing (opt-in solve timing)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PvError, PvResult};
pub use ids::*;
pub use numeric::*;
