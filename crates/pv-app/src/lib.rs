//! Shared application layer for pathviz.
//!
//! This crate provides the interaction-controller core used by both the CLI
//! and any GUI front end: the editing session with its connection state
//! machine, solve requests, per-algorithm path animation, session
//! configuration, and scene loading.

pub mod config;
pub mod error;
pub mod scene;
pub mod session;

// Re-export key types for convenience
pub use config::SessionConfig;
pub use error::{AppError, AppResult};
pub use scene::Scene;
pub use session::{ClickOutcome, SelectionState, Session};

pub use pv_search::{Algorithm, Path};
