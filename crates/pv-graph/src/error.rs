//! Graph-specific error types.

use pv_core::PvError;
use thiserror::Error;

use crate::graph::Point;

pub type GraphResult<T> = Result<T, GraphError>;

/// Connection bookkeeping errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The pair is already connected, in either direction.
    #[error("Connection {first} - {second} already exists")]
    DuplicateConnection { first: Point, second: Point },

    /// Both endpoints are the same point.
    #[error("Point {point} cannot be connected to itself")]
    SelfConnection { point: Point },
}

impl From<GraphError> for PvError {
    fn from(err: GraphError) -> Self {
        PvError::InvalidArg {
            what: err.to_string(),
        }
    }
}
