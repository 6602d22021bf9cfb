//! Error types for the pv-app session layer.

use std::path::PathBuf;

use pv_core::PointId;

/// Application error type shared by the CLI and any GUI front end.
///
/// The `Display` text of the first four variants is exactly what the user
/// sees in the status line.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Start node is not set")]
    StartNotSet,

    #[error("End node is not set")]
    EndNotSet,

    #[error("No available path.")]
    NoPathFound,

    #[error("Nodes already connected")]
    DuplicateConnection,

    #[error("A node already exists at ({x}, {y})")]
    PointExists { x: f64, y: f64 },

    #[error("Node {0} does not exist")]
    UnknownPoint(PointId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid scene: {0}")]
    Scene(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for pv-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<pv_core::PvError> for AppError {
    fn from(err: pv_core::PvError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<pv_graph::GraphError> for AppError {
    fn from(err: pv_graph::GraphError) -> Self {
        match err {
            pv_graph::GraphError::DuplicateConnection { .. } => AppError::DuplicateConnection,
            other => AppError::InvalidInput(other.to_string()),
        }
    }
}
