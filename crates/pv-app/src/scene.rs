//! Scene documents: a graph drawn ahead of time.
//!
//! A scene lists node coordinates, connections as index pairs, and optional
//! start/end nodes. It is replayed through [`Session`], so scenes obey the
//! same rules as interactive drawing.

use std::path::Path;

use pv_core::PointId;
use serde::Deserialize;

use crate::config::{SessionConfig, is_json};
use crate::error::{AppError, AppResult};
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    /// Node coordinates, in placement order.
    #[serde(default)]
    pub points: Vec<[f64; 2]>,
    /// Connections as 0-based indices into `points`.
    #[serde(default)]
    pub connections: Vec<[usize; 2]>,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
}

impl Scene {
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a `.json` file, or YAML for any other extension.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let scene = if is_json(path) {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        tracing::debug!(
            path = %path.display(),
            points = scene.points.len(),
            connections = scene.connections.len(),
            "loaded scene"
        );
        Ok(scene)
    }

    fn id(&self, index: usize, what: &str) -> AppResult<PointId> {
        if index >= self.points.len() {
            return Err(AppError::Scene(format!(
                "{what} refers to node index {index}, but the scene has {} nodes",
                self.points.len()
            )));
        }
        PointId::for_slot(index)
            .ok_or_else(|| AppError::Scene(format!("node index {index} is too large")))
    }

    /// Build a session by placing every point, drawing every connection, and
    /// marking start/end.
    ///
    /// Fails on out-of-range indices, repeated coordinates, and duplicate
    /// connections.
    pub fn into_session(&self, config: SessionConfig) -> AppResult<Session> {
        let mut session = Session::new(config);
        for &[x, y] in &self.points {
            session.add_point(x, y)?;
        }
        for (i, &[a, b]) in self.connections.iter().enumerate() {
            let what = format!("connection {i}");
            let (a, b) = (self.id(a, &what)?, self.id(b, &what)?);
            session.connect(a, b).map_err(|e| match e {
                AppError::DuplicateConnection => AppError::Scene(format!(
                    "connection {i} ({a} - {b}) duplicates an earlier one"
                )),
                other => other,
            })?;
        }
        if let Some(start) = self.start {
            session.set_start(self.id(start, "start")?)?;
        }
        if let Some(end) = self.end {
            session.set_end(self.id(end, "end")?)?;
        }
        Ok(session)
    }
}
