//! Interactive graph-building session.
//!
//! Owns everything a canvas front end mutates (points, connections,
//! start/end, the pending-connection selection) plus one animator per
//! algorithm, and turns solve requests into animated paths.

use pv_anim::Animator;
use pv_core::PointId;
use pv_graph::{AdjacencyList, Connection, ConnectionSet, Point, build_adjacency};
use pv_search::{Algorithm, Path, find_path};

use crate::config::SessionConfig;
use crate::error::{AppError, AppResult};

/// Connection-drawing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// No node selected.
    #[default]
    Idle,
    /// A node was clicked; the next node clicked gets connected to it.
    AwaitingSecondNode(PointId),
}

/// What a node click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First node of a connection chosen.
    Selected(PointId),
    /// A new connection was drawn.
    Connected(PointId, PointId),
    /// The selected node was clicked again; nothing drawn.
    Cancelled,
}

pub struct Session {
    config: SessionConfig,
    points: Vec<Point>,
    connections: ConnectionSet,
    start: Option<PointId>,
    end: Option<PointId>,
    selection: SelectionState,
    error: Option<String>,
    bfs: Animator,
    dfs: Animator,
}

/// Id for list position `slot`; fails once ids run out.
pub(crate) fn id_for_slot(slot: usize) -> AppResult<PointId> {
    PointId::for_slot(slot).ok_or_else(|| AppError::InvalidInput("too many nodes".to_string()))
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("points", &self.points.len())
            .field("connections", &self.connections.len())
            .field("start", &self.start)
            .field("end", &self.end)
            .field("selection", &self.selection)
            .field("error", &self.error)
            .finish()
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let delay = config.step_delay();
        Self {
            config,
            points: Vec::new(),
            connections: ConnectionSet::new(),
            start: None,
            end: None,
            selection: SelectionState::Idle,
            error: None,
            bfs: Animator::new(delay),
            dfs: Animator::new(delay),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // ----- points -----

    /// Place a node at `(x, y)`.
    ///
    /// Fails with `PointExists` if a node already sits at exactly these
    /// coordinates. Does not touch the status line.
    pub fn add_point(&mut self, x: f64, y: f64) -> AppResult<PointId> {
        let point = Point::try_new(x, y)?;
        if self.points.iter().any(|p| p.same_position(&point)) {
            return Err(AppError::PointExists { x, y });
        }
        let id = id_for_slot(self.points.len())?;
        self.points.push(point);
        tracing::info!(%id, x, y, "node created");
        Ok(id)
    }

    pub fn point(&self, id: PointId) -> AppResult<Point> {
        self.points
            .get(id.slot())
            .copied()
            .ok_or(AppError::UnknownPoint(id))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    // ----- connections -----

    /// Feed a primary click on node `id` into the connection state machine.
    ///
    /// From `Idle` the node becomes selected. With a node already selected,
    /// clicking a different node connects the two; clicking the same node
    /// cancels. Either way the state returns to `Idle`, even when the
    /// connection is rejected as a duplicate.
    pub fn click_node(&mut self, id: PointId) -> AppResult<ClickOutcome> {
        self.point(id)?;
        match self.selection {
            SelectionState::Idle => {
                self.selection = SelectionState::AwaitingSecondNode(id);
                Ok(ClickOutcome::Selected(id))
            }
            SelectionState::AwaitingSecondNode(first) => {
                self.selection = SelectionState::Idle;
                if first == id {
                    return Ok(ClickOutcome::Cancelled);
                }
                self.connect(first, id)?;
                Ok(ClickOutcome::Connected(first, id))
            }
        }
    }

    /// Connect two nodes directly.
    ///
    /// A pair that is already connected (either direction) is rejected with
    /// `DuplicateConnection`, recorded as the current error, and the graph is
    /// left unchanged. Success clears the error.
    pub fn connect(&mut self, a: PointId, b: PointId) -> AppResult<()> {
        let connection = Connection::new(self.point(a)?, self.point(b)?);
        let result = self.connections.insert(connection).map_err(AppError::from);
        if result.is_err() {
            tracing::info!(%a, %b, "connection is already set");
        } else {
            tracing::info!(%a, %b, "nodes connected");
        }
        self.record(result)
    }

    pub fn connections(&self) -> &[Connection] {
        self.connections.as_slice()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// Adjacency list of the current drawing, rebuilt from scratch.
    pub fn adjacency(&self) -> AdjacencyList {
        build_adjacency(&self.points, self.connections.as_slice())
    }

    // ----- start / end -----

    pub fn set_start(&mut self, id: PointId) -> AppResult<()> {
        self.point(id)?;
        self.start = Some(id);
        Ok(())
    }

    pub fn set_end(&mut self, id: PointId) -> AppResult<()> {
        self.point(id)?;
        self.end = Some(id);
        Ok(())
    }

    pub fn start(&self) -> Option<PointId> {
        self.start
    }

    pub fn end(&self) -> Option<PointId> {
        self.end
    }

    // ----- solving -----

    /// Run `algorithm` from the start node to the end node.
    ///
    /// On success the path replaces that algorithm's previous path, its
    /// reveal restarts at index 0, and the error is cleared. The other
    /// algorithm's path is left as it was.
    pub fn solve(&mut self, algorithm: Algorithm) -> AppResult<Path> {
        let result = self.find(algorithm);
        if let Ok(path) = &result {
            tracing::info!(%algorithm, %path, "solved");
            self.animator_mut(algorithm).set_path(path.clone());
        }
        self.record(result)
    }

    fn find(&self, algorithm: Algorithm) -> AppResult<Path> {
        let start = self.start.ok_or(AppError::StartNotSet)?;
        let end = self.end.ok_or(AppError::EndNotSet)?;

        let adj = self.adjacency();
        let path = find_path(algorithm, &adj, start.slot(), end.slot());
        if path.is_empty() {
            return Err(AppError::NoPathFound);
        }
        Ok(path)
    }

    pub fn animator(&self, algorithm: Algorithm) -> &Animator {
        match algorithm {
            Algorithm::Bfs => &self.bfs,
            Algorithm::Dfs => &self.dfs,
        }
    }

    fn animator_mut(&mut self, algorithm: Algorithm) -> &mut Animator {
        match algorithm {
            Algorithm::Bfs => &mut self.bfs,
            Algorithm::Dfs => &mut self.dfs,
        }
    }

    /// Most recent path found by `algorithm` (empty if none yet).
    pub fn path(&self, algorithm: Algorithm) -> Path {
        self.animator(algorithm).path()
    }

    // ----- status -----

    /// Current status-line error, if the last reported operation failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn record<T>(&mut self, result: AppResult<T>) -> AppResult<T> {
        match &result {
            Ok(_) => self.error = None,
            Err(e) => self.error = Some(e.to_string()),
        }
        result
    }

    /// Remove every node and connection, both paths, and the error.
    pub fn clear(&mut self) {
        self.points.clear();
        self.connections.clear();
        self.start = None;
        self.end = None;
        self.selection = SelectionState::Idle;
        self.error = None;
        self.bfs.clear();
        self.dfs.clear();
        tracing::info!("session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> (Session, [PointId; 3]) {
        let mut s = Session::default();
        let a = s.add_point(0.0, 0.0).unwrap();
        let b = s.add_point(10.0, 0.0).unwrap();
        let c = s.add_point(20.0, 0.0).unwrap();
        s.connect(a, b).unwrap();
        s.connect(b, c).unwrap();
        (s, [a, b, c])
    }

    #[test]
    fn duplicate_point_rejected() {
        let mut s = Session::default();
        s.add_point(5.0, 5.0).unwrap();
        assert!(matches!(
            s.add_point(5.0, 5.0),
            Err(AppError::PointExists { .. })
        ));
        assert_eq!(s.point_count(), 1);
        assert!(s.add_point(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn ids_run_out_before_overflow() {
        let last = u32::MAX as usize - 1;
        assert_eq!(id_for_slot(last).unwrap().slot(), last);
        assert!(matches!(
            id_for_slot(u32::MAX as usize),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn click_state_machine() {
        let (mut s, [a, _, c]) = line();
        assert_eq!(s.click_node(a).unwrap(), ClickOutcome::Selected(a));
        assert_eq!(s.selection(), SelectionState::AwaitingSecondNode(a));
        assert_eq!(s.click_node(c).unwrap(), ClickOutcome::Connected(a, c));
        assert_eq!(s.selection(), SelectionState::Idle);
        assert_eq!(s.connection_count(), 3);

        s.click_node(c).unwrap();
        assert_eq!(s.click_node(c).unwrap(), ClickOutcome::Cancelled);
        assert_eq!(s.selection(), SelectionState::Idle);
        assert_eq!(s.connection_count(), 3);
    }

    #[test]
    fn duplicate_click_returns_to_idle() {
        let (mut s, [a, b, _]) = line();
        s.click_node(b).unwrap();
        let err = s.click_node(a).unwrap_err();
        assert!(matches!(err, AppError::DuplicateConnection));
        assert_eq!(s.error(), Some("Nodes already connected"));
        assert_eq!(s.selection(), SelectionState::Idle);
        assert_eq!(s.connection_count(), 2);
    }

    #[test]
    fn unknown_ids_rejected() {
        let (mut s, _) = line();
        let ghost = PointId::for_slot(42).unwrap();
        assert!(matches!(s.set_start(ghost), Err(AppError::UnknownPoint(_))));
        assert!(matches!(s.click_node(ghost), Err(AppError::UnknownPoint(_))));
        assert_eq!(s.selection(), SelectionState::Idle);
    }

    #[test]
    fn missing_start_and_end_reported_distinctly() {
        let (mut s, [a, _, _]) = line();
        assert!(matches!(s.solve(Algorithm::Bfs), Err(AppError::StartNotSet)));
        assert_eq!(s.error(), Some("Start node is not set"));

        s.set_start(a).unwrap();
        assert!(matches!(s.solve(Algorithm::Dfs), Err(AppError::EndNotSet)));
        assert_eq!(s.error(), Some("End node is not set"));
    }

    #[test]
    fn solve_clears_error_and_clear_resets() {
        let (mut s, [a, _, c]) = line();
        let _ = s.solve(Algorithm::Bfs);
        assert!(s.error().is_some());

        s.set_start(a).unwrap();
        s.set_end(c).unwrap();
        let path = s.solve(Algorithm::Bfs).unwrap();
        assert_eq!(path.as_slice(), &[0, 1, 2]);
        assert_eq!(s.error(), None);
        assert_eq!(s.path(Algorithm::Bfs), path);
        assert!(s.path(Algorithm::Dfs).is_empty());

        s.clear();
        assert_eq!(s.point_count(), 0);
        assert_eq!(s.connection_count(), 0);
        assert_eq!(s.start(), None);
        assert!(s.path(Algorithm::Bfs).is_empty());
        assert!(matches!(s.solve(Algorithm::Bfs), Err(AppError::StartNotSet)));
    }
}
