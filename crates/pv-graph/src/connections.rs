//! Insertion-ordered connection set.

use crate::error::{GraphError, GraphResult};
use crate::graph::Connection;

/// The connections drawn so far, in drawing order.
///
/// No two entries join the same pair of points, whichever way round they were
/// drawn, and no entry joins a point to itself.
#[derive(Debug, Clone, Default)]
pub struct ConnectionSet {
    connections: Vec<Connection>,
}

impl ConnectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection.
    ///
    /// Fails with `DuplicateConnection` if the pair is already connected in
    /// either direction, and with `SelfConnection` for a loop. The set is left
    /// unchanged on error.
    pub fn insert(&mut self, connection: Connection) -> GraphResult<()> {
        if connection.is_loop() {
            return Err(GraphError::SelfConnection {
                point: connection.first,
            });
        }
        if self.contains(&connection) {
            return Err(GraphError::DuplicateConnection {
                first: connection.first,
                second: connection.second,
            });
        }
        self.connections.push(connection);
        Ok(())
    }

    /// Whether an equivalent connection (either direction) is present.
    pub fn contains(&self, connection: &Connection) -> bool {
        self.connections.iter().any(|c| c.same_as(connection))
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn clear(&mut self) {
        self.connections.clear();
    }

    pub fn as_slice(&self) -> &[Connection] {
        &self.connections
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Connection> {
        self.connections.iter()
    }
}

impl<'a> IntoIterator for &'a ConnectionSet {
    type Item = &'a Connection;
    type IntoIter = std::slice::Iter<'a, Connection>;

    fn into_iter(self) -> Self::IntoIter {
        self.connections.iter()
    }
}
