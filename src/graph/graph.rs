use crate::graph::edge::EdgeKey;
use crate::graph::error::GraphError;
use std::collections::{BTreeMap, BTreeSet};

/// Undirected weighted graph over integer-indexed vertices. Edges are kept
/// as a map from canonical key to weight, with a per-vertex adjacency set
/// maintained in lock-step, so every operation taking two indices is
/// symmetric.
pub struct Graph {
    vertex_count: usize,
    edges: BTreeMap<EdgeKey, f64>,
    neighbors: Vec<BTreeSet<usize>>,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: BTreeMap::new(),
            neighbors: vec![BTreeSet::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Stored weight of the edge between x and y, or None if the vertices
    /// are not connected. A zero weight is a real edge, not an absent one.
    pub fn distance(&self, x: usize, y: usize) -> Result<Option<f64>, GraphError> {
        self.check_vertex(x)?;
        self.check_vertex(y)?;
        Ok(self.edges.get(&EdgeKey::new(x, y)).copied())
    }

    /// Adds the edge between x and y, or overwrites the weight of an
    /// existing one. Self-loops are allowed.
    pub fn connect(&mut self, x: usize, y: usize, weight: f64) -> Result<(), GraphError> {
        self.check_vertex(x)?;
        self.check_vertex(y)?;
        self.edges.insert(EdgeKey::new(x, y), weight);
        self.neighbors[x].insert(y);
        self.neighbors[y].insert(x);
        Ok(())
    }

    /// Removes the edge between x and y; a missing edge is not an error.
    pub fn disconnect(&mut self, x: usize, y: usize) -> Result<(), GraphError> {
        self.check_vertex(x)?;
        self.check_vertex(y)?;
        self.edges.remove(&EdgeKey::new(x, y));
        self.neighbors[x].remove(&y);
        self.neighbors[y].remove(&x);
        Ok(())
    }

    pub fn neighbors(&self, x: usize) -> Result<&BTreeSet<usize>, GraphError> {
        self.check_vertex(x)?;
        Ok(&self.neighbors[x])
    }

    fn check_vertex(&self, index: usize) -> Result<(), GraphError> {
        if index < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                index,
                count: self.vertex_count,
            })
        }
    }
}
