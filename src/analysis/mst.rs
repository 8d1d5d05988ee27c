use crate::graph::edge::EdgeKey;
use crate::graph::error::GraphError;
use crate::graph::graph::Graph;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Crossing-edge candidate on the frontier, ordered by ascending weight.
struct EdgeCandidate {
    weight: f64,
    key: EdgeKey,
}

impl PartialEq for EdgeCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
    }
}

impl Eq for EdgeCandidate {}

impl PartialOrd for EdgeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EdgeCandidate {
    // reversed, so the max-heap pops the lightest edge first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
    }
}

/// Minimum spanning tree of a graph, computed eagerly at construction with
/// Prim's algorithm rooted at vertex 0. Edges whose endpoints both ended up
/// inside the tree are discarded when dequeued. A disconnected graph is not
/// an error; it yields valid() == false.
pub struct MinimumSpanningTree {
    edges: Vec<EdgeKey>,
    weight: f64,
    reached: usize,
    vertex_count: usize,
}

impl MinimumSpanningTree {
    pub fn new(graph: &Graph) -> Result<Self, GraphError> {
        if graph.vertex_count() == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let mut visited = vec![false; graph.vertex_count()];
        let mut frontier = BinaryHeap::new();
        let mut edges = Vec::new();
        let mut weight = 0.0;
        let mut reached = 0;

        visit(graph, 0, &mut visited, &mut reached, &mut frontier)?;

        while reached < graph.vertex_count() {
            let Some(candidate) = frontier.pop() else {
                break;
            };
            let next = if !visited[candidate.key.x()] {
                candidate.key.x()
            } else if !visited[candidate.key.y()] {
                candidate.key.y()
            } else {
                continue;
            };
            edges.push(candidate.key);
            weight += candidate.weight;
            visit(graph, next, &mut visited, &mut reached, &mut frontier)?;
        }

        Ok(Self {
            edges,
            weight,
            reached,
            vertex_count: graph.vertex_count(),
        })
    }

    /// Accepted edges; a full spanning tree only if valid().
    pub fn edges(&self) -> &[EdgeKey] {
        &self.edges
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// True iff every vertex of the source graph was reached from the root.
    pub fn valid(&self) -> bool {
        self.reached == self.vertex_count
    }

    /// Builds a new graph holding exactly the accepted edges, with weights
    /// re-queried from the source graph. None if the result is not a full
    /// spanning tree, or if the edges are no longer present in the graph.
    pub fn tree_graph(&self, graph: &Graph) -> Option<Graph> {
        if !self.valid() {
            return None;
        }
        let mut tree = Graph::new(self.vertex_count);
        for key in &self.edges {
            let weight = graph.distance(key.x(), key.y()).ok()??;
            tree.connect(key.x(), key.y(), weight).ok()?;
        }
        Some(tree)
    }
}

/// Marks a vertex as part of the tree and queues all its incident edges.
fn visit(
    graph: &Graph,
    index: usize,
    visited: &mut [bool],
    reached: &mut usize,
    frontier: &mut BinaryHeap<EdgeCandidate>,
) -> Result<(), GraphError> {
    visited[index] = true;
    *reached += 1;
    for &other in graph.neighbors(index)? {
        let weight = match graph.distance(index, other)? {
            Some(weight) => weight,
            None => continue,
        };
        frontier.push(EdgeCandidate {
            weight,
            key: EdgeKey::new(index, other),
        });
    }
    Ok(())
}
