use crate::graph::error::GraphError;
use crate::graph::graph::Graph;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Partial path kept on the frontier, ordered by accumulated weight.
struct PathCandidate {
    weight: f64,
    tail: usize,
    vertices: Vec<usize>,
}

impl PathCandidate {
    fn seed(start: usize) -> Self {
        Self {
            weight: 0.0,
            tail: start,
            vertices: vec![start],
        }
    }

    fn extend(&self, next: usize, step: f64) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.push(next);
        Self {
            weight: self.weight + step,
            tail: next,
            vertices,
        }
    }
}

impl PartialEq for PathCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
    }
}

impl Eq for PathCandidate {}

impl PartialOrd for PathCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathCandidate {
    // reversed, so the max-heap pops the lightest candidate first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
    }
}

/// Minimum-total-weight path between two fixed vertices, computed eagerly
/// at construction with a uniform-cost search. Stale frontier entries for
/// already-finalized vertices are discarded on dequeue rather than removed
/// eagerly.
pub struct ShortestPath {
    from: usize,
    to: usize,
    solvable: bool,
    weight: f64,
    vertices: Vec<usize>,
}

impl ShortestPath {
    pub fn new(graph: &Graph, from: usize, to: usize) -> Result<Self, GraphError> {
        for index in [from, to] {
            if index >= graph.vertex_count() {
                return Err(GraphError::OutOfRange {
                    index,
                    count: graph.vertex_count(),
                });
            }
        }

        let mut visited = vec![false; graph.vertex_count()];
        let mut frontier = BinaryHeap::new();
        frontier.push(PathCandidate::seed(from));

        while let Some(candidate) = frontier.pop() {
            if visited[candidate.tail] {
                continue;
            }
            visited[candidate.tail] = true;

            if candidate.tail == to {
                return Ok(Self {
                    from,
                    to,
                    solvable: true,
                    weight: candidate.weight,
                    vertices: candidate.vertices,
                });
            }

            for &next in graph.neighbors(candidate.tail)? {
                if visited[next] {
                    continue;
                }
                let step = match graph.distance(candidate.tail, next)? {
                    Some(weight) => weight,
                    None => continue,
                };
                frontier.push(candidate.extend(next, step));
            }
        }

        Ok(Self {
            from,
            to,
            solvable: false,
            weight: 0.0,
            vertices: Vec::new(),
        })
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn exists(&self) -> bool {
        self.solvable
    }

    /// Summary weight of the found path; meaningful only if exists().
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Vertex indices from source to target inclusive; empty if no path
    /// was found.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }
}
