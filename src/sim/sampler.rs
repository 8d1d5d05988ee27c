use crate::graph::error::GraphError;
use crate::graph::graph::Graph;
use rand::Rng;
use rand::rngs::StdRng;

/// Draws random graphs of a fixed size: every unordered vertex pair is
/// connected independently with the configured probability and a uniform
/// weight. Sampling is deterministic for a given rng state.
pub struct GraphSampler {
    vertices: usize,
    /// density [0.0, 1.0]
    density: f64,
    /// min_weight < max_weight
    min_weight: f64,
    max_weight: f64,
}

impl GraphSampler {
    pub fn new(vertices: usize, density: f64, min_weight: f64, max_weight: f64) -> Self {
        Self {
            vertices,
            density,
            min_weight,
            max_weight,
        }
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn sample(&self, rng: &mut StdRng) -> Result<Graph, GraphError> {
        let mut graph = Graph::new(self.vertices);
        for x in 0..self.vertices {
            for y in (x + 1)..self.vertices {
                if rng.gen_bool(self.density) {
                    let weight = rng.gen_range(self.min_weight..self.max_weight);
                    graph.connect(x, y, weight)?;
                }
            }
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;

    #[test]
    fn test_zero_density_yields_no_edges() {
        let sampler = GraphSampler::new(10, 0.0, 1.0, 5.0);
        let mut rng = StdRng::seed_from_u64(7);
        let graph = sampler.sample(&mut rng).unwrap();

        assert_eq!(10, graph.vertex_count());
        assert_eq!(0, graph.edge_count());
    }

    #[test]
    fn test_full_density_yields_complete_graph() {
        let sampler = GraphSampler::new(6, 1.0, 1.0, 5.0);
        let mut rng = StdRng::seed_from_u64(7);
        let graph = sampler.sample(&mut rng).unwrap();

        assert_eq!(6 * 5 / 2, graph.edge_count());
        assert_eq!(None, graph.distance(3, 3).unwrap());
    }

    #[test]
    fn test_weights_stay_in_configured_range() {
        let sampler = GraphSampler::new(8, 0.5, 2.0, 3.0);
        let mut rng = StdRng::seed_from_u64(42);
        let graph = sampler.sample(&mut rng).unwrap();

        for x in 0..graph.vertex_count() {
            for &y in graph.neighbors(x).unwrap() {
                let weight = graph.distance(x, y).unwrap().unwrap();
                assert!(weight >= 2.0 && weight < 3.0);
            }
        }
    }

    #[test]
    fn test_same_seed_samples_same_graph() {
        let sampler = GraphSampler::new(12, 0.3, 1.0, 10.0);
        let first = sampler
            .sample(&mut StdRng::seed_from_u64(99))
            .unwrap();
        let second = sampler
            .sample(&mut StdRng::seed_from_u64(99))
            .unwrap();

        assert_eq!(first.edge_count(), second.edge_count());
        for x in 0..first.vertex_count() {
            for y in 0..first.vertex_count() {
                match (first.distance(x, y).unwrap(), second.distance(x, y).unwrap()) {
                    (Some(a), Some(b)) => assert_relative_eq!(a, b),
                    (a, b) => assert_eq!(a, b),
                }
            }
        }
    }
}
