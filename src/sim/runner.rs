use crate::analysis::mst::MinimumSpanningTree;
use crate::analysis::path::ShortestPath;
use crate::graph::error::GraphError;
use crate::sim::sampler::GraphSampler;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Samples a sequence of random graphs and aggregates shortest-path and
/// spanning-tree statistics over them. The sampler must produce graphs
/// with at least one vertex.
pub struct MonteCarlo {
    sampler: GraphSampler,
    trials: usize,
}

impl MonteCarlo {
    pub fn new(sampler: GraphSampler, trials: usize) -> Self {
        Self { sampler, trials }
    }

    pub fn run(&self, seed: u64) -> Result<SimulationSummary, GraphError> {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut connected = 0;
        let mut reachable_pairs = 0;
        let mut unreachable_pairs = 0;
        let mut path_weight_sum = 0.0;
        let mut tree_weight_sum = 0.0;

        for _ in 0..self.trials {
            let graph = self.sampler.sample(&mut rng)?;

            for target in 1..graph.vertex_count() {
                let path = ShortestPath::new(&graph, 0, target)?;
                if path.exists() {
                    reachable_pairs += 1;
                    path_weight_sum += path.weight();
                } else {
                    unreachable_pairs += 1;
                }
            }

            let mst = MinimumSpanningTree::new(&graph)?;
            if mst.valid() {
                connected += 1;
                tree_weight_sum += mst.weight();
            }
        }

        Ok(SimulationSummary {
            trials: self.trials,
            connected,
            reachable_pairs,
            unreachable_pairs,
            avg_path_weight: mean(path_weight_sum, reachable_pairs),
            avg_tree_weight: mean(tree_weight_sum, connected),
        })
    }
}

fn mean(sum: f64, count: usize) -> f64 {
    if count > 0 { sum / count as f64 } else { 0.0 }
}

/// Aggregate outcome of a simulation run. Mean weights are taken over
/// reachable pairs and connected trials respectively, and are 0.0 when no
/// such pair or trial occurred.
pub struct SimulationSummary {
    trials: usize,
    connected: usize,
    reachable_pairs: usize,
    unreachable_pairs: usize,
    avg_path_weight: f64,
    avg_tree_weight: f64,
}

impl SimulationSummary {
    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn connected(&self) -> usize {
        self.connected
    }

    pub fn reachable_pairs(&self) -> usize {
        self.reachable_pairs
    }

    pub fn unreachable_pairs(&self) -> usize {
        self.unreachable_pairs
    }

    pub fn avg_path_weight(&self) -> f64 {
        self.avg_path_weight
    }

    pub fn avg_tree_weight(&self) -> f64 {
        self.avg_tree_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_complete_graphs_are_always_connected() {
        let sampler = GraphSampler::new(6, 1.0, 1.0, 2.0);
        let summary = MonteCarlo::new(sampler, 10).run(5).unwrap();

        assert_eq!(10, summary.trials());
        assert_eq!(10, summary.connected());
        assert_eq!(10 * 5, summary.reachable_pairs());
        assert_eq!(0, summary.unreachable_pairs());
        // every path and tree is built from weights in [1, 2)
        assert!(summary.avg_path_weight() >= 1.0);
        assert!(summary.avg_tree_weight() >= 5.0);
        assert!(summary.avg_tree_weight() < 10.0);
    }

    #[test]
    fn test_edgeless_graphs_are_never_connected() {
        let sampler = GraphSampler::new(4, 0.0, 1.0, 2.0);
        let summary = MonteCarlo::new(sampler, 3).run(5).unwrap();

        assert_eq!(0, summary.connected());
        assert_eq!(0, summary.reachable_pairs());
        assert_eq!(3 * 3, summary.unreachable_pairs());
        assert_relative_eq!(0.0, summary.avg_path_weight());
        assert_relative_eq!(0.0, summary.avg_tree_weight());
    }

    #[test]
    fn test_runs_are_deterministic_per_seed() {
        let first = MonteCarlo::new(GraphSampler::new(9, 0.4, 1.0, 10.0), 20)
            .run(123)
            .unwrap();
        let second = MonteCarlo::new(GraphSampler::new(9, 0.4, 1.0, 10.0), 20)
            .run(123)
            .unwrap();

        assert_eq!(first.connected(), second.connected());
        assert_eq!(first.reachable_pairs(), second.reachable_pairs());
        assert_relative_eq!(first.avg_path_weight(), second.avg_path_weight());
        assert_relative_eq!(first.avg_tree_weight(), second.avg_tree_weight());
    }

    #[test]
    fn test_single_vertex_trials_count_as_connected() {
        let sampler = GraphSampler::new(1, 0.5, 1.0, 2.0);
        let summary = MonteCarlo::new(sampler, 4).run(0).unwrap();

        assert_eq!(4, summary.connected());
        assert_eq!(0, summary.reachable_pairs());
        assert_eq!(0, summary.unreachable_pairs());
        assert_relative_eq!(0.0, summary.avg_tree_weight());
    }
}
