use crate::analysis::mst::MinimumSpanningTree;
use crate::analysis::path::ShortestPath;
use crate::graph::graph::Graph;
use crate::sim::runner::SimulationSummary;
use std::fmt;

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph with {} vertices and {} edges:",
            self.vertex_count(),
            self.edge_count()
        )?;
        for index in 0..self.vertex_count() {
            write!(f, "Edges({}) :", index)?;
            for &other in self.neighbors(index).map_err(|_| fmt::Error)? {
                let weight = self
                    .distance(index, other)
                    .map_err(|_| fmt::Error)?
                    .ok_or(fmt::Error)?;
                write!(f, " {}[{}]", other, weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.exists() {
            return write!(f, "No valid path between {} and {}", self.from(), self.to());
        }
        write!(
            f,
            "Path {}->{} [weight {}] :",
            self.from(),
            self.to(),
            self.weight()
        )?;
        for vertex in self.vertices() {
            write!(f, " {}", vertex)?;
        }
        Ok(())
    }
}

impl fmt::Display for MinimumSpanningTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid() {
            return write!(f, "No spanning tree: graph is not connected");
        }
        write!(f, "Spanning tree [weight {}] :", self.weight())?;
        for key in self.edges() {
            write!(f, " {}", key)?;
        }
        Ok(())
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation of {} trials:", self.trials())?;
        writeln!(
            f,
            "  connected graphs : {}/{}",
            self.connected(),
            self.trials()
        )?;
        writeln!(
            f,
            "  reachable pairs  : {} ({} unreachable)",
            self.reachable_pairs(),
            self.unreachable_pairs()
        )?;
        writeln!(f, "  avg path weight  : {:.3}", self.avg_path_weight())?;
        write!(f, "  avg tree weight  : {:.3}", self.avg_tree_weight())
    }
}
