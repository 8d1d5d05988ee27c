use clap::{Parser, Subcommand};
use spangraph::analysis::mst::MinimumSpanningTree;
use spangraph::analysis::path::ShortestPath;
use spangraph::graph::graph::Graph;
use spangraph::io::load::read_graph;
use spangraph::sim::runner::MonteCarlo;
use spangraph::sim::sampler::GraphSampler;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "spangraph", about = "Shortest paths and spanning trees over weighted graphs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a graph file and print its adjacency
    Show { file: PathBuf },
    /// Find the shortest path between two vertices of a graph file
    Path {
        file: PathBuf,
        from: usize,
        to: usize,
    },
    /// Build the minimum spanning tree of a graph file
    Mst { file: PathBuf },
    /// Sample random graphs and print aggregate statistics
    Simulate {
        #[arg(long, default_value_t = 50)]
        vertices: usize,
        #[arg(long, default_value_t = 0.2)]
        density: f64,
        #[arg(long, default_value_t = 1.0)]
        min_weight: f64,
        #[arg(long, default_value_t = 10.0)]
        max_weight: f64,
        #[arg(long, default_value_t = 100)]
        trials: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn load(file: &PathBuf) -> Result<Graph, Box<dyn Error>> {
    Ok(read_graph(BufReader::new(File::open(file)?))?)
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Show { file } => {
            print!("{}", load(&file)?);
        }
        Command::Path { file, from, to } => {
            let graph = load(&file)?;
            println!("{}", ShortestPath::new(&graph, from, to)?);
        }
        Command::Mst { file } => {
            let graph = load(&file)?;
            println!("{}", MinimumSpanningTree::new(&graph)?);
        }
        Command::Simulate {
            vertices,
            density,
            min_weight,
            max_weight,
            trials,
            seed,
        } => {
            let sampler = GraphSampler::new(vertices, density, min_weight, max_weight);
            let summary = MonteCarlo::new(sampler, trials).run(seed)?;
            println!("{}", summary);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
