use crate::graph::error::GraphError;
use crate::graph::graph::Graph;
use std::io::BufRead;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid vertex count: {0:?}")]
    InvalidCapacity(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Reads a graph from its plain-text form: the first line holds the vertex
/// count, each following line one edge as `x y weight`. Reading stops
/// cleanly at end of input or at the first line that does not parse as
/// three numeric tokens; such a trailing line is simply not applied.
pub fn read_graph<R: BufRead>(reader: R) -> Result<Graph, LoadError> {
    let mut lines = reader.lines();

    let first = match lines.next() {
        Some(line) => line?,
        None => return Err(LoadError::InvalidCapacity(String::new())),
    };
    let vertex_count: usize = first
        .trim()
        .parse()
        .map_err(|_| LoadError::InvalidCapacity(first.trim().to_string()))?;

    let mut graph = Graph::new(vertex_count);
    for line in lines {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let (Some(x), Some(y), Some(weight)) = (tokens.next(), tokens.next(), tokens.next())
        else {
            break;
        };
        let (Ok(x), Ok(y), Ok(weight)) =
            (x.parse::<usize>(), y.parse::<usize>(), weight.parse::<f64>())
        else {
            break;
        };
        graph.connect(x, y, weight)?;
    }
    Ok(graph)
}
