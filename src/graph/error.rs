use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex index {index} out of range for graph with {count} vertices")]
    OutOfRange { index: usize, count: usize },
    #[error("graph has no vertices")]
    EmptyGraph,
}
