use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("vertex {0} does not exist")]
    VertexNotFound(String),
    #[error("no vertex is registered at index {0}")]
    IndexNotFound(usize),
    #[error("cannot add vertex {label}: graph capacity of {capacity} vertices is exhausted")]
    CapacityExceeded { label: String, capacity: usize },
    #[error("route distance does not fit in a 64-bit integer")]
    DistanceOverflow,
}

impl GraphError {
    /// True for the lookup family: an unknown label or an orphaned index.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            GraphError::VertexNotFound(_) | GraphError::IndexNotFound(_)
        )
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
