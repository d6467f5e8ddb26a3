use thiserror::Error;

/// Errors surfaced by strip construction and by operations on disposed resources
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StripError {
    /// A required collaborator was not supplied before construction
    #[error("missing dependency: `{0}` must be supplied before building")]
    MissingDependency(&'static str),

    /// The strip (or a resource built from it) has been disposed
    #[error("strip geometry has been disposed")]
    Disposed,

    #[error("invalid color representation: {0:?}")]
    InvalidColor(String),
}
