use thiserror::Error;

pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors raised by the network core.
///
/// Both kinds reflect a caller contract violation rather than a transient
/// condition, so there is no retry path: they propagate immediately and the
/// failed call leaves previously-committed parameters untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The layer-width sequence cannot describe a network (fewer than two
    /// entries, or a zero width). Raised at construction.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// An input, gradient, or parameter whose dimensions disagree with the
    /// network's layer widths. Raised at the point of mismatch.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}
