pub mod encoding;
pub mod loader;

pub use loader::load_samples;

use thiserror::Error;

/// One labeled training instance: a fixed-width feature vector plus a
/// binary target.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: Vec<f64>,
    pub label: f64,
}

/// Errors from the dataset side: malformed external input, kept separate
/// from the core's contract-violation errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("unrecognized label {0:?}, expected \"positive\" or \"negative\"")]
    BadLabel(String),

    #[error("expected {expected} comma-separated fields, got {got}")]
    BadRow { expected: usize, got: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
