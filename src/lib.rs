pub mod activation;
pub mod data;
pub mod error;
pub mod grad;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use data::{load_samples, Sample};
pub use error::{NetworkError, Result};
pub use grad::backprop::{compute_gradients, GradientSet};
pub use loss::squared::HalfSquaredError;
pub use math::matrix::Matrix;
pub use network::model::Network;
pub use optim::sgd::Sgd;
pub use train::config::TrainConfig;
pub use train::trainer::train_network;
