use serde::{Deserialize, Serialize};

/// Summary of one training run, returned by `train_network`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainStats {
    /// Number of samples fed through the network.
    pub samples: usize,
    /// Mean half-squared error over all samples, measured before each
    /// sample's update.
    pub mean_loss: f64,
    /// Percent-correct per completed accuracy group, in order.
    pub group_accuracy: Vec<f64>,
}
