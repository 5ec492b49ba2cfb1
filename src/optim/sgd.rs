use crate::error::{NetworkError, Result};
use crate::grad::backprop::GradientSet;
use crate::network::model::Network;

/// Plain gradient descent. The effective step is
/// `learning_rate / batch_scale` times the raw gradient; `batch_scale` is a
/// free hyperparameter, not a mini-batch average.
pub struct Sgd {
    pub learning_rate: f64,
    pub batch_scale: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd {
            learning_rate,
            batch_scale: 1.0,
        }
    }

    pub fn with_batch_scale(learning_rate: f64, batch_scale: f64) -> Sgd {
        Sgd {
            learning_rate,
            batch_scale,
        }
    }

    /// Applies one descent step to every layer, in place. All shapes are
    /// validated before any parameter is written, so a mismatch leaves the
    /// network exactly as it was.
    pub fn step(&self, network: &mut Network, gradients: &GradientSet) -> Result<()> {
        if gradients.layers.len() != network.layers.len() {
            return Err(NetworkError::ShapeMismatch(format!(
                "gradient set has {} layers, network has {}",
                gradients.layers.len(),
                network.layers.len()
            )));
        }

        for (l, (layer, grad)) in network.layers.iter().zip(gradients.layers.iter()).enumerate() {
            if grad.weights.rows != layer.weights.rows
                || grad.weights.cols != layer.weights.cols
                || grad.biases.rows != layer.biases.rows
                || grad.biases.cols != layer.biases.cols
            {
                return Err(NetworkError::ShapeMismatch(format!(
                    "layer {} gradient is {}×{} / {}×{}, parameters are {}×{} / {}×{}",
                    l,
                    grad.weights.rows,
                    grad.weights.cols,
                    grad.biases.rows,
                    grad.biases.cols,
                    layer.weights.rows,
                    layer.weights.cols,
                    layer.biases.rows,
                    layer.biases.cols
                )));
            }
        }

        let scale = self.learning_rate / self.batch_scale;
        for (layer, grad) in network.layers.iter_mut().zip(gradients.layers.iter()) {
            layer.apply_gradients(&grad.weights, &grad.biases, scale);
        }

        Ok(())
    }
}
