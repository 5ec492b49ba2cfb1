use crate::math::matrix::Matrix;
use rand::Rng;

/// Parameters for one layer transition: the weight matrix mapping the
/// previous layer's activations to this layer's weighted sums, plus the
/// bias column added to them.
///
/// Shapes are fixed at construction: weights are output_size × input_size,
/// biases are output_size × 1. Entry (i, j) of the weights is the
/// connection from input neuron j to output neuron i.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub weights: Matrix,
    pub biases: Matrix,
}

impl Layer {
    pub fn random<R: Rng>(output_size: usize, input_size: usize, rng: &mut R) -> Layer {
        Layer {
            weights: Matrix::uniform(output_size, input_size, rng),
            biases: Matrix::uniform(output_size, 1, rng),
        }
    }

    /// Number of neurons this transition feeds into (weight rows).
    pub fn output_size(&self) -> usize {
        self.weights.rows
    }

    /// Number of neurons feeding this transition (weight columns).
    pub fn input_size(&self) -> usize {
        self.weights.cols
    }

    /// Applies pre-computed gradients scaled by `scale` (descending, so the
    /// scaled gradient is subtracted).
    pub fn apply_gradients(&mut self, weights_grad: &Matrix, biases_grad: &Matrix, scale: f64) {
        self.weights = self.weights.clone() - weights_grad.map(|g| g * scale);
        self.biases = self.biases.clone() - biases_grad.map(|g| g * scale);
    }
}
