use crate::activation::sigmoid::sigmoid_prime;
use crate::error::Result;
use crate::loss::squared::HalfSquaredError;
use crate::math::matrix::Matrix;
use crate::network::model::Network;

/// Gradients for one layer transition, shaped exactly like the parameters
/// they correspond to.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerGradients {
    pub weights: Matrix,
    pub biases: Matrix,
}

/// One matrix/vector pair per layer transition, in forward layer order.
/// Produced fresh per sample and consumed by the next optimizer step.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSet {
    pub layers: Vec<LayerGradients>,
}

impl GradientSet {
    /// An all-zero gradient set shaped like the given network's parameters.
    pub fn zeros_like(network: &Network) -> GradientSet {
        let layers = network
            .layers
            .iter()
            .map(|layer| LayerGradients {
                weights: Matrix::zeros(layer.weights.rows, layer.weights.cols),
                biases: Matrix::zeros(layer.biases.rows, layer.biases.cols),
            })
            .collect();
        GradientSet { layers }
    }
}

/// Backpropagates the half-squared-error cost for one sample through the
/// network and returns the per-layer gradients.
///
/// The error of the output layer is the cost derivative times the sigmoid
/// derivative of its weighted sum; each earlier layer's error is the next
/// layer's error pulled back through its weights, times the sigmoid
/// derivative of that layer's weighted sum. A network with a single layer
/// transition has no hidden layers, so only the output step runs.
pub fn compute_gradients(network: &Network, input: &Matrix, target: f64) -> Result<GradientSet> {
    let trace = network.forward_trace(input)?;
    let transitions = network.layers.len();
    let sums = &trace.weighted_sums;
    let activations = &trace.activations;

    let mut grads: Vec<LayerGradients> = Vec::with_capacity(transitions);

    // Output layer: δ = (a - y) ⊙ σ'(z)
    let mut delta = activations[transitions]
        .map(|predicted| HalfSquaredError::derivative(predicted, target))
        .hadamard(&sums[transitions - 1].map(sigmoid_prime));
    grads.push(LayerGradients {
        weights: delta.clone() * activations[transitions - 1].transpose(),
        biases: delta.clone(),
    });

    // Hidden layers, walking backward: δ_l = (Wᵀ_{l+1} · δ_{l+1}) ⊙ σ'(z_l)
    for l in (0..transitions - 1).rev() {
        delta = (network.layers[l + 1].weights.transpose() * delta)
            .hadamard(&sums[l].map(sigmoid_prime));
        grads.push(LayerGradients {
            weights: delta.clone() * activations[l].transpose(),
            biases: delta.clone(),
        });
    }

    grads.reverse();
    Ok(GradientSet { layers: grads })
}
