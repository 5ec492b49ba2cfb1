use crate::activation::sigmoid::sigmoid;
use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;
use crate::network::layer::Layer;
use rand::Rng;

/// A feedforward network: an ordered list of layer transitions, one per
/// consecutive pair of entries in the layer-width sequence.
///
/// The model owns its parameters exclusively. Forward propagation never
/// mutates them; only an optimizer step does.
#[derive(Debug)]
pub struct Network {
    layer_sizes: Vec<usize>,
    pub layers: Vec<Layer>,
}

/// Intermediate values cached during one forward pass, for reuse by
/// backpropagation. `activations[0]` is the input itself, so the vector is
/// one longer than `weighted_sums`.
pub(crate) struct ForwardTrace {
    pub(crate) weighted_sums: Vec<Matrix>,
    pub(crate) activations: Vec<Matrix>,
}

impl ForwardTrace {
    /// The network's prediction: first entry of the final activation.
    pub(crate) fn prediction(&self) -> f64 {
        self.activations[self.activations.len() - 1].data[0][0]
    }
}

impl Network {
    /// Builds a network with parameters drawn uniformly from [-1, 1).
    pub fn new(layer_sizes: Vec<usize>) -> Result<Network> {
        Network::with_rng(layer_sizes, &mut rand::thread_rng())
    }

    /// Same as `new`, but draws from a caller-supplied generator so a
    /// seeded run is reproducible.
    pub fn with_rng<R: Rng>(layer_sizes: Vec<usize>, rng: &mut R) -> Result<Network> {
        if layer_sizes.len() < 2 {
            return Err(NetworkError::InvalidTopology(format!(
                "need at least 2 layer widths, got {}",
                layer_sizes.len()
            )));
        }
        if layer_sizes.iter().any(|&width| width == 0) {
            return Err(NetworkError::InvalidTopology(
                "every layer width must be positive".into(),
            ));
        }

        let layers = layer_sizes
            .windows(2)
            .map(|pair| Layer::random(pair[1], pair[0], rng))
            .collect();

        Ok(Network {
            layer_sizes,
            layers,
        })
    }

    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    pub fn input_width(&self) -> usize {
        self.layer_sizes[0]
    }

    /// Runs the input through every layer transition in order and returns
    /// the final layer's scalar activation. Deterministic for fixed
    /// parameters; fails with `ShapeMismatch` for a wrong-height input
    /// without touching any parameter.
    pub fn forward(&self, input: &Matrix) -> Result<f64> {
        Ok(self.forward_trace(input)?.prediction())
    }

    /// Forward pass that keeps every weighted sum and activation for
    /// backpropagation.
    pub(crate) fn forward_trace(&self, input: &Matrix) -> Result<ForwardTrace> {
        self.check_layers()?;
        self.check_input(input)?;

        let mut weighted_sums = Vec::with_capacity(self.layers.len());
        let mut activations = Vec::with_capacity(self.layers.len() + 1);
        let mut current = input.clone();
        activations.push(current.clone());

        for layer in &self.layers {
            let z = layer.weights.clone() * current + layer.biases.clone();
            current = z.map(sigmoid);
            weighted_sums.push(z);
            activations.push(current.clone());
        }

        Ok(ForwardTrace {
            weighted_sums,
            activations,
        })
    }

    /// Verifies the parameter shapes still agree with the layer widths.
    /// The layers are publicly reachable, so this runs before every pass.
    fn check_layers(&self) -> Result<()> {
        if self.layers.len() != self.layer_sizes.len() - 1 {
            return Err(NetworkError::ShapeMismatch(format!(
                "{} layer transitions for {} layer widths",
                self.layers.len(),
                self.layer_sizes.len()
            )));
        }
        for (l, layer) in self.layers.iter().enumerate() {
            if layer.output_size() != self.layer_sizes[l + 1]
                || layer.input_size() != self.layer_sizes[l]
                || layer.biases.rows != self.layer_sizes[l + 1]
                || layer.biases.cols != 1
            {
                return Err(NetworkError::ShapeMismatch(format!(
                    "layer {} parameters are {}×{} / {}×{}, expected {}×{} / {}×1",
                    l,
                    layer.weights.rows,
                    layer.weights.cols,
                    layer.biases.rows,
                    layer.biases.cols,
                    self.layer_sizes[l + 1],
                    self.layer_sizes[l],
                    self.layer_sizes[l + 1]
                )));
            }
        }
        Ok(())
    }

    fn check_input(&self, input: &Matrix) -> Result<()> {
        if input.cols != 1 || input.rows != self.input_width() {
            return Err(NetworkError::ShapeMismatch(format!(
                "input must be a {}×1 column vector, got {}×{}",
                self.input_width(),
                input.rows,
                input.cols
            )));
        }
        Ok(())
    }
}
