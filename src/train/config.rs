use serde::{Deserialize, Serialize};

/// Configuration for a training run: topology plus hyperparameters.
///
/// Describes a run before it starts and never contains trained weights.
/// Can be saved to / loaded from JSON so run configurations are storable
/// independently of any network instance.
///
/// # Fields
/// - `layer_sizes`   — layer widths, input first, output last
/// - `learning_rate` — step size of each per-sample update
/// - `batch_scale`   — divisor applied to the learning rate; a free
///                     hyperparameter
/// - `group_size`    — samples per accuracy-reporting group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub layer_sizes: Vec<usize>,
    pub learning_rate: f64,
    pub batch_scale: f64,
    pub group_size: usize,
}

impl TrainConfig {
    /// Creates a config with the stock defaults: batch scale of
    /// input width + 1 and accuracy groups of 50.
    pub fn new(layer_sizes: Vec<usize>, learning_rate: f64) -> Self {
        let batch_scale = layer_sizes.first().map(|&w| (w + 1) as f64).unwrap_or(1.0);
        TrainConfig {
            layer_sizes,
            learning_rate,
            batch_scale,
            group_size: 50,
        }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `TrainConfig` from a JSON file previously written by
    /// `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
