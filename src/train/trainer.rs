use log::{debug, info};

use crate::data::Sample;
use crate::error::Result;
use crate::grad::backprop::compute_gradients;
use crate::loss::squared::HalfSquaredError;
use crate::math::matrix::Matrix;
use crate::network::model::Network;
use crate::optim::sgd::Sgd;
use crate::train::accuracy::AccuracyTracker;
use crate::train::stats::TrainStats;

/// Feeds every sample through the network once, in order, updating the
/// parameters after each one.
///
/// Each update reads the parameter state left by the previous update, so
/// the pass is strictly sequential. The prediction used for accuracy
/// bookkeeping is taken before the sample's own update.
pub fn train_network(
    network: &mut Network,
    samples: &[Sample],
    optimizer: &Sgd,
    group_size: usize,
) -> Result<TrainStats> {
    info!(
        "training on {} samples ({} per accuracy group)",
        samples.len(),
        group_size
    );

    let mut tracker = AccuracyTracker::new(group_size);
    let mut total_loss = 0.0;

    for sample in samples {
        let input = Matrix::column(sample.features.clone());

        let prediction = network.forward(&input)?;
        total_loss += HalfSquaredError::loss(prediction, sample.label);
        if let Some(percent) = tracker.record(prediction, sample.label) {
            debug!(
                "group {} complete: {percent:.0}% correct",
                tracker.completed_groups().len()
            );
        }

        let gradients = compute_gradients(network, &input, sample.label)?;
        optimizer.step(network, &gradients)?;
    }

    let mean_loss = if samples.is_empty() {
        0.0
    } else {
        total_loss / samples.len() as f64
    };

    Ok(TrainStats {
        samples: samples.len(),
        mean_loss,
        group_accuracy: tracker.into_groups(),
    })
}
