use rand::rngs::StdRng;
use rand::SeedableRng;

use tictacnet::train::AccuracyTracker;
use tictacnet::{
    compute_gradients, train_network, GradientSet, HalfSquaredError, Matrix, Network,
    NetworkError, Sample, Sgd,
};

fn seeded_network(layer_sizes: Vec<usize>, seed: u64) -> Network {
    let mut rng = StdRng::seed_from_u64(seed);
    Network::with_rng(layer_sizes, &mut rng).expect("topology should be valid")
}

#[test]
fn test_zero_gradient_step_leaves_parameters_unchanged() {
    let mut network = seeded_network(vec![2, 2, 1], 31);
    let snapshot = network.layers.clone();
    let zeros = GradientSet::zeros_like(&network);

    Sgd::new(0.5).step(&mut network, &zeros).expect("step");

    assert_eq!(network.layers, snapshot);
}

#[test]
fn test_single_step_decreases_sample_loss() {
    let mut network = seeded_network(vec![2, 2, 1], 32);
    let input = Matrix::column(vec![1.0, 0.0]);
    let target = 1.0;
    let optimizer = Sgd::new(0.1);

    let before = HalfSquaredError::loss(network.forward(&input).expect("forward"), target);
    let grads = compute_gradients(&network, &input, target).expect("backprop");
    optimizer.step(&mut network, &grads).expect("step");
    let after = HalfSquaredError::loss(network.forward(&input).expect("forward"), target);

    assert!(
        after < before,
        "loss should decrease: before={before}, after={after}"
    );
}

#[test]
fn test_single_step_moves_prediction_toward_target() {
    let mut network = seeded_network(vec![2, 2, 1], 33);
    let input = Matrix::column(vec![1.0, 0.0]);
    let target = 1.0;
    let optimizer = Sgd::new(1.0);

    let before = network.forward(&input).expect("forward");
    let grads = compute_gradients(&network, &input, target).expect("backprop");
    optimizer.step(&mut network, &grads).expect("step");
    let after = network.forward(&input).expect("forward");

    assert!(
        (target - after).abs() < (target - before).abs(),
        "prediction should move toward {target}: before={before}, after={after}"
    );
}

#[test]
fn test_step_rejects_foreign_gradient_shapes() {
    let mut network = seeded_network(vec![2, 2, 1], 34);
    let snapshot = network.layers.clone();
    let wider = seeded_network(vec![2, 3, 1], 35);
    let foreign = GradientSet::zeros_like(&wider);

    let err = Sgd::new(0.1).step(&mut network, &foreign).unwrap_err();

    assert!(matches!(err, NetworkError::ShapeMismatch(_)));
    assert_eq!(network.layers, snapshot, "failed step must not touch parameters");
}

#[test]
fn test_step_rejects_missing_gradient_layer() {
    let mut network = seeded_network(vec![2, 2, 1], 36);
    let shallower = seeded_network(vec![2, 1], 37);
    let foreign = GradientSet::zeros_like(&shallower);

    let err = Sgd::new(0.1).step(&mut network, &foreign).unwrap_err();
    assert!(matches!(err, NetworkError::ShapeMismatch(_)));
}

#[test]
fn test_batch_scale_divides_the_step() {
    let input = Matrix::column(vec![1.0, 0.0]);
    let target = 1.0;

    let mut plain = seeded_network(vec![2, 2, 1], 38);
    let mut scaled = seeded_network(vec![2, 2, 1], 38);

    let grads = compute_gradients(&plain, &input, target).expect("backprop");
    Sgd::new(1.0).step(&mut plain, &grads).expect("step");
    Sgd::with_batch_scale(3.0, 3.0)
        .step(&mut scaled, &grads)
        .expect("step");

    assert_eq!(plain.layers, scaled.layers);
}

#[test]
fn test_training_pass_reports_stats() {
    let mut network = seeded_network(vec![2, 2, 1], 39);
    let samples: Vec<Sample> = (0..8)
        .map(|i| {
            let on = (i % 2) as f64;
            Sample {
                features: vec![on, 1.0 - on],
                label: on,
            }
        })
        .collect();
    let optimizer = Sgd::with_batch_scale(1.0, 3.0);

    let stats = train_network(&mut network, &samples, &optimizer, 4).expect("training");

    assert_eq!(stats.samples, 8);
    assert!(stats.mean_loss.is_finite());
    assert!(stats.mean_loss > 0.0);
    assert_eq!(stats.group_accuracy.len(), 2);
    for percent in &stats.group_accuracy {
        assert!((0.0..=100.0).contains(percent));
    }
}

#[test]
fn test_training_drops_trailing_partial_group() {
    let mut network = seeded_network(vec![2, 2, 1], 40);
    let samples: Vec<Sample> = (0..5)
        .map(|i| Sample {
            features: vec![1.0, 0.0],
            label: (i % 2) as f64,
        })
        .collect();

    let stats = train_network(&mut network, &samples, &Sgd::new(0.5), 4).expect("training");

    assert_eq!(stats.group_accuracy.len(), 1);
}

#[test]
fn test_accuracy_tracker_rounds_group_percentages() {
    let mut tracker = AccuracyTracker::new(3);

    assert_eq!(tracker.record(0.9, 1.0), None);
    assert_eq!(tracker.record(0.2, 0.0), None);
    assert_eq!(tracker.record(0.8, 0.0), Some(67.0));
    assert_eq!(tracker.completed_groups(), &[67.0]);
}

#[test]
fn test_training_on_repeated_sample_converges_toward_label() {
    let mut network = seeded_network(vec![2, 2, 1], 41);
    let samples = vec![
        Sample {
            features: vec![1.0, 0.0],
            label: 1.0,
        };
        500
    ];
    let input = Matrix::column(vec![1.0, 0.0]);

    let before = network.forward(&input).expect("forward");
    train_network(&mut network, &samples, &Sgd::new(1.0), 50).expect("training");
    let after = network.forward(&input).expect("forward");

    assert!(
        (1.0 - after).abs() < (1.0 - before).abs(),
        "repeated updates should pull the prediction toward the label"
    );
    assert!(after > 0.8, "prediction {after} should be close to 1.0");
}
