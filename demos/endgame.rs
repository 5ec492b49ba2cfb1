use std::fs::File;
use std::process;

use tictacnet::{load_samples, train_network, Network, Sgd, TrainConfig};

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ticTacToeData.csv".to_string());

    let config = TrainConfig::new(vec![9, 9, 1], 1.0);

    let file = File::open(&path).unwrap_or_else(|err| {
        eprintln!("cannot open {path}: {err}");
        process::exit(1);
    });
    let samples = load_samples(file, config.layer_sizes[0]).unwrap_or_else(|err| {
        eprintln!("cannot load {path}: {err}");
        process::exit(1);
    });

    let mut network = Network::new(config.layer_sizes.clone()).unwrap_or_else(|err| {
        eprintln!("cannot build network: {err}");
        process::exit(1);
    });
    let optimizer = Sgd::with_batch_scale(config.learning_rate, config.batch_scale);

    let stats = train_network(&mut network, &samples, &optimizer, config.group_size)
        .unwrap_or_else(|err| {
            eprintln!("training failed: {err}");
            process::exit(1);
        });

    println!(
        "Accuracy rates in groups of {}: {:?}",
        config.group_size, stats.group_accuracy
    );
    println!(
        "Mean loss over {} samples: {:.6}",
        stats.samples, stats.mean_loss
    );
}
