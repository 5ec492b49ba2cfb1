pub mod accuracy;
pub mod config;
pub mod stats;
pub mod trainer;

pub use accuracy::AccuracyTracker;
pub use config::TrainConfig;
pub use stats::TrainStats;
pub use trainer::train_network;
