pub mod layer;
pub mod model;

pub use layer::Layer;
pub use model::Network;
