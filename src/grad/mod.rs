pub mod backprop;

pub use backprop::{compute_gradients, GradientSet, LayerGradients};
