pub struct HalfSquaredError;

impl HalfSquaredError {
    /// Scalar cost: (predicted - target)² / 2
    pub fn loss(predicted: f64, target: f64) -> f64 {
        0.5 * (predicted - target).powi(2)
    }

    /// Cost gradient with respect to the prediction: predicted - target
    pub fn derivative(predicted: f64, target: f64) -> f64 {
        predicted - target
    }
}
