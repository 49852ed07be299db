use crate::loss::Gradient;
use crate::model::Params;

/// Trait for gradient-based parameter updates.
///
/// Training logic ([`Trainer`](crate::trainer::Trainer)) is decoupled from
/// the update rule. `step` never mutates its inputs; it returns the parameters
/// for the next epoch.
///
/// # Example
/// ```rust
/// use gradfit::loss::Gradient;
/// use gradfit::model::Params;
/// use gradfit::optimizer::{Optimizer, Sgd};
///
/// let sgd = Sgd::new(0.1);
/// let next = sgd.step(&Params::new(1.0, 1.0), &Gradient::new(0.5, 0.5));
/// assert!((next.weight - 0.95).abs() < 1e-12);
/// ```
pub trait Optimizer {
    /// Returns the updated parameters.
    fn step(&self, params: &Params, gradient: &Gradient) -> Params;
}

/// Plain gradient descent:
/// ```text
/// θ ← θ - η · ∇L(θ)
/// ```
/// Stateless: no momentum, no adaptive learning rate.
#[derive(Clone, Copy, Debug)]
pub struct Sgd {
    learning_rate: f64,
}

impl Sgd {
    /// Creates an optimizer with learning rate `learning_rate`.
    ///
    /// The value is not checked here; [`TrainerConfig::validate`](crate::trainer::TrainerConfig::validate)
    /// rejects non-positive rates before training starts.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

impl Optimizer for Sgd {
    fn step(&self, params: &Params, gradient: &Gradient) -> Params {
        let delta = *gradient * self.learning_rate;
        Params {
            weight: params.weight - delta.d_weight,
            bias: params.bias - delta.d_bias,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sgd_new_initialization() {
        let sgd = Sgd::new(0.05);
        assert_eq!(sgd.learning_rate(), 0.05);
    }

    #[test]
    fn test_sgd_step_applies_descent() {
        let sgd = Sgd::new(0.1);
        let updated = sgd.step(&Params::new(1.0, 1.0), &Gradient::new(0.5, 0.5));

        assert!((updated.weight - 0.95).abs() < 1e-12);
        assert!((updated.bias - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_sgd_step_negative_gradient_increases_params() {
        let sgd = Sgd::new(0.5);
        let updated = sgd.step(&Params::new(0.0, 0.0), &Gradient::new(-2.0, -1.0));

        assert_eq!(updated, Params::new(1.0, 0.5));
    }

    #[test]
    fn test_sgd_step_zero_gradient_is_identity() {
        let sgd = Sgd::new(0.3);
        let params = Params::new(4.0, -2.0);
        assert_eq!(sgd.step(&params, &Gradient::ZERO), params);
    }

    #[test]
    fn test_sgd_step_does_not_mutate_input() {
        let sgd = Sgd::new(0.1);
        let params = Params::new(1.0, 1.0);
        let _ = sgd.step(&params, &Gradient::new(1.0, 1.0));
        assert_eq!(params, Params::new(1.0, 1.0));
    }
}
