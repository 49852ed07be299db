//! One-variable linear predictor.

use std::fmt;

/// Trainable parameters of the linear model: weight and bias.
///
/// A plain value type. Training never mutates a `Params` in place; every
/// update produces a new value (see [`Optimizer::step`](crate::optimizer::Optimizer::step)).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Params {
    pub weight: f64,
    pub bias: f64,
}

impl Params {
    /// Starting point of every training run: `(0, 0)`.
    pub const ZERO: Params = Params {
        weight: 0.0,
        bias: 0.0,
    };

    pub fn new(weight: f64, bias: f64) -> Self {
        Self { weight, bias }
    }

    /// Evaluates `weight * x + bias`.
    pub fn predict(&self, x: f64) -> f64 {
        predict(x, self)
    }

    /// Returns `true` when both parameters are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.weight.is_finite() && self.bias.is_finite()
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "weight = {:.3} | bias = {:.3}", self.weight, self.bias)
    }
}

/// Hypothesis function `y = weight * x + bias`.
///
/// Pure; non-finite inputs simply propagate.
pub fn predict(x: f64, params: &Params) -> f64 {
    params.weight * x + params.bias
}
