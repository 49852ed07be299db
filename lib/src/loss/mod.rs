//! Mean-squared error: per-sample error, gradient contributions and the loss value.
//!
//! For a dataset of `n` samples the loss is
//! ```text
//! L = (1/n) * Σ (w * x_i + b - y_i)^2
//! ```
//! and its partial derivatives are
//! ```text
//! ∂L/∂w = (2/n) * Σ e_i * x_i
//! ∂L/∂b = (2/n) * Σ e_i
//! ```
//! with `e_i = prediction_i - y_i`. [`gradient`] returns one term of these
//! sums, already divided by `n`, so adding the contributions of every sample
//! yields the batch-mean gradient directly.

use crate::dataset::Sample;
use crate::model::{predict, Params};
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Partial derivatives of the loss with respect to weight and bias.
///
/// Same shape as [`Params`]. Contributions are combined with `+` (or
/// [`Iterator::sum`]) and scaled with `* f64`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gradient {
    pub d_weight: f64,
    pub d_bias: f64,
}

impl Gradient {
    /// Identity element of gradient accumulation.
    pub const ZERO: Gradient = Gradient {
        d_weight: 0.0,
        d_bias: 0.0,
    };

    pub fn new(d_weight: f64, d_bias: f64) -> Self {
        Self { d_weight, d_bias }
    }
}

impl Add for Gradient {
    type Output = Gradient;

    fn add(self, other: Gradient) -> Gradient {
        Gradient {
            d_weight: self.d_weight + other.d_weight,
            d_bias: self.d_bias + other.d_bias,
        }
    }
}

impl Mul<f64> for Gradient {
    type Output = Gradient;

    fn mul(self, factor: f64) -> Gradient {
        Gradient {
            d_weight: self.d_weight * factor,
            d_bias: self.d_bias * factor,
        }
    }
}

impl Sum for Gradient {
    fn sum<I: Iterator<Item = Gradient>>(iter: I) -> Gradient {
        iter.fold(Gradient::ZERO, Add::add)
    }
}

/// Signed error `predicted - actual`.
///
/// The sign decides the direction of descent; it must not be replaced by an
/// absolute value.
pub fn sample_error(predicted: f64, actual: f64) -> f64 {
    predicted - actual
}

/// Gradient contribution of a single sample, pre-divided by `dataset_size`.
pub fn gradient(x: f64, error: f64, dataset_size: usize) -> Gradient {
    let factor = 2.0 / dataset_size as f64;
    Gradient {
        d_weight: factor * error * x,
        d_bias: factor * error,
    }
}

/// Gradient contribution of `sample` under `params`.
pub fn sample_gradient(sample: &Sample, params: &Params, dataset_size: usize) -> Gradient {
    let predicted = predict(sample.input, params);
    let error = sample_error(predicted, sample.label);
    gradient(sample.input, error, dataset_size)
}

/// Mean-squared error of `params` over `samples`. Returns `0.0` for an empty slice.
pub fn mean_squared_error(samples: &[Sample], params: &Params) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let total: f64 = samples
        .iter()
        .map(|s| {
            let e = sample_error(predict(s.input, params), s.label);
            e * e
        })
        .sum();
    total / samples.len() as f64
}
