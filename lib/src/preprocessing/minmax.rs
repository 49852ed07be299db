//! Min-max scale of a single dimension.
//!
//! The transformation is given by:
//! ```text
//! x_scaled = (x - x_min) / (x_max - x_min)
//! x        = x_scaled * (x_max - x_min) + x_min
//! ```
//! Values outside `[x_min, x_max]` are valid on both sides; they map outside
//! `[0, 1]` and back exactly (up to rounding).

use crate::error::FitError;

/// Fitted min-max scale.
///
/// Only constructible through [`Scale::fit`], which guarantees a finite,
/// strictly positive `delta`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    min: f64,
    max: f64,
    delta: f64,
}

impl Scale {
    /// Computes the minimum and maximum of `values`.
    ///
    /// # Errors
    /// [`FitError::DegenerateScale`] if `values` is empty, if every value is
    /// equal, or if the range is not finite (NaN or infinite input).
    pub fn fit(values: &[f64]) -> Result<Self, FitError> {
        if values.is_empty() {
            return Err(FitError::DegenerateScale(
                "cannot fit a scale on an empty sequence".to_string(),
            ));
        }

        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let delta = max - min;

        if values.iter().any(|v| v.is_nan()) || !delta.is_finite() {
            return Err(FitError::DegenerateScale(format!(
                "range of values is not finite (min = {}, max = {})",
                min, max
            )));
        }
        if delta <= 0.0 {
            return Err(FitError::DegenerateScale(format!(
                "all values are equal to {}",
                min
            )));
        }

        Ok(Self { min, max, delta })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Length of the fitted range, `max - min`.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Maps `value` to `(value - min) / delta`.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.delta
    }

    /// Maps `value` to `value * delta + min`; inverse of [`Scale::normalize`].
    pub fn denormalize(&self, value: f64) -> f64 {
        value * self.delta + self.min
    }

    /// Normalizes every value in `values`.
    pub fn transform(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.normalize(v)).collect()
    }

    /// Denormalizes every value in `values`.
    pub fn inverse_transform(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.denormalize(v)).collect()
    }
}
