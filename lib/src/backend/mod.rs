//! # Gradient reduction backends
//!
//! Each epoch sums one [`Gradient`] contribution per sample. The sum is a pure
//! associative reduction, so *how* it runs is a backend choice that does not
//! change the algorithm:
//!
//! | Backend | Feature | Reduction |
//! |---------|---------|-----------|
//! | [`CpuBackend`] | always | sequential fold in sample order (bit-for-bit deterministic) |
//! | [`RayonBackend`] | `parallel` | parallel map + tree reduction on the rayon pool |
//!
//! Floating-point addition is not associative, so the two backends may differ
//! in the last bits of the result. Compare them with a tolerance.
//!
//! ## Example
//!
//! ```rust
//! use gradfit::backend::{Backend, CpuBackend};
//! use gradfit::dataset::Sample;
//! use gradfit::loss::{sample_gradient, Gradient};
//! use gradfit::model::Params;
//!
//! let samples = [Sample::new(0.0, 0.0), Sample::new(1.0, 2.0)];
//! let params = Params::ZERO;
//! let total: Gradient = CpuBackend.reduce(&samples, |s| sample_gradient(s, &params, 2));
//! assert_eq!(total.d_bias, -2.0);
//! ```

use crate::dataset::Sample;
use crate::loss::Gradient;

pub mod cpu;
pub use cpu::CpuBackend;

#[cfg(feature = "parallel")]
pub mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::RayonBackend;

/// Strategy for summing per-sample gradient contributions.
pub trait Backend {
    /// Maps every sample through `contribution` and returns the sum.
    ///
    /// Must return [`Gradient::ZERO`] for an empty slice.
    fn reduce<F>(&self, samples: &[Sample], contribution: F) -> Gradient
    where
        F: Fn(&Sample) -> Gradient + Send + Sync;

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}
