//! # gradfit
//!
//! One-variable linear regression (price as a function of area) trained with
//! full-batch gradient descent on mean-squared error, after min-max
//! normalizing both the input and the label into `[0, 1]`.
//!
//! ## Core Design Principles
//!
//! - **Value types**: [`Params`](model::Params), [`Gradient`](loss::Gradient)
//!   and [`Scale`](preprocessing::Scale) are immutable `Copy` records; every
//!   training step produces new parameters.
//! - **Training/Inference Separation**: the [`Trainer`](trainer::Trainer)
//!   only produces parameters; [`TrainedModel`](pipeline::TrainedModel)
//!   bundles them with the scales for inference on raw values.
//! - **Pluggable reduction**: the per-epoch gradient sum runs on a
//!   [`Backend`](backend::Backend), sequential or rayon-parallel, without
//!   changing the algorithm.
//! - **Fixed-epoch training**: no convergence check and no divergence guard.
//!   A learning rate that is too large yields NaN/∞ parameters, reported with
//!   a `warn!` log line.
//!
//! ## Quick Start
//!
//! ```rust
//! use gradfit::dataset::houses;
//! use gradfit::pipeline;
//!
//! let model = pipeline::fit(&houses(), 3000, 0.05)?;
//! println!("price for 110 m²: {:.0}", model.predict_raw(110.0));
//! # Ok::<(), gradfit::FitError>(())
//! ```
//!
//! ## Module Structure
//!
//! - `preprocessing`: min-max [`Scale`](preprocessing::Scale)
//! - `model`: linear parameters and `predict`
//! - `loss`: signed error, per-sample gradient, MSE
//! - `optimizer`: gradient-descent update rule
//! - `backend`: sequential / parallel gradient reduction
//! - `trainer`: configuration, builder and the epoch loop
//! - `dataset`: samples, normalization, CSV loading, reference data
//! - `pipeline`: scale → train → denormalize
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade. Install any logger (e.g.
//! `env_logger`) and set `RUST_LOG=gradfit=info` to see training progress.

pub mod backend;

/// Labeled samples, normalization and CSV loading.
pub mod dataset;

/// Error type shared by the whole crate.
pub mod error;

/// Mean-squared error and its gradient.
pub mod loss;

/// Linear model parameters and prediction.
pub mod model;

/// Parameter update rules.
pub mod optimizer;

/// Scale, train and predict on raw values.
pub mod pipeline;

/// Min-max scaling.
pub mod preprocessing;

/// Fixed-epoch full-batch training loop.
pub mod trainer;

pub use backend::{Backend, CpuBackend};
pub use error::FitError;
