//! Linear model parameters and the pure prediction function.
//!
//! The model is `y = weight * x + bias`. It holds no training state: the
//! [`Trainer`](crate::trainer::Trainer) produces a [`Params`] value and the
//! [`pipeline`](crate::pipeline) bundles it with the scales needed to predict
//! on raw values.

pub mod linear;

pub use linear::{predict, Params};
