//! Feature scaling.
//!
//! Both the input and the label are min-max normalized into `[0, 1]` before
//! training, and predictions are mapped back with the label scale.
//!
//! # Example
//!
//! ```rust
//! use gradfit::preprocessing::Scale;
//!
//! let scale = Scale::fit(&[10.0, 20.0, 30.0])?;
//! assert_eq!(scale.normalize(20.0), 0.5);
//! assert_eq!(scale.denormalize(0.5), 20.0);
//! # Ok::<(), gradfit::FitError>(())
//! ```

pub mod minmax;

pub use minmax::Scale;
