//! Benchmark utilities for gradfit.
//!
//! - Seeded synthetic house data of any size
//! - Regression metrics (MSE, MAE, R²) on raw values
//!
//! Run the benches with:
//! ```text
//! cargo bench --package benchmarks --bench training
//! cargo bench --package benchmarks --bench predict
//! ```

pub mod data;
pub mod metrics;

pub use data::synthetic_houses;
pub use metrics::RegressionMetrics;
