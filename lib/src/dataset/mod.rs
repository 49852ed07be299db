//! Labeled samples and their normalized form.
//!
//! # Core Concepts
//!
//! - **Sample**: one `(input, label)` pair, e.g. `(area, price)`.
//! - **NormalizedDataset**: the samples rescaled into `[0, 1]` per dimension,
//!   together with the two [`Scale`]s needed to map values back.
//!
//! Samples are plain data supplied by the caller. [`houses`] returns a small
//! reference dataset and [`load_csv`] / [`read_csv`] read samples from CSV.
//!
//! # Example
//!
//! ```rust
//! use gradfit::dataset::{normalize, Sample};
//!
//! let samples = vec![Sample::new(1.0, 10.0), Sample::new(3.0, 30.0)];
//! let data = normalize(&samples)?;
//! assert_eq!(data.samples()[1], Sample::new(1.0, 1.0));
//! # Ok::<(), gradfit::FitError>(())
//! ```

use crate::error::FitError;
use crate::preprocessing::Scale;
use serde::{Deserialize, Serialize};

pub mod loader;
pub use self::loader::{load_csv, read_csv};

/// One labeled observation.
///
/// Deserializes from records with either `input,label` or `area,price`
/// headers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Feature value (area in m²).
    #[serde(alias = "area")]
    pub input: f64,
    /// Target value (price).
    #[serde(alias = "price")]
    pub label: f64,
}

impl Sample {
    pub fn new(input: f64, label: f64) -> Self {
        Self { input, label }
    }
}

/// Samples normalized into `[0, 1]` plus the scales used to do it.
///
/// Built once by [`normalize`]; read-only afterwards.
#[derive(Clone, Debug)]
pub struct NormalizedDataset {
    input_scale: Scale,
    label_scale: Scale,
    samples: Vec<Sample>,
}

impl NormalizedDataset {
    pub fn input_scale(&self) -> &Scale {
        &self.input_scale
    }

    pub fn label_scale(&self) -> &Scale {
        &self.label_scale
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`: normalization rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Splits into `(input_scale, label_scale, samples)`.
    pub fn into_parts(self) -> (Scale, Scale, Vec<Sample>) {
        (self.input_scale, self.label_scale, self.samples)
    }
}

/// Fits one [`Scale`] per dimension and rescales every sample with it.
///
/// # Errors
/// [`FitError::DegenerateScale`] if `samples` is empty or either dimension has
/// no usable range.
pub fn normalize(samples: &[Sample]) -> Result<NormalizedDataset, FitError> {
    let inputs: Vec<f64> = samples.iter().map(|s| s.input).collect();
    let labels: Vec<f64> = samples.iter().map(|s| s.label).collect();

    let input_scale = Scale::fit(&inputs)?;
    let label_scale = Scale::fit(&labels)?;

    let samples = samples
        .iter()
        .map(|s| {
            Sample::new(
                input_scale.normalize(s.input),
                label_scale.normalize(s.label),
            )
        })
        .collect();

    Ok(NormalizedDataset {
        input_scale,
        label_scale,
        samples,
    })
}

/// Six houses (area in m², price in euros) with deliberate gaps between 95
/// and 140 m² and between 140 and 220 m².
pub fn houses() -> Vec<Sample> {
    vec![
        Sample::new(35.0, 120_000.0),
        Sample::new(52.0, 155_000.0),
        Sample::new(70.0, 210_000.0),
        Sample::new(95.0, 260_000.0),
        Sample::new(140.0, 340_000.0),
        Sample::new(220.0, 480_000.0),
    ]
}
