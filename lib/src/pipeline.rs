//! End-to-end fitting: scale, train, and predict on raw values.
//!
//! ```text
//! raw samples ──normalize──▶ NormalizedDataset ──Trainer──▶ Params
//!                                                              │
//! raw input ──input scale──▶ predict ──label scale (inverse)──▶ raw prediction
//! ```

use crate::backend::Backend;
use crate::dataset::{normalize, Sample};
use crate::error::FitError;
use crate::model::{predict, Params};
use crate::preprocessing::Scale;
use crate::trainer::Trainer;

/// A trained model bundled with the scales it was trained under.
///
/// Predictions take and return raw (unnormalized) values.
#[derive(Clone, Copy, Debug)]
pub struct TrainedModel {
    input_scale: Scale,
    label_scale: Scale,
    params: Params,
}

impl TrainedModel {
    /// Predicts the raw label for `raw_input`.
    ///
    /// Any real input is accepted: values between training points are
    /// interpolated and values outside the observed range are extrapolated.
    pub fn predict_raw(&self, raw_input: f64) -> f64 {
        let x = self.input_scale.normalize(raw_input);
        self.label_scale.denormalize(predict(x, &self.params))
    }

    /// [`TrainedModel::predict_raw`] over a slice.
    pub fn predict_raw_batch(&self, raw_inputs: &[f64]) -> Vec<f64> {
        raw_inputs.iter().map(|&x| self.predict_raw(x)).collect()
    }

    /// Learned parameters, in normalized space.
    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn input_scale(&self) -> &Scale {
        &self.input_scale
    }

    pub fn label_scale(&self) -> &Scale {
        &self.label_scale
    }
}

/// Fits a model on raw `samples` with a sequential trainer.
///
/// Hyperparameters are validated before anything else is computed.
///
/// # Errors
/// - [`FitError::InvalidHyperparameter`] for zero epochs or a non-positive learning rate.
/// - [`FitError::DegenerateScale`] for an empty dataset or a dimension without range.
///
/// # Example
/// ```rust
/// use gradfit::dataset::houses;
/// use gradfit::pipeline;
///
/// let model = pipeline::fit(&houses(), 3000, 0.05)?;
/// let price = model.predict_raw(110.0);
/// assert!(price > 260_000.0 && price < 340_000.0);
/// # Ok::<(), gradfit::FitError>(())
/// ```
pub fn fit(
    samples: &[Sample],
    epochs: usize,
    learning_rate: f64,
) -> Result<TrainedModel, FitError> {
    let trainer = Trainer::builder()
        .epochs(epochs)
        .learning_rate(learning_rate)
        .build()?;
    fit_with(&trainer, samples)
}

/// Fits a model on raw `samples` with an already configured trainer.
pub fn fit_with<B: Backend>(
    trainer: &Trainer<B>,
    samples: &[Sample],
) -> Result<TrainedModel, FitError> {
    let data = normalize(samples)?;
    let params = trainer.train_normalized(&data);
    let (input_scale, label_scale, _) = data.into_parts();

    Ok(TrainedModel {
        input_scale,
        label_scale,
        params,
    })
}
