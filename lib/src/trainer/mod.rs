use crate::{
    backend::{Backend, CpuBackend},
    dataset::{NormalizedDataset, Sample},
    error::FitError,
    loss::{mean_squared_error, sample_gradient, Gradient},
    model::Params,
    optimizer::{Optimizer, Sgd},
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Training hyperparameters.
///
/// Missing fields fall back to the defaults when deserialized:
/// ```json
/// { "epochs": 3000, "learning_rate": 0.05 }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Number of full-batch epochs. Must be positive.
    pub epochs: usize,
    /// Step size applied to the aggregated gradient. Must be positive and finite.
    pub learning_rate: f64,
}

impl TrainerConfig {
    pub const DEFAULT_EPOCHS: usize = 3000;
    pub const DEFAULT_LEARNING_RATE: f64 = 0.05;

    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        Self {
            epochs,
            learning_rate,
        }
    }

    /// Checks that both hyperparameters are usable.
    ///
    /// # Errors
    /// [`FitError::InvalidHyperparameter`] if `epochs` is zero or
    /// `learning_rate` is not a positive finite number.
    pub fn validate(&self) -> Result<(), FitError> {
        if self.epochs == 0 {
            return Err(FitError::InvalidHyperparameter(
                "epochs must be positive, got 0".to_string(),
            ));
        }
        if !(self.learning_rate > 0.0) || !self.learning_rate.is_finite() {
            return Err(FitError::InvalidHyperparameter(format!(
                "learning rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, FitError> {
        let config: TrainerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FitError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            epochs: Self::DEFAULT_EPOCHS,
            learning_rate: Self::DEFAULT_LEARNING_RATE,
        }
    }
}

/// Runs fixed-length full-batch gradient descent on a linear model.
///
/// Every epoch sums the per-sample gradient contributions with the backend `B`
/// and applies one [`Sgd`] update. There is no convergence check: exactly
/// `epochs` updates are applied and the last [`Params`] are returned.
///
/// Once built via [`TrainerBuilder`] it is immutable and can be reused for
/// several datasets.
pub struct Trainer<B: Backend = CpuBackend> {
    pub(crate) config: TrainerConfig,
    pub(crate) verbose: bool,
    pub(crate) log_interval: usize,
    optimizer: Sgd,
    backend: B,
}

/// Fluent builder for [`Trainer`].
///
/// Defaults:
/// - `epochs`: 3000
/// - `learning_rate`: 0.05
/// - `verbose`: true
/// - `log_interval`: 500
/// - `backend`: [`CpuBackend`]
pub struct TrainerBuilder<B: Backend = CpuBackend> {
    config: TrainerConfig,
    verbose: bool,
    log_interval: usize,
    backend: B,
}

impl TrainerBuilder<CpuBackend> {
    pub fn new() -> Self {
        Self {
            config: TrainerConfig::default(),
            verbose: true,
            log_interval: 500,
            backend: CpuBackend,
        }
    }
}

impl Default for TrainerBuilder<CpuBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> TrainerBuilder<B> {
    pub fn epochs(mut self, epochs: usize) -> Self {
        self.config.epochs = epochs;
        self
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.config.learning_rate = learning_rate;
        self
    }

    /// Replaces both hyperparameters at once.
    pub fn config(mut self, config: TrainerConfig) -> Self {
        self.config = config;
        self
    }

    /// When `true`, logs the training loss at `info` level every
    /// `log_interval` epochs.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Number of epochs between progress lines (clamped to at least 1).
    pub fn log_interval(mut self, epochs: usize) -> Self {
        self.log_interval = epochs.max(1);
        self
    }

    /// Switches the gradient reduction backend.
    pub fn backend<B2: Backend>(self, backend: B2) -> TrainerBuilder<B2> {
        TrainerBuilder {
            config: self.config,
            verbose: self.verbose,
            log_interval: self.log_interval,
            backend,
        }
    }

    /// Validates the hyperparameters and builds the trainer.
    ///
    /// # Errors
    /// [`FitError::InvalidHyperparameter`], see [`TrainerConfig::validate`].
    pub fn build(self) -> Result<Trainer<B>, FitError> {
        self.config.validate()?;
        Ok(Trainer {
            config: self.config,
            verbose: self.verbose,
            log_interval: self.log_interval,
            optimizer: Sgd::new(self.config.learning_rate),
            backend: self.backend,
        })
    }
}

impl Trainer<CpuBackend> {
    /// Starts the builder pattern with the default configuration.
    pub fn builder() -> TrainerBuilder<CpuBackend> {
        TrainerBuilder::new()
    }

    /// Sequential trainer for `config`.
    pub fn new(config: TrainerConfig) -> Result<Self, FitError> {
        TrainerBuilder::new().config(config).build()
    }
}

impl<B: Backend> Trainer<B> {
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Trains on `samples` as given (no normalization is applied).
    ///
    /// # Errors
    /// [`FitError::EmptyDataset`] if `samples` is empty.
    pub fn train(&self, samples: &[Sample]) -> Result<Params, FitError> {
        if samples.is_empty() {
            return Err(FitError::EmptyDataset);
        }
        Ok(self.run(samples))
    }

    /// Trains on an already normalized dataset, which is never empty.
    pub fn train_normalized(&self, data: &NormalizedDataset) -> Params {
        self.run(data.samples())
    }

    fn run(&self, samples: &[Sample]) -> Params {
        debug!(
            "training on {} samples: epochs = {}, learning_rate = {}, backend = {}",
            samples.len(),
            self.config.epochs,
            self.config.learning_rate,
            self.backend.name()
        );

        let mut params = Params::ZERO;
        for epoch in 1..=self.config.epochs {
            let aggregate = batch_gradient(&self.backend, samples, &params);
            params = self.optimizer.step(&params, &aggregate);

            if self.verbose && epoch % self.log_interval == 0 {
                info!(
                    "epoch {}: loss = {:.6}, {}",
                    epoch,
                    mean_squared_error(samples, &params),
                    params
                );
            }
        }

        if params.is_finite() {
            info!("trained model: {}", params);
        } else {
            warn!(
                "training diverged (learning_rate = {}): {}",
                self.config.learning_rate, params
            );
        }
        params
    }
}

/// Mean gradient of the loss over `samples` at `params`.
pub(crate) fn batch_gradient<B: Backend>(
    backend: &B,
    samples: &[Sample],
    params: &Params,
) -> Gradient {
    let n = samples.len();
    backend.reduce(samples, |s| sample_gradient(s, params, n))
}

/// Trains on `samples` with a sequential trainer and returns the final parameters.
///
/// Shorthand for building a [`Trainer`] with `epochs` and `learning_rate`
/// and calling [`Trainer::train`].
pub fn train(samples: &[Sample], epochs: usize, learning_rate: f64) -> Result<Params, FitError> {
    Trainer::builder()
        .epochs(epochs)
        .learning_rate(learning_rate)
        .verbose(false)
        .build()?
        .train(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{houses, normalize};
    use crate::model::predict;

    fn line_y_eq_2x() -> Vec<Sample> {
        vec![
            Sample::new(0.0, 0.0),
            Sample::new(0.5, 1.0),
            Sample::new(1.0, 2.0),
        ]
    }

    // === TrainerConfig Tests ===

    #[test]
    fn test_trainer_config_defaults() {
        let config = TrainerConfig::default();
        assert_eq!(config.epochs, 3000);
        assert_eq!(config.learning_rate, 0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_trainer_config_rejects_zero_epochs() {
        let result = TrainerConfig::new(0, 0.05).validate();
        assert!(matches!(result, Err(FitError::InvalidHyperparameter(_))));
    }

    #[test]
    fn test_trainer_config_rejects_bad_learning_rates() {
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let result = TrainerConfig::new(10, lr).validate();
            assert!(
                matches!(result, Err(FitError::InvalidHyperparameter(_))),
                "learning rate {} accepted",
                lr
            );
        }
    }

    #[test]
    fn test_trainer_config_from_json() {
        let config = TrainerConfig::from_json(r#"{ "epochs": 100, "learning_rate": 0.1 }"#).unwrap();
        assert_eq!(config, TrainerConfig::new(100, 0.1));
    }

    #[test]
    fn test_trainer_config_from_json_partial_uses_defaults() {
        let config = TrainerConfig::from_json(r#"{ "epochs": 10 }"#).unwrap();
        assert_eq!(config.epochs, 10);
        assert_eq!(config.learning_rate, TrainerConfig::DEFAULT_LEARNING_RATE);
    }

    #[test]
    fn test_trainer_config_from_json_invalid_values() {
        let result = TrainerConfig::from_json(r#"{ "epochs": 10, "learning_rate": -1.0 }"#);
        assert!(matches!(result, Err(FitError::InvalidHyperparameter(_))));
    }

    #[test]
    fn test_trainer_config_from_json_malformed() {
        let result = TrainerConfig::from_json("{ epochs: ");
        assert!(matches!(result, Err(FitError::Config(_))));
    }

    #[test]
    fn test_trainer_config_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trainer.json");
        std::fs::write(&path, r#"{ "epochs": 42, "learning_rate": 0.2 }"#).unwrap();

        let config = TrainerConfig::load(&path).unwrap();
        assert_eq!(config, TrainerConfig::new(42, 0.2));
    }

    // === TrainerBuilder Tests ===

    #[test]
    fn test_trainer_builder_default_values() {
        let builder = TrainerBuilder::new();

        assert_eq!(builder.config, TrainerConfig::default());
        assert!(builder.verbose);
        assert_eq!(builder.log_interval, 500);
    }

    #[test]
    fn test_trainer_builder_chaining() {
        let trainer = Trainer::builder()
            .epochs(250)
            .learning_rate(0.2)
            .verbose(false)
            .log_interval(10)
            .build()
            .unwrap();

        assert_eq!(trainer.config().epochs, 250);
        assert_eq!(trainer.config().learning_rate, 0.2);
        assert!(!trainer.verbose);
        assert_eq!(trainer.log_interval, 10);
    }

    #[test]
    fn test_trainer_builder_zero_log_interval_clamped() {
        let builder = TrainerBuilder::new().log_interval(0);
        assert_eq!(builder.log_interval, 1);
    }

    #[test]
    fn test_trainer_builder_rejects_zero_epochs() {
        let result = Trainer::builder().epochs(0).build();
        assert!(matches!(result, Err(FitError::InvalidHyperparameter(_))));
    }

    #[test]
    fn test_trainer_builder_rejects_non_positive_learning_rate() {
        assert!(Trainer::builder().learning_rate(0.0).build().is_err());
        assert!(Trainer::builder().learning_rate(-0.05).build().is_err());
    }

    #[test]
    fn test_trainer_new_from_config() {
        let trainer = Trainer::new(TrainerConfig::new(5, 0.5)).unwrap();
        assert_eq!(trainer.config(), &TrainerConfig::new(5, 0.5));
        assert_eq!(trainer.backend().name(), "cpu");
    }

    // === Training Tests ===

    #[test]
    fn test_batch_gradient_is_mean_gradient() {
        let samples = line_y_eq_2x();
        let grad = batch_gradient(&CpuBackend, &samples, &Params::ZERO);
        // errors at zero params: 0, -1, -2
        // d_w = 2/3 * (0*0 + -1*0.5 + -2*1) = -5/3
        // d_b = 2/3 * (0 - 1 - 2) = -2
        assert!((grad.d_weight + 5.0 / 3.0).abs() < 1e-12);
        assert!((grad.d_bias + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_epoch_update() {
        let samples = line_y_eq_2x();
        let params = train(&samples, 1, 0.1).unwrap();
        // Params::ZERO - 0.1 * (-5/3, -2)
        assert!((params.weight - 1.0 / 6.0).abs() < 1e-12);
        assert!((params.bias - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_train_converges_on_linear_data() {
        let params = train(&line_y_eq_2x(), 5000, 0.1).unwrap();

        assert!((params.weight - 2.0).abs() < 0.1, "weight = {}", params.weight);
        assert!(params.bias.abs() < 0.1, "bias = {}", params.bias);
    }

    #[test]
    fn test_train_reduces_loss() {
        let samples = line_y_eq_2x();
        let before = mean_squared_error(&samples, &Params::ZERO);
        let params = train(&samples, 200, 0.1).unwrap();
        assert!(mean_squared_error(&samples, &params) < before);
    }

    #[test]
    fn test_train_normalized_houses_fits_first_house() {
        let data = normalize(&houses()).unwrap();
        let trainer = Trainer::builder()
            .epochs(4000)
            .learning_rate(0.05)
            .verbose(false)
            .build()
            .unwrap();

        let params = trainer.train_normalized(&data);
        let house = data.samples()[0];
        let err = (predict(house.input, &params) - house.label).abs();
        assert!(err < 0.05, "normalized error = {}", err);
    }

    #[test]
    fn test_train_is_deterministic() {
        let samples = line_y_eq_2x();
        let a = train(&samples, 300, 0.1).unwrap();
        let b = train(&samples, 300, 0.1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_train_empty_dataset() {
        let result = train(&[], 10, 0.1);
        assert!(matches!(result, Err(FitError::EmptyDataset)));
    }

    #[test]
    fn test_train_invalid_hyperparameters_fail_before_empty_check() {
        let result = train(&[], 0, 0.1);
        assert!(matches!(result, Err(FitError::InvalidHyperparameter(_))));
    }

    #[test]
    fn test_train_divergence_propagates_non_finite() {
        let samples = vec![Sample::new(100.0, 1.0), Sample::new(200.0, 2.0)];
        let params = train(&samples, 500, 10.0).unwrap();
        assert!(!params.is_finite());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_rayon_backend_matches_sequential() {
        use crate::backend::RayonBackend;

        let samples: Vec<Sample> = (0..2000)
            .map(|i| {
                let x = i as f64 / 2000.0;
                Sample::new(x, 0.5 * x + 0.25)
            })
            .collect();

        let sequential = Trainer::builder()
            .epochs(100)
            .learning_rate(0.1)
            .verbose(false)
            .build()
            .unwrap()
            .train(&samples)
            .unwrap();
        let parallel = Trainer::builder()
            .epochs(100)
            .learning_rate(0.1)
            .verbose(false)
            .backend(RayonBackend::new().with_min_len(64))
            .build()
            .unwrap()
            .train(&samples)
            .unwrap();

        assert!((sequential.weight - parallel.weight).abs() < 1e-9);
        assert!((sequential.bias - parallel.bias).abs() < 1e-9);
    }
}
