use gradfit::dataset::Sample;
use gradfit::pipeline::TrainedModel;

/// Regression quality of a trained model on raw samples.
#[derive(Clone, Copy, Debug)]
pub struct RegressionMetrics {
    /// Mean squared error.
    pub mse: f64,
    /// Mean absolute error.
    pub mae: f64,
    /// Coefficient of determination, `1 - SS_res / SS_tot`.
    pub r_squared: f64,
}

impl RegressionMetrics {
    /// Evaluates `model` on `samples`. All metrics are `0.0` for an empty slice.
    pub fn evaluate(model: &TrainedModel, samples: &[Sample]) -> Self {
        if samples.is_empty() {
            return Self {
                mse: 0.0,
                mae: 0.0,
                r_squared: 0.0,
            };
        }

        let n = samples.len() as f64;
        let mean_label = samples.iter().map(|s| s.label).sum::<f64>() / n;

        let (ss_res, sum_abs, ss_tot) =
            samples
                .iter()
                .fold((0.0, 0.0, 0.0), |(res, abs, tot), s| {
                    let residual = s.label - model.predict_raw(s.input);
                    let centered = s.label - mean_label;
                    (
                        res + residual * residual,
                        abs + residual.abs(),
                        tot + centered * centered,
                    )
                });

        let r_squared = if ss_tot == 0.0 {
            0.0
        } else {
            1.0 - ss_res / ss_tot
        };

        Self {
            mse: ss_res / n,
            mae: sum_abs / n,
            r_squared,
        }
    }
}
