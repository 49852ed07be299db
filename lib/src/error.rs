//! Error types for fitting, training and dataset loading.

/// Error type for every fallible operation in the crate.
#[derive(thiserror::Error, Debug)]
pub enum FitError {
    /// A scale was fitted over an empty sequence or a sequence without a usable range.
    #[error("Degenerate scale: {0}")]
    DegenerateScale(String),
    /// Invalid training hyperparameter (epochs or learning rate).
    #[error("Invalid hyperparameter: {0}")]
    InvalidHyperparameter(String),
    /// Training was requested on a dataset without samples.
    #[error("Empty dataset: cannot train without samples")]
    EmptyDataset,
    /// Malformed CSV input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// I/O error while reading a dataset or configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
