//! CSV loading of samples.
//!
//! The file needs a header row naming the two columns, either
//! `input,label` or `area,price`:
//!
//! ```text
//! area,price
//! 35,120000
//! 52,155000
//! ```

use super::Sample;
use crate::error::FitError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads samples from any CSV source.
///
/// Fields are trimmed, so `35, 120000` is accepted.
///
/// # Errors
/// [`FitError::Csv`] for malformed records or non-numeric fields.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Sample>, FitError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut samples = Vec::new();
    for record in rdr.deserialize::<Sample>() {
        samples.push(record?);
    }
    log::debug!("read {} samples from csv", samples.len());
    Ok(samples)
}

/// Reads samples from the CSV file at `path`.
///
/// # Errors
/// [`FitError::Io`] if the file cannot be opened, otherwise as [`read_csv`].
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Sample>, FitError> {
    let file = File::open(path.as_ref())?;
    read_csv(BufReader::new(file))
}
