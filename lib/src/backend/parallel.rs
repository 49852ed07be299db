use super::Backend;
use crate::dataset::Sample;
use crate::loss::Gradient;
use rayon::prelude::*;

/// Parallel backend: maps samples on the global rayon pool and tree-reduces
/// the contributions.
///
/// Slices shorter than `min_len` per task are not split further, so small
/// datasets run on a single task.
#[derive(Clone, Copy, Debug)]
pub struct RayonBackend {
    min_len: usize,
}

impl Default for RayonBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RayonBackend {
    /// Minimum number of samples handed to one rayon task by default.
    pub const DEFAULT_MIN_LEN: usize = 1024;

    pub fn new() -> Self {
        Self {
            min_len: Self::DEFAULT_MIN_LEN,
        }
    }

    /// Sets the minimum chunk length per task (clamped to at least 1).
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len.max(1);
        self
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }
}

impl Backend for RayonBackend {
    fn reduce<F>(&self, samples: &[Sample], contribution: F) -> Gradient
    where
        F: Fn(&Sample) -> Gradient + Send + Sync,
    {
        samples
            .par_iter()
            .with_min_len(self.min_len)
            .map(|s| contribution(s))
            .reduce(|| Gradient::ZERO, |a, b| a + b)
    }

    fn name(&self) -> &'static str {
        "rayon"
    }
}
