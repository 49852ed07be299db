use super::Backend;
use crate::dataset::Sample;
use crate::loss::Gradient;

/// Sequential backend: folds contributions left to right in sample order.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuBackend;

impl Backend for CpuBackend {
    fn reduce<F>(&self, samples: &[Sample], contribution: F) -> Gradient
    where
        F: Fn(&Sample) -> Gradient + Send + Sync,
    {
        samples
            .iter()
            .fold(Gradient::ZERO, |acc, s| acc + contribution(s))
    }

    fn name(&self) -> &'static str {
        "cpu"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_reduce_empty() {
        let total = CpuBackend.reduce(&[], |_| Gradient::new(1.0, 1.0));
        assert_eq!(total, Gradient::ZERO);
    }

    #[test]
    fn test_cpu_reduce_sums_contributions() {
        let samples = [
            Sample::new(1.0, 0.0),
            Sample::new(2.0, 0.0),
            Sample::new(3.0, 0.0),
        ];
        let total = CpuBackend.reduce(&samples, |s| Gradient::new(s.input, 1.0));
        assert_eq!(total, Gradient::new(6.0, 3.0));
    }
}
