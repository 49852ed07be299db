use gradfit::dataset::Sample;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Price per m² of the synthetic market.
pub const PRICE_PER_M2: f64 = 1900.0;
/// Base price of the synthetic market.
pub const BASE_PRICE: f64 = 60_000.0;

/// Generates `n` houses with areas uniform in `[20, 300)` m² and prices on the
/// line `BASE_PRICE + PRICE_PER_M2 * area` plus uniform noise of ±20 000.
///
/// The same `seed` always yields the same samples.
pub fn synthetic_houses(n: usize, seed: u64) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let area: f64 = rng.random_range(20.0..300.0);
            let noise: f64 = rng.random_range(-20_000.0..20_000.0);
            Sample::new(area, BASE_PRICE + PRICE_PER_M2 * area + noise)
        })
        .collect()
}
