//! Seeded synthetic samples

use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use statfit_core::Sample;
use statrs::distribution::Normal;

/// `n` draws from N(mean, std_dev)
pub fn normal_sample(seed: u64, n: usize, mean: f64, std_dev: f64) -> Sample {
    let dist = Normal::new(mean, std_dev).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    Sample::new((0..n).map(|_| dist.sample(&mut rng)).collect())
}
