//! Seeded synthetic samples

use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::{Gamma, Normal, Weibull};

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn normal(seed: u64, n: usize, mean: f64, std_dev: f64) -> Vec<f64> {
    let dist = Normal::new(mean, std_dev).unwrap();
    let mut rng = rng(seed);
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

/// Gamma with shape `a` and `scale`, shifted by `loc`
#[allow(dead_code)]
pub fn gamma(seed: u64, n: usize, a: f64, loc: f64, scale: f64) -> Vec<f64> {
    let dist = Gamma::new(a, 1.0 / scale).unwrap();
    let mut rng = rng(seed);
    (0..n).map(|_| loc + dist.sample(&mut rng)).collect()
}

#[allow(dead_code)]
pub fn weibull(seed: u64, n: usize, c: f64, loc: f64, scale: f64) -> Vec<f64> {
    let dist = Weibull::new(c, scale).unwrap();
    let mut rng = rng(seed);
    (0..n).map(|_| loc + dist.sample(&mut rng)).collect()
}

/// Logistic draws by inverting the cdf
#[allow(dead_code)]
pub fn logistic(seed: u64, n: usize, loc: f64, scale: f64) -> Vec<f64> {
    let mut rng = rng(seed);
    (0..n)
        .map(|_| {
            let u: f64 = rng.gen_range(1e-12..1.0 - 1e-12);
            loc + scale * (u / (1.0 - u)).ln()
        })
        .collect()
}
