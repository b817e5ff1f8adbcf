//! Maximum-likelihood fits on seeded synthetic samples

mod common;

use statfit_stats::{
    chi_squared, fit, kolmogorov_smirnov, suggest_num_bins, DistributionFamily, Sample,
};

// === Parameter Recovery ===

#[test]
fn test_normal_recovers_parameters() {
    let sample = Sample::new(common::normal(42, 1000, 300.0, 0.5));
    let fitted = fit(DistributionFamily::Normal, &sample).unwrap();

    let loc = fitted.param("loc").unwrap();
    let scale = fitted.param("scale").unwrap();
    assert!((loc - 300.0).abs() < 0.05, "loc = {loc}");
    assert!((scale - 0.5).abs() < 0.025, "scale = {scale}");
}

#[test]
fn test_normal_passes_goodness_of_fit() {
    let data = common::normal(42, 1000, 300.0, 0.5);
    let sample = Sample::new(data.clone());
    let fitted = fit(DistributionFamily::Normal, &sample).unwrap();

    let num_bins = suggest_num_bins(&data).unwrap();
    assert_eq!(num_bins, 8);

    let ks = kolmogorov_smirnov(&data, |x| fitted.cdf(x)).unwrap();
    assert!(ks.p_value > 0.05, "KS p = {}", ks.p_value);

    let chi = chi_squared(&data, |x| fitted.cdf(x), num_bins, 0).unwrap();
    assert_eq!(chi.degrees_of_freedom, 7);
    assert!(chi.p_value > 0.05, "chi-squared p = {}", chi.p_value);
}

#[test]
fn test_logistic_recovers_parameters() {
    let sample = Sample::new(common::logistic(7, 2000, 5.0, 2.0));
    let fitted = fit(DistributionFamily::Logistic, &sample).unwrap();

    let loc = fitted.param("loc").unwrap();
    let scale = fitted.param("scale").unwrap();
    assert!((loc - 5.0).abs() < 0.3, "loc = {loc}");
    assert!((scale - 2.0).abs() < 0.2, "scale = {scale}");
}

// === Shifted Families ===

#[test]
fn test_gamma_fit_matches_sample() {
    let data = common::gamma(11, 2000, 4.0, 10.0, 2.0);
    let sample = Sample::new(data.clone());
    let fitted = fit(DistributionFamily::Gamma, &sample).unwrap();

    assert!(fitted.is_valid());
    let (a, loc, scale) = (
        fitted.param("a").unwrap(),
        fitted.param("loc").unwrap(),
        fitted.param("scale").unwrap(),
    );
    assert!(loc < sample.min().unwrap());

    let mean = sample.summary().mean;
    let fitted_mean = loc + a * scale;
    assert!((fitted_mean - mean).abs() / mean < 0.02);

    let ks = kolmogorov_smirnov(&data, |x| fitted.cdf(x)).unwrap();
    assert!(ks.p_value > 0.05, "KS p = {}", ks.p_value);
}

#[test]
fn test_weibull_fit_matches_sample() {
    let data = common::weibull(13, 2000, 2.0, 5.0, 3.0);
    let sample = Sample::new(data.clone());
    let fitted = fit(DistributionFamily::Weibull, &sample).unwrap();

    assert!(fitted.is_valid());
    assert!(fitted.param("loc").unwrap() < sample.min().unwrap());

    let ks = kolmogorov_smirnov(&data, |x| fitted.cdf(x)).unwrap();
    assert!(ks.p_value > 0.05, "KS p = {}", ks.p_value);
}

#[test]
fn test_lognormal_keeps_location_below_minimum() {
    let sample = Sample::new(common::gamma(17, 500, 2.0, 0.0, 1.0));
    let fitted = fit(DistributionFamily::LogNormal, &sample).unwrap();

    assert_eq!(fitted.params().len(), 3);
    assert_eq!(fitted.params()[0].0, "s");
    assert!(fitted.param("loc").unwrap() < sample.min().unwrap());
}

// === Determinism ===

#[test]
fn test_fits_are_deterministic() {
    let sample = Sample::new(common::gamma(3, 300, 3.0, 1.0, 0.5));

    for family in DistributionFamily::ALL {
        let first = fit(family, &sample).unwrap();
        let second = fit(family, &sample).unwrap();
        // NaN != NaN, so compare bit patterns
        let bits = |d: &statfit_stats::FittedDistribution| {
            d.param_values().iter().map(|v| v.to_bits()).collect::<Vec<_>>()
        };
        assert_eq!(bits(&first), bits(&second), "{family} fit is not deterministic");
    }
}
