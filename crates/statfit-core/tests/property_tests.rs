//! Report invariants over arbitrary samples

use proptest::prelude::*;
use statfit_core::{analyze, DistributionFamily, Sample, StatfitConfig};
use statfit_stats::suggest_num_bins;

fn config() -> StatfitConfig {
    let mut config = StatfitConfig::default();
    config.fitting.families = vec![DistributionFamily::Normal, DistributionFamily::Logistic];
    config.curves.points = Some(16);
    config
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_report_invariants(
        values in prop::collection::vec(-100.0f64..100.0, 2..120),
        num_bins in prop::option::of(1usize..40),
    ) {
        let sample = Sample::new(values);
        prop_assume!(sample.require_spread().is_ok());

        let config = config();
        let default_bins = suggest_num_bins(sample.values()).unwrap();
        let max_bins = config.binning.limit_policy.max_bins(sample.len(), default_bins);
        let num_bins = num_bins.map(|k| k.min(max_bins));

        let report = analyze(&sample, num_bins, &config).unwrap();
        let area: f64 = report
            .histogram
            .iter()
            .map(|b| b.relative_frequency * (b.right - b.left))
            .sum();

        prop_assert!((area - 1.0).abs() < 1e-9);
        prop_assert_eq!(report.cumulative.y[0], 0.0);
        prop_assert!(report.cumulative.y.windows(2).all(|w| w[1] >= w[0]));
        prop_assert!((report.cumulative.total() - 1.0).abs() < 1e-9);
        prop_assert!(report.max_bins >= report.default_bins);
        prop_assert!(report.default_bins >= 1);
        prop_assert_eq!(report.table.len(), 2);
        prop_assert_eq!(report.curves.len(), 2);
        for row in &report.table {
            prop_assert!(row.wms >= 0.0);
        }
    }
}
