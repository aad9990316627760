//! Statistical and end-to-end properties of simulated catalogs.
//!
//! These tests verify the distributional guarantees of the generator:
//! - seeded runs are bit-for-bit reproducible
//! - emitted times are strictly increasing, magnitudes stay within bounds
//! - the pure-background rate and the magnitude marginal match their
//!   closed-form laws within sampling tolerance

use approx::assert_relative_eq;
use etascat_core::catalog::simulate_catalog;
use etascat_core::parameters::ProcessParameters;

fn reference_process(offspring_fraction: f64) -> ProcessParameters {
    // Mean background inter-event time of one simulated time unit
    ProcessParameters::new(
        1.0,
        3.0,
        8.0,
        10.0_f64.ln(),
        1.2,
        0.01,
        3.0,
        offspring_fraction,
    )
    .unwrap()
}

mod determinism {
    use super::*;

    /// The reference run: 1000 events after a 100-event warm-up, seed 42.
    #[test]
    fn test_reference_run_is_ordered_bounded_and_reproducible() {
        let params = reference_process(0.3);

        let catalog = simulate_catalog(&params, 1000, 100, 42).unwrap();
        assert_eq!(catalog.len(), 1000);

        for i in 1..catalog.len() {
            assert!(
                catalog.times[i] > catalog.times[i - 1],
                "Times must strictly increase at index {}: {} then {}",
                i,
                catalog.times[i - 1],
                catalog.times[i]
            );
        }
        for &m in &catalog.magnitudes {
            assert!(
                (3.0..=8.0).contains(&m),
                "Magnitude {} outside [3, 8]",
                m
            );
        }

        let repeated = simulate_catalog(&params, 1000, 100, 42).unwrap();
        assert_eq!(catalog, repeated, "Same seed must reproduce the catalog");
    }

    #[test]
    fn test_different_seeds_produce_different_catalogs() {
        let params = reference_process(0.3);
        let first = simulate_catalog(&params, 100, 0, 1).unwrap();
        let second = simulate_catalog(&params, 100, 0, 2).unwrap();
        assert_ne!(first.times, second.times);
    }
}

mod marginal_distributions {
    use super::*;

    /// With a branching ratio of zero every event is a background event, so
    /// the mean inter-event time converges to `1 / mu0`.
    #[test]
    fn test_pure_background_rate_converges_to_mu0() {
        let params = reference_process(0.0);
        let n = 20_000;
        let catalog = simulate_catalog(&params, n, 0, 1234).unwrap();

        let mean_interval = catalog.times[n - 1] / n as f64;
        assert_relative_eq!(mean_interval, 1.0, epsilon = 0.03);
    }

    /// Empirical magnitude distribution against the truncated-exponential
    /// CDF `(1 - exp(-beta*(M-Mmin))) / (1 - exp(-beta*(Mmax-Mmin)))`.
    #[test]
    fn test_magnitude_marginal_matches_truncated_gutenberg_richter() {
        let params = reference_process(0.0);
        let n = 20_000;
        let catalog = simulate_catalog(&params, n, 0, 5678).unwrap();

        let normalization = 1.0 - (-params.beta * (params.mmax - params.mmin)).exp();
        for threshold in [3.5, 4.0, 5.0, 6.5] {
            let expected =
                (1.0 - (-params.beta * (threshold - params.mmin)).exp()) / normalization;
            let observed = catalog
                .magnitudes
                .iter()
                .filter(|&&m| m <= threshold)
                .count() as f64
                / n as f64;

            assert!(
                (observed - expected).abs() < 0.015,
                "Empirical CDF at M = {}: {} vs expected {}",
                threshold,
                observed,
                expected
            );
        }
    }
}

mod stability {
    use super::*;

    /// A strongly triggered but still subcritical process terminates after
    /// the requested event count and keeps the stream ordered.
    #[test]
    fn test_subcritical_cascades_stay_ordered_and_bounded() {
        let params = reference_process(0.9);
        let catalog = simulate_catalog(&params, 3000, 200, 77).unwrap();

        assert!(catalog.times[0] > 0.0);
        for i in 1..catalog.len() {
            assert!(catalog.times[i] > catalog.times[i - 1]);
        }
        for &m in &catalog.magnitudes {
            assert!((3.0..=8.0).contains(&m));
        }
    }

    /// Aftershock clustering compresses inter-event times: with heavy
    /// triggering the catalog covers less time per event than the pure
    /// background process would.
    #[test]
    fn test_triggering_raises_the_total_event_rate() {
        let n = 5000;
        let background = simulate_catalog(&reference_process(0.0), n, 200, 99).unwrap();
        let clustered = simulate_catalog(&reference_process(0.8), n, 200, 99).unwrap();

        let background_span = background.times[n - 1] - background.times[0];
        let clustered_span = clustered.times[n - 1] - clustered.times[0];
        assert!(
            clustered_span < background_span,
            "Triggered catalog spans {} but background spans {}",
            clustered_span,
            background_span
        );
    }
}
