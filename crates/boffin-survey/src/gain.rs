//! The diminishing-returns yield formula and completion tests.

use boffin_core::Experiment;

/// Absolute completion tolerance, in science points.
///
/// A subject is treated as complete once less than this remains to the
/// cap, or once the next measurement would yield less than this. The
/// threshold is absolute even though the tested values carry the global
/// gain multiplier; it exists to absorb floating rounding near exhaustion,
/// not to scale with career settings.
pub const COMPLETION_EPSILON: f32 = 0.1;

/// Marginal science yielded by one additional measurement.
///
/// `collected` is the running total already obtained (banked plus any
/// earlier pending units being integrated); `total` is the scaled cap.
/// For experiments on the diminishing-returns curve the yield shrinks
/// linearly-quadratically toward zero at the cap; otherwise every
/// measurement is worth full marginal value.
///
/// Admitted experiments guarantee `science_cap > 0`, but a zero `total`
/// can still reach this function through a host-injected zero-cap
/// subject, so it yields 0 rather than NaN in that case.
pub fn next_gain(experiment: &Experiment, collected: f32, total: f32) -> f32 {
    if total <= 0.0 {
        return 0.0;
    }
    let remaining = total - collected;
    let scientific_value = if experiment.applies_science_scale() {
        1.0 - collected / total
    } else {
        1.0
    };
    let multiplier = experiment.base_value() / experiment.science_cap();
    remaining * scientific_value * multiplier
}

/// The dual completion test.
///
/// True when the gap to the cap is below [`COMPLETION_EPSILON`], or when
/// the next marginal gain is. The second arm covers experiments whose
/// base-value-to-cap ratio makes the cap effectively unreachable long
/// before the raw gap closes.
pub fn practically_complete(experiment: &Experiment, collected: f32, total: f32) -> bool {
    total - collected < COMPLETION_EPSILON
        || next_gain(experiment, collected, total) < COMPLETION_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use boffin_core::ExperimentId;
    use proptest::prelude::*;

    fn experiment(base: f32, cap: f32, scaled: bool) -> Experiment {
        Experiment::new(ExperimentId::new("test"), "Test", base, cap, scaled).unwrap()
    }

    #[test]
    fn half_banked_worked_example() {
        // base 5, cap 10, half banked: 5 * (1 - 0.5) * 0.5 = 1.25.
        let exp = experiment(5.0, 10.0, true);
        assert!((next_gain(&exp, 5.0, 10.0) - 1.25).abs() < 1e-6);
    }

    #[test]
    fn first_measurement_yields_base_value() {
        let exp = experiment(5.0, 10.0, true);
        assert!((next_gain(&exp, 0.0, 10.0) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn gain_is_zero_at_cap() {
        let exp = experiment(5.0, 10.0, true);
        assert_eq!(next_gain(&exp, 10.0, 10.0), 0.0);
    }

    #[test]
    fn unscaled_gain_ignores_collection() {
        let exp = experiment(4.0, 8.0, false);
        let first = next_gain(&exp, 0.0, 8.0);
        let later = next_gain(&exp, 6.0, 8.0);
        // remaining shrinks but scientific value stays 1.
        assert!((first - 4.0).abs() < 1e-6);
        assert!((later - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_total_yields_zero_not_nan() {
        let exp = experiment(5.0, 10.0, true);
        assert_eq!(next_gain(&exp, 0.0, 0.0), 0.0);
    }

    #[test]
    fn complete_when_gap_below_epsilon() {
        let exp = experiment(5.0, 10.0, true);
        assert!(practically_complete(&exp, 9.95, 10.0));
        assert!(!practically_complete(&exp, 9.0, 10.0));
    }

    #[test]
    fn complete_when_marginal_gain_below_epsilon() {
        // Gap of 0.5 remains, but the next gain is 0.5 * 0.05 * 0.5 =
        // 0.0125 < 0.1, so the subject is practically exhausted.
        let exp = experiment(5.0, 10.0, true);
        assert!(practically_complete(&exp, 9.5, 10.0));
    }

    proptest! {
        #[test]
        fn scaled_gain_is_monotone_nonincreasing(
            base in 0.1f32..50.0,
            cap in 0.1f32..200.0,
            a in 0.0f32..1.0,
            b in 0.0f32..1.0,
        ) {
            let exp = experiment(base, cap, true);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let g_lo = next_gain(&exp, lo * cap, cap);
            let g_hi = next_gain(&exp, hi * cap, cap);
            prop_assert!(g_hi <= g_lo + g_lo.abs() * 1e-3 + 1e-3);
        }

        #[test]
        fn unscaled_gain_scales_only_with_remaining(
            base in 0.1f32..50.0,
            cap in 0.1f32..200.0,
            frac in 0.0f32..1.0,
        ) {
            let exp = experiment(base, cap, false);
            let collected = frac * cap;
            let gain = next_gain(&exp, collected, cap);
            let expected = (cap - collected) * base / cap;
            prop_assert!((gain - expected).abs() <= expected.abs() * 1e-4 + 1e-4);
        }

        #[test]
        fn gain_vanishes_at_cap(
            base in 0.1f32..50.0,
            cap in 0.1f32..200.0,
        ) {
            let exp = experiment(base, cap, true);
            prop_assert!(next_gain(&exp, cap, cap).abs() < 1e-4);
        }
    }
}
