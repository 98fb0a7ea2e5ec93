//! Threshold evaluation properties

use linthold::{FindingCounts, LintholdError, ThresholdPolicy};
use proptest::prelude::*;

proptest! {
    /// PROPERTY: pass iff both counts are within their limits
    #[test]
    fn prop_pass_iff_within_limits(
        max_errors in 0u64..1_000,
        max_warnings in 0u64..1_000,
        errors in 0u64..2_000,
        warnings in 0u64..2_000,
    ) {
        let policy = ThresholdPolicy::new(max_errors, max_warnings);
        let verdict = policy.evaluate(errors, warnings);

        prop_assert_eq!(verdict.pass, errors <= max_errors && warnings <= max_warnings);
        prop_assert_eq!(verdict.pass, verdict.reasons.is_empty());
    }

    /// PROPERTY: one reason per violated axis
    #[test]
    fn prop_one_reason_per_violation(
        max_errors in 0u64..100,
        max_warnings in 0u64..100,
        errors in 0u64..200,
        warnings in 0u64..200,
    ) {
        let verdict = ThresholdPolicy::new(max_errors, max_warnings).evaluate(errors, warnings);
        let expected = usize::from(errors > max_errors) + usize::from(warnings > max_warnings);
        prop_assert_eq!(verdict.reasons.len(), expected);
    }

    /// PROPERTY: the limit itself always passes, one more always fails
    #[test]
    fn prop_boundary(max_errors in 0u64..u64::MAX, max_warnings in 0u64..u64::MAX) {
        let policy = ThresholdPolicy::new(max_errors, max_warnings);
        prop_assert!(policy.evaluate(max_errors, max_warnings).pass);
        prop_assert!(!policy.evaluate(max_errors + 1, 0).pass);
        prop_assert!(!policy.evaluate(0, max_warnings + 1).pass);
    }

    /// PROPERTY: enforce fails exactly when evaluate fails
    #[test]
    fn prop_enforce_agrees_with_evaluate(
        max_errors in 0u64..50,
        errors in 0u64..100,
        warnings in 0u64..100,
    ) {
        let policy = ThresholdPolicy::new(max_errors, 50);
        let counts = FindingCounts::new(errors, warnings);
        let verdict = policy.evaluate_counts(&counts);

        match policy.enforce(":api", &counts) {
            Ok(v) => prop_assert!(v.pass && verdict.pass),
            Err(LintholdError::ThresholdExceeded { reasons, .. }) => {
                prop_assert!(!verdict.pass);
                prop_assert_eq!(reasons, verdict.reasons);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
