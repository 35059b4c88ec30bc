use proptest::prelude::*;
use scope_chart::core::{SCOPE_PRECISION, Scope};

proptest! {
    #[test]
    fn scope_rounding_is_idempotent(from in 0.0f64..1.0, to in 0.0f64..1.0) {
        let once = Scope::new(from, to);
        let twice = Scope::new(once.from(), once.to());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn scope_bounds_stay_within_half_precision(from in 0.0f64..1.0, to in 0.0f64..1.0) {
        let scope = Scope::new(from, to);
        prop_assert!((scope.from() - from).abs() <= SCOPE_PRECISION / 2.0 + 1e-12);
        prop_assert!((scope.to() - to).abs() <= SCOPE_PRECISION / 2.0 + 1e-12);
    }
}
