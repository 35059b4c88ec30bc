use scope_chart::core::{SCOPE_PRECISION, Scope};

#[test]
fn full_scope_is_the_default() {
    assert_eq!(Scope::default(), Scope::FULL);
    assert_eq!(Scope::FULL.length(), 1.0);
}

#[test]
fn gesture_noise_below_precision_collapses_to_one_scope() {
    let a = Scope::new(0.300_01, 0.700_04);
    let b = Scope::new(0.299_996, 0.699_999);
    assert_eq!(a, b);
}

#[test]
fn absolute_position_maps_widget_fraction_into_series_space() {
    let scope = Scope::new(0.7, 1.0);
    assert!((scope.absolute_position(0.0) - 0.7).abs() <= 1e-12);
    assert!((scope.absolute_position(0.5) - 0.85).abs() <= 1e-12);
    assert!((scope.absolute_position(1.0) - 1.0).abs() <= 1e-12);
}

#[test]
fn precision_constant_matches_rounding_unit() {
    let scope = Scope::new(SCOPE_PRECISION * 0.4, SCOPE_PRECISION * 1.6);
    assert_eq!(scope.from(), 0.0);
    assert_eq!(scope.to(), 2.0 * SCOPE_PRECISION);
}
