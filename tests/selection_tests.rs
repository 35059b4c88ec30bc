use scope_chart::core::Scope;
use scope_chart::interaction::{SelectionChange, SelectionModel};

#[test]
fn first_tap_selects_point_in_series_space() {
    let mut model = SelectionModel::default();
    let change = model.on_tap(0.5, Scope::new(0.7, 1.0));

    let SelectionChange::Selected(state) = change else {
        panic!("first tap must select");
    };
    assert_eq!(state.tap_x, 0.5);
    assert!((state.normalized_x - 0.85).abs() <= 1e-12);
    assert_eq!(model.state(), Some(state));
}

#[test]
fn retap_within_tolerance_clears_then_selects_again() {
    let mut model = SelectionModel::default();
    let scope = Scope::FULL;

    assert!(matches!(model.on_tap(0.5, scope), SelectionChange::Selected(_)));
    assert_eq!(model.on_tap(0.53, scope), SelectionChange::Cleared);
    assert!(model.state().is_none());
    assert!(matches!(model.on_tap(0.53, scope), SelectionChange::Selected(_)));
}

#[test]
fn tap_beyond_tolerance_moves_selection() {
    let mut model = SelectionModel::new(0.05);
    model.on_tap(0.5, Scope::FULL);
    let change = model.on_tap(0.6, Scope::FULL);
    assert!(matches!(
        change,
        SelectionChange::Selected(state) if state.tap_x == 0.6
    ));
}
