use tilekit_core::{Color, ComponentId, Point};
use tilekit_designer::{DesignerError, DesignerState};

fn state_with(count: i32) -> (DesignerState, Vec<ComponentId>) {
    let mut state = DesignerState::new();
    let g = state.create_group("G", Color::BLACK).unwrap();
    let ids = (0..count)
        .map(|i| state.spawn_component(g, Point::new(i * 10, 0)).unwrap())
        .collect();
    (state, ids)
}

#[test]
fn test_single_select_replaces_selection() {
    let (mut state, ids) = state_with(3);
    state.select(ids[0], false).unwrap();
    state.select(ids[1], false).unwrap();

    assert_eq!(state.selected_ids(), vec![ids[1]]);
    assert_eq!(state.surface().highlighted_count(), 1);
    assert_eq!(state.status().unwrap().component, ids[1]);
}

#[test]
fn test_multi_select_toggles() {
    let (mut state, ids) = state_with(3);
    assert!(state.select(ids[0], true).unwrap());
    assert!(state.select(ids[2], true).unwrap());
    assert_eq!(state.selected_ids(), vec![ids[0], ids[2]]);

    assert!(!state.select(ids[0], true).unwrap());
    assert_eq!(state.selected_ids(), vec![ids[2]]);
    assert!(!state.is_selected(ids[0]));
    assert_eq!(state.surface().highlighted_count(), 1);
}

#[test]
fn test_deselect_all_clears_highlights() {
    let (mut state, ids) = state_with(2);
    for &id in &ids {
        state.select(id, true).unwrap();
    }
    assert_eq!(state.surface().highlighted_count(), 2);

    state.deselect_all();
    assert!(state.selection().is_empty());
    assert_eq!(state.surface().highlighted_count(), 0);
}

#[test]
fn test_select_unknown_component() {
    let (mut state, _) = state_with(0);
    let ghost = ComponentId::from_raw(999);
    assert_eq!(
        state.select(ghost, false).unwrap_err(),
        DesignerError::ComponentNotFound { id: ghost }
    );
}

#[test]
fn test_removed_component_leaves_selection() {
    let (mut state, ids) = state_with(2);
    state.select(ids[0], true).unwrap();
    state.select(ids[1], true).unwrap();

    state.remove_component(ids[0]).unwrap();
    assert_eq!(state.selected_ids(), vec![ids[1]]);
    state.check_consistency().unwrap();
}
