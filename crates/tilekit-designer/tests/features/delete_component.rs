use tilekit_core::{Color, Point};
use tilekit_designer::{actions, CanvasSurface, DesignerState};

#[test]
fn test_delete_with_empty_selection_is_noop() {
    let mut state = DesignerState::new();
    let g = state.create_group("G", Color::BLACK).unwrap();
    state.spawn_component(g, Point::new(0, 0)).unwrap();

    assert_eq!(actions::delete_component(&mut state).unwrap(), 0);
    assert_eq!(state.component_count(), 1);
    assert!(state.selection().is_empty());
}

#[test]
fn test_delete_removes_exactly_the_selection_across_groups() {
    let mut state = DesignerState::new();
    let a = state.create_group("A", Color::BLACK).unwrap();
    let b = state.create_group("B", Color::WHITE).unwrap();
    let a_ids: Vec<_> = (0..3)
        .map(|i| state.spawn_component(a, Point::new(i * 70, 0)).unwrap())
        .collect();
    let b_ids: Vec<_> = (0..2)
        .map(|i| state.spawn_component(b, Point::new(i * 70, 100)).unwrap())
        .collect();

    state.select(a_ids[1], true).unwrap();
    state.select(b_ids[0], true).unwrap();
    state.select(b_ids[1], true).unwrap();
    let before = state.component_count();

    let removed = actions::delete_component(&mut state).unwrap();

    assert_eq!(removed, 3);
    assert_eq!(state.component_count(), before - 3);
    assert_eq!(state.groups().members(a).unwrap(), &[a_ids[0], a_ids[2]]);
    assert!(state.groups().members(b).unwrap().is_empty());
    assert!(state.selection().is_empty());
    assert_eq!(state.surface().item_count(), 2);
    for id in [a_ids[1], b_ids[0], b_ids[1]] {
        assert!(state.component(id).is_none());
    }
    state.check_consistency().unwrap();
}

#[test]
fn test_delete_after_add() {
    let mut state = DesignerState::new();
    let g = state.create_group("G", Color::BLACK).unwrap();
    state.set_active_group(Some(g)).unwrap();
    actions::add_component(&mut state).unwrap();

    assert_eq!(actions::delete_component(&mut state).unwrap(), 1);
    assert_eq!(state.component_count(), 0);
    assert!(state.status().is_none());
    state.check_consistency().unwrap();
}
