use tilekit_core::{Color, Point, Size};
use tilekit_designer::{
    actions, CanvasSurface, DesignerError, DesignerState, NO_GROUP_SELECTED_MESSAGE,
};

#[test]
fn test_add_without_active_group_changes_nothing() {
    let mut state = DesignerState::new();
    let g = state.create_group("G", Color::BLACK).unwrap();
    state.spawn_component(g, Point::new(0, 0)).unwrap();

    let err = actions::add_component(&mut state).unwrap_err();
    assert_eq!(err, DesignerError::NoGroupSelected);
    assert_eq!(err.to_string(), NO_GROUP_SELECTED_MESSAGE);

    assert_eq!(state.component_count(), 1);
    assert_eq!(state.groups().members(g).unwrap().len(), 1);
    assert!(state.selection().is_empty());
    assert_eq!(state.surface().item_count(), 1);
}

#[test]
fn test_add_appends_one_component_at_default_origin() {
    let mut state = DesignerState::new();
    let g = state.create_group("Resistors", Color::rgb(180, 20, 20)).unwrap();
    state.set_active_group(Some(g)).unwrap();

    let first = actions::add_component(&mut state).unwrap();
    let second = actions::add_component(&mut state).unwrap();

    assert_eq!(state.groups().members(g).unwrap(), &[first, second]);
    let c = state.component(second).unwrap();
    assert_eq!(c.position, Point::new(50, 50));
    assert_eq!(c.size, Size::new(60, 30));
    assert_eq!(c.color, Color::rgb(180, 20, 20));
    state.check_consistency().unwrap();
}

#[test]
fn test_add_selects_only_the_new_component() {
    let mut state = DesignerState::new();
    let g = state.create_group("G", Color::BLACK).unwrap();
    let a = state.spawn_component(g, Point::new(0, 0)).unwrap();
    let b = state.spawn_component(g, Point::new(100, 0)).unwrap();
    state.select(a, true).unwrap();
    state.select(b, true).unwrap();
    state.set_active_group(Some(g)).unwrap();

    let new = actions::add_component(&mut state).unwrap();

    assert_eq!(state.selected_ids(), vec![new]);
    assert_eq!(state.surface().highlighted_count(), 1);
    assert_eq!(state.status().unwrap().component, new);
}
