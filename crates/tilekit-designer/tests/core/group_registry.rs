use tilekit_core::{Color, Point};
use tilekit_designer::{actions, DesignerState, Group};

#[test]
fn test_groups_keep_creation_order_and_colors() {
    let mut state = DesignerState::new();
    let names = ["Resistors", "Capacitors", "Inductors"];
    let colors = [
        Color::rgb(255, 0, 0),
        Color::rgb(0, 0, 255),
        Color::rgb(0, 128, 0),
    ];
    for (name, color) in names.iter().zip(colors) {
        state.create_group(name, color).unwrap();
    }

    let listed: Vec<_> = state.groups().iter().map(Group::name).collect();
    assert_eq!(listed, names);
    for (name, color) in names.iter().zip(colors) {
        let id = state.groups().find(name).unwrap();
        assert_eq!(state.groups().color(id).unwrap(), color);
    }
}

#[test]
fn test_components_only_join_their_own_group() {
    let mut state = DesignerState::new();
    let a = state.create_group("A", Color::BLACK).unwrap();
    let b = state.create_group("B", Color::WHITE).unwrap();

    state.set_active_group(Some(a)).unwrap();
    let in_a = actions::add_component(&mut state).unwrap();
    state.set_active_group(Some(b)).unwrap();
    let in_b = actions::add_component(&mut state).unwrap();
    let also_b = state.spawn_component(b, Point::new(0, 0)).unwrap();

    assert_eq!(state.groups().members(a).unwrap(), &[in_a]);
    assert_eq!(state.groups().members(b).unwrap(), &[in_b, also_b]);
    assert_eq!(state.component(in_b).unwrap().color, Color::WHITE);
    state.check_consistency().unwrap();
}
