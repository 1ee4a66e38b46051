use tilekit_core::{Color, Point, Size};
use tilekit_designer::{
    CanvasSurface, DesignerError, DesignerState, MemoryCanvas, PlacementDefaults,
};

#[test]
fn test_spawn_uses_defaults_and_group_color() {
    let defaults = PlacementDefaults {
        size: Size::new(25, 15),
    };
    let mut state = DesignerState::with_surface(MemoryCanvas::new(), defaults);
    let g = state.create_group("Pads", Color::rgb(0, 200, 0)).unwrap();

    let id = state.spawn_component(g, Point::new(7, 9)).unwrap();
    let c = state.component(id).unwrap();
    assert_eq!(c.size, Size::new(25, 15));
    assert_eq!(c.color, Color::rgb(0, 200, 0));
    assert_eq!(c.position, Point::new(7, 9));
    assert_eq!(c.group(), g);

    let item = state.surface().item(c.item().unwrap()).unwrap();
    assert_eq!(item.component, id);
    assert_eq!(item.fill, Color::rgb(0, 200, 0));
    state.check_consistency().unwrap();
}

#[test]
fn test_remove_releases_canvas_item() {
    let mut state = DesignerState::new();
    let g = state.create_group("G", Color::BLACK).unwrap();
    let id = state.spawn_component(g, Point::new(1, 1)).unwrap();
    assert_eq!(state.surface().item_count(), 1);

    let removed = state.remove_component(id).unwrap();
    assert_eq!(removed.id(), id);
    assert_eq!(state.surface().item_count(), 0);
    assert!(state.groups().members(g).unwrap().is_empty());
    assert_eq!(
        state.remove_component(id).unwrap_err(),
        DesignerError::ComponentNotFound { id }
    );
    state.check_consistency().unwrap();
}

#[test]
fn test_active_group_must_exist() {
    let mut state = DesignerState::new();
    let g = state.create_group("A", Color::BLACK).unwrap();

    let mut other = DesignerState::new();
    other.create_group("x", Color::BLACK).unwrap();
    let foreign = other.create_group("y", Color::BLACK).unwrap();

    assert!(matches!(
        state.set_active_group(Some(foreign)),
        Err(DesignerError::UnknownGroup { .. })
    ));
    assert_eq!(state.active_group(), None);

    state.set_active_group(Some(g)).unwrap();
    assert_eq!(state.active_group(), Some(g));
    state.set_active_group(None).unwrap();
    assert_eq!(state.active_group(), None);
}

#[test]
fn test_activate_by_name() {
    let mut state = DesignerState::new();
    let g = state.create_group("Caps", Color::BLACK).unwrap();
    assert_eq!(state.activate_group_by_name(" Caps ").unwrap(), g);
    assert_eq!(
        state.activate_group_by_name("Diodes").unwrap_err(),
        DesignerError::UnknownGroupName {
            name: "Diodes".to_string()
        }
    );
    assert_eq!(state.active_group(), Some(g));
}

#[test]
fn test_status_line_format() {
    let mut state = DesignerState::new();
    let g = state.create_group("Resistors", Color::BLACK).unwrap();
    let id = state.spawn_component(g, Point::new(50, 50)).unwrap();
    assert!(state.status().is_none());

    state.update_label(id);
    let status = state.status().unwrap();
    assert_eq!(status.component, id);
    assert_eq!(
        status.to_string(),
        format!("Resistors {id} at (50, 50) size 60x30")
    );

    state.remove_component(id).unwrap();
    assert!(state.status().is_none());
}
