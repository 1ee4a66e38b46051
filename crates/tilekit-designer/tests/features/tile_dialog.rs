use tilekit_core::Color;
use tilekit_designer::{
    actions, DesignerState, ModalTileDialog, RecordingNotifier, ScriptedEvent, ScriptedPrompt,
    TileDialog, TileField, TileOutcome, TileParams, INVALID_INTEGERS_MESSAGE,
};

fn dialog(events: Vec<ScriptedEvent>) -> ModalTileDialog<ScriptedPrompt, RecordingNotifier> {
    ModalTileDialog::new(ScriptedPrompt::new(events), RecordingNotifier::default())
}

#[test]
fn test_confirm_valid_input() {
    let mut d = dialog(vec![ScriptedEvent::confirm(["0", "0", "10", "20", "3", "2"])]);

    assert_eq!(d.show(), Some(TileParams::new(0, 0, 10, 20, 3, 2)));
    assert!(d.notifier().errors.is_empty());
}

#[test]
fn test_cancel_returns_none() {
    let mut d = dialog(vec![ScriptedEvent::Cancel]);
    assert_eq!(d.show(), None);
    assert!(d.notifier().errors.is_empty());
}

#[test]
fn test_closed_window_counts_as_cancel() {
    let mut d = dialog(vec![]);
    assert_eq!(d.show(), None);
}

#[test]
fn test_invalid_input_keeps_dialog_open() {
    let mut d = dialog(vec![
        ScriptedEvent::confirm(["abc", "0", "10", "20", "3", "2"]),
        ScriptedEvent::confirm(["5", "0", "10", "20", "3", "2"]),
    ]);

    assert_eq!(d.show(), Some(TileParams::new(5, 0, 10, 20, 3, 2)));

    let (prompt, notifier) = d.into_parts();
    assert_eq!(
        notifier.errors,
        vec![("Error".to_string(), INVALID_INTEGERS_MESSAGE.to_string())]
    );
    assert_eq!(prompt.confirmed_forms.len(), 2);
    assert_eq!(prompt.confirmed_forms[0].get(TileField::XStart), "abc");
    assert_eq!(prompt.remaining(), 0);
}

#[test]
fn test_invalid_then_cancel_yields_nothing() {
    let mut d = dialog(vec![
        ScriptedEvent::confirm(["0", "0", "1.5", "0", "3", "2"]),
        ScriptedEvent::Cancel,
    ]);

    assert_eq!(d.show(), None);
    assert_eq!(d.notifier().errors.len(), 1);
}

#[test]
fn test_each_show_starts_from_an_empty_form() {
    let mut d = dialog(vec![
        ScriptedEvent::confirm(["1", "2", "3", "4", "5", "6"]),
        ScriptedEvent::Cancel,
    ]);
    assert!(d.show().is_some());
    assert!(d.show().is_none());
}

#[test]
fn test_tile_action_with_invalid_input_then_cancel() {
    let mut state = DesignerState::new();
    let g = state.create_group("G", Color::BLACK).unwrap();
    state.set_active_group(Some(g)).unwrap();
    let mut d = dialog(vec![
        ScriptedEvent::confirm(["abc", "0", "0", "0", "1", "1"]),
        ScriptedEvent::Cancel,
    ]);

    let outcome = actions::tile(&mut state, &mut d).unwrap();

    assert_eq!(outcome, TileOutcome::Cancelled);
    assert_eq!(state.component_count(), 0);
    assert_eq!(d.notifier().errors.len(), 1);
}

#[test]
fn test_tile_action_through_modal_dialog() {
    let mut state = DesignerState::new();
    let g = state.create_group("G", Color::BLACK).unwrap();
    state.set_active_group(Some(g)).unwrap();
    let mut d = dialog(vec![ScriptedEvent::confirm([
        "0", "0", "10", "20", "3", "2",
    ])]);

    let outcome = actions::tile(&mut state, &mut d).unwrap();

    assert_eq!(outcome.created().len(), 6);
    state.check_consistency().unwrap();
}
