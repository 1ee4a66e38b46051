//! Tile parameter dialog.
//!
//! [`TileDialog::show`] is a synchronous, modal call: it returns only once
//! the user has confirmed valid input or cancelled. Front ends supply the
//! widgets through [`FormPrompt`] and error popups through [`Notifier`];
//! [`ModalTileDialog`] owns the confirm/validate/cancel loop.

use crate::error::{DesignerError, Result, INVALID_INTEGERS_MESSAGE};
use crate::tile::TileParams;
use std::collections::VecDeque;

/// Title of the tile dialog window.
pub const TILE_DIALOG_TITLE: &str = "Tile Rectangles";

/// Title of error notifications.
pub const ERROR_TITLE: &str = "Error";

/// Anything that can ask the user for tile parameters.
pub trait TileDialog {
    /// Blocks until the dialog closes. `None` means cancelled.
    fn show(&mut self) -> Option<TileParams>;
}

impl<F> TileDialog for F
where
    F: FnMut() -> Option<TileParams>,
{
    fn show(&mut self) -> Option<TileParams> {
        self()
    }
}

/// Modal error popup.
pub trait Notifier {
    fn show_error(&mut self, title: &str, message: &str);
}

/// The six entry fields of the tile form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileField {
    XStart,
    YStart,
    XSpacing,
    YSpacing,
    NumX,
    NumY,
}

impl TileField {
    pub const ALL: [TileField; 6] = [
        TileField::XStart,
        TileField::YStart,
        TileField::XSpacing,
        TileField::YSpacing,
        TileField::NumX,
        TileField::NumY,
    ];

    /// Label shown next to the entry.
    pub fn label(self) -> &'static str {
        match self {
            TileField::XStart => "X Start:",
            TileField::YStart => "Y Start:",
            TileField::XSpacing => "X Spacing:",
            TileField::YSpacing => "Y Spacing:",
            TileField::NumX => "Number of X:",
            TileField::NumY => "Number of Y:",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Text contents of the six tile entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileForm {
    values: [String; 6],
}

impl TileForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a form with every field filled, in [`TileField::ALL`] order.
    pub fn with_values(values: [&str; 6]) -> Self {
        Self {
            values: values.map(str::to_string),
        }
    }

    pub fn get(&self, field: TileField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: TileField, text: impl Into<String>) {
        self.values[field.index()] = text.into();
    }

    /// Parses every field as an integer.
    ///
    /// Surrounding whitespace is ignored. The form is left untouched on
    /// failure so the user can correct it.
    pub fn parse(&self) -> Result<TileParams> {
        let mut parsed = [0i32; 6];
        for field in TileField::ALL {
            parsed[field.index()] = self
                .get(field)
                .trim()
                .parse::<i32>()
                .map_err(|_| DesignerError::InvalidInput {
                    field: field.label(),
                })?;
        }
        let [x_start, y_start, x_spacing, y_spacing, num_x, num_y] = parsed;
        Ok(TileParams::new(
            x_start, y_start, x_spacing, y_spacing, num_x, num_y,
        ))
    }
}

/// What the user did with the open form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// OK pressed
    Confirm,
    /// Cancel pressed or window closed
    Cancel,
}

/// Widget side of the tile dialog.
pub trait FormPrompt {
    /// Lets the user edit `form` until they confirm or cancel.
    fn next_event(&mut self, form: &mut TileForm) -> FormEvent;
}

/// Toolkit-independent modal tile dialog.
///
/// Every call to [`TileDialog::show`] starts from an empty form.
pub struct ModalTileDialog<P, N> {
    prompt: P,
    notifier: N,
}

impl<P: FormPrompt, N: Notifier> ModalTileDialog<P, N> {
    pub fn new(prompt: P, notifier: N) -> Self {
        Self { prompt, notifier }
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_parts(self) -> (P, N) {
        (self.prompt, self.notifier)
    }
}

impl<P: FormPrompt, N: Notifier> TileDialog for ModalTileDialog<P, N> {
    fn show(&mut self) -> Option<TileParams> {
        let mut form = TileForm::new();
        loop {
            match self.prompt.next_event(&mut form) {
                FormEvent::Confirm => match form.parse() {
                    Ok(params) => {
                        tracing::debug!(?params, "tile dialog confirmed");
                        return Some(params);
                    }
                    Err(err) => {
                        tracing::debug!(%err, "tile dialog rejected input");
                        self.notifier.show_error(ERROR_TITLE, INVALID_INTEGERS_MESSAGE);
                    }
                },
                FormEvent::Cancel => {
                    tracing::debug!("tile dialog cancelled");
                    return None;
                }
            }
        }
    }
}

/// One scripted user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedEvent {
    /// Fill all six fields, then press OK.
    Confirm([String; 6]),
    /// Press Cancel.
    Cancel,
}

impl ScriptedEvent {
    pub fn confirm(values: [&str; 6]) -> Self {
        Self::Confirm(values.map(str::to_string))
    }
}

/// Replays a fixed sequence of interactions.
///
/// Once the script runs out the window counts as closed, which cancels.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    events: VecDeque<ScriptedEvent>,
    /// Form contents seen at each confirm, for assertions.
    pub confirmed_forms: Vec<TileForm>,
}

impl ScriptedPrompt {
    pub fn new(events: impl IntoIterator<Item = ScriptedEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            confirmed_forms: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl FormPrompt for ScriptedPrompt {
    fn next_event(&mut self, form: &mut TileForm) -> FormEvent {
        match self.events.pop_front() {
            Some(ScriptedEvent::Confirm(values)) => {
                for (field, value) in TileField::ALL.into_iter().zip(values) {
                    form.set(field, value);
                }
                self.confirmed_forms.push(form.clone());
                FormEvent::Confirm
            }
            Some(ScriptedEvent::Cancel) | None => FormEvent::Cancel,
        }
    }
}

/// Notifier that records messages instead of showing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub errors: Vec<(String, String)>,
}

impl Notifier for RecordingNotifier {
    fn show_error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }
}
