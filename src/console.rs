//! Line-oriented terminal front end.
//!
//! Each input line is one command. The Object menu actions map to `add`,
//! `delete` and `tile`; the tile dialog is rendered as a series of field
//! prompts on the same terminal. Errors from the designer are printed on
//! the error stream and never end the session.

use std::io::{self, BufRead, Write};
use thiserror::Error;
use tilekit_core::{Color, ComponentId, CoreError};
use tilekit_designer::dialog::{ERROR_TITLE, TILE_DIALOG_TITLE};
use tilekit_designer::{
    actions, DesignerError, DesignerState, FormEvent, FormPrompt, ModalTileDialog, Notifier,
    TileField, TileForm, TileOutcome,
};

const HELP: &str = "\
Commands:
  group <name> <#color>   create a group
  use <name>              make a group active (use - to clear)
  add                     add a component to the active group
  delete                  delete the selected components
  tile                    tile components of the active group
  select <id>             select only this component
  select+ <id>            toggle this component in the selection
  clear                   deselect everything
  list                    list groups
  status                  show the status line
  help                    show this help
  quit                    leave";

/// Errors produced while parsing a command line.
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),

    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a component id")]
    InvalidId(String),

    #[error(transparent)]
    Color(#[from] CoreError),
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Group { name: String, color: Color },
    Use(Option<String>),
    Add,
    Delete,
    Tile,
    Select { id: ComponentId, multi: bool },
    Clear,
    List,
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let command = match head.to_ascii_lowercase().as_str() {
            "group" => {
                let (color, name) = rest.split_last().ok_or(CommandError::MissingArgument {
                    command: "group",
                    argument: "name and color",
                })?;
                if name.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "group",
                        argument: "name",
                    });
                }
                Command::Group {
                    name: name.join(" "),
                    color: color.parse()?,
                }
            }
            "use" => match rest.join(" ").as_str() {
                "" => {
                    return Err(CommandError::MissingArgument {
                        command: "use",
                        argument: "group name",
                    })
                }
                "-" => Command::Use(None),
                name => Command::Use(Some(name.to_string())),
            },
            "add" => Command::Add,
            "delete" => Command::Delete,
            "tile" => Command::Tile,
            "select" | "select+" => {
                let raw = rest.first().ok_or(CommandError::MissingArgument {
                    command: "select",
                    argument: "component id",
                })?;
                Command::Select {
                    id: parse_id(raw)?,
                    multi: head.ends_with('+'),
                }
            }
            "clear" => Command::Clear,
            "list" => Command::List,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_id(raw: &str) -> Result<ComponentId, CommandError> {
    raw.strip_prefix('#')
        .unwrap_or(raw)
        .parse::<u64>()
        .map(ComponentId::from_raw)
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

/// Reads one line, without its line ending. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Tile form rendered as one prompt per field.
///
/// A blank answer keeps the current value. End of input closes the window.
pub struct TerminalPrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> TerminalPrompt<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question} ")?;
        self.output.flush()?;
        read_line(&mut *self.input)
    }

    fn run_form(&mut self, form: &mut TileForm) -> io::Result<FormEvent> {
        writeln!(self.output, "{TILE_DIALOG_TITLE}")?;
        for field in TileField::ALL {
            let question = format!("{} [{}]", field.label(), form.get(field));
            let Some(answer) = self.ask(&question)? else {
                return Ok(FormEvent::Cancel);
            };
            if !answer.trim().is_empty() {
                form.set(field, answer);
            }
        }

        match self.ask("OK or Cancel? [ok]")? {
            Some(answer) => match answer.trim().to_ascii_lowercase().as_str() {
                "" | "ok" | "o" | "y" | "yes" => Ok(FormEvent::Confirm),
                _ => Ok(FormEvent::Cancel),
            },
            None => Ok(FormEvent::Cancel),
        }
    }
}

impl<R: BufRead, W: Write> FormPrompt for TerminalPrompt<'_, R, W> {
    fn next_event(&mut self, form: &mut TileForm) -> FormEvent {
        self.run_form(form).unwrap_or_else(|err| {
            tracing::warn!(%err, "terminal closed while tile dialog was open");
            FormEvent::Cancel
        })
    }
}

/// Prints notifications as `<title>: <message>` lines.
pub struct TerminalNotifier<'a, W> {
    out: &'a mut W,
}

impl<'a, W: Write> TerminalNotifier<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }
}

impl<W: Write> Notifier for TerminalNotifier<'_, W> {
    fn show_error(&mut self, title: &str, message: &str) {
        if let Err(err) = writeln!(self.out, "{title}: {message}") {
            tracing::warn!(%err, message, "failed to print notification");
        }
    }
}

/// An interactive session over a designer state.
pub struct Session<R, W, E> {
    state: DesignerState,
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(state: DesignerState, input: R, output: W, errors: E) -> Self {
        Self {
            state,
            input,
            output,
            errors,
        }
    }

    pub fn state(&self) -> &DesignerState {
        &self.state
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn errors(&self) -> &E {
        &self.errors
    }

    /// Reads and executes commands until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "TileKit {} - type 'help' for commands",
            crate::VERSION
        )?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = read_line(&mut self.input)? else {
                break;
            };

            match Command::parse(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command)?,
                Err(err) => self.notify(&err.to_string()),
            }
        }

        tracing::debug!("console session ended");
        Ok(())
    }

    /// Executes one command. Only failures of the output streams are
    /// returned; designer errors are reported and swallowed.
    pub fn execute(&mut self, command: Command) -> io::Result<()> {
        match self.apply(command) {
            Ok(()) => Ok(()),
            Err(ApplyError::Designer(err)) => {
                tracing::debug!(%err, "command failed");
                self.notify(&err.to_string());
                Ok(())
            }
            Err(ApplyError::Io(err)) => Err(err),
        }
    }

    fn apply(&mut self, command: Command) -> Result<(), ApplyError> {
        match command {
            Command::Group { name, color } => {
                let id = self.state.create_group(&name, color)?;
                let name = self.state.groups().get(id)?.name().to_string();
                writeln!(self.output, "Created group {name} ({})", color.to_hex())?;
            }
            Command::Use(None) => {
                self.state.set_active_group(None)?;
                writeln!(self.output, "No active group")?;
            }
            Command::Use(Some(name)) => {
                self.state.activate_group_by_name(&name)?;
                writeln!(self.output, "Active group: {}", name.trim())?;
            }
            Command::Add => {
                let id = actions::add_component(&mut self.state)?;
                writeln!(self.output, "Added {id}")?;
                self.print_status()?;
            }
            Command::Delete => {
                let count = actions::delete_component(&mut self.state)?;
                writeln!(self.output, "Deleted {count} component(s)")?;
            }
            Command::Tile => {
                let mut dialog = ModalTileDialog::new(
                    TerminalPrompt::new(&mut self.input, &mut self.output),
                    TerminalNotifier::new(&mut self.errors),
                );
                let outcome = actions::tile(&mut self.state, &mut dialog)?;
                match outcome {
                    TileOutcome::Cancelled => writeln!(self.output, "Tile cancelled")?,
                    TileOutcome::Placed { created, .. } => {
                        writeln!(self.output, "Placed {} component(s)", created.len())?;
                        if !created.is_empty() {
                            self.print_status()?;
                        }
                    }
                }
            }
            Command::Select { id, multi } => {
                let selected = self.state.select(id, multi)?;
                if selected {
                    self.print_status()?;
                } else {
                    writeln!(self.output, "Deselected {id}")?;
                }
            }
            Command::Clear => {
                self.state.deselect_all();
                writeln!(self.output, "Selection cleared")?;
            }
            Command::List => self.print_groups()?,
            Command::Status => self.print_status()?,
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn print_status(&mut self) -> io::Result<()> {
        match self.state.status() {
            Some(status) => writeln!(self.output, "{status}"),
            None => writeln!(self.output, "(no status)"),
        }
    }

    fn print_groups(&mut self) -> io::Result<()> {
        if self.state.groups().is_empty() {
            return writeln!(self.output, "(no groups)");
        }
        let active = self.state.active_group();
        for group in self.state.groups().iter() {
            let marker = if Some(group.id()) == active { '*' } else { ' ' };
            writeln!(
                self.output,
                "{marker} {} {} {} component(s)",
                group.name(),
                group.color().to_hex(),
                group.members().len()
            )?;
        }
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        TerminalNotifier::new(&mut self.errors).show_error(ERROR_TITLE, message);
    }
}

#[derive(Debug, Error)]
enum ApplyError {
    #[error(transparent)]
    Designer(#[from] DesignerError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
