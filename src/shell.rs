//! Line-oriented shell for driving an example from a terminal.
//!
//! The shell plays the part of the browser: it keeps the latest rendered tree
//! (via [`MarkupRenderer`]) and turns each input line into an interaction with
//! one element of that tree, firing the element's listeners synchronously.

use core::fmt::Debug;
use core::str::FromStr;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::renderer::MarkupRenderer;
use crate::runtime::MvuDriver;
use crate::view::{DomEvent, EventKind, Node};
use crate::MvuLogic;

pub const HELP: &str = "\
commands:
  click <id>          click the element with that id
  input <id> <text>   type <text> into the element with that id
  key <id> <Key>      press a key (Enter, Escape, ...) on the element
  show                print the current view again
  help                show this help
  quit                leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Click { id: String },
    Input { id: String, text: String },
    Key { id: String, key: String },
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("nothing has been rendered yet")]
    NothingRendered,

    #[error("no element with id '{0}'")]
    NoSuchElement(String),

    #[error("element '{id}' does not listen for {kind}")]
    NoListener { id: String, kind: EventKind },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        if line.trim().is_empty() {
            return Err(CommandError::Empty);
        }

        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        match name {
            "click" => Ok(Command::Click {
                id: required("click", "an element id", rest.trim())?,
            }),
            "input" => {
                // Everything after the id is the typed text, spaces included.
                let rest = rest.trim_start();
                let (id, text) = rest.split_once(' ').unwrap_or((rest, ""));
                Ok(Command::Input {
                    id: required("input", "an element id", id)?,
                    text: text.to_string(),
                })
            }
            "key" => {
                let mut parts = rest.split_whitespace();
                let id = required("key", "an element id", parts.next().unwrap_or(""))?;
                let key = required("key", "a key name", parts.next().unwrap_or(""))?;
                Ok(Command::Key { id, key })
            }
            "show" => Ok(Command::Show),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required(
    command: &'static str,
    argument: &'static str,
    value: &str,
) -> Result<String, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(value.to_string())
    }
}

/// Fire the listeners an interaction command targets.
///
/// `Show`, `Help` and `Quit` do not touch the tree and succeed trivially.
pub fn fire(tree: Option<&Node>, command: &Command) -> Result<(), CommandError> {
    let (id, kind) = match command {
        Command::Click { id } => (id, EventKind::Click),
        Command::Input { id, .. } => (id, EventKind::Change),
        Command::Key { id, .. } => (id, EventKind::KeyPress),
        Command::Show | Command::Help | Command::Quit => return Ok(()),
    };

    let tree = tree.ok_or(CommandError::NothingRendered)?;
    let element = tree
        .find_by_id(id)
        .ok_or_else(|| CommandError::NoSuchElement(id.clone()))?;

    if !element.listens_to(kind) {
        return Err(CommandError::NoListener {
            id: id.clone(),
            kind,
        });
    }

    let event = DomEvent::new(element.element_ref());
    let event = match command {
        Command::Input { text, .. } => event.with_value(text.as_str()),
        Command::Key { key, .. } => event.with_key(key.as_str()),
        _ => event,
    };

    element.dispatch(kind, &event);
    Ok(())
}

/// Read commands from `input` until EOF or `quit`.
///
/// Rendered markup goes to the renderer's writer; command errors and help go
/// to `messages`. Returns the number of events the runtime processed.
pub fn run_session<Event, Model, Logic, R, W, M>(
    driver: &mut MvuDriver<Event, Model, Node, Logic, MarkupRenderer<W>>,
    input: R,
    mut messages: M,
) -> io::Result<usize>
where
    Event: Send + Debug + 'static,
    Model: Clone,
    Logic: MvuLogic<Event, Model, Node>,
    R: BufRead,
    W: Write,
    M: Write,
{
    let mut processed = 0;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(error) => {
                writeln!(messages, "error: {error}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(messages, "{HELP}")?,
            Command::Show => driver.renderer_mut().reprint()?,
            interaction => match fire(driver.renderer().latest(), &interaction) {
                Ok(()) => processed += driver.process_events(),
                Err(error) => {
                    tracing::debug!(%error, "command rejected");
                    writeln!(messages, "error: {error}")?;
                }
            },
        }
    }
    Ok(processed)
}
