//! The example applications.
//!
//! Each one is a standalone instance of the same pipeline: a model held in a
//! [`Store`](crate::Store), pure action handlers, and a view builder that
//! derives a [`Node`](crate::Node) tree from the model.

pub mod counter;
pub mod tictactoe;
pub mod todo;

use core::fmt;

/// Catalog of runnable examples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Example {
    Counter,
    Todo,
    #[value(name = "tic-tac-toe")]
    TicTacToe,
}

impl Example {
    pub const ALL: [Example; 3] = [Example::Counter, Example::Todo, Example::TicTacToe];

    pub fn name(&self) -> &'static str {
        match self {
            Example::Counter => "counter",
            Example::Todo => "todo",
            Example::TicTacToe => "tic-tac-toe",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Example::Counter => "Increment, decrement and reset a counter",
            Example::Todo => "Todo list with add, toggle, inline edit and delete",
            Example::TicTacToe => "Two-player tic-tac-toe with win and draw detection",
        }
    }
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
