//! Tic-tac-toe for two players sharing one board.

use core::fmt;

use crate::view::{h, text, EventKind, Node};
use crate::{Effect, Emitter, MvuLogic, Slot};

pub const BOARD_SIZE: usize = 9;

/// The 8 winning triples, scanned in this order: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

pub type Board = [Option<Mark>; BOARD_SIZE];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Win {
    pub mark: Mark,
    pub line: [usize; 3],
}

/// Derived game state; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { next: Mark },
    Won(Win),
    Drawn,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicTacToeModel {
    pub board: Board,
    pub x_is_next: bool,
    pub winner: Option<Mark>,
}

impl Default for TicTacToeModel {
    fn default() -> Self {
        Self {
            board: [None; BOARD_SIZE],
            x_is_next: true,
            winner: None,
        }
    }
}

impl TicTacToeModel {
    pub const BOARD: Slot<TicTacToeModel, Board> =
        Slot::new("board", |m| &m.board, |m| &mut m.board);
    pub const X_IS_NEXT: Slot<TicTacToeModel, bool> =
        Slot::new("isXNext", |m| &m.x_is_next, |m| &mut m.x_is_next);
    pub const WINNER: Slot<TicTacToeModel, Option<Mark>> =
        Slot::new("winner", |m| &m.winner, |m| &mut m.winner);

    pub fn current_player(&self) -> Mark {
        if self.x_is_next {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn is_full(&self) -> bool {
        self.board.iter().all(Option::is_some)
    }

    /// Every cell occupied and no completed line on the board.
    pub fn is_draw(&self) -> bool {
        self.status() == GameStatus::Drawn
    }

    pub fn status(&self) -> GameStatus {
        match calculate_winner(&self.board) {
            Some(win) => GameStatus::Won(win),
            None if self.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress {
                next: self.current_player(),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicTacToeEvent {
    Play(usize),
    Reset,
}

/// First completed line in [`WINNING_LINES`] order, if any.
pub fn calculate_winner(board: &Board) -> Option<Win> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board[a] {
            Some(mark) if board[b] == Some(mark) && board[c] == Some(mark) => {
                Some(Win { mark, line })
            }
            _ => None,
        }
    })
}

/// Place the current player's mark at `index`.
///
/// Rejected without change when the cell is taken, the game already has a
/// winner, or `index` is off the board.
pub fn play(model: &TicTacToeModel, index: usize) -> TicTacToeModel {
    let open = matches!(model.board.get(index), Some(None));
    if !open || model.winner.is_some() {
        tracing::trace!(index, "move rejected");
        return model.clone();
    }

    let mut next = model.clone();
    next.board[index] = Some(model.current_player());
    match calculate_winner(&next.board) {
        Some(win) => next.winner = Some(win.mark),
        None => next.x_is_next = !model.x_is_next,
    }
    next
}

pub fn reset(_model: &TicTacToeModel) -> TicTacToeModel {
    TicTacToeModel::default()
}

pub fn status_text(status: &GameStatus) -> String {
    match status {
        GameStatus::Won(win) => format!("🎉 Winner: {}!", win.mark),
        GameStatus::Drawn => "🤝 It's a Draw!".to_string(),
        GameStatus::InProgress { next } => format!("Next player: {next}"),
    }
}

pub fn view(model: &TicTacToeModel, emitter: &Emitter<TicTacToeEvent>) -> Node {
    let status = model.status();
    let winning_line = match status {
        GameStatus::Won(win) => Some(win.line),
        _ => None,
    };
    let status_class = match status {
        GameStatus::Won(_) => "status winner",
        GameStatus::Drawn => "status draw",
        GameStatus::InProgress { .. } => "status next",
    };

    let cells = model.board.iter().enumerate().map(|(index, cell)| {
        let winning = winning_line.is_some_and(|line| line.contains(&index));
        h("button")
            .key(index as u64)
            .id(format!("cell-{index}"))
            .class(if winning { "square winning" } else { "square" })
            .prop("disabled", cell.is_some() || winning_line.is_some())
            .on(
                EventKind::Click,
                emitter.listener(TicTacToeEvent::Play(index)),
            )
            .child(cell.map(|mark| mark.to_string()).unwrap_or_default())
    });

    h("div")
        .class("tic-tac-toe")
        .child(h("h1").child("Tic-Tac-Toe"))
        .child(
            h("div")
                .id("status")
                .class(status_class)
                .child(status_text(&status)),
        )
        .child(h("div").class("board").children(cells))
        .child(
            h("button")
                .id("new-game")
                .on(EventKind::Click, emitter.listener(TicTacToeEvent::Reset))
                .child("🔄 New Game"),
        )
        .child(
            h("div")
                .class("info")
                .child(h("p").child("Click on a square to make your move."))
                .child(
                    h("p")
                        .child(h("span").class("mark-x").child("X"))
                        .child(text(" vs "))
                        .child(h("span").class("mark-o").child("O")),
                ),
        )
        .into()
}

pub struct TicTacToeLogic;

impl MvuLogic<TicTacToeEvent, TicTacToeModel, Node> for TicTacToeLogic {
    fn name(&self) -> &'static str {
        "tic-tac-toe"
    }

    fn update(
        &self,
        event: TicTacToeEvent,
        model: &TicTacToeModel,
    ) -> (TicTacToeModel, Effect<TicTacToeEvent>) {
        let next = match event {
            TicTacToeEvent::Play(index) => play(model, index),
            TicTacToeEvent::Reset => reset(model),
        };
        (next, Effect::none())
    }

    fn view(&self, model: &TicTacToeModel, emitter: &Emitter<TicTacToeEvent>) -> Node {
        view(model, emitter)
    }
}
