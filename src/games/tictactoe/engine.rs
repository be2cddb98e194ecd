//! Turn-cycle engine for tic-tac-toe against a random computer player.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::rules::winner;
use super::types::{Board, Mark};
use crate::events::{EventSink, GameEvent, NoopSink};
use crate::games::score::Scoreboard;
use crate::rng::ArenaRng;

/// Whose input the engine is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// The human picks the next cell.
    Human,
    /// The computer reply is due.
    Computer,
}

/// Terminal result of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Three in a line for the given mark.
    Won(Mark),
    /// Full board, no line.
    Draw,
}

impl Outcome {
    /// Returns the winning mark, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// True if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(mark) => write!(f, "Winner: {mark}"),
            Outcome::Draw => write!(f, "It's a draw"),
        }
    }
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The request was ineligible and nothing changed.
    Rejected,
    /// Mark placed; the game reached a terminal outcome.
    Finished(Outcome),
    /// Mark placed; the computer replies after
    /// [`TicTacToeEngine::COMPUTER_DELAY`].
    AwaitingComputer,
    /// Mark placed; the human moves next.
    AwaitingHuman,
}

/// State machine for a tic-tac-toe session.
///
/// The human opens every game; after each human move the computer places a
/// uniformly random mark on an open cell. The scoreboard accumulates
/// across [`TicTacToeEngine::reset`] until the engine itself is discarded.
pub struct TicTacToeEngine {
    board: Board,
    turn: Turn,
    outcome: Option<Outcome>,
    score: Scoreboard,
    rng: ArenaRng,
    sink: Arc<dyn EventSink>,
}

impl TicTacToeEngine {
    /// Mark played by the human (moves first).
    pub const HUMAN: Mark = Mark::X;

    /// Mark played by the computer.
    pub const COMPUTER: Mark = Mark::O;

    /// Pause before the computer reply lands, so it reads as "thinking".
    pub const COMPUTER_DELAY: Duration = Duration::from_millis(500);

    /// Creates an engine with an entropy-seeded RNG and no feedback sink.
    pub fn new() -> Self {
        Self::with_parts(ArenaRng::from_entropy(), Arc::new(NoopSink))
    }

    /// Creates an engine with an explicit random source and feedback sink.
    #[instrument(skip(rng, sink))]
    pub fn with_parts(rng: ArenaRng, sink: Arc<dyn EventSink>) -> Self {
        info!("Creating tic-tac-toe engine");
        Self {
            board: Board::new(),
            turn: Turn::Human,
            outcome: None,
            score: Scoreboard::new(),
            rng,
            sink,
        }
    }

    /// Places the human mark at the given cell.
    ///
    /// No-op when the game is over, the cell is unavailable, or the
    /// computer reply is still due. On [`MoveOutcome::AwaitingComputer`]
    /// the caller schedules [`TicTacToeEngine::computer_reply`].
    #[instrument(skip(self))]
    pub fn human_move(&mut self, index: usize) -> MoveOutcome {
        if self.outcome.is_some() {
            debug!(index, "Game is already over");
            return MoveOutcome::Rejected;
        }
        if self.turn != Turn::Human {
            warn!(index, "Computer reply still due");
            return MoveOutcome::Rejected;
        }
        if !self.board.is_open(index) {
            debug!(index, "Cell is not open");
            return MoveOutcome::Rejected;
        }

        match self.place(Self::HUMAN, index) {
            Some(outcome) => MoveOutcome::Finished(outcome),
            None => {
                self.turn = Turn::Computer;
                debug!("Awaiting computer reply");
                MoveOutcome::AwaitingComputer
            }
        }
    }

    /// Plays the computer reply: a uniformly random open cell.
    ///
    /// No-op unless the reply is due. A full board at this point cannot
    /// happen after the draw check on the human move, but it must not
    /// wedge the turn cycle: the reply is skipped and the game drawn.
    #[instrument(skip(self))]
    pub fn computer_reply(&mut self) -> MoveOutcome {
        if self.outcome.is_some() || self.turn != Turn::Computer {
            debug!("No computer reply due");
            return MoveOutcome::Rejected;
        }

        let open = self.board.open_cells();
        if open.is_empty() {
            warn!("Computer reply with no open cells");
            self.outcome = Some(Outcome::Draw);
            self.score.record_draw();
            self.sink.notify(GameEvent::GameDrawn);
            return MoveOutcome::Finished(Outcome::Draw);
        }

        let index = open[self.rng.pick_index(open.len())];
        match self.place(Self::COMPUTER, index) {
            Some(outcome) => MoveOutcome::Finished(outcome),
            None => {
                self.turn = Turn::Human;
                MoveOutcome::AwaitingHuman
            }
        }
    }

    /// Places a validated mark and evaluates the board.
    fn place(&mut self, mark: Mark, index: usize) -> Option<Outcome> {
        let placed = self.board.place(index, mark);
        debug_assert!(placed, "placement was validated");
        self.sink.notify(GameEvent::MarkPlaced { mark, index });

        if let Some(winning) = winner(&self.board) {
            info!(winner = %winning, "Game won");
            self.outcome = Some(Outcome::Won(winning));
            if winning == Self::HUMAN {
                self.score.record_player_win();
            } else {
                self.score.record_computer_win();
            }
            self.sink.notify(GameEvent::GameWon);
            Some(Outcome::Won(winning))
        } else if self.board.is_full() {
            info!("Board full, draw");
            self.outcome = Some(Outcome::Draw);
            self.score.record_draw();
            self.sink.notify(GameEvent::GameDrawn);
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Clears the board for the next game. The scoreboard persists.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting board");
        self.board = Board::new();
        self.turn = Turn::Human;
        self.outcome = None;
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose input the engine is waiting on.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The terminal outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The session scoreboard.
    pub fn score(&self) -> &Scoreboard {
        &self.score
    }
}

impl Default for TicTacToeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TicTacToeEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicTacToeEngine")
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field("outcome", &self.outcome)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}
