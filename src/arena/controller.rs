//! Arena controller — the state machine selecting the active game.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::events::{EventSink, NoopSink};
use crate::games::memory::{FlipOutcome, MemoryEngine};
use crate::games::rps::{Gesture, RoundResult, RpsEngine};
use crate::games::tictactoe::{MoveOutcome, TicTacToeEngine};
use crate::rng::ArenaRng;
use crate::schedule::{DelayedTask, SessionId, TaskAction};

/// The three games on the selection menu.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum GameKind {
    /// Rock-paper-scissors.
    #[display("Rock Paper Scissors")]
    RockPaperScissors,
    /// Memory cards.
    #[display("Memory Cards")]
    MemoryCards,
    /// Tic-tac-toe.
    #[display("Tic Tac Toe")]
    TicTacToe,
}

/// The engine currently in play.
#[derive(Debug)]
enum ActiveGame {
    Rps(RpsEngine),
    Memory(MemoryEngine),
    TicTacToe(TicTacToeEngine),
}

/// Composition root: holds at most one live engine and routes input to it.
///
/// Selecting a game always constructs a fresh engine; navigating back
/// discards it together with any timer still in flight — the session id a
/// [`DelayedTask`] carries no longer matches, so [`ArenaController::complete`]
/// drops it.
pub struct ArenaController {
    active: Option<ActiveGame>,
    session: SessionId,
    sink: Arc<dyn EventSink>,
}

impl ArenaController {
    /// Creates a controller with no feedback sink.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(NoopSink))
    }

    /// Creates a controller delivering engine events to `sink`.
    #[instrument(skip(sink))]
    pub fn with_sink(sink: Arc<dyn EventSink>) -> Self {
        info!("Creating arena controller");
        Self {
            active: None,
            session: 0,
            sink,
        }
    }

    /// Enters `kind` with a brand-new engine, discarding any prior game.
    #[instrument(skip(self))]
    pub fn select_game(&mut self, kind: GameKind) {
        self.session += 1;
        info!(game = %kind, session = self.session, "Selecting game");
        let rng = ArenaRng::from_entropy();
        let sink = Arc::clone(&self.sink);
        self.active = Some(match kind {
            GameKind::RockPaperScissors => ActiveGame::Rps(RpsEngine::with_parts(rng, sink)),
            GameKind::MemoryCards => ActiveGame::Memory(MemoryEngine::with_parts(rng, sink)),
            GameKind::TicTacToe => ActiveGame::TicTacToe(TicTacToeEngine::with_parts(rng, sink)),
        });
    }

    /// Returns to the menu, discarding the active engine.
    #[instrument(skip(self))]
    pub fn back(&mut self) {
        self.session += 1;
        info!(session = self.session, "Back to menu");
        self.active = None;
    }

    /// Which game is active, if any.
    pub fn active_game(&self) -> Option<GameKind> {
        match self.active.as_ref()? {
            ActiveGame::Rps(_) => Some(GameKind::RockPaperScissors),
            ActiveGame::Memory(_) => Some(GameKind::MemoryCards),
            ActiveGame::TicTacToe(_) => Some(GameKind::TicTacToe),
        }
    }

    /// Live session id. Changes on every navigation.
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// The rock-paper-scissors engine, when active.
    pub fn rps(&self) -> Option<&RpsEngine> {
        match self.active.as_ref()? {
            ActiveGame::Rps(engine) => Some(engine),
            _ => None,
        }
    }

    /// The memory engine, when active.
    pub fn memory(&self) -> Option<&MemoryEngine> {
        match self.active.as_ref()? {
            ActiveGame::Memory(engine) => Some(engine),
            _ => None,
        }
    }

    /// The tic-tac-toe engine, when active.
    pub fn tictactoe(&self) -> Option<&TicTacToeEngine> {
        match self.active.as_ref()? {
            ActiveGame::TicTacToe(engine) => Some(engine),
            _ => None,
        }
    }

    /// Plays a rock-paper-scissors round. No-op unless that game is active.
    #[instrument(skip(self))]
    pub fn play_round(&mut self, gesture: Gesture) -> Option<RoundResult> {
        let Some(ActiveGame::Rps(engine)) = &mut self.active else {
            warn!(gesture = %gesture, "Rock-paper-scissors is not active");
            return None;
        };
        Some(engine.play_round(gesture))
    }

    /// Flips a memory card. No-op unless that game is active.
    ///
    /// Returns the reveal-timeout task to schedule when the flip produced
    /// a mismatched pair.
    #[instrument(skip(self))]
    pub fn flip_card(&mut self, index: usize) -> Option<DelayedTask> {
        let Some(ActiveGame::Memory(engine)) = &mut self.active else {
            warn!(index, "Memory is not active");
            return None;
        };
        match engine.flip(index) {
            FlipOutcome::Mismatched => Some(DelayedTask {
                session: self.session,
                action: TaskAction::ResolveMismatch,
                delay: MemoryEngine::MISMATCH_DELAY,
            }),
            _ => None,
        }
    }

    /// Places the human tic-tac-toe mark. No-op unless that game is active.
    ///
    /// Returns the computer-reply task to schedule when the turn passed to
    /// the computer.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, index: usize) -> Option<DelayedTask> {
        let Some(ActiveGame::TicTacToe(engine)) = &mut self.active else {
            warn!(index, "Tic-tac-toe is not active");
            return None;
        };
        match engine.human_move(index) {
            MoveOutcome::AwaitingComputer => Some(DelayedTask {
                session: self.session,
                action: TaskAction::ComputerReply,
                delay: TicTacToeEngine::COMPUTER_DELAY,
            }),
            _ => None,
        }
    }

    /// Restarts the active game for another round ("play again").
    ///
    /// Scoreboards survive; the memory deck reshuffles. No-op on the menu.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        match &mut self.active {
            Some(ActiveGame::Rps(engine)) => engine.reset(),
            Some(ActiveGame::Memory(engine)) => engine.restart(),
            Some(ActiveGame::TicTacToe(engine)) => engine.reset(),
            None => warn!("No game active"),
        }
    }

    /// Applies a fired delayed task.
    ///
    /// Tasks from a session that has since been discarded are dropped.
    /// Returns whether the task applied.
    #[instrument(skip(self))]
    pub fn complete(&mut self, task: DelayedTask) -> bool {
        if task.session != self.session {
            warn!(
                task_session = task.session,
                live_session = self.session,
                "Dropping stale task"
            );
            return false;
        }
        match (task.action, &mut self.active) {
            (TaskAction::ResolveMismatch, Some(ActiveGame::Memory(engine))) => {
                debug!("Applying mismatch reveal timeout");
                engine.resolve_mismatch();
                true
            }
            (TaskAction::ComputerReply, Some(ActiveGame::TicTacToe(engine))) => {
                debug!("Applying computer reply");
                engine.computer_reply();
                true
            }
            _ => {
                warn!(action = ?task.action, "Task does not match the active game");
                false
            }
        }
    }
}

impl Default for ArenaController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ArenaController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaController")
            .field("active", &self.active)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
