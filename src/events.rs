//! Feedback hooks emitted by the game engines.
//!
//! Engines announce noteworthy moments (a round resolved, a pair matched,
//! a game won) as [`GameEvent`]s on an [`EventSink`]. The hooks are one-way:
//! nothing an implementation does can affect game state, and an engine works
//! identically with the default [`NoopSink`].

use serde::{Deserialize, Serialize};

use crate::games::memory::Symbol;
use crate::games::rps::RoundResult;
use crate::games::tictactoe::Mark;

/// One-way notification a host UI may react to with sound or visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A rock-paper-scissors round resolved.
    RoundPlayed {
        /// Outcome relative to the human player.
        result: RoundResult,
    },
    /// A memory card turned face-up.
    CardFlipped {
        /// Deck index of the flipped card.
        index: usize,
    },
    /// Two face-up memory cards matched.
    MatchFound {
        /// The symbol on the matched pair.
        symbol: Symbol,
    },
    /// A mark landed on the tic-tac-toe board.
    MarkPlaced {
        /// The mark that was placed.
        mark: Mark,
        /// Board index where it landed.
        index: usize,
    },
    /// The active game was won.
    GameWon,
    /// The active game ended in a draw.
    GameDrawn,
}

/// Subscriber for engine feedback.
///
/// Implementations must swallow their own failures: a sink that cannot play
/// a sound simply does nothing. Events never carry back into game state.
pub trait EventSink: Send + Sync {
    /// Receives one event.
    fn notify(&self, event: GameEvent);
}

/// Sink that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn notify(&self, _event: GameEvent) {}
}
