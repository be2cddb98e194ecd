//! Casual game arena - three self-contained mini-game engines behind a
//! selection menu.
//!
//! # Architecture
//!
//! - **Games**: rock-paper-scissors, memory cards, and tic-tac-toe, each an
//!   independent state machine over its own board/score/turn state
//! - **Arena**: the controller holding the active game, constructing a
//!   fresh engine on selection and discarding it on back-navigation
//! - **Schedule**: session-keyed one-shot tasks for the two UI delays
//!   (mismatch reveal, computer reply)
//! - **Events**: one-way feedback hooks a host UI may subscribe to
//!
//! # Example
//!
//! ```
//! use game_arena::{ArenaController, GameKind, Gesture};
//!
//! let mut arena = ArenaController::new();
//! arena.select_game(GameKind::RockPaperScissors);
//! let result = arena.play_round(Gesture::Rock);
//! assert!(result.is_some());
//!
//! arena.back();
//! assert!(arena.active_game().is_none());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod arena;
mod events;
mod games;
mod rng;
mod schedule;

// Crate-level exports - Arena controller
pub use arena::{ArenaController, GameKind};

// Crate-level exports - Feedback hooks
pub use events::{EventSink, GameEvent, NoopSink};

// Crate-level exports - Delayed transitions
pub use schedule::{DelayedTask, SessionId, TaskAction, run_delayed};

// Crate-level exports - Randomness
pub use rng::ArenaRng;

// Crate-level exports - Rock-paper-scissors
pub use games::rps::{Gesture, RoundResult, RpsEngine, round_outcome};

// Crate-level exports - Memory cards
pub use games::memory::{
    CardState, DECK_SIZE, Deck, DeckError, FlipOutcome, MemoryEngine, PAIR_COUNT, Symbol,
};

// Crate-level exports - Tic-tac-toe
pub use games::tictactoe::{
    Board, Cell, Mark, MoveOutcome, Outcome, TicTacToeEngine, Turn, winner,
};

// Crate-level exports - Scoring
pub use games::score::Scoreboard;
