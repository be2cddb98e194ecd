mod engine;
mod rules;
mod types;

pub use engine::{MoveOutcome, Outcome, TicTacToeEngine, Turn};
pub use rules::winner;
pub use types::{Board, Cell, Mark};
