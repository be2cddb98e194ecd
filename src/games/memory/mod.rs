mod deck;
mod engine;
mod types;

pub use deck::{DECK_SIZE, Deck, PAIR_COUNT};
pub use engine::{FlipOutcome, MemoryEngine};
pub use types::{CardState, DeckError, Symbol};
