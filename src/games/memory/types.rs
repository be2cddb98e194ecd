//! Core domain types for the memory card game.

use serde::{Deserialize, Serialize};

/// Symbol printed on a card face.
///
/// A standard deck holds every symbol exactly twice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Symbol {
    /// 🍎
    Apple,
    /// 🍌
    Banana,
    /// 🍇
    Grapes,
    /// 🍉
    Watermelon,
    /// 🍊
    Orange,
    /// 🍋
    Lemon,
    /// 🍍
    Pineapple,
    /// 🥝
    Kiwi,
}

impl Symbol {
    /// All eight symbols, one per pair.
    pub const ALL: [Symbol; 8] = [
        Symbol::Apple,
        Symbol::Banana,
        Symbol::Grapes,
        Symbol::Watermelon,
        Symbol::Orange,
        Symbol::Lemon,
        Symbol::Pineapple,
        Symbol::Kiwi,
    ];

    /// Emoji label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Symbol::Apple => "🍎",
            Symbol::Banana => "🍌",
            Symbol::Grapes => "🍇",
            Symbol::Watermelon => "🍉",
            Symbol::Orange => "🍊",
            Symbol::Lemon => "🍋",
            Symbol::Pineapple => "🍍",
            Symbol::Kiwi => "🥝",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Visible state of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardState {
    /// Face-down.
    Hidden,
    /// Face-up, not yet part of a matched pair.
    FaceUp,
    /// Permanently face-up as part of a matched pair.
    Matched,
}

/// Error building a deck from an explicit symbol sequence.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DeckError {
    /// The sequence has an odd number of cards.
    #[display("deck holds {} cards, which cannot pair up", len)]
    OddLength {
        /// Number of cards supplied.
        len: usize,
    },
    /// A symbol does not appear exactly twice.
    #[display("symbol {} appears {} times, expected exactly 2", symbol, count)]
    UnpairedSymbol {
        /// The offending symbol.
        symbol: Symbol,
        /// How many times it appears.
        count: usize,
    },
}
