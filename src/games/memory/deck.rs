//! Deck construction and shuffling.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

use super::types::{DeckError, Symbol};
use crate::rng::ArenaRng;

/// Number of distinct symbols in a standard deck.
pub const PAIR_COUNT: usize = 8;

/// Number of cards in a standard deck (every symbol twice).
pub const DECK_SIZE: usize = PAIR_COUNT * 2;

/// Ordered card faces for one game, fixed once dealt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Symbol>,
}

impl Deck {
    /// Deals a standard 16-card deck, uniformly shuffled.
    #[instrument(skip(rng))]
    pub fn deal(rng: &mut ArenaRng) -> Self {
        let mut cards: Vec<Symbol> = Symbol::iter().chain(Symbol::iter()).collect();
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Builds a deck from an explicit sequence, for fixtures.
    ///
    /// # Errors
    ///
    /// Every symbol must appear exactly twice.
    pub fn from_symbols(cards: Vec<Symbol>) -> Result<Self, DeckError> {
        if cards.len() % 2 != 0 {
            return Err(DeckError::OddLength { len: cards.len() });
        }
        let mut counts: HashMap<Symbol, usize> = HashMap::new();
        for &card in &cards {
            *counts.entry(card).or_insert(0) += 1;
        }
        for (&symbol, &count) in &counts {
            if count != 2 {
                return Err(DeckError::UnpairedSymbol { symbol, count });
            }
        }
        Ok(Self { cards })
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the deck holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Symbol at the given card index.
    pub fn symbol(&self, index: usize) -> Option<Symbol> {
        self.cards.get(index).copied()
    }

    /// All card faces in deck order.
    pub fn cards(&self) -> &[Symbol] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_is_standard() {
        let mut rng = ArenaRng::seeded(42);
        let deck = Deck::deal(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        for symbol in Symbol::ALL {
            let count = deck.cards().iter().filter(|&&c| c == symbol).count();
            assert_eq!(count, 2, "{symbol:?} should appear exactly twice");
        }
    }

    #[test]
    fn test_from_symbols_accepts_pairs() {
        let deck = Deck::from_symbols(vec![
            Symbol::Apple,
            Symbol::Banana,
            Symbol::Apple,
            Symbol::Banana,
        ])
        .expect("paired deck");
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.symbol(2), Some(Symbol::Apple));
    }

    #[test]
    fn test_from_symbols_rejects_odd_length() {
        let err = Deck::from_symbols(vec![Symbol::Apple, Symbol::Apple, Symbol::Banana])
            .expect_err("odd deck");
        assert_eq!(err, DeckError::OddLength { len: 3 });
    }

    #[test]
    fn test_from_symbols_rejects_unpaired() {
        let err = Deck::from_symbols(vec![
            Symbol::Apple,
            Symbol::Apple,
            Symbol::Apple,
            Symbol::Banana,
        ])
        .expect_err("unpaired deck");
        assert!(matches!(err, DeckError::UnpairedSymbol { .. }));
    }
}
