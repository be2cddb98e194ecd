//! Flip/match state machine for the memory card game.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use super::deck::Deck;
use super::types::{CardState, Symbol};
use crate::events::{EventSink, GameEvent, NoopSink};
use crate::rng::ArenaRng;

/// Result of a flip request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The request was ineligible and nothing changed.
    Rejected,
    /// First card of a pair turned face-up.
    Revealed,
    /// Second card matched the first; both are locked face-up.
    Matched {
        /// True when this match completed the deck.
        won: bool,
    },
    /// Second card did not match. The pair stays visible until
    /// [`MemoryEngine::resolve_mismatch`] runs, nominally after
    /// [`MemoryEngine::MISMATCH_DELAY`].
    Mismatched,
}

/// State machine for a memory cards session.
///
/// At most two cards are face-up-unmatched at a time. A matched pair locks
/// immediately; a mismatched pair blocks further flips until the host
/// resolves it after the reveal delay.
pub struct MemoryEngine {
    deck: Deck,
    states: Vec<CardState>,
    face_up: Vec<usize>,
    attempts: u32,
    rng: ArenaRng,
    sink: Arc<dyn EventSink>,
}

impl MemoryEngine {
    /// How long a mismatched pair stays visible before flipping back.
    pub const MISMATCH_DELAY: Duration = Duration::from_secs(1);

    /// Deals a new game with an entropy-seeded RNG and no feedback sink.
    pub fn new() -> Self {
        Self::with_parts(ArenaRng::from_entropy(), Arc::new(NoopSink))
    }

    /// Deals a new game with an explicit random source and feedback sink.
    #[instrument(skip(rng, sink))]
    pub fn with_parts(mut rng: ArenaRng, sink: Arc<dyn EventSink>) -> Self {
        info!("Dealing new memory game");
        let deck = Deck::deal(&mut rng);
        let states = vec![CardState::Hidden; deck.len()];
        Self {
            deck,
            states,
            face_up: Vec::new(),
            attempts: 0,
            rng,
            sink,
        }
    }

    /// Builds an engine over a fixed deck, for fixtures.
    #[instrument(skip(deck, sink), fields(cards = deck.len()))]
    pub fn with_deck(deck: Deck, sink: Arc<dyn EventSink>) -> Self {
        let states = vec![CardState::Hidden; deck.len()];
        Self {
            deck,
            states,
            face_up: Vec::new(),
            attempts: 0,
            rng: ArenaRng::from_entropy(),
            sink,
        }
    }

    /// Flips the card at `index`.
    ///
    /// No-op when the index is out of range, the card is already face-up or
    /// matched, or a mismatched pair is still awaiting its reveal timeout.
    #[instrument(skip(self))]
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        let Some(&state) = self.states.get(index) else {
            warn!(index, "Flip index out of range");
            return FlipOutcome::Rejected;
        };
        if state != CardState::Hidden {
            debug!(index, ?state, "Card is not flippable");
            return FlipOutcome::Rejected;
        }
        if self.mismatch_pending() {
            debug!(index, "Mismatched pair still awaiting reveal timeout");
            return FlipOutcome::Rejected;
        }

        self.states[index] = CardState::FaceUp;
        self.face_up.push(index);
        self.attempts += 1;
        self.sink.notify(GameEvent::CardFlipped { index });

        if self.face_up.len() < 2 {
            return FlipOutcome::Revealed;
        }

        let (first, second) = (self.face_up[0], self.face_up[1]);
        if self.deck.symbol(first) == self.deck.symbol(second) {
            self.states[first] = CardState::Matched;
            self.states[second] = CardState::Matched;
            self.face_up.clear();
            debug!(first, second, "Pair matched");
            if let Some(symbol) = self.deck.symbol(first) {
                self.sink.notify(GameEvent::MatchFound { symbol });
            }
            let won = self.is_won();
            if won {
                info!(attempts = self.attempts, "All pairs matched");
                self.sink.notify(GameEvent::GameWon);
            }
            FlipOutcome::Matched { won }
        } else {
            debug!(first, second, "Pair mismatched, awaiting reveal timeout");
            FlipOutcome::Mismatched
        }
    }

    /// Hides a pending mismatched pair. No-op when none is pending.
    #[instrument(skip(self))]
    pub fn resolve_mismatch(&mut self) {
        if !self.mismatch_pending() {
            debug!("No mismatched pair pending");
            return;
        }
        for &index in &self.face_up {
            self.states[index] = CardState::Hidden;
        }
        self.face_up.clear();
        debug!("Mismatched pair hidden");
    }

    /// Reshuffles a fresh deck and clears all progress.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting memory game");
        self.deck = Deck::deal(&mut self.rng);
        self.states = vec![CardState::Hidden; self.deck.len()];
        self.face_up.clear();
        self.attempts = 0;
    }

    /// True once every card is matched.
    pub fn is_won(&self) -> bool {
        self.states.iter().all(|&s| s == CardState::Matched)
    }

    /// True while a mismatched pair is awaiting its reveal timeout.
    pub fn mismatch_pending(&self) -> bool {
        self.face_up.len() == 2
    }

    /// State of the card at `index`.
    pub fn card(&self, index: usize) -> Option<CardState> {
        self.states.get(index).copied()
    }

    /// States of all cards in deck order.
    pub fn states(&self) -> &[CardState] {
        &self.states
    }

    /// Symbol at `index`, if the card is currently visible.
    pub fn visible_symbol(&self, index: usize) -> Option<Symbol> {
        match self.card(index)? {
            CardState::Hidden => None,
            CardState::FaceUp | CardState::Matched => self.deck.symbol(index),
        }
    }

    /// Indices currently face-up-unmatched (the pending pair), in flip order.
    pub fn face_up(&self) -> &[usize] {
        &self.face_up
    }

    /// Accepted flips so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The dealt deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryEngine")
            .field("deck", &self.deck)
            .field("states", &self.states)
            .field("face_up", &self.face_up)
            .field("attempts", &self.attempts)
            .finish_non_exhaustive()
    }
}
