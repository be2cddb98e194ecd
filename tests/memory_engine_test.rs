//! Tests for the memory cards engine.

use std::sync::{Arc, Mutex};

use game_arena::{
    ArenaRng, CardState, DECK_SIZE, Deck, EventSink, FlipOutcome, GameEvent, MemoryEngine,
    NoopSink, Symbol,
};

/// Sink that records every event for assertions.
#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<GameEvent>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn notify(&self, event: GameEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Fixture deck: [🍎, 🍌, 🍎, 🍌].
fn small_deck() -> Deck {
    Deck::from_symbols(vec![
        Symbol::Apple,
        Symbol::Banana,
        Symbol::Apple,
        Symbol::Banana,
    ])
    .expect("paired deck")
}

#[test]
fn test_fresh_deck_is_standard() {
    let mut rng = ArenaRng::seeded(3);
    let deck = Deck::deal(&mut rng);
    assert_eq!(deck.len(), DECK_SIZE);
    for symbol in Symbol::ALL {
        let count = deck.cards().iter().filter(|&&c| c == symbol).count();
        assert_eq!(count, 2, "{symbol:?} should appear exactly twice");
    }
}

#[test]
fn test_fresh_engine_is_all_hidden() {
    let engine = MemoryEngine::new();
    assert_eq!(engine.states().len(), DECK_SIZE);
    assert!(engine.states().iter().all(|&s| s == CardState::Hidden));
    assert_eq!(engine.attempts(), 0);
    assert!(!engine.is_won());
}

#[test]
fn test_match_resolves_synchronously() {
    let mut engine = MemoryEngine::with_deck(small_deck(), Arc::new(NoopSink));

    assert_eq!(engine.flip(0), FlipOutcome::Revealed);
    assert_eq!(engine.flip(2), FlipOutcome::Matched { won: false });

    assert_eq!(engine.card(0), Some(CardState::Matched));
    assert_eq!(engine.card(2), Some(CardState::Matched));
    assert!(engine.face_up().is_empty());
    assert_eq!(engine.attempts(), 2);
}

#[test]
fn test_mismatch_stays_visible_until_resolved() {
    let mut engine = MemoryEngine::with_deck(small_deck(), Arc::new(NoopSink));

    assert_eq!(engine.flip(0), FlipOutcome::Revealed);
    assert_eq!(engine.flip(1), FlipOutcome::Mismatched);

    // Both cards stay face-up while the reveal timeout is pending.
    assert_eq!(engine.face_up(), &[0, 1]);
    assert_eq!(engine.card(0), Some(CardState::FaceUp));
    assert_eq!(engine.card(1), Some(CardState::FaceUp));
    assert!(engine.mismatch_pending());

    engine.resolve_mismatch();

    assert!(engine.face_up().is_empty());
    assert_eq!(engine.card(0), Some(CardState::Hidden));
    assert_eq!(engine.card(1), Some(CardState::Hidden));
    assert_eq!(engine.attempts(), 2);
}

#[test]
fn test_flip_rejected_while_mismatch_pending() {
    let mut engine = MemoryEngine::with_deck(small_deck(), Arc::new(NoopSink));
    engine.flip(0);
    engine.flip(1);

    assert_eq!(engine.flip(2), FlipOutcome::Rejected);
    assert_eq!(engine.attempts(), 2);
    assert_eq!(engine.card(2), Some(CardState::Hidden));
}

#[test]
fn test_repeat_and_matched_flips_are_rejected() {
    let mut engine = MemoryEngine::with_deck(small_deck(), Arc::new(NoopSink));

    engine.flip(0);
    // Same card again while face-up.
    assert_eq!(engine.flip(0), FlipOutcome::Rejected);
    assert_eq!(engine.attempts(), 1);

    engine.flip(2);
    // Matched cards never flip again.
    assert_eq!(engine.flip(0), FlipOutcome::Rejected);
    assert_eq!(engine.flip(2), FlipOutcome::Rejected);
    assert_eq!(engine.attempts(), 2);
}

#[test]
fn test_out_of_range_flip_is_rejected() {
    let mut engine = MemoryEngine::with_deck(small_deck(), Arc::new(NoopSink));
    assert_eq!(engine.flip(99), FlipOutcome::Rejected);
    assert_eq!(engine.attempts(), 0);
}

#[test]
fn test_full_game_on_fixture_deck() {
    // Mismatch first, then clear both pairs: attempts 2, 4, then win at 6.
    let mut engine = MemoryEngine::with_deck(small_deck(), Arc::new(NoopSink));
    assert_eq!(engine.deck().len(), 4);

    assert_eq!(engine.flip(0), FlipOutcome::Revealed);
    assert_eq!(engine.flip(1), FlipOutcome::Mismatched);
    engine.resolve_mismatch();
    assert_eq!(engine.attempts(), 2);
    assert!(engine.states().iter().all(|&s| s == CardState::Hidden));

    assert_eq!(engine.flip(0), FlipOutcome::Revealed);
    assert_eq!(engine.flip(2), FlipOutcome::Matched { won: false });
    assert_eq!(engine.attempts(), 4);

    assert_eq!(engine.flip(1), FlipOutcome::Revealed);
    assert_eq!(engine.flip(3), FlipOutcome::Matched { won: true });
    assert!(engine.is_won());
    assert_eq!(engine.attempts(), 6);
}

#[test]
fn test_visible_symbol_tracks_card_state() {
    let mut engine = MemoryEngine::with_deck(small_deck(), Arc::new(NoopSink));
    assert_eq!(engine.visible_symbol(0), None);

    engine.flip(0);
    assert_eq!(engine.visible_symbol(0), Some(Symbol::Apple));

    engine.flip(2);
    assert_eq!(engine.visible_symbol(2), Some(Symbol::Apple));
}

#[test]
fn test_match_and_win_events_emitted() {
    let sink = Arc::new(RecordingSink::default());
    let mut engine = MemoryEngine::with_deck(small_deck(), Arc::clone(&sink) as _);

    engine.flip(0);
    engine.flip(2);
    engine.flip(1);
    engine.flip(3);

    assert_eq!(
        sink.events(),
        vec![
            GameEvent::CardFlipped { index: 0 },
            GameEvent::CardFlipped { index: 2 },
            GameEvent::MatchFound {
                symbol: Symbol::Apple
            },
            GameEvent::CardFlipped { index: 1 },
            GameEvent::CardFlipped { index: 3 },
            GameEvent::MatchFound {
                symbol: Symbol::Banana
            },
            GameEvent::GameWon,
        ]
    );
}

#[test]
fn test_restart_clears_progress() {
    let mut engine = MemoryEngine::with_deck(small_deck(), Arc::new(NoopSink));
    engine.flip(0);
    engine.flip(1);

    engine.restart();

    assert_eq!(engine.states().len(), DECK_SIZE);
    assert!(engine.states().iter().all(|&s| s == CardState::Hidden));
    assert!(engine.face_up().is_empty());
    assert_eq!(engine.attempts(), 0);
}
