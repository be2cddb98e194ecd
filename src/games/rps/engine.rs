//! Round-driven engine for rock-paper-scissors.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::rules::round_outcome;
use super::types::{Gesture, RoundResult};
use crate::events::{EventSink, GameEvent, NoopSink};
use crate::games::score::Scoreboard;
use crate::rng::ArenaRng;

/// State machine for a rock-paper-scissors session.
///
/// One round = one player gesture against one uniformly random computer
/// gesture. The last round is kept for display until [`RpsEngine::reset`];
/// the scoreboard accumulates until the engine itself is discarded.
pub struct RpsEngine {
    rng: ArenaRng,
    sink: Arc<dyn EventSink>,
    last_player: Option<Gesture>,
    last_computer: Option<Gesture>,
    last_result: Option<RoundResult>,
    score: Scoreboard,
}

impl RpsEngine {
    /// Creates an engine with an entropy-seeded RNG and no feedback sink.
    pub fn new() -> Self {
        Self::with_parts(ArenaRng::from_entropy(), Arc::new(NoopSink))
    }

    /// Creates an engine with an explicit random source and feedback sink.
    #[instrument(skip(rng, sink))]
    pub fn with_parts(rng: ArenaRng, sink: Arc<dyn EventSink>) -> Self {
        info!("Creating rock-paper-scissors engine");
        Self {
            rng,
            sink,
            last_player: None,
            last_computer: None,
            last_result: None,
            score: Scoreboard::new(),
        }
    }

    /// Plays one round with the given gesture.
    ///
    /// The computer gesture is sampled uniformly and independently each
    /// call. Updates the scoreboard and records the pair for display.
    #[instrument(skip(self))]
    pub fn play_round(&mut self, gesture: Gesture) -> RoundResult {
        let reply = Gesture::ALL[self.rng.pick_index(Gesture::ALL.len())];
        let result = round_outcome(gesture, reply);
        debug!(player = %gesture, computer = %reply, result = %result, "Round resolved");

        match result {
            RoundResult::Win => self.score.record_player_win(),
            RoundResult::Lose => self.score.record_computer_win(),
            RoundResult::Draw => self.score.record_draw(),
        }
        self.last_player = Some(gesture);
        self.last_computer = Some(reply);
        self.last_result = Some(result);
        self.sink.notify(GameEvent::RoundPlayed { result });
        result
    }

    /// Clears the displayed round. The scoreboard is untouched.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Clearing last round");
        self.last_player = None;
        self.last_computer = None;
        self.last_result = None;
    }

    /// The player's gesture in the last round, if one was played.
    pub fn last_player(&self) -> Option<Gesture> {
        self.last_player
    }

    /// The computer's gesture in the last round, if one was played.
    pub fn last_computer(&self) -> Option<Gesture> {
        self.last_computer
    }

    /// The result of the last round, if one was played.
    pub fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }

    /// The session scoreboard.
    pub fn score(&self) -> &Scoreboard {
        &self.score
    }
}

impl Default for RpsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RpsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpsEngine")
            .field("last_player", &self.last_player)
            .field("last_computer", &self.last_computer)
            .field("last_result", &self.last_result)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}
