//! Round outcome evaluation for rock-paper-scissors.

use super::types::{Gesture, RoundResult};
use tracing::instrument;

/// Evaluates one round from the human player's perspective.
///
/// Draw iff both gestures are equal; otherwise the fixed cycle
/// rock → scissors → paper → rock decides. Pure and total.
#[instrument]
pub fn round_outcome(player: Gesture, opponent: Gesture) -> RoundResult {
    if player == opponent {
        RoundResult::Draw
    } else if player.beats() == opponent {
        RoundResult::Win
    } else {
        RoundResult::Lose
    }
}
