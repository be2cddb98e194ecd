//! Core domain types for rock-paper-scissors.

use serde::{Deserialize, Serialize};

/// Hand gesture a player can throw.
///
/// The three gestures form a fixed cycle: rock beats scissors, scissors
/// beats paper, paper beats rock.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Gesture {
    /// Closed fist.
    Rock,
    /// Open hand.
    Paper,
    /// Two fingers.
    Scissors,
}

impl Gesture {
    /// All three gestures, in menu order.
    pub const ALL: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    /// The gesture this one defeats.
    pub fn beats(self) -> Gesture {
        match self {
            Gesture::Rock => Gesture::Scissors,
            Gesture::Scissors => Gesture::Paper,
            Gesture::Paper => Gesture::Rock,
        }
    }

    /// Emoji label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Gesture::Rock => "✊",
            Gesture::Paper => "✋",
            Gesture::Scissors => "✌️",
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of one round, relative to the human player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum RoundResult {
    /// The player's gesture beat the computer's.
    #[display("You win!")]
    Win,
    /// The computer's gesture beat the player's.
    #[display("Computer wins!")]
    Lose,
    /// Both threw the same gesture.
    #[display("It's a draw!")]
    Draw,
}
