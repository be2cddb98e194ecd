//! Cumulative session score for the versus-style games.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Win/loss/draw counters for one game session.
///
/// Counters only grow while the owning engine lives; a fresh engine starts
/// from zero. Both rock-paper-scissors and tic-tac-toe keep one of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds or games won by the human player.
    player: u32,
    /// Rounds or games won by the computer.
    computer: u32,
    /// Drawn rounds or games.
    draws: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total rounds recorded so far.
    pub fn total(&self) -> u32 {
        self.player + self.computer + self.draws
    }

    pub(crate) fn record_player_win(&mut self) {
        self.player += 1;
    }

    pub(crate) fn record_computer_win(&mut self) {
        self.computer += 1;
    }

    pub(crate) fn record_draw(&mut self) {
        self.draws += 1;
    }
}
