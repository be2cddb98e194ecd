mod engine;
mod rules;
mod types;

pub use engine::RpsEngine;
pub use rules::round_outcome;
pub use types::{Gesture, RoundResult};
