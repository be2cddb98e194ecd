//! Game selection and dispatch.

mod controller;

pub use controller::{ArenaController, GameKind};
