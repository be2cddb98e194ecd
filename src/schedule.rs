//! Session-keyed delayed transitions.
//!
//! Two delays exist in the arena: the memory mismatch reveal and the
//! tic-tac-toe computer reply. Engines never sleep. A mutating call that
//! enters a delayed transition hands back a [`DelayedTask`] naming the
//! session it belongs to; when the delay elapses the host feeds the task to
//! [`ArenaController::complete`](crate::ArenaController::complete), which
//! drops it if that session has since been discarded. [`run_delayed`] does
//! the sleep-and-complete for hosts running on tokio.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::arena::ArenaController;

/// Identity of one engine lifetime.
///
/// Bumped whenever the arena navigates, so a timer scheduled against an
/// abandoned game can never land on its successor.
pub type SessionId = u64;

/// Which transition a fired timer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskAction {
    /// Hide the mismatched memory pair.
    ResolveMismatch,
    /// Let the computer place its tic-tac-toe mark.
    ComputerReply,
}

/// A one-shot transition due after a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedTask {
    /// Session the task belongs to.
    pub session: SessionId,
    /// Transition to apply when the delay elapses.
    pub action: TaskAction,
    /// How long to wait before applying it.
    pub delay: Duration,
}

/// Sleeps out `task` and applies it to the controller.
///
/// Returns whether the task still applied — `false` means the session
/// ended first and the task was dropped.
#[instrument(skip(controller))]
pub async fn run_delayed(controller: Arc<Mutex<ArenaController>>, task: DelayedTask) -> bool {
    tokio::time::sleep(task.delay).await;
    controller.lock().unwrap().complete(task)
}
