//! Tests for the delayed-task driver.

use std::sync::{Arc, Mutex};

use game_arena::{
    ArenaController, CardState, DelayedTask, GameKind, MemoryEngine, TaskAction, run_delayed,
};

/// Flips controller-side cards until a mismatched pair is pending.
fn force_mismatch(arena: &mut ArenaController) -> DelayedTask {
    let deck_size = arena.memory().expect("memory active").states().len();
    for _ in 0..deck_size {
        let hidden: Vec<usize> = (0..deck_size)
            .filter(|&i| arena.memory().unwrap().card(i) == Some(CardState::Hidden))
            .collect();
        let Some((&a, rest)) = hidden.split_first() else {
            break;
        };
        arena.flip_card(a);
        for &b in rest {
            if let Some(task) = arena.flip_card(b) {
                return task;
            }
            if arena.memory().unwrap().face_up().is_empty() {
                break;
            }
        }
    }
    panic!("deck produced no mismatch");
}

#[tokio::test(start_paused = true)]
async fn test_driver_applies_task_after_delay() {
    let arena = Arc::new(Mutex::new(ArenaController::new()));
    let task = {
        let mut guard = arena.lock().unwrap();
        guard.select_game(GameKind::MemoryCards);
        force_mismatch(&mut guard)
    };
    assert_eq!(task.delay, MemoryEngine::MISMATCH_DELAY);

    let applied = run_delayed(Arc::clone(&arena), task).await;

    assert!(applied);
    let guard = arena.lock().unwrap();
    assert!(!guard.memory().unwrap().mismatch_pending());
}

#[tokio::test(start_paused = true)]
async fn test_driver_drops_task_when_session_ends() {
    let arena = Arc::new(Mutex::new(ArenaController::new()));
    let task = {
        let mut guard = arena.lock().unwrap();
        guard.select_game(GameKind::MemoryCards);
        force_mismatch(&mut guard)
    };

    // The user navigates back while the reveal timer is in flight.
    arena.lock().unwrap().back();

    let applied = run_delayed(Arc::clone(&arena), task).await;

    assert!(!applied);
    assert_eq!(arena.lock().unwrap().active_game(), None);
}

#[tokio::test(start_paused = true)]
async fn test_driver_ignores_task_for_wrong_game() {
    let arena = Arc::new(Mutex::new(ArenaController::new()));
    arena.lock().unwrap().select_game(GameKind::MemoryCards);
    let session = arena.lock().unwrap().session();

    // A hand-rolled task pointing at the wrong engine must not apply.
    let task = DelayedTask {
        session,
        action: TaskAction::ComputerReply,
        delay: MemoryEngine::MISMATCH_DELAY,
    };

    let applied = run_delayed(Arc::clone(&arena), task).await;
    assert!(!applied);
}
