use super::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

#[test]
fn test_initial_state_is_idle() {
    let lifecycle = Lifecycle::new();
    assert_eq!(lifecycle.state(), MediaState::Idle);
    assert!(!lifecycle.is_paused());
    assert!(!lifecycle.is_closed());
}

#[test]
fn test_start_claims_once() -> Result<()> {
    let lifecycle = Lifecycle::new();

    assert!(lifecycle.begin_start()?);
    assert_eq!(lifecycle.state(), MediaState::Starting);

    // A second start while starting or active is a no-op claim.
    assert!(!lifecycle.begin_start()?);

    lifecycle.complete_start();
    assert_eq!(lifecycle.state(), MediaState::Active);
    assert!(!lifecycle.begin_start()?);
    Ok(())
}

#[test]
fn test_pause_resume_cycle() -> Result<()> {
    let lifecycle = Lifecycle::new();
    assert!(lifecycle.begin_start()?);
    lifecycle.complete_start();

    lifecycle.pause()?;
    assert_eq!(lifecycle.state(), MediaState::Paused);
    assert!(lifecycle.is_paused());

    // Pause is idempotent while paused.
    lifecycle.pause()?;

    lifecycle.resume()?;
    assert_eq!(lifecycle.state(), MediaState::Active);

    // Resume is idempotent while active.
    lifecycle.resume()?;
    Ok(())
}

#[test]
fn test_pause_resume_require_running_component() {
    let lifecycle = Lifecycle::new();
    assert_eq!(lifecycle.pause(), Err(Error::ErrNotActive));
    assert_eq!(lifecycle.resume(), Err(Error::ErrNotPaused));
}

#[test]
fn test_close_is_terminal() -> Result<()> {
    let lifecycle = Lifecycle::new();
    assert!(lifecycle.begin_start()?);
    lifecycle.complete_start();

    assert!(lifecycle.close());
    assert_eq!(lifecycle.state(), MediaState::Closed);

    // Repeat close and every lifecycle operation after close fail.
    assert!(!lifecycle.close());
    assert_eq!(lifecycle.begin_start(), Err(Error::ErrAlreadyClosed));
    assert_eq!(lifecycle.pause(), Err(Error::ErrAlreadyClosed));
    assert_eq!(lifecycle.resume(), Err(Error::ErrAlreadyClosed));
    Ok(())
}

#[test]
fn test_close_from_idle_and_paused() -> Result<()> {
    let idle = Lifecycle::new();
    assert!(idle.close());

    let paused = Lifecycle::new();
    assert!(paused.begin_start()?);
    paused.complete_start();
    paused.pause()?;
    assert!(paused.close());
    Ok(())
}

#[test]
fn test_close_during_start_wins() -> Result<()> {
    let lifecycle = Lifecycle::new();
    assert!(lifecycle.begin_start()?);

    // Close races in before the start completes; the component stays closed.
    assert!(lifecycle.close());
    lifecycle.complete_start();
    assert_eq!(lifecycle.state(), MediaState::Closed);
    Ok(())
}

#[test]
fn test_concurrent_close_releases_exactly_once() -> Result<()> {
    let lifecycle = Arc::new(Lifecycle::new());
    assert!(lifecycle.begin_start()?);
    lifecycle.complete_start();

    let releases = Arc::new(AtomicUsize::new(0));
    let mut workers = Vec::new();
    for _ in 0..8 {
        let lifecycle = Arc::clone(&lifecycle);
        let releases = Arc::clone(&releases);
        workers.push(thread::spawn(move || {
            if lifecycle.close() {
                releases.fetch_add(1, Ordering::SeqCst);
            }
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(releases.load(Ordering::SeqCst), 1);
    assert!(lifecycle.is_closed());
    Ok(())
}
