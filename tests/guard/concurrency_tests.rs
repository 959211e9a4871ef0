/*!
 * Concurrent Resolution Tests
 *
 * Many threads racing on one guard: exactly one wins.
 */

use cleanup_guard::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

const CALLERS: usize = 100;

fn counting_guard() -> (Arc<CallbackGuard>, Arc<AtomicUsize>) {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = counter.clone();
    let guard = Arc::new(CallbackGuard::new(move || {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        Ok::<(), String>(())
    }));
    (guard, counter)
}

#[test]
fn test_concurrent_fire_runs_action_once() {
    let (guard, counter) = counting_guard();
    let barrier = Arc::new(Barrier::new(CALLERS));

    let handles: Vec<_> = (0..CALLERS)
        .map(|_| {
            let guard = guard.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                guard.fire()
            })
        })
        .collect();

    let results: Vec<GuardResult<()>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let winners = results.iter().filter(|r| r.is_ok()).count();
    let already_fired = results
        .iter()
        .filter(|r| r.as_ref().is_err_and(|e| is_already_fired_error(e)))
        .count();

    assert_eq!(winners, 1);
    assert_eq!(already_fired, CALLERS - 1);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn test_concurrent_fire_and_cancel_single_winner() {
    for _ in 0..20 {
        let (guard, counter) = counting_guard();
        let barrier = Arc::new(Barrier::new(CALLERS));

        let handles: Vec<_> = (0..CALLERS)
            .map(|i| {
                let guard = guard.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    if i % 2 == 0 {
                        guard.fire()
                    } else {
                        guard.cancel()
                    }
                })
            })
            .collect();

        let results: Vec<GuardResult<()>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);

        match guard.state() {
            ResolutionState::Fired => {
                assert_eq!(counter.load(Ordering::SeqCst), 1);
                assert!(results
                    .iter()
                    .filter_map(|r| r.as_ref().err())
                    .all(GuardError::is_already_fired));
            }
            ResolutionState::Canceled => {
                assert_eq!(counter.load(Ordering::SeqCst), 0);
                assert!(results
                    .iter()
                    .filter_map(|r| r.as_ref().err())
                    .all(GuardError::is_already_canceled));
            }
            ResolutionState::Unresolved => panic!("guard left unresolved"),
        }
    }
}

#[test]
fn test_slow_action_does_not_block_other_callers() {
    let (started_tx, started_rx) = mpsc::channel::<()>();
    let (release_tx, release_rx) = mpsc::channel::<()>();

    let guard = Arc::new(CallbackGuard::new(move || -> Result<(), String> {
        started_tx.send(()).map_err(|e| e.to_string())?;
        release_rx
            .recv_timeout(Duration::from_secs(10))
            .map_err(|e| e.to_string())
    }));

    let firing = {
        let guard = guard.clone();
        thread::spawn(move || guard.fire())
    };

    started_rx.recv_timeout(Duration::from_secs(10)).unwrap();

    // The action is still running; late callers fail fast
    assert!(guard.cancel().unwrap_err().is_already_fired());
    assert!(guard.fire().unwrap_err().is_already_fired());
    assert_eq!(guard.state(), ResolutionState::Fired);

    release_tx.send(()).unwrap();
    assert!(firing.join().unwrap().is_ok());
}
