/*!
 * Resolve-Once Cleanup Guards
 *
 * A guard wraps one cleanup action and resolves exactly once, either by
 * firing (running the action) or by canceling (suppressing it).
 *
 * ## Design Principles
 *
 * 1. **One-Shot**: `Unresolved -> Fired | Canceled`, never back
 * 2. **Thread-Safe**: concurrent `fire`/`cancel` calls serialize on one lock
 * 3. **Classified Errors**: late callers can tell "already resolved" from
 *    "the action failed", even through layers of wrapping
 *
 * ## Guard Types
 *
 * - **CallbackGuard**: Runs a bound closure on `fire`
 * - **NoopGuard**: Always succeeds, does nothing
 * - **DeferredGuard**: Fires any guard when dropped
 *
 * ## Example
 *
 * ```rust
 * use cleanup_guard::{is_already_canceled_error, CallbackGuard, Guard};
 *
 * let guard = CallbackGuard::new(|| Ok::<(), std::io::Error>(()));
 *
 * guard.cancel().unwrap(); // success path
 * let err = guard.fire().unwrap_err(); // scheduled exit path
 * assert!(is_already_canceled_error(&err));
 * ```
 */

mod callback;
mod classify;
mod deferred;
mod error;
mod noop;
mod state;
mod traits;

pub use callback::CallbackGuard;
pub use classify::{
    is_already_canceled_error, is_already_fired_error, is_already_resolved_error, ClassifyConfig,
    Classifier,
};
pub use deferred::DeferredGuard;
pub use error::{ActionError, GuardError, GuardResult};
pub use noop::{NoopGuard, NIL};
pub use state::{Resolution, ResolutionState};
pub use traits::Guard;

/// Guard metadata for observability
#[derive(Debug, Clone)]
pub struct GuardMetadata {
    pub label: &'static str,
    pub creation_time: std::time::Instant,
}

impl GuardMetadata {
    #[inline]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            creation_time: std::time::Instant::now(),
        }
    }

    #[inline]
    pub fn lifetime_micros(&self) -> u64 {
        self.creation_time.elapsed().as_micros() as u64
    }
}

impl Default for GuardMetadata {
    fn default() -> Self {
        Self::new(crate::limits::DEFAULT_GUARD_LABEL)
    }
}
