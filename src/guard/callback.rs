/*!
 * Callback Guards
 *
 * The stateful guard: runs a bound closure on the first `fire`, or drops it
 * unrun on the first `cancel`.
 */

use super::traits::Guard;
use super::{ActionError, GuardError, GuardMetadata, GuardResult, Resolution, ResolutionState};
use crate::limits::DEFAULT_GUARD_LABEL;
use parking_lot::Mutex;
use std::fmt;
use tracing::{debug, trace, warn};

type BoxedAction = Box<dyn FnOnce() -> Result<(), ActionError> + Send + 'static>;

/// State and action share one lock so the action is handed out exactly once
struct Slot {
    state: ResolutionState,
    action: Option<BoxedAction>,
}

/// Guard that executes a callback when fired
///
/// The action is bound at construction and cannot be replaced. The state
/// check-and-set happens under the lock; the action itself runs after the
/// lock is released, so a slow action never blocks concurrent callers and an
/// action may call back into its own guard (it sees `AlreadyFired`).
///
/// Dropping a `CallbackGuard` does not fire it. Use
/// [`DeferredGuard`](super::DeferredGuard) for fire-on-drop.
///
/// # Example
///
/// ```rust
/// use cleanup_guard::{is_already_fired_error, CallbackGuard, Guard};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let rollbacks = Arc::new(AtomicUsize::new(0));
/// let counter = rollbacks.clone();
/// let guard = CallbackGuard::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
///     Ok::<(), std::io::Error>(())
/// });
///
/// guard.fire().unwrap();
/// assert!(is_already_fired_error(&guard.fire().unwrap_err()));
/// assert_eq!(rollbacks.load(Ordering::SeqCst), 1);
/// ```
pub struct CallbackGuard {
    slot: Mutex<Slot>,
    metadata: GuardMetadata,
}

impl CallbackGuard {
    /// Create a guard that runs `action` when fired
    pub fn new<F, E>(action: F) -> Self
    where
        F: FnOnce() -> Result<(), E> + Send + 'static,
        E: Into<ActionError>,
    {
        Self::labeled(DEFAULT_GUARD_LABEL, action)
    }

    /// Create a guard with a label used in log fields
    pub fn labeled<F, E>(label: &'static str, action: F) -> Self
    where
        F: FnOnce() -> Result<(), E> + Send + 'static,
        E: Into<ActionError>,
    {
        let action: BoxedAction = Box::new(move || action().map_err(Into::into));
        Self::from_parts(GuardMetadata::new(label), Some(action))
    }

    /// Create a guard with no action; firing it is a pure state change
    pub fn empty() -> Self {
        Self::from_parts(GuardMetadata::new(DEFAULT_GUARD_LABEL), None)
    }

    fn from_parts(metadata: GuardMetadata, action: Option<BoxedAction>) -> Self {
        Self {
            slot: Mutex::new(Slot {
                state: ResolutionState::Unresolved,
                action,
            }),
            metadata,
        }
    }

    /// Current resolution state
    pub fn state(&self) -> ResolutionState {
        self.slot.lock().state
    }

    pub fn is_resolved(&self) -> bool {
        self.state().is_resolved()
    }

    /// Whether an action is still bound (false once resolved)
    pub fn has_action(&self) -> bool {
        self.slot.lock().action.is_some()
    }

    pub fn metadata(&self) -> &GuardMetadata {
        &self.metadata
    }

    /// Move out of `Unresolved` into `target`, handing back the action
    ///
    /// The terminal state is committed before the lock is dropped.
    fn resolve(&self, target: Resolution) -> GuardResult<Option<BoxedAction>> {
        let mut slot = self.slot.lock();

        if let Some(resolved) = slot.state.terminal() {
            drop(slot);
            trace!(
                label = self.metadata.label,
                state = %resolved,
                attempted = %target,
                "guard already resolved"
            );
            return Err(resolved.into());
        }

        slot.state = target.into();
        let action = slot.action.take();
        drop(slot);

        debug!(
            label = self.metadata.label,
            state = %target,
            has_action = action.is_some(),
            lifetime_micros = self.metadata.lifetime_micros(),
            "guard resolved"
        );
        Ok(action)
    }
}

impl Guard for CallbackGuard {
    fn fire(&self) -> GuardResult<()> {
        let Some(action) = self.resolve(Resolution::Fired)? else {
            return Ok(());
        };

        action().map_err(|err| {
            warn!(
                label = self.metadata.label,
                error = %err,
                "guard action failed"
            );
            GuardError::Action(err)
        })
    }

    fn cancel(&self) -> GuardResult<()> {
        // The unrun action is dropped here, outside the lock
        let _action = self.resolve(Resolution::Canceled)?;
        Ok(())
    }
}

impl Default for CallbackGuard {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for CallbackGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.lock();
        f.debug_struct("CallbackGuard")
            .field("label", &self.metadata.label)
            .field("state", &slot.state)
            .field("has_action", &slot.action.is_some())
            .finish()
    }
}
