/*!
 * Deferred Guards
 *
 * Fire-on-drop wrapper: schedules `fire` on every exit path of a scope
 */

use super::traits::Guard;
use super::GuardResult;
use std::fmt;
use std::mem::ManuallyDrop;
use std::ops::Deref;
use tracing::{debug, error, trace};

/// Wrapper that fires the inner guard when dropped
///
/// Cancel the inner guard on the success path; the fire at drop then sees
/// an already-canceled guard and does nothing. Errors from the drop-time
/// fire cannot be returned, so they are logged: already-resolved outcomes
/// at debug level, action failures at error level.
///
/// # Example
///
/// ```rust
/// use cleanup_guard::{CallbackGuard, Guard};
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let rolled_back = Arc::new(AtomicBool::new(false));
/// let flag = rolled_back.clone();
///
/// {
///     let _rollback = CallbackGuard::new(move || {
///         flag.store(true, Ordering::SeqCst);
///         Ok::<(), std::io::Error>(())
///     })
///     .defer();
///     // early return / `?` / panic: rollback runs on drop
/// }
///
/// assert!(rolled_back.load(Ordering::SeqCst));
/// ```
pub struct DeferredGuard<G: Guard> {
    inner: ManuallyDrop<G>,
}

impl<G: Guard> DeferredGuard<G> {
    pub fn new(guard: G) -> Self {
        Self {
            inner: ManuallyDrop::new(guard),
        }
    }

    /// Take the inner guard back without firing it
    pub fn into_inner(self) -> G {
        let mut this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so `inner` is taken exactly once
        // and never touched again.
        unsafe { ManuallyDrop::take(&mut this.inner) }
    }
}

impl<G: Guard> Deref for DeferredGuard<G> {
    type Target = G;

    fn deref(&self) -> &G {
        &self.inner
    }
}

impl<G: Guard> Guard for DeferredGuard<G> {
    #[inline]
    fn fire(&self) -> GuardResult<()> {
        self.inner.fire()
    }

    #[inline]
    fn cancel(&self) -> GuardResult<()> {
        self.inner.cancel()
    }
}

impl<G: Guard> Drop for DeferredGuard<G> {
    fn drop(&mut self) {
        match self.inner.fire() {
            Ok(()) => trace!("deferred guard fired on drop"),
            Err(err) if err.is_already_resolved() => {
                debug!(error = %err, "deferred guard already resolved at drop");
            }
            Err(err) => error!(error = %err, "deferred guard action failed on drop"),
        }

        // SAFETY: drop runs once and `inner` is not used afterwards.
        unsafe { ManuallyDrop::drop(&mut self.inner) }
    }
}

impl<G: Guard + fmt::Debug> fmt::Debug for DeferredGuard<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredGuard")
            .field("inner", &*self.inner)
            .finish()
    }
}
