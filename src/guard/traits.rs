/*!
 * Guard Traits
 *
 * The resolve-once contract shared by every guard
 */

use super::{DeferredGuard, GuardResult};
use std::sync::Arc;

/// Core guard trait
///
/// A guard resolves at most once. The first successful `fire` runs the
/// cleanup; the first successful `cancel` suppresses it. Any call after the
/// guard has resolved returns an already-resolved [`GuardError`](super::GuardError).
///
/// Implementations may be stricter (the no-op guard never fails) but must
/// never run a cleanup more than once.
pub trait Guard: Send + Sync {
    /// Run the cleanup and resolve the guard as fired
    fn fire(&self) -> GuardResult<()>;

    /// Resolve the guard as canceled without running the cleanup
    fn cancel(&self) -> GuardResult<()>;

    /// Wrap the guard so it fires when dropped
    fn defer(self) -> DeferredGuard<Self>
    where
        Self: Sized,
    {
        DeferredGuard::new(self)
    }
}

impl<G: Guard + ?Sized> Guard for &G {
    #[inline]
    fn fire(&self) -> GuardResult<()> {
        (**self).fire()
    }

    #[inline]
    fn cancel(&self) -> GuardResult<()> {
        (**self).cancel()
    }
}

impl<G: Guard + ?Sized> Guard for Box<G> {
    #[inline]
    fn fire(&self) -> GuardResult<()> {
        (**self).fire()
    }

    #[inline]
    fn cancel(&self) -> GuardResult<()> {
        (**self).cancel()
    }
}

impl<G: Guard + ?Sized> Guard for Arc<G> {
    #[inline]
    fn fire(&self) -> GuardResult<()> {
        (**self).fire()
    }

    #[inline]
    fn cancel(&self) -> GuardResult<()> {
        (**self).cancel()
    }
}
