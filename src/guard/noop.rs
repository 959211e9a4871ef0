/*!
 * No-op Guard
 */

use super::traits::Guard;
use super::GuardResult;

/// Guard that does nothing
///
/// Use it in tests, or to satisfy an API that wants a guard when there is
/// nothing to clean up. Both operations always succeed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoopGuard;

/// Shared no-op guard instance
pub static NIL: NoopGuard = NoopGuard;

impl Guard for NoopGuard {
    #[inline]
    fn fire(&self) -> GuardResult<()> {
        Ok(())
    }

    #[inline]
    fn cancel(&self) -> GuardResult<()> {
        Ok(())
    }
}
