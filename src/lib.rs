/*!
 * Cleanup Guard Library
 *
 * Resolve-once guards for commit/rollback style cleanup.
 *
 * A guard is registered right after a resource is acquired, fired on every
 * exit path, and canceled on the success path. Whichever of `fire`/`cancel`
 * reaches the guard first wins; every later call gets a classified error.
 *
 * ```rust
 * use cleanup_guard::{CallbackGuard, DeferredGuard, Guard};
 *
 * fn write_record(ok: bool) -> Result<(), String> {
 *     let rollback = DeferredGuard::new(CallbackGuard::labeled("rollback", || {
 *         // undo the partial write
 *         Ok::<(), String>(())
 *     }));
 *
 *     if !ok {
 *         return Err("write failed".into()); // rollback fires on drop
 *     }
 *
 *     rollback.cancel().map_err(|e| e.to_string())?;
 *     Ok(())
 * }
 *
 * write_record(true).unwrap();
 * write_record(false).unwrap_err();
 * ```
 */

pub mod guard;
pub mod limits;
pub mod monitoring;

// Re-exports
pub use guard::{
    is_already_canceled_error, is_already_fired_error, is_already_resolved_error, ActionError,
    CallbackGuard, ClassifyConfig, Classifier, DeferredGuard, Guard, GuardError, GuardMetadata,
    GuardResult, NoopGuard, Resolution, ResolutionState, NIL,
};
pub use monitoring::init_tracing;
