/*!
 * Guard Errors
 *
 * Already-resolved errors plus transparent action failures
 */

use super::Resolution;
use miette::Diagnostic;
use thiserror::Error;

/// Error returned by a guard's cleanup action
pub type ActionError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for guard operations
pub type GuardResult<T> = Result<T, GuardError>;

/// Errors that can occur during guard operations
///
/// `AlreadyFired` and `AlreadyCanceled` are only returned to calls that
/// lost the race to resolve the guard. `Action` is only returned by the
/// single `fire` call that actually ran the action.
#[derive(Error, Debug, Diagnostic)]
pub enum GuardError {
    #[error("guard has already been fired")]
    #[diagnostic(
        code(guard::already_fired),
        help("The cleanup already ran. This is benign when fire is scheduled on every exit path.")
    )]
    AlreadyFired,

    #[error("guard has already been canceled")]
    #[diagnostic(
        code(guard::already_canceled),
        help("The cleanup was suppressed by an earlier cancel. This is benign on the success path.")
    )]
    AlreadyCanceled,

    #[error(transparent)]
    #[diagnostic(code(guard::action_failed))]
    Action(ActionError),
}

impl GuardError {
    /// Wrap an action failure
    pub fn action<E: Into<ActionError>>(err: E) -> Self {
        Self::Action(err.into())
    }

    /// Terminal state this error reports, if it is an already-resolved error
    #[inline]
    pub fn resolution(&self) -> Option<Resolution> {
        match self {
            Self::AlreadyFired => Some(Resolution::Fired),
            Self::AlreadyCanceled => Some(Resolution::Canceled),
            Self::Action(_) => None,
        }
    }

    #[inline]
    pub fn is_already_fired(&self) -> bool {
        matches!(self, Self::AlreadyFired)
    }

    #[inline]
    pub fn is_already_canceled(&self) -> bool {
        matches!(self, Self::AlreadyCanceled)
    }

    /// Either already-resolved kind; treat as informational
    #[inline]
    pub fn is_already_resolved(&self) -> bool {
        self.resolution().is_some()
    }

    /// The action's own error, if this is an action failure
    pub fn action_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Action(err) => Some(&**err),
            _ => None,
        }
    }

    pub fn into_action_error(self) -> Option<ActionError> {
        match self {
            Self::Action(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Resolution> for GuardError {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Fired => Self::AlreadyFired,
            Resolution::Canceled => Self::AlreadyCanceled,
        }
    }
}
