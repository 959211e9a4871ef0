/*!
 * Resolution State
 *
 * Explicit three-state enumeration for a guard's lifecycle
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a guard
///
/// `Unresolved` is the only non-terminal state. A guard moves out of it
/// exactly once and never moves between the two terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionState {
    /// Neither fired nor canceled yet
    #[default]
    Unresolved,
    /// Resolved by `fire`; the action ran (or there was none)
    Fired,
    /// Resolved by `cancel`; the action never runs
    Canceled,
}

/// Terminal outcome of a guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Fired,
    Canceled,
}

impl ResolutionState {
    /// Whether the guard has left `Unresolved`
    #[inline]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unresolved)
    }

    /// Terminal outcome, if any
    #[inline]
    pub const fn terminal(self) -> Option<Resolution> {
        match self {
            Self::Unresolved => None,
            Self::Fired => Some(Resolution::Fired),
            Self::Canceled => Some(Resolution::Canceled),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::Fired => "fired",
            Self::Canceled => "canceled",
        }
    }
}

impl Resolution {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fired => "fired",
            Self::Canceled => "canceled",
        }
    }
}

impl From<Resolution> for ResolutionState {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Fired => Self::Fired,
            Resolution::Canceled => Self::Canceled,
        }
    }
}

impl fmt::Display for ResolutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
