/*!
 * Error Classification
 *
 * Answers "was this an already-fired / already-canceled error?" for an
 * arbitrary error, walking through any number of wrappers that forward
 * their cause via `source()`.
 */

use super::{GuardError, Resolution};
use crate::limits::{DEEP_ERROR_CHAIN_DEPTH, MAX_ERROR_CHAIN_DEPTH, SHALLOW_ERROR_CHAIN_DEPTH};
use std::error::Error;
use tracing::warn;

/// Classification configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyConfig {
    /// Maximum number of errors inspected along the cause chain
    pub max_depth: usize,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_ERROR_CHAIN_DEPTH,
        }
    }
}

impl ClassifyConfig {
    /// Configuration for callers that add only a few context layers
    pub const fn shallow() -> Self {
        Self {
            max_depth: SHALLOW_ERROR_CHAIN_DEPTH,
        }
    }

    /// Configuration for heavily layered error stacks
    pub const fn deep() -> Self {
        Self {
            max_depth: DEEP_ERROR_CHAIN_DEPTH,
        }
    }
}

/// Bounded cause-chain classifier
///
/// The first [`GuardError::AlreadyFired`] or [`GuardError::AlreadyCanceled`]
/// found on the chain is authoritative. [`GuardError::Action`] is looked
/// through, since it only carries the action's own error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    config: ClassifyConfig,
}

impl Classifier {
    pub const fn new(config: ClassifyConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> ClassifyConfig {
        self.config
    }

    /// Terminal state reported anywhere on the chain
    ///
    /// Returns `None` if the chain is exhausted, or if it is longer than
    /// `max_depth` (which also covers cyclic chains).
    pub fn resolution(&self, err: &(dyn Error + 'static)) -> Option<Resolution> {
        let mut current = Some(err);
        let mut depth = 0;

        while let Some(err) = current {
            if depth >= self.config.max_depth {
                warn!(
                    max_depth = self.config.max_depth,
                    "error chain exceeded classification depth"
                );
                return None;
            }
            depth += 1;

            current = match err.downcast_ref::<GuardError>() {
                Some(GuardError::Action(inner)) => {
                    let inner: &(dyn Error + 'static) = &**inner;
                    Some(inner)
                }
                Some(guard_err) => return guard_err.resolution(),
                None => err.source(),
            };
        }

        None
    }

    pub fn is_already_fired(&self, err: &(dyn Error + 'static)) -> bool {
        self.resolution(err) == Some(Resolution::Fired)
    }

    pub fn is_already_canceled(&self, err: &(dyn Error + 'static)) -> bool {
        self.resolution(err) == Some(Resolution::Canceled)
    }

    pub fn is_already_resolved(&self, err: &(dyn Error + 'static)) -> bool {
        self.resolution(err).is_some()
    }
}

/// Whether `err`, or any cause it forwards, is an already-fired guard error
pub fn is_already_fired_error(err: &(dyn Error + 'static)) -> bool {
    Classifier::default().is_already_fired(err)
}

/// Whether `err`, or any cause it forwards, is an already-canceled guard error
pub fn is_already_canceled_error(err: &(dyn Error + 'static)) -> bool {
    Classifier::default().is_already_canceled(err)
}

/// Whether `err` reports that the guard was already resolved either way
pub fn is_already_resolved_error(err: &(dyn Error + 'static)) -> bool {
    Classifier::default().is_already_resolved(err)
}
