//! Marking failures as non-retryable.
//!
//! When the reconciliation loop judges a failure permanent it wraps the
//! cause in [`TerminalError`]; consumers surface the condition (typically
//! as a status condition on the resource) and stop requeueing until the
//! desired state changes. [`is_terminal`] is the structural test the loop
//! runs over whatever error bubbles up.

use std::error::Error as StdError;
use std::fmt;

use crate::chain::{BoxError, find_source};
use crate::sentinel::ReconcileError;

/// Marks an underlying failure as non-retryable.
///
/// The wrapper is transparent to chain inspection: its message is the
/// cause's message (empty when there is no cause) and its
/// [`source`](StdError::source) is the cause itself, unchanged. Catalog
/// matching and provider classification therefore behave as if the wrapper
/// were not there, while [`is_terminal`] picks it up anywhere in a chain.
#[derive(Debug, Default)]
pub struct TerminalError {
    cause: Option<BoxError>,
}

impl TerminalError {
    /// Wraps `cause` as non-retryable.
    #[must_use]
    pub fn new(cause: impl Into<BoxError>) -> Self {
        Self {
            cause: Some(cause.into()),
        }
    }
}

impl fmt::Display for TerminalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{cause}"),
            None => Ok(()),
        }
    }
}

impl StdError for TerminalError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn StdError + 'static))
    }
}

/// Reports whether `err` is terminal.
///
/// True when any link of the wrap chain is a [`TerminalError`] or when the
/// [`Terminal`](ReconcileError::Terminal) catalog condition matches;
/// everything else is considered retryable by the consuming loop.
#[must_use]
pub fn is_terminal(err: &(dyn StdError + 'static)) -> bool {
    find_source::<TerminalError>(err).is_some() || ReconcileError::Terminal.matches(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{Fault, ProviderError, provider_error, status_code};
    use std::io;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("reconcile failed: {source}")]
    struct ReconcileFailed {
        #[source]
        source: TerminalError,
    }

    #[test]
    fn test_cause_less_wrapper_displays_an_empty_message() {
        let err = TerminalError::default();
        assert_eq!(err.to_string(), "");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_message_and_source_mirror_the_cause() {
        let err = TerminalError::new(io::Error::other("volume detached"));
        assert_eq!(err.to_string(), "volume detached");
        let cause = err.source().expect("cause should be exposed");
        assert_eq!(cause.to_string(), "volume detached");
        assert!(cause.downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn test_wrapping_a_catalog_condition_keeps_it_matchable() {
        let err = TerminalError::new(ReconcileError::SecretNotFound);
        assert_eq!(err.to_string(), "kubernetes secret not found");
        assert!(ReconcileError::SecretNotFound.matches(&err));
    }

    #[test]
    fn test_provider_classification_survives_terminal_wrapping() {
        let failure = ProviderError::new("AccessDenied", "not authorized", Fault::Client);
        let err = TerminalError::new(failure.clone());
        assert_eq!(provider_error(&err), Some(&failure));
        assert_eq!(status_code(&err), 1);
    }

    #[test]
    fn test_terminal_detection_covers_wrapper_and_condition() {
        assert!(is_terminal(&TerminalError::default()));
        assert!(is_terminal(&TerminalError::new(io::Error::other("gone"))));
        assert!(is_terminal(&ReconcileError::Terminal));
        assert!(!is_terminal(&ReconcileError::NotFound));
        assert!(!is_terminal(&io::Error::other("flaky network")));
    }

    #[test]
    fn test_terminal_detection_reaches_nested_wrappers() {
        let err = ReconcileFailed {
            source: TerminalError::new(ReconcileError::NotAdoptable),
        };
        assert!(is_terminal(&err));
        assert!(ReconcileError::NotAdoptable.matches(&err));
    }
}
