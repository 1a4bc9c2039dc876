//! Cooperative "reconcile again" signaling.
//!
//! Some outcomes are neither success nor failure: the resource is healthy
//! but not yet observable, or the provider needs time to converge. The
//! reconciler returns a [`RequeueNeeded`] wrapped around whatever error
//! prompted the re-check, optionally with an explicit delay, and the
//! consuming loop schedules the next run. Nothing in this module sleeps,
//! retries, or schedules by itself.

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use crate::chain::{BoxError, find_source};

/// Control signal asking the consuming loop to reconcile again.
///
/// Like [`TerminalError`](crate::TerminalError) the wrapper is transparent:
/// message and [`source`](StdError::source) come straight from the cause,
/// so catalog matching and provider classification see through it. The
/// delay is a request, not a guarantee; the loop may clamp it to its own
/// backoff policy.
#[derive(Debug, Default)]
pub struct RequeueNeeded {
    cause: Option<BoxError>,
    delay: Option<Duration>,
}

impl RequeueNeeded {
    /// Signals an immediate requeue prompted by `cause`.
    #[must_use]
    pub fn new(cause: impl Into<BoxError>) -> Self {
        Self {
            cause: Some(cause.into()),
            delay: None,
        }
    }

    /// Signals a requeue after `delay`, prompted by `cause`.
    #[must_use]
    pub fn after(cause: impl Into<BoxError>, delay: Duration) -> Self {
        Self {
            cause: Some(cause.into()),
            delay: Some(delay),
        }
    }

    /// Requested pause before the next reconciliation, if any.
    ///
    /// `None` asks for the loop's default (usually immediate) requeue.
    #[must_use]
    pub fn delay(&self) -> Option<Duration> {
        self.delay
    }
}

impl fmt::Display for RequeueNeeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{cause}"),
            None => Ok(()),
        }
    }
}

impl StdError for RequeueNeeded {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn StdError + 'static))
    }
}

/// Finds the requeue signal in `err`'s wrap chain, if any.
#[must_use]
pub fn requeue_needed<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a RequeueNeeded> {
    find_source::<RequeueNeeded>(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentinel::ReconcileError;
    use std::io;

    #[test]
    fn test_bare_marker_displays_an_empty_message() {
        let signal = RequeueNeeded::default();
        assert_eq!(signal.to_string(), "");
        assert!(signal.source().is_none());
        assert_eq!(signal.delay(), None);
    }

    #[test]
    fn test_message_and_source_mirror_the_cause() {
        let signal = RequeueNeeded::new(io::Error::other("instance still booting"));
        assert_eq!(signal.to_string(), "instance still booting");
        let cause = signal.source().expect("cause should be exposed");
        assert!(cause.downcast_ref::<io::Error>().is_some());
        assert_eq!(signal.delay(), None);
    }

    #[test]
    fn test_requested_delay_round_trips() {
        let signal = RequeueNeeded::after(
            ReconcileError::TemporaryOutOfSync,
            Duration::from_secs(60),
        );
        assert_eq!(signal.delay(), Some(Duration::from_secs(60)));
        assert_eq!(
            signal.to_string(),
            "temporary out of sync, reconcile after some time"
        );
    }

    #[test]
    fn test_wrapped_catalog_condition_stays_matchable() {
        let signal = RequeueNeeded::after(
            ReconcileError::TemporaryOutOfSync,
            Duration::from_secs(10),
        );
        assert!(ReconcileError::TemporaryOutOfSync.matches(&signal));
    }

    #[test]
    fn test_chain_lookup_finds_the_signal() {
        let signal = RequeueNeeded::new(io::Error::other("pending attachment"));
        let found = requeue_needed(&signal).expect("signal should be found");
        assert_eq!(found.delay(), None);

        assert!(requeue_needed(&ReconcileError::NotFound).is_none());
        assert!(requeue_needed(&io::Error::other("no signal here")).is_none());
    }
}
