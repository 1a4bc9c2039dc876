//! The catalog of named reconciliation conditions.
//!
//! Reconciliation logic branches on *which* well-known condition occurred,
//! not on message text. Each condition is a unit variant of
//! [`ReconcileError`]: a comparable, copyable value with a fixed
//! description, matched by identity through wrap chains via
//! [`ReconcileError::matches`]. The catalog is closed; downstream crates
//! wrap these values rather than minting lookalikes.

use std::error::Error as StdError;

use thiserror::Error;

use crate::chain::chain;

/// Well-known reconciliation conditions.
///
/// Every variant is a process-wide constant: construction cannot fail and
/// two occurrences of the same condition are equal by value. Matching
/// against a wrapped occurrence goes through [`ReconcileError::matches`],
/// which inspects the whole wrap chain instead of comparing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ReconcileError {
    /// A resource adopted from pre-existing provider state has disappeared.
    #[error("adopted resource not found")]
    AdoptedResourceNotFound,
    /// A resource observed in read-only mode has disappeared.
    #[error("read-only resource not found")]
    ReadOnlyResourceNotFound,
    /// The metadata name identifier required to address the resource is
    /// missing.
    #[error("expected name identifier, found none")]
    MissingNameIdentifier,
    /// The resource does not carry the fields required for adoption.
    #[error("resource not adoptable")]
    NotAdoptable,
    /// The requested operation is not implemented for this resource kind.
    #[error("not implemented")]
    NotImplemented,
    /// The resource does not exist in the provider.
    ///
    /// Reconcilers treat this as "create it", not as a failure to surface.
    #[error("resource not found")]
    NotFound,
    /// A reconciler was bound to a controller manager before its resource
    /// manager factory was set.
    #[error("error binding controller manager to reconciler before setting resource manager factory")]
    UnsetResourceManagerFactory,
    /// No resource manager factory is registered for the resource kind.
    #[error("resource manager factory not found")]
    ResourceManagerFactoryNotFound,
    /// The desired and latest states disagree in a way expected to heal on
    /// its own; reconcile again later. A control signal, not a failure.
    #[error("temporary out of sync, reconcile after some time")]
    TemporaryOutOfSync,
    /// The resource is in a terminal condition and must not be retried
    /// until its desired state changes.
    #[error("resource is in terminal condition")]
    Terminal,
    /// A referenced Kubernetes secret has a type other than `Opaque`.
    #[error("only opaque secrets can be used")]
    SecretTypeNotSupported,
    /// A referenced Kubernetes secret does not exist.
    #[error("kubernetes secret not found")]
    SecretNotFound,
    /// Reading a resource back after creating it failed.
    ///
    /// Usually wrapped with an attempt count via
    /// [`ReadOneFailedAfterCreateError`].
    #[error("ReadOne call failed after a Create operation")]
    ReadOneFailedAfterCreate,
}

impl ReconcileError {
    /// Reports whether any link of `err`'s wrap chain is this condition.
    ///
    /// Comparison is by value, never by message text, so wrappers that
    /// embed dynamic data (attempt counts, delays) still match the
    /// condition they carry.
    #[must_use]
    pub fn matches(self, err: &(dyn StdError + 'static)) -> bool {
        chain(err).any(|source| source.downcast_ref::<Self>() == Some(&self))
    }
}

/// [`ReconcileError::ReadOneFailedAfterCreate`] with an attempt count.
///
/// Read-back after a create is retried a few times before the reconciler
/// gives up; the count records how many reads were attempted. The base
/// condition stays matchable through the wrap chain regardless of the
/// count.
#[derive(Debug, Error)]
#[error("{source}: number of attempts: {attempts}")]
pub struct ReadOneFailedAfterCreateError {
    #[source]
    source: ReconcileError,
    attempts: i32,
}

impl ReadOneFailedAfterCreateError {
    /// Wraps the base condition with the number of read attempts.
    ///
    /// A pure formatter: the count is embedded verbatim, zero and negative
    /// values included.
    #[must_use]
    pub fn new(attempts: i32) -> Self {
        Self {
            source: ReconcileError::ReadOneFailedAfterCreate,
            attempts,
        }
    }

    /// Number of read attempts recorded at construction.
    #[must_use]
    pub fn attempts(&self) -> i32 {
        self.attempts
    }
}
