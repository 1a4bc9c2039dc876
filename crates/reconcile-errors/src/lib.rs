//! Shared reconciliation error vocabulary for CloudOps controllers.
//!
//! Controllers reconciling cloud-provider resources have to agree on what
//! a failure *means* before deciding what to do with it: requeue, persist
//! a terminal condition, or branch on a well-known situation such as "the
//! adopted resource is gone". This crate is that shared vocabulary:
//!
//! - **Catalog conditions** ([`ReconcileError`]): a closed set of named
//!   reconciliation conditions, matched by identity through wrap chains
//!   rather than by message text.
//! - **Provider classification** ([`provider_error`], [`status_code`]):
//!   finds the [`ProviderError`] an SDK boundary linked into an opaque
//!   error's chain and maps its [`Fault`] category to a classifier code
//!   (`-1` when absent).
//! - **Terminal marking** ([`TerminalError`], [`is_terminal`]): flags a
//!   failure as non-retryable while staying transparent to chain
//!   inspection.
//! - **Requeue signaling** ([`RequeueNeeded`], [`requeue_needed`]): the
//!   cooperative "check again, optionally after a delay" marker.
//!
//! Everything here is an immutable value; no function blocks, retries, or
//! touches the network. Retry scheduling and status persistence belong to
//! the consuming control loop.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use reconcile_errors::{
//!     Fault, ProviderError, ReconcileError, RequeueNeeded, TerminalError, is_terminal,
//!     provider_error, requeue_needed, status_code,
//! };
//!
//! // The SDK boundary surfaced a client fault; the loop judged it permanent.
//! let err = TerminalError::new(ProviderError::new(
//!     "InvalidParameterValue",
//!     "name exceeds 63 characters",
//!     Fault::Client,
//! ));
//! assert!(is_terminal(&err));
//! assert_eq!(status_code(&err), 1);
//! assert_eq!(
//!     provider_error(&err).map(ProviderError::code),
//!     Some("InvalidParameterValue"),
//! );
//!
//! // A freshly created resource read back empty: look again in a minute.
//! let retry = RequeueNeeded::after(
//!     ReconcileError::TemporaryOutOfSync,
//!     Duration::from_secs(60),
//! );
//! assert!(ReconcileError::TemporaryOutOfSync.matches(&retry));
//! assert_eq!(
//!     requeue_needed(&retry).and_then(RequeueNeeded::delay),
//!     Some(Duration::from_secs(60)),
//! );
//! ```

pub mod chain;
pub mod provider;
pub mod requeue;
pub mod sentinel;
pub mod terminal;

pub use chain::{BoxError, chain, find_source};
pub use provider::{Fault, ProviderError, provider_error, status_code};
pub use requeue::{RequeueNeeded, requeue_needed};
pub use sentinel::{ReadOneFailedAfterCreateError, ReconcileError};
pub use terminal::{TerminalError, is_terminal};
