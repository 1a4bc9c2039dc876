//! Classification of provider-origin failures.
//!
//! The SDK boundary that talks to the cloud provider adapts each HTTP/API
//! failure into a [`ProviderError`] and links it into the error chain it
//! returns. Reconciliation logic then interrogates chains generically
//! through [`provider_error`] and [`status_code`], without knowing which
//! provider or SDK produced the failure.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use crate::chain::find_source;

/// Coarse fault taxonomy reported by provider SDKs.
///
/// The discriminants double as the classifier codes returned by
/// [`status_code`]; they are fault categories, not HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Fault {
    /// The SDK could not attribute the failure to either side of the call.
    Unknown = 0,
    /// The provider rejected the request as invalid.
    Client = 1,
    /// The provider failed to process an otherwise valid request.
    Server = 2,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Fault::Unknown => "unknown",
            Fault::Client => "client",
            Fault::Server => "server",
        };
        f.write_str(name)
    }
}

/// A provider API failure: error code, message, and fault category.
///
/// Values are built at the SDK boundary, one per failed call, and carried
/// as wrap-chain links; this crate only defines the shape and finds it
/// again during classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("api error {code}: {message}")]
pub struct ProviderError {
    code: String,
    message: String,
    fault: Fault,
}

impl ProviderError {
    /// Builds the value an SDK boundary links into its error chains.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>, fault: Fault) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            fault,
        }
    }

    /// Provider-assigned error code, e.g. `"InvalidParameterValue"`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable failure description from the provider.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Which side of the API call the provider blamed.
    #[must_use]
    pub fn fault(&self) -> Fault {
        self.fault
    }
}

/// Finds the provider API failure in `err`'s wrap chain, if any.
///
/// Returns `None` when no link of the chain is a [`ProviderError`]. Total
/// over any error value: opaque errors, catalog conditions, and cause-less
/// wrappers all classify as `None` without panicking.
#[must_use]
pub fn provider_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a ProviderError> {
    find_source::<ProviderError>(err)
}

/// Extracts the classifier code for a provider-origin failure.
///
/// Returns `-1`, which no provider ever reports, when `err`'s wrap chain
/// holds no [`ProviderError`]; callers branch on that without a second
/// lookup. Otherwise returns the matched failure's [`Fault`] discriminant
/// (0, 1, or 2). The code is the coarse fault category, not the HTTP
/// status of the underlying response.
#[must_use]
pub fn status_code(err: &(dyn StdError + 'static)) -> i32 {
    provider_error(err).map_or(-1, |provider| provider.fault() as i32)
}
