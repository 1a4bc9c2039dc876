//! Wrap-chain traversal primitives.
//!
//! Every lookup in this crate is a walk over an error's chain of causes:
//! sentinel matching, provider classification, and the wrapper predicates
//! all ask "is some link of this chain a given type or value?". The std
//! library only exposes the single-step [`Error::source`], so the shared
//! traversal lives here.

use std::error::Error;

/// Owned, thread-safe error used as a wrap-chain link.
///
/// Wrapper types in this crate store their cause as a `BoxError` so that
/// every vocabulary value stays `Send + Sync` and can cross task boundaries
/// inside a controller.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Iterates over `err` followed by its transitive causes, outermost first.
pub fn chain<'a>(
    err: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(err), |&err| err.source())
}

/// Returns the first link in `err`'s wrap chain that is a `T`.
///
/// Total over any error value: chains without a `T` yield `None`.
pub fn find_source<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    chain(err).find_map(|err| err.downcast_ref::<T>())
}
