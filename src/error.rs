//! Error types for collection operations.
//!
//! Every failure in this crate is a logic error raised at the point of
//! misuse. Nothing here is transient, so callers never need to retry.
//!
//! # Error Categories
//!
//! - [`CollectionError::NoItemAtKey`]: a keyed or indexed read missed
//! - [`CollectionError::MutateOperationsNotAllowed`]: a write was attempted
//!   through the indexed-write interface
//! - [`CollectionError::InvalidArgument`]: a filter capability was not
//!   recognized
//!
//! # Examples
//!
//! ```
//! use persistent_collection::CollectionError;
//!
//! let error = CollectionError::no_item_at_key(7);
//! assert!(error.is_no_item_at_key());
//! assert_eq!(error.to_string(), "No item exists at key [7].");
//! ```

use std::fmt;

use thiserror::Error;

// =============================================================================
// CollectionError
// =============================================================================

/// Errors raised by [`Collection`](crate::persistent::Collection) and its
/// implementations.
///
/// The instance that produced an error is never affected by it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// No item is stored at the requested key or index.
    #[error("No item exists at key [{key}].")]
    NoItemAtKey {
        /// The requested key, rendered for display.
        key: String,
    },

    /// A structural write was attempted on an immutable collection.
    #[error("Mutate operations are not allowed on an immutable collection.")]
    MutateOperationsNotAllowed,

    /// A supplied argument cannot be used by the operation.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: String,
    },
}

impl CollectionError {
    /// Creates a [`CollectionError::NoItemAtKey`] for the given key.
    #[must_use]
    pub fn no_item_at_key(key: impl fmt::Display) -> Self {
        Self::NoItemAtKey {
            key: key.to_string(),
        }
    }

    /// Creates a [`CollectionError::InvalidArgument`] with the given reason.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a [`CollectionError::NoItemAtKey`].
    #[must_use]
    pub const fn is_no_item_at_key(&self) -> bool {
        matches!(self, Self::NoItemAtKey { .. })
    }

    /// Returns `true` if this is a [`CollectionError::MutateOperationsNotAllowed`].
    #[must_use]
    pub const fn is_mutate_operations_not_allowed(&self) -> bool {
        matches!(self, Self::MutateOperationsNotAllowed)
    }

    /// Returns `true` if this is a [`CollectionError::InvalidArgument`].
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
