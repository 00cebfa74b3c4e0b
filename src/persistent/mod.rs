//! Persistent (immutable) collections.
//!
//! - [`Collection`]: The read/iterate/error contract every collection shares
//! - [`Vector`]: Persistent, 0-based contiguous sequence
//! - [`KeyedCollection`]: Persistent collection whose keys need not be
//!   contiguous
//! - [`OrderedMapping`]: Read-only key→item view of any collection
//!
//! # Immutability
//!
//! Every operation that looks like a change returns a new instance built on
//! a freshly computed backing snapshot. Clones share the same immutable
//! snapshot; nothing in this module hands out a way to write to it.
//!
//! # Examples
//!
//! ## `Vector`
//!
//! ```rust
//! use persistent_collection::persistent::Vector;
//!
//! let vector = Vector::from(vec![1, 2, 3]);
//! assert_eq!(vector.head(), Ok(&1));
//! assert_eq!(vector.tail().as_slice(), &[2, 3]);
//!
//! // The original vector is preserved
//! let extended = vector.add(4);
//! assert_eq!(vector.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4);   // New vector
//! ```
//!
//! ## `KeyedCollection`
//!
//! ```rust
//! use persistent_collection::persistent::{Collection, KeyedCollection};
//!
//! let scores = KeyedCollection::from_entries([("alice", 3), ("bob", 5)]);
//! assert_eq!(scores.get_by_key(&"bob"), Ok(&5));
//! assert!(scores.get_by_key(&"carol").is_err());
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, and the
/// collections are `Send + Sync` for `Send + Sync` items.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod collection;
mod keyed;
mod vector;

pub use collection::Collection;
pub use collection::OrderedMapping;
pub use keyed::KeyedCollection;
pub use keyed::KeyedValues;
pub use vector::Vector;
pub use vector::VectorIntoIterator;
pub use vector::VectorIterator;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Vector<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(KeyedCollection<String, i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Vector<i32>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(KeyedCollection<String, i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
