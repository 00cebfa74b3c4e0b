//! # persistent-collection
//!
//! Immutable collections for Rust: a keyed [`Collection`](persistent::Collection)
//! base and a persistent [`Vector`](persistent::Vector) with functional
//! combinators.
//!
//! ## Overview
//!
//! Every operation that looks like a mutation returns a new instance and
//! leaves the receiver untouched. Writes through the indexed-write interface
//! are rejected with [`CollectionError::MutateOperationsNotAllowed`].
//!
//! - **Persistent Data Structures**: [`Vector`](persistent::Vector) and
//!   [`KeyedCollection`](persistent::KeyedCollection)
//! - **Predicates**: [`Matcher`](predicate::Matcher) capabilities and the
//!   [`Predicate`](predicate::Predicate) adapter used by filtering
//! - **Type Classes**: Functor and Foldable over the persistent types
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Foldable)
//! - `arc`: Use `Arc` instead of `Rc` so collections are `Send + Sync`
//! - `serde`: Serialization support
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use persistent_collection::prelude::*;
//!
//! let vector = Vector::from(vec![1, 2, 3]);
//! let extended = vector.add(4);
//!
//! assert_eq!(extended.as_slice(), &[1, 2, 3, 4]);
//! assert_eq!(vector.as_slice(), &[1, 2, 3]);
//! assert_eq!(vector.filter(|item| item % 2 == 0).as_slice(), &[2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use persistent_collection::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::CollectionError;

    pub use crate::persistent::*;

    pub use crate::predicate::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod error;

pub mod persistent;

pub mod predicate;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use error::CollectionError;
