//! Type class traits shared by the persistent collections.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GAT
//! - [`Functor`]: Mapping over every element while preserving shape
//! - [`Foldable`]: Folding elements into a summary value
//!
//! The persistent collections implement these traits next to their own
//! definitions.
//!
//! # Examples
//!
//! ```rust
//! use persistent_collection::persistent::Vector;
//! use persistent_collection::typeclass::{Foldable, Functor};
//!
//! fn total<F: Foldable<Inner = i32>>(container: F) -> i32 {
//!     container.fold_left(0, |accumulator, element| accumulator + element)
//! }
//!
//! let vector = Vector::from(vec![1, 2, 3]);
//! assert_eq!(total(vector.fmap_ref(|element| element * 10)), 60);
//! assert_eq!(total(vector), 6);
//! ```

mod foldable;
mod functor;
mod higher;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
