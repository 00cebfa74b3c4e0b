//! Functor type class - mapping over every element of a container.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap_ref(|x| x.clone()) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap_ref(f).fmap_ref(g) == fa.fmap_ref(|x| g(&f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use persistent_collection::persistent::Vector;
//! use persistent_collection::typeclass::Functor;
//!
//! let values = Vector::from(vec![1, 2, 3]);
//! let doubled = values.fmap_ref(|value| value * 2);
//! assert_eq!(doubled.as_slice(), &[2, 4, 6]);
//! ```

use super::higher::TypeConstructor;

/// A type class for containers whose elements can be transformed one by one.
///
/// The function is called exactly once per element, in the container's
/// order, so it may be `FnMut`.
pub trait Functor: TypeConstructor {
    /// Consumes the container and applies `function` to each element.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies `function` to a reference of each element, leaving the
    /// container intact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_collection::persistent::Vector;
    /// use persistent_collection::typeclass::Functor;
    ///
    /// let words = Vector::from(vec!["a".to_string(), "abc".to_string()]);
    /// let lengths = words.fmap_ref(|word| word.len());
    /// assert_eq!(lengths.as_slice(), &[1, 3]);
    /// assert_eq!(words.len(), 2);
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every element with a clone of `value`.
    #[inline]
    fn replace<B>(&self, value: B) -> Self::WithType<B>
    where
        B: Clone,
    {
        self.fmap_ref(|_| value.clone())
    }

    /// Discards every element, keeping only the shape.
    #[inline]
    fn void(&self) -> Self::WithType<()> {
        self.fmap_ref(|_| ())
    }
}
