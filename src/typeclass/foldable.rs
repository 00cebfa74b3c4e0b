//! Foldable type class - folding over data structures.
//!
//! A `Foldable` traverses its elements left to right (or right to left) and
//! accumulates them into a summary value.
//!
//! # Laws
//!
//! For an associative `f`:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use persistent_collection::persistent::Vector;
//! use persistent_collection::typeclass::Foldable;
//!
//! let numbers = Vector::from(vec![1, 2, 3, 4, 5]);
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//! ```

use super::higher::TypeConstructor;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// `length`, `is_empty`, `to_list`, `find`, `exists` and `for_all` default
/// to implementations built on the folds.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// ```rust
    /// use persistent_collection::persistent::Vector;
    /// use persistent_collection::typeclass::Foldable;
    ///
    /// let values = Vector::from(vec![1, 2, 3]);
    /// let result = values.fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns `true` if the structure has no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.length() == 0
    }

    /// Counts the elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`, left to right.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut list, element| {
            list.push(element);
            list
        })
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        Self: Sized,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(None, |found, element| match found {
            Some(_) => found,
            None if predicate(&element) => Some(element),
            None => None,
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        Self: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.clone()
            .fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns `true` if every element satisfies `predicate`.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        Self: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.clone()
            .fold_left(true, |holds, element| holds && predicate(&element))
    }
}
