//! Persistent (immutable) vector.
//!
//! This module provides [`Vector`], an immutable 0-based contiguous sequence.
//!
//! # Overview
//!
//! `Vector` wraps a reference-counted, immutable slice. Every combinator
//! computes a fresh backing slice and wraps it in a new `Vector`:
//!
//! - `add` appends one item
//! - `tail` drops the first item
//! - `filter`, `filter_matching`, `filter_with` keep matching items
//! - `map` transforms every item
//!
//! Reads (`get`, `head`, indexing) never copy. Cloning a `Vector` shares the
//! snapshot instead of copying it.
//!
//! # Examples
//!
//! ```rust
//! use persistent_collection::persistent::Vector;
//!
//! let vector = Vector::from(vec![1, 2, 3]);
//!
//! assert_eq!(vector.map(|item| item * 2).as_slice(), &[2, 4, 6]);
//! assert_eq!(vector.filter(|item| item % 2 == 0).as_slice(), &[2]);
//! assert_eq!(vector.fold(0, |sum, item| sum + item), 6);
//! assert!(vector.contains(&[1, 3]));
//! ```

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Index;

use super::ReferenceCounter;
use super::collection::{Collection, OrderedMapping};

use crate::error::CollectionError;
use crate::predicate::{Matcher, Predicate};

#[cfg(feature = "typeclass")]
use crate::typeclass::{Foldable, Functor, TypeConstructor};

// =============================================================================
// Vector Definition
// =============================================================================

/// A persistent (immutable) 0-based contiguous sequence.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `new`      | O(1)       |
/// | `get`      | O(1)       |
/// | `head`     | O(1)       |
/// | `add`      | O(N)       |
/// | `tail`     | O(N)       |
/// | `filter`   | O(N)       |
/// | `map`      | O(N)       |
/// | `contains` | O(N * M)   |
/// | `len`      | O(1)       |
/// | `clone`    | O(1)       |
///
/// # Examples
///
/// ```rust
/// use persistent_collection::persistent::Vector;
///
/// let vector: Vector<i32> = (0..100).collect();
/// assert_eq!(vector.len(), 100);
/// assert_eq!(vector.get(50), Ok(&50));
/// ```
pub struct Vector<T> {
    items: ReferenceCounter<[T]>,
}

/// Borrowing iterator over a [`Vector`].
pub type VectorIterator<'a, T> = std::slice::Iter<'a, T>;

impl<T> Vector<T> {
    /// Creates a new empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_collection::persistent::Vector;
    ///
    /// let vector: Vector<i32> = Vector::new();
    /// assert!(vector.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: ReferenceCounter::from(Vec::new()),
        }
    }

    /// Returns the number of items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the vector has no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`.
    ///
    /// Any integer type is accepted; negative indices never match.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NoItemAtKey`] when `index` is negative or
    /// not less than `len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_collection::persistent::Vector;
    ///
    /// let vector = Vector::from(vec![1, 2, 3]);
    /// assert_eq!(vector.get(0), Ok(&1));
    /// assert!(vector.get(3).is_err());
    /// assert!(vector.get(-1).is_err());
    /// ```
    pub fn get<I>(&self, index: I) -> Result<&T, CollectionError>
    where
        I: TryInto<usize> + fmt::Display + Copy,
    {
        match index.try_into() {
            Ok(position) => self.get_by_key(&position),
            Err(_) => {
                tracing::trace!(%index, "no item at key");
                Err(CollectionError::no_item_at_key(index))
            }
        }
    }

    /// Returns the first item.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NoItemAtKey`] when the vector is empty.
    #[inline]
    pub fn head(&self) -> Result<&T, CollectionError> {
        self.get(0_usize)
    }

    /// Returns the items as a read-only slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the items in order.
    #[inline]
    pub fn iter(&self) -> VectorIterator<'_, T> {
        self.items.iter()
    }

    /// Returns a new vector with `transform` applied to every item.
    ///
    /// `transform` is called exactly once per item, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_collection::persistent::Vector;
    ///
    /// let words = Vector::from(vec!["a", "abc"]);
    /// let lengths = words.map(|word| word.len());
    /// assert_eq!(lengths.as_slice(), &[1, 3]);
    /// ```
    pub fn map<U, F>(&self, transform: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        self.items.iter().map(transform).collect()
    }

    /// Folds the items left to right, starting from `initial`.
    pub fn fold<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.items.iter().fold(initial, function)
    }

    /// Returns `true` if every item of `needles` is present.
    ///
    /// An empty `needles` is trivially contained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_collection::persistent::Vector;
    ///
    /// let vector = Vector::from(vec![1, 2, 3]);
    /// assert!(vector.contains(&[3, 1]));
    /// assert!(!vector.contains(&[1, 4]));
    /// assert!(vector.contains(&[]));
    /// ```
    pub fn contains(&self, needles: &[T]) -> bool
    where
        T: PartialEq,
    {
        needles.iter().all(|needle| self.items.contains(needle))
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a vector holding a copy of `slice`.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        Self {
            items: ReferenceCounter::from(slice),
        }
    }

    /// Returns a new vector with `item` appended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_collection::persistent::Vector;
    ///
    /// let vector = Vector::from(vec![1, 2, 3]);
    /// let extended = vector.add(4);
    /// assert_eq!(extended.as_slice(), &[1, 2, 3, 4]);
    /// assert_eq!(vector.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn add(&self, item: T) -> Self {
        let mut items = Vec::with_capacity(self.len() + 1);
        items.extend_from_slice(&self.items);
        items.push(item);
        Self::from(items)
    }

    /// Returns a new vector holding every item except the first.
    ///
    /// The tail of an empty vector is an empty vector.
    #[must_use]
    pub fn tail(&self) -> Self {
        self.items.get(1..).map_or_else(Self::new, Self::from_slice)
    }

    /// Returns a new vector holding the items for which `predicate` holds.
    ///
    /// `predicate` is called exactly once per item, in order.
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.retain_by(Predicate::from_fn(predicate))
    }

    /// Returns a new vector holding the items `matcher` matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_collection::persistent::Vector;
    /// use persistent_collection::predicate::Matcher;
    ///
    /// struct StartsWith(&'static str);
    ///
    /// impl Matcher<String> for StartsWith {
    ///     fn matches(&self, item: &String) -> bool {
    ///         item.starts_with(self.0)
    ///     }
    /// }
    ///
    /// let vector: Vector<String> = ["Hello", "Hello there", "Goodbye"]
    ///     .into_iter()
    ///     .map(String::from)
    ///     .collect();
    /// let greetings = vector.filter_matching(&StartsWith("Hello"));
    /// assert_eq!(greetings.to_vec(), vec!["Hello", "Hello there"]);
    /// ```
    #[must_use]
    pub fn filter_matching<M>(&self, matcher: &M) -> Self
    where
        M: Matcher<T>,
    {
        self.retain_by(Predicate::from_matcher(matcher))
    }

    /// Filters with a type-erased capability.
    ///
    /// `capability` must be one of the forms
    /// [`Predicate::from_any`](crate::predicate::Predicate::from_any)
    /// recognizes: a `fn(&T) -> bool` pointer, a boxed `Fn(&T) -> bool` or a
    /// boxed [`Matcher<T>`], with or without `Send + Sync`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] for any other
    /// capability. No item is evaluated in that case.
    pub fn filter_with(&self, capability: &dyn Any) -> Result<Self, CollectionError>
    where
        T: 'static,
    {
        let predicate = Predicate::from_any(capability)?;
        Ok(self.retain_by(predicate))
    }

    /// Folds the items left to right, seeding the accumulator with the
    /// first item.
    ///
    /// Returns `None` for an empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_collection::persistent::Vector;
    ///
    /// let vector = Vector::from(vec![1, 2, 3]);
    /// assert_eq!(vector.reduce(|sum, item| sum + item), Some(6));
    /// assert_eq!(Vector::<i32>::new().reduce(|sum, item| sum + item), None);
    /// ```
    pub fn reduce<F>(&self, function: F) -> Option<T>
    where
        F: FnMut(T, &T) -> T,
    {
        let (first, rest) = self.items.split_first()?;
        Some(rest.iter().fold(first.clone(), function))
    }

    /// Copies the items into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }

    fn retain_by(&self, mut predicate: Predicate<'_, T>) -> Self {
        self.items
            .iter()
            .filter(|item| predicate.test(item))
            .cloned()
            .collect()
    }
}

// =============================================================================
// Collection Implementation
// =============================================================================

impl<T> Collection for Vector<T> {
    type Key = usize;
    type Item = T;
    type Iter<'a>
        = VectorIterator<'a, T>
    where
        Self: 'a;

    #[inline]
    fn count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.items.iter()
    }

    #[inline]
    fn entry(&self, key: &usize) -> Option<&T> {
        self.items.get(*key)
    }

    fn as_ordered_mapping(&self) -> OrderedMapping<'_, usize, T> {
        OrderedMapping::from_entries(self.items.iter().enumerate())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with the [`CollectionError::NoItemAtKey`] message when `index`
    /// is out of range.
    fn index(&self, index: usize) -> &T {
        match self.get_by_key(&index) {
            Ok(item) => item,
            Err(error) => panic!("{error}"),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// Owning iterator over a [`Vector`].
///
/// Items are cloned out of the shared snapshot.
pub struct VectorIntoIterator<T> {
    items: ReferenceCounter<[T]>,
    front: usize,
    back: usize,
}

impl<T: Clone> Iterator for VectorIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let item = self.items[self.front].clone();
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for VectorIntoIterator<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.items[self.back].clone())
    }
}

impl<T: Clone> ExactSizeIterator for VectorIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            items: ReferenceCounter::clone(&self.items),
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: ReferenceCounter::from(items),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Clone> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = VectorIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let back = self.items.len();
        VectorIntoIterator {
            items: self.items,
            front: 0,
            back,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = VectorIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items[..] == other.items[..]
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items[..].hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, item) in self.items.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{item}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<T> TypeConstructor for Vector<T> {
    type Inner = T;
    type WithType<B> = Vector<B>;
}

#[cfg(feature = "typeclass")]
impl<T: Clone> Functor for Vector<T> {
    fn fmap<B, F>(self, function: F) -> Vector<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref<B, F>(&self, function: F) -> Vector<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

#[cfg(feature = "typeclass")]
impl<T: Clone> Foldable for Vector<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Vector<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.items.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Vector<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Thread Safety Tests (arc feature only)
// =============================================================================
