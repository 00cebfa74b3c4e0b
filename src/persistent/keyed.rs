//! Persistent collection keyed by arbitrary values.
//!
//! [`KeyedCollection`] is the general form of [`Collection`]: entries are
//! kept in insertion order and keys need not be contiguous integers.
//!
//! # Duplicate Keys
//!
//! When the initial entries repeat a key, a single entry remains. It keeps
//! the position of the first occurrence and the item of the last one.
//!
//! ```rust
//! use persistent_collection::persistent::{Collection, KeyedCollection};
//!
//! let collection = KeyedCollection::from_entries([("a", 1), ("b", 2), ("a", 3)]);
//! let keys: Vec<&&str> = collection.keys().collect();
//! assert_eq!(keys, vec![&"a", &"b"]);
//! assert_eq!(collection.get_by_key(&"a"), Ok(&3));
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;

use super::ReferenceCounter;
use super::collection::{Collection, OrderedMapping};
use super::vector::Vector;

#[cfg(feature = "typeclass")]
use crate::typeclass::{Foldable, Functor, TypeConstructor};

// =============================================================================
// KeyedCollection Definition
// =============================================================================

/// A persistent collection of `(key, item)` entries in insertion order.
///
/// # Examples
///
/// ```rust
/// use persistent_collection::persistent::{Collection, KeyedCollection};
///
/// let sparse: KeyedCollection<i64, &str> = [(10, "ten"), (3, "three")].into_iter().collect();
/// assert_eq!(sparse.count(), 2);
/// assert!(sparse.has_key(&10));
/// assert!(sparse.get_by_key(&0).unwrap_err().is_no_item_at_key());
/// ```
pub struct KeyedCollection<K, T> {
    entries: ReferenceCounter<[(K, T)]>,
}

impl<K, T> KeyedCollection<K, T> {
    /// Creates a new empty collection.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: ReferenceCounter::from(Vec::new()),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the items in order.
    pub fn values(&self) -> KeyedValues<'_, K, T> {
        KeyedValues {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over `(key, item)` pairs in order.
    pub fn entries(&self) -> impl Iterator<Item = (&K, &T)> {
        self.entries.iter().map(|(key, item)| (key, item))
    }
}

impl<K: PartialEq, T> KeyedCollection<K, T> {
    /// Creates a collection from `(key, item)` pairs.
    ///
    /// Repeated keys collapse into the first occurrence's position, holding
    /// the last occurrence's item.
    ///
    /// # Complexity
    ///
    /// O(n²) key comparisons: each entry is checked against every entry kept
    /// so far. Deserialization goes through this constructor and has the
    /// same cost.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
    {
        let mut collected: Vec<(K, T)> = Vec::new();
        for (key, item) in entries {
            match collected.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = item,
                None => collected.push((key, item)),
            }
        }
        Self {
            entries: ReferenceCounter::from(collected),
        }
    }
}

impl<K, T: Clone> KeyedCollection<K, T> {
    /// Returns the items as a [`Vector`], re-indexed from 0 in stored order.
    ///
    /// ```rust
    /// use persistent_collection::persistent::KeyedCollection;
    ///
    /// let sparse = KeyedCollection::from_entries([(4, 'x'), (9, 'y')]);
    /// assert_eq!(sparse.to_vector().as_slice(), &['x', 'y']);
    /// ```
    #[must_use]
    pub fn to_vector(&self) -> Vector<T> {
        self.values().cloned().collect()
    }
}

// =============================================================================
// Collection Implementation
// =============================================================================

impl<K, T> Collection for KeyedCollection<K, T>
where
    K: Clone + PartialEq + fmt::Display,
{
    type Key = K;
    type Item = T;
    type Iter<'a>
        = KeyedValues<'a, K, T>
    where
        Self: 'a;

    #[inline]
    fn count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.values()
    }

    fn entry(&self, key: &K) -> Option<&T> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, item)| item)
    }

    fn as_ordered_mapping(&self) -> OrderedMapping<'_, K, T> {
        OrderedMapping::from_entries(self.entries.iter().map(|(key, item)| (key.clone(), item)))
    }
}

impl<K, T> Index<&K> for KeyedCollection<K, T>
where
    K: Clone + PartialEq + fmt::Display,
{
    type Output = T;

    /// # Panics
    ///
    /// Panics with the [`CollectionError::NoItemAtKey`](crate::CollectionError::NoItemAtKey)
    /// message when `key` is absent.
    fn index(&self, key: &K) -> &T {
        match self.get_by_key(key) {
            Ok(item) => item,
            Err(error) => panic!("{error}"),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// Iterator over the items of a [`KeyedCollection`] in stored order.
pub struct KeyedValues<'a, K, T> {
    inner: std::slice::Iter<'a, (K, T)>,
}

impl<'a, K, T> Iterator for KeyedValues<'a, K, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(_, item)| item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, T> DoubleEndedIterator for KeyedValues<'_, K, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, item)| item)
    }
}

impl<K, T> ExactSizeIterator for KeyedValues<'_, K, T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, T> Clone for KeyedCollection<K, T> {
    fn clone(&self) -> Self {
        Self {
            entries: ReferenceCounter::clone(&self.entries),
        }
    }
}

impl<K, T> Default for KeyedCollection<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, T> From<Vec<(K, T)>> for KeyedCollection<K, T> {
    fn from(entries: Vec<(K, T)>) -> Self {
        Self::from_entries(entries)
    }
}

impl<K: PartialEq, T> FromIterator<(K, T)> for KeyedCollection<K, T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<K: PartialEq, T: PartialEq> PartialEq for KeyedCollection<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries[..] == other.entries[..]
    }
}

impl<K: Eq, T: Eq> Eq for KeyedCollection<K, T> {}

impl<K: fmt::Debug, T: fmt::Debug> fmt::Debug for KeyedCollection<K, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries()).finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<K, T> TypeConstructor for KeyedCollection<K, T> {
    type Inner = T;
    type WithType<B> = KeyedCollection<K, B>;
}

#[cfg(feature = "typeclass")]
impl<K: Clone, T: Clone> Functor for KeyedCollection<K, T> {
    fn fmap<B, F>(self, mut function: F) -> KeyedCollection<K, B>
    where
        F: FnMut(T) -> B,
    {
        self.fmap_ref(|item| function(item.clone()))
    }

    fn fmap_ref<B, F>(&self, mut function: F) -> KeyedCollection<K, B>
    where
        F: FnMut(&T) -> B,
    {
        let mapped: Vec<(K, B)> = self
            .entries
            .iter()
            .map(|(key, item)| (key.clone(), function(item)))
            .collect();
        KeyedCollection {
            entries: ReferenceCounter::from(mapped),
        }
    }
}

#[cfg(feature = "typeclass")]
impl<K, T: Clone> Foldable for KeyedCollection<K, T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.values()
            .fold(init, |accumulator, item| function(accumulator, item.clone()))
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.values()
            .rev()
            .fold(init, |accumulator, item| function(item.clone(), accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.entries.len()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, T> serde::Serialize for KeyedCollection<K, T>
where
    K: serde::Serialize,
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.entries())
    }
}

#[cfg(feature = "serde")]
struct KeyedCollectionVisitor<K, T> {
    marker: std::marker::PhantomData<(K, T)>,
}

#[cfg(feature = "serde")]
impl<'de, K, T> serde::de::Visitor<'de> for KeyedCollectionVisitor<K, T>
where
    K: serde::Deserialize<'de> + PartialEq,
    T: serde::Deserialize<'de>,
{
    type Value = KeyedCollection<K, T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = map.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut entries: Vec<(K, T)> = Vec::with_capacity(capacity);
        while let Some(entry) = map.next_entry()? {
            entries.push(entry);
        }
        Ok(KeyedCollection::from_entries(entries))
    }
}

#[cfg(feature = "serde")]
impl<'de, K, T> serde::Deserialize<'de> for KeyedCollection<K, T>
where
    K: serde::Deserialize<'de> + PartialEq,
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(KeyedCollectionVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectionError;
    use rstest::{fixture, rstest};

    #[fixture]
    fn sparse() -> KeyedCollection<i32, &'static str> {
        KeyedCollection::from_entries([(5, "five"), (1, "one"), (9, "nine")])
    }

    #[rstest]
    fn test_new_is_empty() {
        let collection: KeyedCollection<String, i32> = KeyedCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.count(), 0);
    }

    #[rstest]
    fn test_insertion_order_is_kept(sparse: KeyedCollection<i32, &'static str>) {
        let keys: Vec<i32> = sparse.keys().copied().collect();
        let items: Vec<&str> = sparse.iter().copied().collect();
        assert_eq!(keys, vec![5, 1, 9]);
        assert_eq!(items, vec!["five", "one", "nine"]);
    }

    #[rstest]
    #[case(5, Ok(&"five"))]
    #[case(9, Ok(&"nine"))]
    #[case(0, Err(CollectionError::no_item_at_key(0)))]
    fn test_get_by_key(
        sparse: KeyedCollection<i32, &'static str>,
        #[case] key: i32,
        #[case] expected: Result<&&'static str, CollectionError>,
    ) {
        assert_eq!(sparse.get_by_key(&key), expected);
    }

    #[rstest]
    fn test_duplicate_keys_collapse() {
        let collection = KeyedCollection::from(vec![("x", 1), ("y", 2), ("x", 3)]);
        assert_eq!(collection.len(), 2);
        let entries: Vec<(&&str, &i32)> = collection.entries().collect();
        assert_eq!(entries, vec![(&"x", &3), (&"y", &2)]);
    }

    #[rstest]
    fn test_index(sparse: KeyedCollection<i32, &'static str>) {
        assert_eq!(sparse[&1], "one");
    }

    #[rstest]
    #[should_panic(expected = "No item exists at key [2].")]
    fn test_index_missing_key_panics(sparse: KeyedCollection<i32, &'static str>) {
        let _item = sparse[&2];
    }

    #[rstest]
    fn test_writes_are_rejected(sparse: KeyedCollection<i32, &'static str>) {
        let mut collection = sparse.clone();
        assert!(
            collection
                .set(1, "uno")
                .unwrap_err()
                .is_mutate_operations_not_allowed()
        );
        assert!(
            collection
                .unset(&1)
                .unwrap_err()
                .is_mutate_operations_not_allowed()
        );
        assert_eq!(collection, sparse);
    }

    #[rstest]
    fn test_ordered_mapping_keeps_sparse_keys(sparse: KeyedCollection<i32, &'static str>) {
        let mapping = sparse.as_ordered_mapping();
        assert_eq!(mapping.get(&9), Some(&"nine"));
        let keys: Vec<i32> = mapping.keys().copied().collect();
        assert_eq!(keys, vec![5, 1, 9]);
    }

    #[rstest]
    fn test_to_vector_reindexes(sparse: KeyedCollection<i32, &'static str>) {
        let vector = sparse.to_vector();
        assert_eq!(vector.get(0), Ok(&"five"));
        assert_eq!(vector.as_slice(), &["five", "one", "nine"]);
    }

    #[rstest]
    fn test_debug(sparse: KeyedCollection<i32, &'static str>) {
        assert_eq!(
            format!("{sparse:?}"),
            r#"{5: "five", 1: "one", 9: "nine"}"#
        );
    }

    #[cfg(feature = "typeclass")]
    #[rstest]
    fn test_fmap_ref_keeps_keys(sparse: KeyedCollection<i32, &'static str>) {
        let lengths = sparse.fmap_ref(|item| item.len());
        assert_eq!(lengths.get_by_key(&9), Ok(&4));
        let keys: Vec<i32> = lengths.keys().copied().collect();
        assert_eq!(keys, vec![5, 1, 9]);
    }

    #[cfg(feature = "typeclass")]
    #[rstest]
    fn test_fold_left_over_items(sparse: KeyedCollection<i32, &'static str>) {
        let joined = sparse.fold_left(String::new(), |mut accumulator, item| {
            accumulator.push_str(item);
            accumulator
        });
        assert_eq!(joined, "fiveonenine");
    }
}
