//! The immutable collection base.
//!
//! [`Collection`] is the read/iterate/error contract shared by every
//! collection in this crate. Implementors supply raw lookup, iteration and
//! an ordered-mapping export; the trait provides checked keyed reads and the
//! write path, which always fails.
//!
//! [`OrderedMapping`] is the read-only key→item view returned by
//! [`Collection::as_ordered_mapping`]. It borrows the items immutably and has
//! no write API, so it cannot be used to change the collection it came from.
//!
//! # Examples
//!
//! ```rust
//! use persistent_collection::prelude::*;
//!
//! let mut vector = Vector::from(vec![1, 2, 3]);
//!
//! assert_eq!(vector.get_by_key(&0), Ok(&1));
//! assert!(vector.get_by_key(&3).unwrap_err().is_no_item_at_key());
//!
//! // Writes are rejected and leave the collection untouched
//! assert_eq!(vector.set(0, 5), Err(CollectionError::MutateOperationsNotAllowed));
//! assert_eq!(vector.get(0), Ok(&1));
//! ```

use std::fmt;

use crate::error::CollectionError;

// =============================================================================
// Collection
// =============================================================================

/// An immutable, ordered, keyed collection.
///
/// # Required Methods
///
/// - `count`: Number of stored items
/// - `iter`: Items in stored order
/// - `entry`: Raw lookup by key
/// - `as_ordered_mapping`: Read-only key→item view
///
/// # Provided Methods
///
/// - `is_empty`, `has_key`
/// - `get_by_key`: Checked lookup failing with
///   [`CollectionError::NoItemAtKey`]
/// - `set`, `unset`: Always fail with
///   [`CollectionError::MutateOperationsNotAllowed`]
pub trait Collection {
    /// The key type items are stored under.
    type Key: fmt::Display;

    /// The stored item type.
    type Item;

    /// Iterator over the items in stored order.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Returns the number of stored items.
    fn count(&self) -> usize;

    /// Returns an iterator over the items in stored order.
    ///
    /// Each call starts a fresh traversal.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns the item stored at `key`, if any.
    fn entry(&self, key: &Self::Key) -> Option<&Self::Item>;

    /// Returns a read-only ordered view of every key and item.
    fn as_ordered_mapping(&self) -> OrderedMapping<'_, Self::Key, Self::Item>;

    /// Returns `true` if the collection holds no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns `true` if an item is stored at `key`.
    #[inline]
    fn has_key(&self, key: &Self::Key) -> bool {
        self.entry(key).is_some()
    }

    /// Returns the item stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NoItemAtKey`] when `key` is absent.
    fn get_by_key(&self, key: &Self::Key) -> Result<&Self::Item, CollectionError> {
        self.entry(key).ok_or_else(|| {
            tracing::trace!(%key, "no item at key");
            CollectionError::no_item_at_key(key)
        })
    }

    /// Attempts to store `item` at `key`.
    ///
    /// # Errors
    ///
    /// Always returns [`CollectionError::MutateOperationsNotAllowed`].
    fn set(&mut self, key: Self::Key, _item: Self::Item) -> Result<(), CollectionError> {
        reject_mutation("set", &key)
    }

    /// Attempts to remove the item at `key`.
    ///
    /// # Errors
    ///
    /// Always returns [`CollectionError::MutateOperationsNotAllowed`].
    fn unset(&mut self, key: &Self::Key) -> Result<(), CollectionError> {
        reject_mutation("unset", key)
    }
}

fn reject_mutation(
    operation: &'static str,
    key: &impl fmt::Display,
) -> Result<(), CollectionError> {
    tracing::debug!(operation, %key, "rejected write to immutable collection");
    Err(CollectionError::MutateOperationsNotAllowed)
}

// =============================================================================
// OrderedMapping
// =============================================================================

/// A read-only, ordered key→item view of a [`Collection`].
///
/// Entries keep the collection's stored order. Items are borrowed, never
/// copied.
#[derive(Clone, PartialEq, Eq)]
pub struct OrderedMapping<'a, K, T> {
    entries: Vec<(K, &'a T)>,
}

impl<'a, K, T> OrderedMapping<'a, K, T> {
    pub(crate) fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, &'a T)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the items in order.
    pub fn values(&self) -> impl Iterator<Item = &'a T> {
        self.entries.iter().map(|(_, item)| *item)
    }

    /// Returns an iterator over `(key, item)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &'a T)> {
        self.entries.iter().map(|(key, item)| (key, *item))
    }
}

impl<'a, K: PartialEq, T> OrderedMapping<'a, K, T> {
    /// Returns the item stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<&'a T> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, item)| *item)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<'a, K, T> IntoIterator for OrderedMapping<'a, K, T> {
    type Item = (K, &'a T);
    type IntoIter = std::vec::IntoIter<(K, &'a T)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'b, 'a, K, T> IntoIterator for &'b OrderedMapping<'a, K, T> {
    type Item = (&'b K, &'a T);
    type IntoIter =
        std::iter::Map<std::slice::Iter<'b, (K, &'a T)>, fn(&'b (K, &'a T)) -> (&'b K, &'a T)>;

    fn into_iter(self) -> Self::IntoIter {
        let split: fn(&'b (K, &'a T)) -> (&'b K, &'a T) = |(key, item)| (key, *item);
        self.entries.iter().map(split)
    }
}

impl<K: fmt::Debug, T: fmt::Debug> fmt::Debug for OrderedMapping<'_, K, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn items() -> Vec<&'static str> {
        vec!["zero", "one", "two"]
    }

    #[rstest]
    fn test_mapping_preserves_order(items: Vec<&'static str>) {
        let mapping = OrderedMapping::from_entries(items.iter().enumerate());
        let keys: Vec<usize> = mapping.keys().copied().collect();
        let values: Vec<&str> = mapping.values().copied().collect();
        assert_eq!(keys, vec![0, 1, 2]);
        assert_eq!(values, vec!["zero", "one", "two"]);
    }

    #[rstest]
    fn test_mapping_lookup(items: Vec<&'static str>) {
        let mapping = OrderedMapping::from_entries(items.iter().enumerate());
        assert_eq!(mapping.get(&1), Some(&"one"));
        assert_eq!(mapping.get(&3), None);
        assert!(mapping.contains_key(&2));
        assert!(!mapping.contains_key(&5));
    }

    #[rstest]
    fn test_mapping_with_sparse_keys() {
        let values = [10, 20];
        let mapping = OrderedMapping::from_entries([(7, &values[0]), (3, &values[1])]);
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get(&3), Some(&20));
        let pairs: Vec<(i32, &i32)> = mapping.into_iter().collect();
        assert_eq!(pairs, vec![(7, &10), (3, &20)]);
    }

    #[rstest]
    fn test_mapping_iterates_by_reference(items: Vec<&'static str>) {
        let mapping = OrderedMapping::from_entries(items.iter().enumerate());
        let mut visited = Vec::new();
        for (key, item) in &mapping {
            visited.push(format!("{key}={item}"));
        }
        assert_eq!(visited, vec!["0=zero", "1=one", "2=two"]);
        assert_eq!(mapping.len(), 3);
    }

    #[rstest]
    fn test_mapping_empty() {
        let mapping: OrderedMapping<'_, usize, i32> = OrderedMapping::from_entries([]);
        assert!(mapping.is_empty());
        assert_eq!(format!("{mapping:?}"), "{}");
    }

    #[rstest]
    fn test_mapping_debug(items: Vec<&'static str>) {
        let mapping = OrderedMapping::from_entries(items.iter().enumerate());
        assert_eq!(format!("{mapping:?}"), r#"{0: "zero", 1: "one", 2: "two"}"#);
    }

    // A key that can only be displayed.
    struct Slot(usize);

    impl fmt::Display for Slot {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "slot {}", self.0)
        }
    }

    struct Slots<T>(Vec<T>);

    impl<T> Collection for Slots<T> {
        type Key = Slot;
        type Item = T;
        type Iter<'a>
            = std::slice::Iter<'a, T>
        where
            Self: 'a;

        fn count(&self) -> usize {
            self.0.len()
        }

        fn iter(&self) -> Self::Iter<'_> {
            self.0.iter()
        }

        fn entry(&self, key: &Slot) -> Option<&T> {
            self.0.get(key.0)
        }

        fn as_ordered_mapping(&self) -> OrderedMapping<'_, Slot, T> {
            OrderedMapping::from_entries(
                self.0
                    .iter()
                    .enumerate()
                    .map(|(position, item)| (Slot(position), item)),
            )
        }
    }

    #[rstest]
    fn test_display_only_key() {
        let slots = Slots(vec!['a', 'b']);
        assert_eq!(slots.get_by_key(&Slot(1)), Ok(&'b'));
        assert!(slots.has_key(&Slot(0)));
        assert_eq!(
            slots.get_by_key(&Slot(2)),
            Err(CollectionError::no_item_at_key("slot 2"))
        );
        let keys: Vec<String> = slots
            .as_ordered_mapping()
            .keys()
            .map(ToString::to_string)
            .collect();
        assert_eq!(keys, vec!["slot 0", "slot 1"]);
    }

    #[rstest]
    fn test_rejected_set_releases_item() {
        let shared = std::rc::Rc::new(7);
        let mut slots = Slots(vec![std::rc::Rc::clone(&shared)]);
        assert_eq!(
            slots.set(Slot(0), std::rc::Rc::clone(&shared)),
            Err(CollectionError::MutateOperationsNotAllowed)
        );
        assert_eq!(std::rc::Rc::strong_count(&shared), 2);
        assert_eq!(slots.unset(&Slot(0)), Err(CollectionError::MutateOperationsNotAllowed));
        assert_eq!(slots.count(), 1);
    }
}
