//! # Keyed Collections
//!
//! An ordered sequence that is simultaneously indexed by a string key
//! derived from each item. The sequence and the key map are maintained as
//! one unit: insertion order is preserved, lookups by key are O(1), and an
//! item whose key is already present is rejected.
//!
//! The region-culture index is built from three of these (locales by
//! culture name, region cultures by culture name, currency groups by ISO
//! code), and each currency group is itself a keyed collection.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::KeyedCollectionError;

/// An item that exposes the key it is stored under.
pub trait Keyed {
    /// The key for this item. Must be stable for the item's lifetime.
    fn key(&self) -> &str;
}

impl<T: Keyed + ?Sized> Keyed for Arc<T> {
    fn key(&self) -> &str {
        (**self).key()
    }
}

/// Insertion-ordered items with a derived key → item map.
#[derive(Debug, Clone)]
pub struct KeyedCollection<T> {
    items: Vec<T>,
    positions: HashMap<String, usize>,
}

impl<T> Default for KeyedCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T: Keyed> KeyedCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item at the end of the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`KeyedCollectionError::DuplicateKey`] when an item with the
    /// same key is already present. The collection is left unchanged.
    pub fn insert(&mut self, item: T) -> Result<(), KeyedCollectionError> {
        let key = item.key();
        if self.positions.contains_key(key) {
            return Err(KeyedCollectionError::DuplicateKey(key.to_string()));
        }
        self.positions.insert(key.to_string(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Look up an item by key.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.positions.get(key).map(|&i| &self.items[i])
    }

    /// Mutable lookup by key. The caller must not change the item's key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        match self.positions.get(key) {
            Some(&i) => self.items.get_mut(i),
            None => None,
        }
    }

    /// Whether an item with this key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Position of the item with this key in insertion order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Item at a position in insertion order.
    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// First item in insertion order.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Keyed::key)
    }

    /// The items as a slice, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T: Keyed> IntoIterator for &'a KeyedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
