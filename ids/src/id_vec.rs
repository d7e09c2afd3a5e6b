//! A [`Vec`] wrapper with [`Id`] indexing.
use core::{
    fmt::{self, Debug},
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use crate::Id;

/// [`Vec`] wrapper, representing a collection that maps `K` keys to `V`
/// values.
///
/// It has entries `(k, v)` with `v` being the item at position
/// [`k.id_index()`][Id::id_index] of the wrapped vector. This means the keys
/// always span a contiguous range of ids starting at index `0`.
pub struct IdVec<K, V> {
    values: Vec<V>,
    _phantom: PhantomData<K>,
}

impl<K: Id, V: Clone> Clone for IdVec<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<K: Id, V> Default for IdVec<K, V> {
    #[inline]
    fn default() -> Self {
        Self {
            values: Default::default(),
            _phantom: PhantomData,
        }
    }
}

impl<K: Id, V> IdVec<K, V> {
    /// Creates an `IdVec` from a vector of values.
    ///
    /// # Panics
    ///
    /// Panics when `K` cannot index the full length of the vector.
    #[inline]
    pub fn from_vec(vec: Vec<V>) -> Self {
        assert!(vec.len() <= K::MAX_ID_INDEX.saturating_add(1));
        Self {
            values: vec,
            _phantom: PhantomData,
        }
    }

    /// Returns the values as a slice.
    #[inline]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Converts this collection into a vector of the contained values.
    #[inline]
    pub fn into_values(self) -> Vec<V> {
        self.values
    }

    /// Returns the number of entries in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no entries in the collection.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Inserts a value as a new entry, using the id with the smallest
    /// available index as key.
    ///
    /// This returns the used key and a mutable reference to the just inserted
    /// value.
    #[inline]
    pub fn push(&mut self, value: V) -> (K, &mut V) {
        let index = self.values.len();
        let key = K::from_id_index(index);
        self.values.push(value);
        (key, &mut self.values[index])
    }

    /// Returns the id with the smallest available index.
    ///
    /// This is the same key that would be used when calling
    /// [`push`][Self::push].
    #[inline]
    pub fn next_unused_key(&self) -> K {
        K::from_id_index(self.values.len())
    }

    /// Appends values using the given closure until there is an entry with
    /// the given key.
    #[inline]
    pub fn grow_for_key_with(&mut self, key: K, f: impl FnMut() -> V) -> &mut V {
        if self.values.len() <= key.id_index() {
            self.values.resize_with(key.id_index() + 1, f);
        }
        &mut self.values[key.id_index()]
    }

    /// Appends default values until there is an entry with the given key.
    #[inline]
    pub fn grow_for_key(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.grow_for_key_with(key, Default::default)
    }

    /// Resizes the collection, creating new entries by cloning the given
    /// value.
    #[inline]
    pub fn resize(&mut self, len: usize, value: V)
    where
        V: Clone,
    {
        assert!(len <= K::MAX_ID_INDEX.saturating_add(1));
        self.values.resize(len, value)
    }

    /// Resizes the collection, creating new entries by calling the given
    /// closure.
    #[inline]
    pub fn resize_with(&mut self, len: usize, value: impl FnMut() -> V) {
        assert!(len <= K::MAX_ID_INDEX.saturating_add(1));
        self.values.resize_with(len, value)
    }

    /// Removes all entries of the collection.
    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Returns a reference to the value associated with the given key.
    ///
    /// Returns `None` when the key is out-of-bounds.
    #[inline]
    pub fn get(&self, key: K) -> Option<&V> {
        self.values.get(key.id_index())
    }

    /// Returns a mutable reference to the value associated with the given
    /// key.
    ///
    /// Returns `None` when the key is out-of-bounds.
    #[inline]
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.values.get_mut(key.id_index())
    }

    /// Returns an iterator over all keys in ascending order.
    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = K> {
        (0..self.values.len()).map(K::from_id_index)
    }

    /// Returns an iterator over all entries using value references.
    ///
    /// Each entry is a `(K, &V)` pair, yielded in ascending key order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (K, &V)> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| (K::from_id_index(index), value))
    }

    /// Returns an iterator over all entries using mutable value references.
    ///
    /// Each entry is a `(K, &mut V)` pair, yielded in ascending key order.
    #[inline]
    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = (K, &mut V)> {
        self.values
            .iter_mut()
            .enumerate()
            .map(|(index, value)| (K::from_id_index(index), value))
    }
}

impl<K: Id, V> Index<K> for IdVec<K, V> {
    type Output = V;

    #[inline]
    fn index(&self, index: K) -> &Self::Output {
        &self.values[index.id_index()]
    }
}

impl<K: Id, V> IndexMut<K> for IdVec<K, V> {
    #[inline]
    fn index_mut(&mut self, index: K) -> &mut Self::Output {
        &mut self.values[index.id_index()]
    }
}

impl<K: Id, V> IntoIterator for IdVec<K, V> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.values.into_iter().enumerate(),
            _phantom: PhantomData,
        }
    }
}

/// Owning entry iterator returned by [`IdVec::into_iter`].
pub struct IntoIter<K, V> {
    inner: core::iter::Enumerate<std::vec::IntoIter<V>>,
    _phantom: PhantomData<K>,
}

impl<K: Id, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (index, value) = self.inner.next()?;
        Some((K::from_id_index(index), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Id, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K: Id, U, V: PartialEq<U>> PartialEq<IdVec<K, U>> for IdVec<K, V> {
    #[inline]
    fn eq(&self, other: &IdVec<K, U>) -> bool {
        self.values == other.values
    }
}

impl<K: Id, V: Eq> Eq for IdVec<K, V> {}

impl<K: Id, V: Debug> Debug for IdVec<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Id, V> FromIterator<V> for IdVec<K, V> {
    #[inline]
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_track_insertion_order() {
        let mut vec: IdVec<u32, char> = Default::default();
        assert!(vec.is_empty());
        assert_eq!(vec.next_unused_key(), 0);

        for (index, c) in ('a'..='f').enumerate() {
            let (key, value) = vec.push(c);
            assert_eq!(key as usize, index);
            assert_eq!(*value, c);
        }

        assert_eq!(vec.len(), 6);
        assert_eq!(vec[3], 'd');
        assert_eq!(vec.get(6), None);
        let entries: Vec<(u32, char)> = vec.iter().map(|(k, &v)| (k, v)).collect();
        let expected: Vec<(u32, char)> =
            ('a'..='f').enumerate().map(|(i, c)| (i as u32, c)).collect();
        assert_eq!(entries, expected);
    }

    #[test]
    fn grow_for_key_fills_gaps_with_defaults() {
        let mut vec: IdVec<u32, u64> = Default::default();
        *vec.grow_for_key(4) = 10;
        assert_eq!(vec.values(), &[0, 0, 0, 0, 10]);
        vec[1] = 7;
        assert_eq!(vec.values(), &[0, 7, 0, 0, 10]);
    }

    #[test]
    fn indexing_matches_wrapped_vector() {
        let vec: IdVec<u32, u32> = IdVec::from_vec(vec![5, 6, 7]);
        assert_eq!(vec.keys().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(vec.into_iter().collect::<Vec<_>>(), vec![(0, 5), (1, 6), (2, 7)]);
    }
}
