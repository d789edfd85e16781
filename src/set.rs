/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Unordered set.

mod iter;

use std::cmp;
use std::fmt;
use std::fmt::Debug;
use std::hash::BuildHasher;
use std::hash::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

use allocative::Allocative;
use equivalent::Equivalent;
use hashbrown::HashTable;
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::hash_table::Entry;

use crate::Error;
pub use crate::set::iter::Difference;
pub use crate::set::iter::IntoIter;
pub use crate::set::iter::Iter;
pub use crate::set::iter::Union;

/// Hash set which does not expose any order of its elements.
///
/// An empty set does not allocate: the table is allocated on the first
/// insertion, or upfront when constructed with non-zero capacity.
#[derive(Clone, Allocative)]
#[allocative(bound = "T: Allocative, S")]
pub struct Set<T, S = DefaultHashBuilder> {
    table: HashTable<T>,
    #[allocative(skip)]
    hasher: S,
}

impl<T> Set<T> {
    /// Create a new empty set.
    #[inline]
    pub fn new() -> Set<T> {
        Set::with_hasher(DefaultHashBuilder::default())
    }

    /// Create a new empty set with room for at least `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Set<T> {
        Set::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Create a set from the given items, preallocating room for
    /// `max(capacity, items)` elements.
    ///
    /// Duplicate items are collapsed.
    pub fn from_iter_with_capacity<I>(capacity: usize, items: I) -> Set<T>
    where
        I: IntoIterator<Item = T>,
        T: Hash + Eq,
    {
        let items = items.into_iter();
        let mut set = Set::with_capacity(cmp::max(capacity, items.size_hint().0));
        for item in items {
            set.insert(item);
        }
        set
    }
}

impl<T, S> Set<T, S> {
    /// Create a new empty set which will use the given hash builder.
    #[inline]
    pub fn with_hasher(hasher: S) -> Set<T, S> {
        Set {
            table: HashTable::new(),
            hasher,
        }
    }

    /// Create a new empty set with the given capacity and hash builder.
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Set<T, S> {
        Set {
            table: HashTable::with_capacity(capacity),
            hasher,
        }
    }

    /// The hash builder of this set.
    #[inline]
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Number of elements in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Is the set empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of elements the set can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Iterate the elements, in arbitrary order.
    ///
    /// Each call produces a new independent traversal.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.table.iter(),
        }
    }

    /// Elements sorted.
    pub fn iter_sorted(&self) -> Vec<&T>
    where
        T: Ord,
    {
        let mut elements = Vec::from_iter(self.iter());
        elements.sort();
        elements
    }

    /// Remove all elements from the set.
    ///
    /// Retain the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Retain only the elements specified by the predicate.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.table.retain(|t| f(t));
    }
}

impl<T, S> Set<T, S>
where
    S: BuildHasher,
{
    #[inline]
    fn hash_of<Q: Hash + ?Sized>(&self, value: &Q) -> u64 {
        self.hasher.hash_one(value)
    }

    /// Insert the element into the set.
    ///
    /// Return `true` iff the element was not present before.
    #[inline]
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Hash + Eq,
    {
        let hash = self.hash_of(&value);
        let hasher = &self.hasher;
        match self.table.entry(hash, |t| value.equivalent(t), |t| hasher.hash_one(t)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(value);
                true
            }
        }
    }

    /// Return the element stored in the set, inserting `value` if absent.
    pub fn get_or_insert(&mut self, value: T) -> &T
    where
        T: Hash + Eq,
    {
        let hash = self.hash_of(&value);
        let hasher = &self.hasher;
        match self.table.entry(hash, |t| value.equivalent(t), |t| hasher.hash_one(t)) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(value).into_mut(),
        }
    }

    /// Check if the set contains an element.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Q: Hash + Equivalent<T> + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Return a reference to the element equal to `value`, if it is present.
    #[inline]
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        Q: Hash + Equivalent<T> + ?Sized,
    {
        if self.table.is_empty() {
            return None;
        }
        self.table.find(self.hash_of(value), |t| value.equivalent(t))
    }

    /// Remove the element from the set.
    ///
    /// Return `true` iff the element was present.
    #[inline]
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        Q: Hash + Equivalent<T> + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Remove the element from the set and return it.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        Q: Hash + Equivalent<T> + ?Sized,
    {
        if self.table.is_empty() {
            return None;
        }
        let hash = self.hash_of(value);
        match self.table.find_entry(hash, |t| value.equivalent(t)) {
            Ok(e) => Some(e.remove().0),
            Err(_) => None,
        }
    }

    /// Reserve capacity for at least `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize)
    where
        T: Hash,
    {
        let hasher = &self.hasher;
        self.table.reserve(additional, |t| hasher.hash_one(t));
    }

    /// Reserve capacity for at least `additional` more elements,
    /// returning an error instead of aborting if the allocation fails.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), Error>
    where
        T: Hash,
    {
        let hasher = &self.hasher;
        self.table
            .try_reserve(additional, |t| hasher.hash_one(t))
            .map_err(|e| Error::from_hashbrown(e, additional))
    }

    /// Shrink the capacity as much as the table allows.
    #[inline]
    pub fn shrink_to_fit(&mut self)
    where
        T: Hash,
    {
        let hasher = &self.hasher;
        self.table.shrink_to_fit(|t| hasher.hash_one(t));
    }

    /// Iterator over elements of this set which are not in the other set.
    pub fn difference<'a>(&'a self, other: &'a Self) -> Difference<'a, T, S>
    where
        T: Hash + Eq,
    {
        Difference {
            iter: self.iter(),
            other,
        }
    }

    /// Iterator over union of two sets.
    pub fn union<'a>(&'a self, other: &'a Self) -> Union<'a, T, S>
    where
        T: Hash + Eq,
    {
        Union {
            iter: self.iter().chain(other.difference(self)),
        }
    }

    /// Is every element of this set also in `other`?
    pub fn is_subset<S2: BuildHasher>(&self, other: &Set<T, S2>) -> bool
    where
        T: Hash + Eq,
    {
        self.len() <= other.len() && self.iter().all(|t| other.contains(t))
    }

    /// Do the sets have no elements in common?
    pub fn is_disjoint<S2: BuildHasher>(&self, other: &Set<T, S2>) -> bool
    where
        T: Hash + Eq,
    {
        if self.len() <= other.len() {
            self.iter().all(|t| !other.contains(t))
        } else {
            other.iter().all(|t| !self.contains(t))
        }
    }
}

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Set<T> {
        Set::new()
    }
}

impl<T: Debug, S> Debug for Set<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> PartialEq for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(t))
    }
}

impl<T, S> Eq for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T: Hash, S> Hash for Set<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        let mut sum: u64 = 0;
        for t in self.iter() {
            let mut hasher = DefaultHasher::new();
            t.hash(&mut hasher);
            sum = sum.wrapping_add(hasher.finish());
        }
        sum.hash(state);
    }
}

impl<T, S> FromIterator<T> for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Set<T, S> {
        let iter = iter.into_iter();
        let mut set = Set::with_capacity_and_hasher(iter.size_hint().0, S::default());
        for t in iter {
            set.insert(t);
        }
        set
    }
}

impl<T, const N: usize> From<[T; N]> for Set<T>
where
    T: Hash + Eq,
{
    fn from(items: [T; N]) -> Set<T> {
        Set::from_iter(items)
    }
}

impl<T, S> Extend<T> for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        // Same reservation heuristic as `hashbrown::HashSet`.
        let additional = if self.is_empty() {
            iter.size_hint().0
        } else {
            iter.size_hint().0.div_ceil(2)
        };
        self.reserve(additional);
        for t in iter {
            self.insert(t);
        }
    }
}

impl<'a, T, S> Extend<&'a T> for Set<T, S>
where
    T: Hash + Eq + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            iter: self.table.into_iter(),
        }
    }
}
