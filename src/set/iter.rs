/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::hash::BuildHasher;
use std::hash::Hash;
use std::iter::FusedIterator;

use hashbrown::hash_table;

use crate::set::Set;

/// Iterator over references to the elements of a [`Set`], in arbitrary order.
pub struct Iter<'a, T> {
    pub(crate) iter: hash_table::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Owning iterator over the elements of a [`Set`], in arbitrary order.
pub struct IntoIter<T> {
    pub(crate) iter: hash_table::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

/// Iterator over elements of one set which are not in the other set.
pub struct Difference<'a, T, S> {
    pub(crate) iter: Iter<'a, T>,
    pub(crate) other: &'a Set<T, S>,
}

impl<'a, T, S> Iterator for Difference<'a, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;

    #[allow(clippy::while_let_on_iterator)]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.iter.next() {
            if !self.other.contains(item) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.iter.len().saturating_sub(self.other.len()),
            Some(self.iter.len()),
        )
    }
}

impl<'a, T, S> FusedIterator for Difference<'a, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

/// Iterator over a union of two sets.
///
/// Yields every element of the first set, then the elements of the second
/// set not present in the first.
pub struct Union<'a, T, S> {
    pub(crate) iter: std::iter::Chain<Iter<'a, T>, Difference<'a, T, S>>,
}

impl<'a, T, S> Iterator for Union<'a, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use crate::Set;

    #[test]
    fn test_iter_len_tracks_progress() {
        let s = Set::from([10, 20, 30]);
        let mut iter = s.iter();
        assert_eq!(3, iter.len());
        iter.next();
        assert_eq!(2, iter.len());
        iter.next();
        iter.next();
        assert_eq!(0, iter.len());
        assert_eq!(None, iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_iter_is_restartable() {
        let s = Set::from([1, 2, 3]);
        let mut a = s.iter();
        a.next();
        assert_eq!(2, a.count());
        assert_eq!(3, s.iter().count());
        assert_eq!(3, s.iter().count());
    }

    #[test]
    fn test_into_iter() {
        let s = Set::from(["x".to_owned(), "y".to_owned()]);
        let mut v = Vec::from_iter(s);
        v.sort();
        assert_eq!(vec!["x".to_owned(), "y".to_owned()], v);
    }

    #[test]
    fn test_difference_size_hint() {
        let a = Set::from([1, 2, 3]);
        let b = Set::from([2]);
        let mut iter = a.difference(&b);
        assert_eq!((2, Some(3)), iter.size_hint());
        let mut seen = Vec::from_iter(iter.by_ref().copied());
        seen.sort();
        assert_eq!(vec![1, 3], seen);
        assert_eq!((0, Some(0)), iter.size_hint());
    }
}
