//! Iterators over all visible items of a [`crate::FilterList`].
//!
//! The excluded items are skipped lazy, by every call of `next` or `next_back`.
use std::{hash::Hash, iter::FusedIterator, vec};

use crate::exclusion::Exclusions;

/// Borrowed `Iterator` over all not excluded items.
#[derive(Debug)]
pub struct Iter<'i, T> {
    items: &'i [T],
    exclusions: &'i Exclusions<T>,
    front: usize,
    back: usize,
}

impl<'i, T> Iter<'i, T> {
    pub(crate) fn new(items: &'i [T], exclusions: &'i Exclusions<T>) -> Self {
        Self {
            items,
            exclusions,
            front: 0,
            back: items.len(),
        }
    }
}

impl<'i, T> Clone for Iter<'i, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'i, T> Iterator for Iter<'i, T>
where
    T: Eq + Hash,
{
    type Item = &'i T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.front < self.back {
            let item = &self.items[self.front];
            self.front += 1;
            if !self.exclusions.contains(item) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.back - self.front))
    }
}

impl<'i, T> DoubleEndedIterator for Iter<'i, T>
where
    T: Eq + Hash,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.front < self.back {
            self.back -= 1;
            let item = &self.items[self.back];
            if !self.exclusions.contains(item) {
                return Some(item);
            }
        }
        None
    }
}

impl<'i, T> FusedIterator for Iter<'i, T> where T: Eq + Hash {}

/// Owned `Iterator` over all not excluded items.
#[derive(Debug)]
pub struct IntoIter<T> {
    items: vec::IntoIter<T>,
    exclusions: Exclusions<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(items: Vec<T>, exclusions: Exclusions<T>) -> Self {
        Self {
            items: items.into_iter(),
            exclusions,
        }
    }
}

impl<T> Iterator for IntoIter<T>
where
    T: Eq + Hash,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let exclusions = &self.exclusions;
        self.items.find(|i| !exclusions.contains(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.items.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T>
where
    T: Eq + Hash,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let exclusions = &self.exclusions;
        self.items.rfind(|i| !exclusions.contains(i))
    }
}

impl<T> FusedIterator for IntoIter<T> where T: Eq + Hash {}

#[cfg(test)]
mod tests {
    use crate::FilterList;
    use rstest::rstest;

    #[rstest]
    #[case::nothing_excluded(vec![1, 2, 3], vec![], vec![1, 2, 3])]
    #[case::first(vec![1, 2, 3], vec![1], vec![2, 3])]
    #[case::mid(vec![1, 2, 3], vec![2], vec![1, 3])]
    #[case::last(vec![1, 2, 3], vec![3], vec![1, 2])]
    #[case::all(vec![1, 2, 1], vec![1, 2], vec![])]
    #[case::runs(vec![9, 9, 1, 9, 9, 2, 9], vec![9], vec![1, 2])]
    #[case::empty(vec![], vec![1], vec![])]
    fn forward_and_backward(
        #[case] items: Vec<i32>,
        #[case] exclusions: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        let l = FilterList::new(items, exclusions);
        assert_eq!(expected, l.iter().copied().collect::<Vec<_>>());

        let mut reversed = expected.clone();
        reversed.reverse();
        assert_eq!(reversed, l.iter().rev().copied().collect::<Vec<_>>());
        assert_eq!(reversed, l.clone().into_iter().rev().collect::<Vec<_>>());

        assert_eq!(expected, l.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn meet_in_the_middle() {
        let l = FilterList::new([1, 9, 2, 9, 3], [9]);
        let mut it = l.iter();

        assert_eq!(Some(&1), it.next());
        assert_eq!(Some(&3), it.next_back());
        assert_eq!(Some(&2), it.next_back());
        assert_eq!(None, it.next());
        assert_eq!(None, it.next_back());
        // fused
        assert_eq!(None, it.next());
    }

    #[test]
    fn size_hint() {
        let l = FilterList::new([1, 9, 2], [9]);
        let mut it = l.iter();
        assert_eq!((0, Some(3)), it.size_hint());
        it.next();
        assert_eq!((0, Some(2)), it.size_hint());

        let it = l.clone().into_iter();
        assert_eq!((0, Some(3)), it.size_hint());
    }

    #[test]
    fn clone_iter() {
        let l = FilterList::new(["A", "B", "C"], ["B"]);
        let mut it = l.iter();
        assert_eq!(Some(&"A"), it.next());

        let copy = it.clone();
        assert_eq!(vec![&"C"], copy.collect::<Vec<_>>());
        assert_eq!(Some(&"C"), it.next());
    }
}
