//! A `CursorMut` moves forward and backward over the visible items of a [`FilterList`]
//! and can change the list on the current position.
//!
//! The cursor stands always between two items. In a list with length *n*, there are *n* + 1
//! possible positions, indexed by 0, 1, ..., *n*:
//!
//!```text
//! items:      A   B   C
//! positions: 0   1   2   3
//! ```
//!
//! Excluded items are skipped in both directions, so `next` and `previous` return
//! only visible items.
//!
//! The cursor holds a mutable borrow on the list, every change of the list
//! while a cursor is alive goes through the cursor.
use std::hash::Hash;

use log::debug;

use crate::{Error, FilterList, Result};

/// Cursor over the visible items, which can `remove`, `set` and `add` items.
pub struct CursorMut<'a, T> {
    list: &'a mut FilterList<T>,
    cursor: usize,
    last: Option<usize>,
}

impl<'a, T> CursorMut<'a, T>
where
    T: Eq + Hash,
{
    pub(crate) fn new(list: &'a mut FilterList<T>, start: usize) -> Self {
        let mut c = Self {
            list,
            cursor: start,
            last: None,
        };
        c.cursor = c.next_visible(start);
        c
    }

    #[inline]
    fn is_excluded(&self, pos: usize) -> bool {
        self.list.is_excluded(&self.list.items[pos])
    }

    /// The position of the first visible item, starting by `pos`.
    /// If there is no one, then the result is `len`.
    fn next_visible(&self, mut pos: usize) -> usize {
        while pos < self.list.len() && self.is_excluded(pos) {
            pos += 1;
        }
        pos
    }

    /// The position after the first visible item, searching backward from `pos`.
    /// If there is no one, then the result is `0`.
    fn prev_visible(&self, mut pos: usize) -> usize {
        while pos > 0 && self.is_excluded(pos - 1) {
            pos -= 1;
        }
        pos
    }

    pub fn has_next(&self) -> bool {
        self.next_visible(self.cursor) < self.list.len()
    }

    /// Returns the next visible item and moves the cursor after this item.
    pub fn next(&mut self) -> Result<&T> {
        let pos = self.next_visible(self.cursor);
        if pos >= self.list.len() {
            return Err(Error::NoSuchElement);
        }

        self.last = Some(pos);
        self.cursor = self.next_visible(pos + 1);
        Ok(&self.list.items[pos])
    }

    pub fn has_previous(&self) -> bool {
        self.prev_visible(self.cursor) > 0
    }

    /// Returns the previous visible item and moves the cursor before this item.
    pub fn previous(&mut self) -> Result<&T> {
        let pos = self.prev_visible(self.cursor);
        if pos == 0 {
            return Err(Error::NoSuchElement);
        }

        self.cursor = pos - 1;
        self.last = Some(self.cursor);
        Ok(&self.list.items[self.cursor])
    }

    /// The position of the item, which `next` would return, or `len` if there is none.
    pub fn next_index(&self) -> usize {
        self.next_visible(self.cursor)
    }

    /// The position of the item, which `previous` would return.
    pub fn previous_index(&self) -> Option<usize> {
        self.prev_visible(self.cursor).checked_sub(1)
    }

    /// Remove the item, which was returned by the last `next` or `previous`.
    ///
    /// ## Errors
    ///
    /// - [`Error::NoSuchElement`]: if there was no `next` or `previous` before,
    ///   or the last operation was `remove` or `add`
    /// - [`Error::IllegalState`]: if the item is (meanwhile) excluded; `set` refuses excluded
    ///   items and the list is borrowed by the cursor, so this is only a safeguard
    pub fn remove(&mut self) -> Result<T> {
        let pos = self.last.ok_or_else(|| {
            debug!("remove without a previous call of next or previous");
            Error::NoSuchElement
        })?;

        if self.is_excluded(pos) {
            debug!("remove refused, item on position: {pos} is excluded");
            return Err(Error::IllegalState("the item is excluded"));
        }

        let item = self.list.items.remove(pos);
        if pos < self.cursor {
            self.cursor -= 1;
        }
        self.last = None;
        Ok(item)
    }

    /// Replace the item, which was returned by the last `next` or `previous`,
    /// and returns the replaced item.
    pub fn set(&mut self, item: T) -> Result<T> {
        let Some(pos) = self.last else {
            debug!("set without a previous call of next or previous");
            return Err(Error::IllegalState("no item to set"));
        };

        if self.list.is_excluded(&item) {
            debug!("set refused, the new item is excluded");
            return Err(Error::IllegalState("the item is excluded"));
        }

        Ok(std::mem::replace(&mut self.list.items[pos], item))
    }

    /// Insert the item before the cursor position. A following `next` is not affected,
    /// a following `previous` returns the new item.
    pub fn add(&mut self, item: T) -> Result {
        if self.list.is_excluded(&item) {
            debug!("add refused, the item is excluded");
            return Err(Error::IllegalState("the item is excluded"));
        }

        self.list.items.insert(self.cursor, item);
        self.cursor += 1;
        self.last = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn l() -> FilterList<&'static str> {
        FilterList::new(["A", "B", "C"], ["B"])
    }

    #[rstest]
    fn next_skip_excluded(mut l: FilterList<&'static str>) {
        let mut c = l.cursor();
        assert!(c.has_next());
        assert!(!c.has_previous());
        assert_eq!(0, c.next_index());
        assert_eq!(None, c.previous_index());

        assert_eq!(Ok(&"A"), c.next());
        assert_eq!(2, c.next_index());
        assert_eq!(Some(0), c.previous_index());

        assert_eq!(Ok(&"C"), c.next());
        assert!(!c.has_next());
        assert_eq!(3, c.next_index());
        assert_eq!(Some(2), c.previous_index());

        assert_eq!(Err(Error::NoSuchElement), c.next());
    }

    #[rstest]
    fn next_remove(mut l: FilterList<&'static str>) {
        let mut c = l.cursor();
        assert_eq!(Ok(&"A"), c.next());
        assert_eq!(Ok(&"C"), c.next());
        assert_eq!(Ok("C"), c.remove());
        assert!(!c.has_next());

        assert_eq!(&["A", "B"], l.as_slice());
    }

    #[rstest]
    fn remove_twice(mut l: FilterList<&'static str>) {
        let mut c = l.cursor();
        assert_eq!(Err(Error::NoSuchElement), c.remove());

        assert_eq!(Ok(&"A"), c.next());
        assert_eq!(Ok("A"), c.remove());
        assert_eq!(Err(Error::NoSuchElement), c.remove());

        // the cursor points still to the successor
        assert_eq!(Ok(&"C"), c.next());
        assert_eq!(&["B", "C"], l.as_slice());
    }

    #[rstest]
    fn remove_after_previous(mut l: FilterList<&'static str>) {
        let mut c = l.cursor_at(3).unwrap();
        assert_eq!(Ok(&"C"), c.previous());
        assert_eq!(Ok(&"A"), c.previous());
        assert_eq!(Ok("A"), c.remove());

        assert_eq!(None, c.previous_index());
        assert_eq!(Ok(&"C"), c.next());
        assert_eq!(&["B", "C"], l.as_slice());
    }

    #[rstest]
    fn set_excluded_item(mut l: FilterList<&'static str>) {
        let mut c = l.cursor();
        assert_eq!(Ok(&"A"), c.next());
        assert_eq!(Err(Error::IllegalState("the item is excluded")), c.set("B"));
        assert_eq!(Ok("A"), c.set("D"));
        assert_eq!(Ok("D"), c.remove());
        assert_eq!(&["B", "C"], l.as_slice());
    }

    #[test]
    fn cursor_after_unchecked_set() {
        let mut l = FilterList::new(["A", "B", "C"], ["B"]);
        // set on the list is not checked
        l.set(0, "B").unwrap();

        let mut c = l.cursor_at(0).unwrap();
        assert_eq!(Ok(&"C"), c.next());
        assert_eq!(Ok(&"C"), c.previous());
        assert_eq!(Err(Error::NoSuchElement), c.previous());
        assert_eq!(Ok("C"), c.remove());
        assert!(!c.has_next());
        assert!(!c.has_previous());
        assert_eq!(&["B", "B"], l.as_slice());
    }

    #[rstest]
    fn set_without_next(mut l: FilterList<&'static str>) {
        let mut c = l.cursor();
        assert_eq!(Err(Error::IllegalState("no item to set")), c.set("D"));
    }

    #[rstest]
    fn add(mut l: FilterList<&'static str>) {
        let mut c = l.cursor();
        assert_eq!(Err(Error::IllegalState("the item is excluded")), c.add("B"));

        assert_eq!(Ok(()), c.add("D"));
        assert_eq!(Err(Error::NoSuchElement), c.remove());
        assert_eq!(Ok(&"D"), c.previous());
        assert_eq!(Ok(&"D"), c.next());
        assert_eq!(Ok(&"A"), c.next());

        assert_eq!(Ok(()), c.add("E"));
        assert_eq!(Ok(&"C"), c.next());
        assert_eq!(Ok(()), c.add("F"));
        assert!(!c.has_next());

        assert_eq!(&["D", "A", "B", "E", "C", "F"], l.as_slice());
    }

    #[test]
    fn add_into_empty_list() {
        let mut l = FilterList::new(Vec::<i32>::new(), vec![0]);
        let mut c = l.cursor();
        assert_eq!(Ok(()), c.add(1));
        assert_eq!(Ok(()), c.add(2));
        assert_eq!(Ok(&2), c.previous());
        assert_eq!(&[1, 2], l.as_slice());
    }

    #[rstest]
    #[case::start(0, 0)]
    #[case::excluded(1, 2)]
    #[case::last(2, 2)]
    #[case::end(3, 3)]
    fn cursor_at(mut l: FilterList<&'static str>, #[case] start: usize, #[case] next: usize) {
        let c = l.cursor_at(start).unwrap();
        assert_eq!(next, c.next_index());
    }

    #[test]
    fn leading_and_trailing_excluded() {
        let mut l = FilterList::new([0, 0, 1, 0, 2, 0, 0], [0]);
        let mut c = l.cursor();
        assert_eq!(2, c.next_index());
        assert_eq!(Ok(&1), c.next());
        assert_eq!(Ok(&2), c.next());
        assert!(!c.has_next());
        assert_eq!(7, c.next_index());

        assert_eq!(Some(4), c.previous_index());
        assert_eq!(Ok(&2), c.previous());
        assert_eq!(Ok(&1), c.previous());
        assert!(!c.has_previous());
        assert_eq!(None, c.previous_index());
        assert_eq!(Err(Error::NoSuchElement), c.previous());
    }

    #[rstest]
    #[case(vec![1, 2, 3], vec![])]
    #[case(vec![1, 2, 3, 2], vec![2])]
    #[case(vec![5, 5, 5], vec![5])]
    #[case(vec![5, 1, 5, 2, 5], vec![5])]
    fn backward_is_reverse_of_forward(#[case] items: Vec<i32>, #[case] exclusions: Vec<i32>) {
        let mut l = FilterList::new(items, exclusions);
        let mut forward = l.iter().copied().collect::<Vec<_>>();

        let len = l.len();
        let mut c = l.cursor_at(len).unwrap();
        let mut backward = Vec::new();
        while c.has_previous() {
            backward.push(*c.previous().unwrap());
        }

        forward.reverse();
        assert_eq!(forward, backward);
    }

    #[rstest]
    fn remove_meanwhile_excluded(mut l: FilterList<&'static str>) {
        let mut c = l.cursor();
        assert_eq!(Ok(&"A"), c.next());

        // bypass the checked set of the cursor
        c.list.items[0] = "B";
        assert_eq!(
            Err(Error::IllegalState("the item is excluded")),
            c.remove()
        );
        // nothing is changed
        assert_eq!(Ok(&"C"), c.next());
        assert_eq!(&["B", "B", "C"], l.as_slice());
    }
}
