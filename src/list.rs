//! [`FilterList`] is a read write `List` which owned the given items and hides all excluded items.
//!
//! The items are saved unfiltered. Excluded items which are already part of the initial items
//! stay in the list, but they are invisible for the iteration and the cursor.
//!
//! ## Hint
//!
//! Not all operations are respecting the [`Exclusions`]:
//! - checked: `add`, `insert`, `remove`, `remove_at`, `add_all`, `add_all_at`, `remove_all`,
//!   [`Iter`] and [`CursorMut`]
//! - not checked (working on the raw items): `len`, `contains`, `contains_all`, `get`,
//!   `index_of`, `last_index_of`, `set`, `clear`, `sub_list`
use std::{
    hash::{Hash, Hasher},
    ops::Index,
};

use log::trace;

use crate::{
    error::{check_index, Error},
    exclusion::Exclusions,
    CursorMut, IntoIter, Iter, Result,
};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize + Eq + Hash",
        deserialize = "T: serde::Deserialize<'de> + Eq + Hash"
    ))
)]
pub struct FilterList<T> {
    pub(crate) items: Vec<T>,
    pub(crate) exclusions: Exclusions<T>,
}

impl<T> FilterList<T>
where
    T: Eq + Hash,
{
    /// Create a new `FilterList`. The `items` are taken as they are (no filtering),
    /// the `exclusions` are de-duplicated.
    ///
    /// ## Example
    ///
    /// ```
    /// use filter_list::FilterList;
    ///
    /// let l = FilterList::new(["A", "B", "C", "A"], ["B"]);
    ///
    /// assert_eq!(4, l.len());
    /// assert_eq!(vec![&"A", &"C", &"A"], l.iter().collect::<Vec<_>>());
    /// ```
    pub fn new<I, X>(items: I, exclusions: X) -> Self
    where
        I: IntoIterator<Item = T>,
        X: IntoIterator<Item = T>,
    {
        Self {
            items: items.into_iter().collect(),
            exclusions: exclusions.into_iter().collect(),
        }
    }

    /// Create a [`FilterListBuilder`], where both arguments are required.
    pub fn builder() -> FilterListBuilder<T> {
        FilterListBuilder::default()
    }

    /// Checks whether the item is excluded.
    #[inline]
    pub fn is_excluded(&self, item: &T) -> bool {
        self.exclusions.contains(item)
    }

    /// Checks whether the item exist in the list (excluded items are included).
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Checks whether all given items exist in the list (excluded items are included).
    pub fn contains_all(&self, items: &[T]) -> bool {
        if self.items.len() < items.len() {
            return false;
        }
        items.iter().all(|i| self.items.contains(i))
    }

    /// Returns the item on the given position, without checking the exclusions.
    pub fn get(&self, index: usize) -> Result<&T> {
        let index = check_index(index, self.items.len())?;
        Ok(&self.items[index])
    }

    /// The first position of the given item.
    #[inline]
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }

    /// The last position of the given item.
    #[inline]
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().rposition(|i| i == item)
    }

    /// Append a new `Item` to the List, if the item is not excluded.
    /// Returns `true`, if the item was appended.
    pub fn add(&mut self, item: T) -> bool {
        if self.is_excluded(&item) {
            trace!("add refused, item is excluded");
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the first equal item from the list, if the item is not excluded.
    /// Returns `true`, if an item was removed.
    pub fn remove(&mut self, item: &T) -> bool {
        if self.is_excluded(item) {
            trace!("remove refused, item is excluded");
            return false;
        }

        match self.index_of(item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove the item on the given position.
    ///
    /// If the item on this position is excluded, nothing happens and `None` is returned.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<T>> {
        let index = check_index(index, self.items.len())?;
        if self.is_excluded(&self.items[index]) {
            trace!("remove on position: {index} refused, item is excluded");
            return Ok(None);
        }
        Ok(Some(self.items.remove(index)))
    }

    /// Replace the item on the given position and returns the replaced item.
    ///
    /// ## Hint
    ///
    /// The new item is NOT checked against the exclusions.
    /// An excluded item is set and is invisible afterwards.
    pub fn set(&mut self, index: usize, item: T) -> Result<T> {
        let index = check_index(index, self.items.len())?;
        Ok(std::mem::replace(&mut self.items[index], item))
    }

    /// Insert the item on the given position, if the item is not excluded.
    /// All items after this position are shifted to the right.
    ///
    /// The position must be an existing position: `index < len`.
    pub fn insert(&mut self, index: usize, item: T) -> Result {
        let index = check_index(index, self.items.len())?;
        if self.is_excluded(&item) {
            trace!("insert on position: {index} refused, item is excluded");
        } else {
            self.items.insert(index, item);
        }
        Ok(())
    }

    /// Insert all not excluded items before the last item of the list.
    ///
    /// ## Hint
    ///
    /// The position for inserting is `len - 1`, therefore fails this operation on an empty list
    /// with [`Error::IndexOutOfRange`].
    ///
    /// ## Example
    ///
    /// ```
    /// use filter_list::{Error, FilterList};
    ///
    /// let mut l = FilterList::new(["A", "B"], ["X"]);
    /// assert_eq!(Ok(true), l.add_all(["C", "X"]));
    /// assert_eq!(&["A", "C", "B"], l.as_slice());
    ///
    /// let mut l = FilterList::new(Vec::new(), ["X"]);
    /// assert_eq!(
    ///     Err(Error::IndexOutOfRange { index: -1, len: 0 }),
    ///     l.add_all(["C"])
    /// );
    /// ```
    pub fn add_all<I>(&mut self, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
    {
        match self.items.len().checked_sub(1) {
            Some(index) => self.add_all_at(index, items),
            None => Err(Error::IndexOutOfRange { index: -1, len: 0 }),
        }
    }

    /// Insert all not excluded items, starting on the given position.
    /// Returns `true`, if one or more items are inserted.
    pub fn add_all_at<I>(&mut self, index: usize, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
    {
        let mut index = check_index(index, self.items.len())?;
        let mut inserted = false;

        for item in items {
            if self.is_excluded(&item) {
                trace!("skip excluded item on position: {index}");
                continue;
            }
            self.items.insert(index, item);
            index += 1;
            inserted = true;
        }

        Ok(inserted)
    }

    /// Remove all items, which are contained in the given items and are NOT excluded.
    /// Returns `true`, if one or more items are removed.
    pub fn remove_all(&mut self, items: &[T]) -> bool {
        let len = self.items.len();
        self.items
            .retain(|i| !items.contains(i) || self.exclusions.contains(i));
        len != self.items.len()
    }

    /// Iterate over all visible (not excluded) items.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.items, &self.exclusions)
    }

    /// A cursor, which stands before the first visible item.
    #[inline]
    pub fn cursor(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// A cursor, which stands before the first visible item, starting by the given position.
    ///
    /// The position `len` is allowed and creates a cursor at the end of the list.
    pub fn cursor_at(&mut self, index: usize) -> Result<CursorMut<'_, T>> {
        if index > self.items.len() {
            return Err(Error::out_of_range(index, self.items.len()));
        }
        Ok(CursorMut::new(self, index))
    }
}

impl<T> FilterList<T> {
    /// The number of all items, including the excluded items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all items, including the excluded items.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The read only excluded items.
    #[inline]
    pub fn exclusions(&self) -> &Exclusions<T> {
        &self.exclusions
    }

    /// All items, including the excluded items.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// A view of the items in the range: `[from, to)`, without filtering the exclusions.
    pub fn sub_list(&self, from: usize, to: usize) -> Result<&[T]> {
        let (from, to) = self.check_range(from, to)?;
        Ok(&self.items[from..to])
    }

    /// A mutable view of the items in the range: `[from, to)`, without filtering the exclusions.
    pub fn sub_list_mut(&mut self, from: usize, to: usize) -> Result<&mut [T]> {
        let (from, to) = self.check_range(from, to)?;
        Ok(&mut self.items[from..to])
    }

    fn check_range(&self, from: usize, to: usize) -> Result<(usize, usize)> {
        if to > self.items.len() {
            return Err(Error::out_of_range(to, self.items.len()));
        }
        if from > to {
            return Err(Error::InvalidArgument("from is greater than to"));
        }
        Ok((from, to))
    }
}

impl<T> Index<usize> for FilterList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> PartialEq for FilterList<T>
where
    T: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items && self.exclusions == other.exclusions
    }
}

impl<T> Eq for FilterList<T> where T: Eq + Hash {}

impl<T> Hash for FilterList<T>
where
    T: Eq + Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        // visible items first, then the raw items
        self.iter().for_each(|i| i.hash(state));
        self.items.hash(state);
        self.exclusions.hash(state);
    }
}

impl<'a, T> IntoIterator for &'a FilterList<T>
where
    T: Eq + Hash,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for FilterList<T>
where
    T: Eq + Hash,
{
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.items, self.exclusions)
    }
}

/// Builder for a [`FilterList`], both `items` and `exclusions` must be set.
#[derive(Debug)]
pub struct FilterListBuilder<T> {
    items: Option<Vec<T>>,
    exclusions: Option<Exclusions<T>>,
}

impl<T> Default for FilterListBuilder<T> {
    fn default() -> Self {
        Self {
            items: None,
            exclusions: None,
        }
    }
}

impl<T> FilterListBuilder<T>
where
    T: Eq + Hash,
{
    pub fn items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items = Some(items.into_iter().collect());
        self
    }

    pub fn exclusions<X>(mut self, exclusions: X) -> Self
    where
        X: IntoIterator<Item = T>,
    {
        self.exclusions = Some(exclusions.into_iter().collect());
        self
    }

    /// Create the [`FilterList`] or [`Error::InvalidArgument`], if one argument is missing.
    ///
    /// ## Example
    ///
    /// ```
    /// use filter_list::{Error, FilterList};
    ///
    /// let l = FilterList::builder().items([1, 2, 3]).exclusions([2]).build().unwrap();
    /// assert_eq!(vec![&1, &3], l.iter().collect::<Vec<_>>());
    ///
    /// assert_eq!(
    ///     Err(Error::InvalidArgument("exclusions are missing")),
    ///     FilterList::builder().items([1, 2, 3]).build()
    /// );
    /// ```
    pub fn build(self) -> Result<FilterList<T>> {
        let items = self
            .items
            .ok_or(Error::InvalidArgument("items are missing"))?;
        let exclusions = self
            .exclusions
            .ok_or(Error::InvalidArgument("exclusions are missing"))?;

        Ok(FilterList { items, exclusions })
    }
}
