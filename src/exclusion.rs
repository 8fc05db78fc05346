//! The `Exclusions` are a read only set of items, which can never be visible in a [`crate::FilterList`].
//!
//! The set is created once and can not be changed afterwards.
//!
//!```text
//! let _items = vec!["Paul", "Jon", "Inge", "Jon"];
//! let _exclusions = ["Jon", "Jon"];
//!
//! Exclusions: { "Jon" }
//! Visible:    "Paul", "Inge"
//! ```
use std::{
    collections::hash_map::DefaultHasher,
    fmt::Debug,
    hash::{Hash, Hasher},
};

#[cfg(feature = "hashbrown")]
use hashbrown::{hash_set, HashSet};

#[cfg(not(feature = "hashbrown"))]
use std::collections::{hash_set, HashSet};

/// A immutable, de-duplicated snapshot of items, which are excluded.
#[repr(transparent)]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "T: serde::Serialize + Eq + Hash",
            deserialize = "T: serde::Deserialize<'de> + Eq + Hash"
        )
    )
)]
pub struct Exclusions<T>(HashSet<T>);

impl<T> Exclusions<T>
where
    T: Eq + Hash,
{
    /// Checks whether the item is excluded.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.0.contains(item)
    }
}

impl<T> Exclusions<T> {
    /// The number of different excluded items.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all excluded items, in an arbitrary order.
    #[inline]
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T> FromIterator<T> for Exclusions<T>
where
    T: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Exclusions<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> PartialEq for Exclusions<T>
where
    T: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Exclusions<T> where T: Eq + Hash {}

/// The hash is independent of the iteration order of the set,
/// so that equal sets produce equal hashes.
impl<T> Hash for Exclusions<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        let sum = self.0.iter().fold(0u64, |sum, item| {
            let mut hasher = DefaultHasher::new();
            item.hash(&mut hasher);
            sum.wrapping_add(hasher.finish())
        });

        state.write_usize(self.0.len());
        state.write_u64(sum);
    }
}
