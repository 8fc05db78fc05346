//! **Filter-List** is a list, which hides a fixed set of excluded items.
//!
//! The excluded items are given once, by creating the list, and can never be changed.
//! An excluded item can not be added and is invisible for the iteration and the cursor.
//!
//! ## A simple Example:
//!
//! ```text
//! let _items = vec!["Paul", "Jon", "Inge", "Paul"];
//! let _exclusions = ["Jon"];
//! ```
//!
//! ```text
//!  Pos | Item   | Visible
//! ------------------------
//!  0   | "Paul" | yes
//!  1   | "Jon"  | no
//!  2   | "Inge" | yes
//!  3   | "Paul" | yes
//! ```
//!
//! The items are NOT filtered by creating the list. Positions are always positions of
//! the unfiltered items, therefore `len` counts `"Jon"` and `get(1)` returns `"Jon"`.
//!
//! ```
//! use filter_list::FilterList;
//!
//! let mut l = FilterList::new(["Paul", "Jon", "Inge", "Paul"], ["Jon"]);
//!
//! assert_eq!(4, l.len());
//! assert_eq!(Ok(&"Jon"), l.get(1));
//! assert_eq!(vec![&"Paul", &"Inge", &"Paul"], l.iter().collect::<Vec<_>>());
//!
//! // excluded items can not be added or removed
//! assert!(!l.add("Jon"));
//! assert!(!l.remove(&"Jon"));
//!
//! // change the list with a cursor
//! let mut c = l.cursor();
//! assert_eq!(Ok(&"Paul"), c.next());
//! assert_eq!(Ok(&"Inge"), c.next());
//! assert_eq!(Ok("Inge"), c.remove());
//!
//! assert_eq!(&["Paul", "Jon", "Paul"], l.as_slice());
//! ```
//!
//! ## Features
//!
//! - `hashbrown`: use [`hashbrown::HashSet`](https://docs.rs/hashbrown) for the exclusions
//! - `serde` (default): serialize and deserialize the list with [`serde`](https://docs.rs/serde)
//!
pub mod cursor;
pub mod error;
pub mod exclusion;
pub mod iter;
pub mod list;

pub use cursor::CursorMut;
pub use error::Error;
pub use exclusion::Exclusions;
pub use iter::{IntoIter, Iter};
pub use list::{FilterList, FilterListBuilder};

/// Default Result for the list and the cursor with the Ok(T) value or en [`error::Error`].
pub type Result<T = ()> = std::result::Result<T, error::Error>;
