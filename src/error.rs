//! Possible `errors` by using a [`crate::FilterList`] or one of its cursors.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required argument is missing or not usable.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The index is not in the range of the list.
    ///
    /// The index is signed, because the append form of `add_all` computes `len - 1`.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfRange { index: isize, len: usize },
    /// A cursor has no more items in the requested direction.
    #[error("no such element")]
    NoSuchElement,
    /// A cursor operation is not allowed in the current state.
    #[error("illegal state: {0}")]
    IllegalState(&'static str),
}

impl Error {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len,
        }
    }
}

/// Checks, whether the `index` is in the range `[0, len)`.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<usize, Error> {
    if index < len {
        Ok(index)
    } else {
        Err(Error::out_of_range(index, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(2, 3)]
    fn index_in_range(#[case] index: usize, #[case] len: usize) {
        assert_eq!(Ok(index), check_index(index, len));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 3)]
    #[case(99, 3)]
    fn index_out_of_range(#[case] index: usize, #[case] len: usize) {
        assert_eq!(
            Err(Error::IndexOutOfRange {
                index: index as isize,
                len
            }),
            check_index(index, len)
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            "index -1 out of bounds for length 0",
            Error::IndexOutOfRange { index: -1, len: 0 }.to_string()
        );
        assert_eq!(
            "invalid argument: items are missing",
            Error::InvalidArgument("items are missing").to_string()
        );
        assert_eq!("no such element", Error::NoSuchElement.to_string());
    }

    #[test]
    fn huge_index_saturates() {
        assert_eq!(
            Error::IndexOutOfRange {
                index: isize::MAX,
                len: 0
            },
            Error::out_of_range(usize::MAX, 0)
        );
    }
}
