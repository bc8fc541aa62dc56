//! Row addressing for sectioned list models.

use std::fmt;

/// The position of a row within a sectioned list.
///
/// A `RowAddress` pairs a section index with a row offset inside that
/// section. The view treats addresses as opaque beyond routing them to the
/// attached model and observer; validity (`row < row_count(section)`) is a
/// model-side concern, checked at query time.
///
/// # Example
///
/// ```
/// use accordion::model::RowAddress;
///
/// let address = RowAddress::new(2, 0);
/// assert_eq!(address.section(), 2);
/// assert_eq!(address.row(), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowAddress {
    /// The section this row belongs to.
    section: usize,
    /// The row offset within the section.
    row: usize,
}

impl RowAddress {
    /// Creates an address for the given section and row offset.
    #[inline]
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Returns the section index.
    #[inline]
    pub fn section(&self) -> usize {
        self.section
    }

    /// Returns the row offset within the section.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }
}

impl fmt::Debug for RowAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RowAddress({}, {})", self.section, self.row)
    }
}
