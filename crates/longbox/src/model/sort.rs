//! Sort columns and the comparable values they extract.
//!
//! A [`SortKey`] names a logical column; items resolve a key to a
//! [`SortValue`], a small comparable that the view's stable sort operates on.
//! Missing or inapplicable keys degrade to [`SortValue::None`] instead of
//! failing, so an unknown column leaves the projection in original order.

use std::cmp::Ordering;

/// A logical sort column for library list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// View-local selection flag.
    Selection,
    /// Publisher name.
    Publisher,
    /// Series title.
    Series,
    /// Volume label.
    Volume,
    /// Issue number (compared as text; issue numbers are not numeric).
    IssueNumber,
    /// Cover date.
    CoverDate,
    /// Date the comic was added to the library.
    AddedDate,
    /// Number of pages.
    PageCount,
    /// Archive format label.
    ArchiveType,
}

/// A comparable value extracted from an item for one sort column.
///
/// `SortValue` has a total order: `None` sorts before everything else, and
/// mismatched variants fall back to a fixed variant order rather than
/// failing. Within a variant the inner value decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortValue {
    /// No value for this column; sorts first and ties with itself.
    None,
    /// Boolean flag (e.g. the selection column).
    Flag(bool),
    /// Integral quantity (e.g. page count).
    Number(i64),
    /// Epoch seconds (e.g. cover or added date).
    Timestamp(i64),
    /// Case-sensitive text.
    Text(String),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Flag(_) => 1,
            Self::Number(_) => 2,
            Self::Timestamp(_) => 3,
            Self::Text(_) => 4,
        }
    }
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::None, Self::None) => Ordering::Equal,
            (Self::Flag(a), Self::Flag(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Direction applied on top of the natural [`SortValue`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest value first (default).
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// Applies the direction to a natural ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// The opposite direction (for click-to-toggle column headers).
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}
