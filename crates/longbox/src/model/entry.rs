//! Entries pair an upstream item with its view-local selection flag.

use super::sort::{SortKey, SortValue};
use super::traits::LibraryItem;

/// An upstream item plus its view-local selection flag.
///
/// Entries are rebuilt whenever the upstream collection is re-assigned; the
/// flag survives the rebuild when the item's identity does.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    /// The upstream item.
    pub item: T,
    /// Whether this entry is currently selected.
    pub selected: bool,
}

impl<T> Entry<T> {
    /// Creates an unselected entry.
    pub fn new(item: T) -> Self {
        Self {
            item,
            selected: false,
        }
    }

    /// Creates an entry with an explicit selection flag.
    pub fn with_selected(item: T, selected: bool) -> Self {
        Self { item, selected }
    }
}

impl<T: LibraryItem> Entry<T> {
    /// Resolves a sort column against this entry.
    ///
    /// The selection column is answered here; every other column is
    /// delegated to the item.
    pub fn sort_value(&self, key: SortKey) -> SortValue {
        match key {
            SortKey::Selection => SortValue::Flag(self.selected),
            other => self.item.sort_value(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comic::test_comic;

    #[test]
    fn test_new_entry_is_unselected() {
        let entry = Entry::new(test_comic(1, "Hellboy", "7"));
        assert!(!entry.selected);
    }

    #[test]
    fn test_selection_sort_value_comes_from_entry() {
        let mut entry = Entry::new(test_comic(1, "Hellboy", "7"));
        assert_eq!(entry.sort_value(SortKey::Selection), SortValue::Flag(false));

        entry.selected = true;
        assert_eq!(entry.sort_value(SortKey::Selection), SortValue::Flag(true));
    }

    #[test]
    fn test_item_columns_delegate() {
        let entry = Entry::new(test_comic(1, "Hellboy", "7"));
        assert_eq!(
            entry.sort_value(SortKey::Series),
            SortValue::Text("Hellboy".into())
        );
    }
}
