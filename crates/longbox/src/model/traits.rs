//! Core trait for items shown in library views.

use std::fmt;
use std::hash::Hash;

use super::sort::{SortKey, SortValue};

/// The trait upstream records implement to drive a [`super::LibraryView`].
///
/// The view layer treats items as opaque apart from two things: a stable
/// identity (used to preserve selection flags across snapshot re-assignments)
/// and a comparable value per sort column.
///
/// # Example
///
/// ```
/// use longbox::model::{LibraryItem, SortKey, SortValue};
///
/// #[derive(Clone)]
/// struct Note {
///     id: u32,
///     title: String,
/// }
///
/// impl LibraryItem for Note {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.id
///     }
///
///     fn sort_value(&self, key: SortKey) -> SortValue {
///         match key {
///             SortKey::Series => SortValue::Text(self.title.clone()),
///             _ => SortValue::None,
///         }
///     }
/// }
/// ```
pub trait LibraryItem: Send + Sync {
    /// Stable identity; must not change across snapshot re-assignments.
    type Id: Copy + Eq + Hash + fmt::Debug + Send + Sync;

    /// Returns the item's identity.
    fn id(&self) -> Self::Id;

    /// Returns the comparable value for a sort column.
    ///
    /// Columns the item does not carry (or that belong to the view, like
    /// [`SortKey::Selection`]) yield [`SortValue::None`]; this must never
    /// panic.
    fn sort_value(&self, key: SortKey) -> SortValue;
}
