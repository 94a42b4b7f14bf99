//! Selection model for library list views.
//!
//! This module provides [`SelectionModel`], which owns the entries of a list
//! view and manages their selection flags together with the derived
//! "all selected" aggregate.
//!
//! # Example
//!
//! ```
//! use longbox::model::SelectionModel;
//! # use longbox::comic::ComicBook;
//!
//! let mut selection: SelectionModel<ComicBook> = SelectionModel::new();
//!
//! // Listen for changes; the full selected set is published after every
//! // mutation.
//! selection.selection_changed.connect(|comics: &Vec<ComicBook>| {
//!     println!("{} selected", comics.len());
//! });
//!
//! selection.set_all(true);
//! assert!(selection.all_selected());
//! ```

use std::collections::HashMap;

use longbox_core::Signal;

use super::entry::Entry;
use super::traits::LibraryItem;

/// Manages selection state for a list of entries.
///
/// The model owns the entries in upstream order. Re-assigning the upstream
/// collection preserves the selection flag of every identity that survives
/// the re-assignment; new identities start unselected and vanished ones are
/// discarded.
///
/// The aggregate "all selected" flag is always recomputed as the AND over
/// every entry's flag; it is never stored authoritatively. On an empty
/// collection the AND is vacuously true.
///
/// # Signals
///
/// - `selection_changed`: emitted after every mutation with the currently
///   selected items in upstream order
pub struct SelectionModel<T: LibraryItem> {
    entries: Vec<Entry<T>>,
    /// Cached aggregate; recomputed after every mutation, never trusted
    /// across one.
    all_selected: bool,
    /// Emitted after every mutation. Args: selected items in upstream order.
    pub selection_changed: Signal<Vec<T>>,
}

impl<T: LibraryItem + Clone> Default for SelectionModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: LibraryItem + Clone> SelectionModel<T> {
    /// Creates an empty selection model.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            all_selected: true,
            selection_changed: Signal::new(),
        }
    }

    /// Replaces the upstream collection.
    ///
    /// Selection flags are carried over by identity match against the
    /// previous entries; items not present before start unselected.
    pub fn set_items(&mut self, items: Vec<T>) {
        tracing::trace!(
            target: "longbox::model",
            count = items.len(),
            "upstream collection assigned"
        );
        let old_flags: HashMap<T::Id, bool> = self
            .entries
            .drain(..)
            .map(|entry| (entry.item.id(), entry.selected))
            .collect();
        self.entries = items
            .into_iter()
            .map(|item| {
                let selected = old_flags.get(&item.id()).copied().unwrap_or(false);
                Entry::with_selected(item, selected)
            })
            .collect();
        self.update_all_selected();
    }

    /// Sets every entry's selection flag.
    pub fn set_all(&mut self, selected: bool) {
        tracing::trace!(target: "longbox::model", selected, "setting all selection flags");
        for entry in &mut self.entries {
            entry.selected = selected;
        }
        self.update_all_selected();
    }

    /// Sets a single entry's selection flag, addressed by identity.
    ///
    /// Returns `false` if no entry with that identity exists.
    pub fn set_one(&mut self, id: T::Id, selected: bool) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.item.id() == id) else {
            return false;
        };
        tracing::trace!(target: "longbox::model", ?id, selected, "setting one selection flag");
        entry.selected = selected;
        self.update_all_selected();
        true
    }

    /// The currently selected items, in upstream order.
    pub fn selected(&self) -> Vec<T> {
        self.entries
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.item.clone())
            .collect()
    }

    /// Whether an entry with this identity is selected.
    pub fn is_selected(&self, id: T::Id) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.selected && entry.item.id() == id)
    }

    /// The derived AND over every entry's flag; vacuously true when empty.
    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    /// Returns true if any entry is selected.
    pub fn has_selection(&self) -> bool {
        self.entries.iter().any(|entry| entry.selected)
    }

    /// Number of selected entries.
    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.selected).count()
    }

    /// The entries in upstream order.
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recomputes the aggregate and publishes the selection.
    fn update_all_selected(&mut self) {
        self.all_selected = self.entries.iter().all(|entry| entry.selected);
        self.selection_changed.emit(self.selected());
    }
}
