//! Library view: a filtered, sorted, paginated projection.
//!
//! `LibraryView` wraps a [`SelectionModel`] and maintains a row mapping from
//! projection rows to entry rows. The pipeline is fixed: a pure filter
//! predicate first, then a stable sort, then pagination. The mapping is
//! rebuilt whenever the upstream collection, the filter, or the sort
//! changes.

use std::sync::Arc;

use longbox_core::Signal;

use super::entry::Entry;
use super::selection::SelectionModel;
use super::sort::{SortDirection, SortKey};
use super::traits::LibraryItem;

/// Type alias for a filter predicate.
///
/// Returns `true` if the item should be included in the projection.
pub type FilterFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A selectable, sortable, filterable, paginated view over an upstream
/// collection.
///
/// The view owns its [`SelectionModel`]; feeding a new upstream snapshot
/// through [`set_items`](Self::set_items) re-keys the selection flags by
/// identity and rebuilds the projection.
///
/// # Signals
///
/// - `layout_changed`: emitted after every projection rebuild
/// - [`selection_changed`](Self::selection_changed): forwarded from the
///   inner selection model
///
/// # Example
///
/// ```
/// use longbox::model::{LibraryView, SortDirection, SortKey};
/// # use longbox::comic::ComicBook;
///
/// let mut view: LibraryView<ComicBook> = LibraryView::new(25);
/// view.sort_by(SortKey::Series, SortDirection::Ascending);
/// view.set_filter(|comic: &ComicBook| comic.is_unread());
/// assert_eq!(view.page_index(), 0);
/// ```
pub struct LibraryView<T: LibraryItem> {
    selection: SelectionModel<T>,
    filter: Option<FilterFn<T>>,
    sort: Option<(SortKey, SortDirection)>,
    page_index: usize,
    page_size: usize,
    /// Projection row -> entry row, filter and sort applied.
    mapping: Vec<usize>,
    /// Emitted after every projection rebuild.
    pub layout_changed: Signal<()>,
}

impl<T: LibraryItem + Clone> LibraryView<T> {
    /// Creates an empty view with the given page size.
    ///
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            selection: SelectionModel::new(),
            filter: None,
            sort: None,
            page_index: 0,
            page_size: page_size.max(1),
            mapping: Vec::new(),
            layout_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Upstream collection
    // =========================================================================

    /// Replaces the upstream collection.
    ///
    /// Selection flags survive by identity match; see
    /// [`SelectionModel::set_items`].
    pub fn set_items(&mut self, items: Vec<T>) {
        self.selection.set_items(items);
        self.rebuild_mapping();
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The inner selection model.
    pub fn selection(&self) -> &SelectionModel<T> {
        &self.selection
    }

    /// The selection-changed signal, forwarded from the inner model.
    pub fn selection_changed(&self) -> &Signal<Vec<T>> {
        &self.selection.selection_changed
    }

    /// Sets every entry's selection flag.
    pub fn set_all_selected(&mut self, selected: bool) {
        self.selection.set_all(selected);
        self.resort_if_selection_sorted();
    }

    /// Sets one entry's selection flag, addressed by identity.
    ///
    /// Returns `false` if no entry with that identity exists.
    pub fn set_selected(&mut self, id: T::Id, selected: bool) -> bool {
        let changed = self.selection.set_one(id, selected);
        if changed {
            self.resort_if_selection_sorted();
        }
        changed
    }

    /// The currently selected items, in upstream order.
    pub fn selected(&self) -> Vec<T> {
        self.selection.selected()
    }

    /// The derived "all selected" aggregate.
    pub fn all_selected(&self) -> bool {
        self.selection.all_selected()
    }

    // =========================================================================
    // Filter
    // =========================================================================

    /// Sets the filter predicate and rebuilds the projection.
    pub fn set_filter<F>(&mut self, filter: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self.rebuild_mapping();
    }

    /// Clears the filter, showing every upstream item.
    pub fn clear_filter(&mut self) {
        self.filter = None;
        self.rebuild_mapping();
    }

    // =========================================================================
    // Sort
    // =========================================================================

    /// Sorts the projection by a column.
    pub fn sort_by(&mut self, key: SortKey, direction: SortDirection) {
        self.sort = Some((key, direction));
        self.rebuild_mapping();
    }

    /// Clears sorting, restoring upstream order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.rebuild_mapping();
    }

    /// The current sort column and direction, if any.
    pub fn sort(&self) -> Option<(SortKey, SortDirection)> {
        self.sort
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// The current page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Sets the page index, clamped to the valid range.
    pub fn set_page_index(&mut self, index: usize) {
        self.page_index = index.min(self.max_page_index());
    }

    /// The page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sets the page size (zero is treated as one) and re-clamps the index.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page_index = self.page_index.min(self.max_page_index());
    }

    /// Number of pages in the current projection.
    pub fn page_count(&self) -> usize {
        self.mapping.len().div_ceil(self.page_size)
    }

    fn max_page_index(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    // =========================================================================
    // Projection access
    // =========================================================================

    /// Number of entries passing the filter.
    pub fn filtered_count(&self) -> usize {
        self.mapping.len()
    }

    /// All projection rows (filter and sort applied), every page.
    pub fn projected(&self) -> Vec<&Entry<T>> {
        let entries = self.selection.entries();
        self.mapping.iter().map(|&row| &entries[row]).collect()
    }

    /// The entries of the current page, in projection order.
    pub fn visible(&self) -> Vec<&Entry<T>> {
        let entries = self.selection.entries();
        let start = self.page_index * self.page_size;
        self.mapping
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&row| &entries[row])
            .collect()
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Rebuilds the projection: filter, then stable sort, then page clamp.
    fn rebuild_mapping(&mut self) {
        let entries = self.selection.entries();

        self.mapping = (0..entries.len())
            .filter(|&row| match &self.filter {
                Some(filter) => filter(&entries[row].item),
                None => true,
            })
            .collect();

        if let Some((key, direction)) = self.sort {
            // Vec::sort_by is stable: equal keys keep their pre-sort order.
            self.mapping.sort_by(|&a, &b| {
                direction.apply(entries[a].sort_value(key).cmp(&entries[b].sort_value(key)))
            });
        }

        // Page index is independent of filter and sort but must stay in
        // range for the new projection.
        self.page_index = self.page_index.min(self.max_page_index());

        tracing::trace!(
            target: "longbox::model",
            filtered = self.mapping.len(),
            page_index = self.page_index,
            "projection rebuilt"
        );
        self.layout_changed.emit(());
    }

    /// Selection flags feed the sort when the selection column is active.
    fn resort_if_selection_sorted(&mut self) {
        if matches!(self.sort, Some((SortKey::Selection, _))) {
            self.rebuild_mapping();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comic::{test_comic, ComicBook, ComicBookId, ComicState};
    use parking_lot::Mutex;

    fn series_ids(view: &LibraryView<ComicBook>) -> Vec<i64> {
        view.projected().iter().map(|e| e.item.id.0).collect()
    }

    fn library() -> Vec<ComicBook> {
        vec![
            test_comic(1, "Hellboy", "3"),
            test_comic(2, "Bacchus", "1"),
            test_comic(3, "Hellboy", "1"),
            test_comic(4, "Aliens", "2"),
        ]
    }

    #[test]
    fn test_unsorted_projection_keeps_upstream_order() {
        let mut view = LibraryView::new(25);
        view.set_items(library());
        assert_eq!(series_ids(&view), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let mut view = LibraryView::new(25);
        view.set_items(library());

        view.sort_by(SortKey::Series, SortDirection::Ascending);
        assert_eq!(series_ids(&view), vec![4, 2, 1, 3]);

        view.sort_by(SortKey::Series, SortDirection::Descending);
        assert_eq!(series_ids(&view), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut view = LibraryView::new(25);
        view.set_items(library());

        // Two Hellboy issues (ids 1 and 3) tie on series; upstream order
        // must decide.
        view.sort_by(SortKey::Series, SortDirection::Ascending);
        assert_eq!(series_ids(&view), vec![4, 2, 1, 3]);

        // Descending reverses the comparator, not the tie-break.
        view.sort_by(SortKey::Series, SortDirection::Descending);
        assert_eq!(series_ids(&view), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_filter_applies_before_sort_and_pagination() {
        let mut comics = library();
        comics[0].comic_state = ComicState::Deleted; // id 1
        comics[3].comic_state = ComicState::Deleted; // id 4

        let mut view = LibraryView::new(25);
        view.set_items(comics);
        view.set_filter(|comic: &ComicBook| comic.is_deleted());
        view.sort_by(SortKey::Series, SortDirection::Ascending);

        assert_eq!(view.filtered_count(), 2);
        assert_eq!(series_ids(&view), vec![4, 1]);

        view.clear_filter();
        assert_eq!(view.filtered_count(), 4);
    }

    #[test]
    fn test_pagination() {
        let mut view = LibraryView::new(3);
        view.set_items(library());

        assert_eq!(view.page_count(), 2);
        assert_eq!(view.visible().len(), 3);

        view.set_page_index(1);
        assert_eq!(view.visible().len(), 1);

        // Out-of-range requests clamp.
        view.set_page_index(10);
        assert_eq!(view.page_index(), 1);
    }

    #[test]
    fn test_page_index_clamps_when_projection_shrinks() {
        let mut view = LibraryView::new(2);
        view.set_items(library());
        view.set_page_index(1);

        // Filter down to a single page.
        view.set_filter(|comic: &ComicBook| comic.series == "Hellboy");
        assert_eq!(view.filtered_count(), 2);
        assert_eq!(view.page_index(), 0);
    }

    #[test]
    fn test_empty_projection() {
        let mut view: LibraryView<ComicBook> = LibraryView::new(10);
        view.set_items(Vec::new());
        assert_eq!(view.page_count(), 0);
        assert_eq!(view.page_index(), 0);
        assert!(view.visible().is_empty());
    }

    #[test]
    fn test_selection_survives_snapshot_reassignment() {
        let mut view = LibraryView::new(25);
        view.set_items(library());
        view.set_selected(ComicBookId(3), true);

        // Upstream pushes a new snapshot without id 2, plus a new id 5.
        view.set_items(vec![
            test_comic(3, "Hellboy", "1"),
            test_comic(5, "Hellboy", "9"),
            test_comic(1, "Hellboy", "3"),
        ]);

        assert!(view.selection().is_selected(ComicBookId(3)));
        assert!(!view.selection().is_selected(ComicBookId(5)));
        assert_eq!(view.selection().selected_count(), 1);
    }

    #[test]
    fn test_select_all_through_view() {
        let mut view = LibraryView::new(25);
        view.set_items(library());

        view.set_all_selected(true);
        assert!(view.all_selected());
        assert_eq!(view.selected().len(), 4);
    }

    #[test]
    fn test_sort_by_selection_column() {
        let mut view = LibraryView::new(25);
        view.set_items(library());
        view.sort_by(SortKey::Selection, SortDirection::Descending);

        view.set_selected(ComicBookId(3), true);

        // Selected entries float to the top; ties keep upstream order.
        assert_eq!(series_ids(&view), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_layout_changed_emitted_on_rebuild() {
        let mut view = LibraryView::new(25);
        let count = std::sync::Arc::new(Mutex::new(0));

        let count_clone = count.clone();
        view.layout_changed.connect(move |_| {
            *count_clone.lock() += 1;
        });

        view.set_items(library());
        view.sort_by(SortKey::Series, SortDirection::Ascending);
        view.set_filter(|comic: &ComicBook| comic.is_unread());

        assert_eq!(*count.lock(), 3);
    }
}
