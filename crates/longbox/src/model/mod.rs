//! Model layer for library collection views.
//!
//! This module provides the pattern every list page in the client is built
//! on: a selectable, sortable, filterable, paginated projection of an
//! upstream collection.
//!
//! # Core Types
//!
//! - [`LibraryItem`]: the trait upstream records implement (stable identity
//!   plus per-column sort values)
//! - [`Entry`]: an item paired with its view-local selection flag
//! - [`SelectionModel`]: flag mutations and the derived all-selected aggregate
//! - [`LibraryView`]: the filter/sort/paginate projection over a selection
//!   model
//! - [`SortKey`]/[`SortValue`]: column tokens and the comparables they
//!   extract
//!
//! # Example
//!
//! ```
//! use longbox::model::{LibraryView, SortDirection, SortKey};
//! # use longbox::comic::ComicBook;
//!
//! let mut view: LibraryView<ComicBook> = LibraryView::new(25);
//!
//! // Observe selection updates.
//! view.selection_changed().connect(|comics: &Vec<ComicBook>| {
//!     println!("{} comics selected", comics.len());
//! });
//!
//! // Feed the upstream snapshot and shape the projection.
//! view.set_items(Vec::new());
//! view.sort_by(SortKey::Series, SortDirection::Ascending);
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! upstream snapshot ──> SelectionModel ──> LibraryView ──> visible page
//!   (set_items)          (Entry flags)      (filter,
//!                                            stable sort,
//!                                            paginate)
//! ```
//!
//! The upstream collection arrives as a full snapshot; the selection model
//! re-keys the flags by identity, and the view rebuilds its row mapping.

mod entry;
mod selection;
mod sort;
mod traits;
mod view;

pub use entry::Entry;
pub use selection::SelectionModel;
pub use sort::{SortDirection, SortKey, SortValue};
pub use traits::LibraryItem;
pub use view::{FilterFn, LibraryView};
