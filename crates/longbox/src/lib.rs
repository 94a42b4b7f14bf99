//! # Longbox
//!
//! Longbox is the model layer for a digital comic-book library client: the
//! state and behavior behind a selectable, sortable, filterable, paginated
//! library table, without any rendering or transport.
//!
//! ## Architecture
//!
//! - [`comic`] - the comic-book item types and the [`LibraryItem`] seam
//! - [`model`] - entries, selection, sorting, and the view projection
//! - [`dispatch`] - confirmation-gated bulk commands emitting [`LibraryIntent`]s
//! - [`process`] - server-reported batch progress mirroring
//!
//! State flows one way: the data source pushes snapshots into a
//! [`LibraryView`], the view projects them for display, user actions go out
//! through a [`CommandDispatcher`], and server progress comes back through a
//! [`ProcessMonitor`]. All outbound notification is signal-based
//! ([`longbox_core::Signal`]); nothing here blocks or polls.
//!
//! ## Example
//!
//! ```
//! use longbox::comic::ComicBook;
//! use longbox::model::{LibraryView, SortDirection, SortKey};
//!
//! let mut view: LibraryView<ComicBook> = LibraryView::new(25);
//! view.sort_by(SortKey::Series, SortDirection::Ascending);
//! view.set_filter(|comic: &ComicBook| comic.is_unread());
//!
//! view.selection_changed().connect(|selected| {
//!     println!("{} comics selected", selected.len());
//! });
//! ```
//!
//! [`LibraryItem`]: model::LibraryItem
//! [`LibraryView`]: model::LibraryView
//! [`LibraryIntent`]: dispatch::LibraryIntent
//! [`CommandDispatcher`]: dispatch::CommandDispatcher
//! [`ProcessMonitor`]: process::ProcessMonitor

pub mod comic;
pub mod dispatch;
pub mod model;
pub mod process;

pub use comic::{ArchiveType, ComicBook, ComicBookId, ComicState};
pub use dispatch::{
    CommandDispatcher, ConfirmOutcome, ConfirmationPrompt, Confirmer, DispatchError, LibraryIntent,
};
pub use model::{Entry, LibraryItem, LibraryView, SelectionModel, SortDirection, SortKey, SortValue};
pub use process::{ProcessMonitor, ProcessStatusMessage};

pub use longbox_core::{ConnectionGuard, ConnectionId, ProgressUpdate, Signal};
