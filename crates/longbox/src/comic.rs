//! Comic book domain types.
//!
//! These mirror the records the library server publishes: a comic book with
//! its bibliographic fields, archive format, and lifecycle state. The model
//! layer itself only cares about the stable identity and the sortable
//! projections; everything else rides along for display.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{LibraryItem, SortKey, SortValue};

/// Stable identity of a comic book within the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComicBookId(pub i64);

impl fmt::Display for ComicBookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The archive format a comic book is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArchiveType {
    /// ZIP archive.
    Cbz,
    /// RAR archive.
    Cbr,
    /// 7-Zip archive.
    Cb7,
}

impl ArchiveType {
    /// The uppercase label used for display and sorting.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cbz => "CBZ",
            Self::Cbr => "CBR",
            Self::Cb7 => "CB7",
        }
    }
}

impl fmt::Display for ArchiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle state of a comic book, as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComicState {
    /// Newly imported, not yet processed.
    Added,
    /// Processed and unchanged since.
    Stable,
    /// Modified locally; changes not yet written back.
    Changed,
    /// Marked for deletion.
    Deleted,
}

/// A comic book record.
///
/// Fields map one-to-one onto the server's JSON representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComicBook {
    pub id: ComicBookId,
    pub publisher: String,
    pub series: String,
    pub volume: String,
    pub issue_number: String,
    pub cover_date: Option<NaiveDate>,
    pub added_date: DateTime<Utc>,
    pub page_count: u32,
    pub archive_type: ArchiveType,
    pub comic_state: ComicState,
    pub read: bool,
}

impl ComicBook {
    /// Whether this comic is marked for deletion.
    pub fn is_deleted(&self) -> bool {
        self.comic_state == ComicState::Deleted
    }

    /// Whether this comic has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}

impl LibraryItem for ComicBook {
    type Id = ComicBookId;

    fn id(&self) -> ComicBookId {
        self.id
    }

    fn sort_value(&self, key: SortKey) -> SortValue {
        match key {
            SortKey::Publisher => SortValue::Text(self.publisher.clone()),
            SortKey::Series => SortValue::Text(self.series.clone()),
            SortKey::Volume => SortValue::Text(self.volume.clone()),
            SortKey::IssueNumber => SortValue::Text(self.issue_number.clone()),
            SortKey::CoverDate => self
                .cover_date
                .map(|date| {
                    SortValue::Timestamp(date.and_hms_opt(0, 0, 0).map_or(0, |dt| {
                        dt.and_utc().timestamp()
                    }))
                })
                .unwrap_or(SortValue::None),
            SortKey::AddedDate => SortValue::Timestamp(self.added_date.timestamp()),
            SortKey::PageCount => SortValue::Number(self.page_count as i64),
            SortKey::ArchiveType => SortValue::Text(self.archive_type.label().to_string()),
            // Selection state lives on the view's entries, not the item.
            SortKey::Selection => SortValue::None,
        }
    }
}

/// Test fixture shared by the model and dispatch test modules.
#[cfg(test)]
pub(crate) fn test_comic(id: i64, series: &str, issue: &str) -> ComicBook {
    use chrono::TimeZone;

    ComicBook {
        id: ComicBookId(id),
        publisher: "Darkhorse".into(),
        series: series.into(),
        volume: "2020".into(),
        issue_number: issue.into(),
        cover_date: NaiveDate::from_ymd_opt(2020, 6, 1),
        added_date: Utc.with_ymd_and_hms(2021, 1, 15, 12, 0, 0).unwrap(),
        page_count: 24,
        archive_type: ArchiveType::Cbz,
        comic_state: ComicState::Stable,
        read: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comic(id: i64, series: &str, issue: &str) -> ComicBook {
        test_comic(id, series, issue)
    }

    #[test]
    fn test_sort_values() {
        let book = comic(1, "Hellboy", "7");
        assert_eq!(
            book.sort_value(SortKey::Series),
            SortValue::Text("Hellboy".into())
        );
        assert_eq!(book.sort_value(SortKey::PageCount), SortValue::Number(24));
        assert_eq!(
            book.sort_value(SortKey::ArchiveType),
            SortValue::Text("CBZ".into())
        );
    }

    #[test]
    fn test_missing_cover_date_is_neutral() {
        let mut book = comic(1, "Hellboy", "7");
        book.cover_date = None;
        assert_eq!(book.sort_value(SortKey::CoverDate), SortValue::None);
    }

    #[test]
    fn test_selection_key_is_neutral_on_items() {
        let book = comic(1, "Hellboy", "7");
        assert_eq!(book.sort_value(SortKey::Selection), SortValue::None);
    }

    #[test]
    fn test_state_predicates() {
        let mut book = comic(1, "Hellboy", "7");
        assert!(book.is_unread());
        assert!(!book.is_deleted());

        book.read = true;
        book.comic_state = ComicState::Deleted;
        assert!(!book.is_unread());
        assert!(book.is_deleted());
    }

    #[test]
    fn test_serde_round_trip_uses_camel_case() {
        let book = comic(5, "Hellboy", "7");
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["issueNumber"], "7");
        assert_eq!(json["archiveType"], "CBZ");
        assert_eq!(json["comicState"], "STABLE");

        let back: ComicBook = serde_json::from_value(json).unwrap();
        assert_eq!(back, book);
    }
}
