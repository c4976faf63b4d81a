//! Domain models shared by the classifier, the actuator, and the report.
//!
//! # Design
//! - Items are plain values created once per run and consumed in order.
//! - Counters are an explicit accumulator passed from stage to stage.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A one-star video resolved to the paths the actuator may remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    /// Title as reported by the server.
    pub title: String,
    /// Absolute media file path as reported by the server.
    pub file_path: PathBuf,
    /// `file_path` without its trailing file name component.
    pub dir_path: PathBuf,
    /// Title is on the allow-list and must not be touched.
    pub keep: bool,
}

impl MediaItem {
    /// Path acted on: the directory when `whole_directory` is set, else the file.
    #[must_use]
    pub fn target(&self, whole_directory: bool) -> &Path {
        if whole_directory {
            &self.dir_path
        } else {
            &self.file_path
        }
    }
}

/// Terminal disposition of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemOutcome {
    /// Title is allow-listed; nothing was done.
    Kept,
    /// Target was removed from disk.
    Deleted,
    /// Deletion is disabled; the item was only reported.
    Flagged,
    /// Target did not exist at deletion time.
    NotFound,
    /// Removing the target failed; later items were still processed.
    DeleteError,
}

impl ItemOutcome {
    /// Stable tag attached to log records and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kept => "kept",
            Self::Deleted => "deleted",
            Self::Flagged => "flagged",
            Self::NotFound => "not_found",
            Self::DeleteError => "delete_error",
        }
    }
}

/// Totals accumulated over one run.
///
/// Every scanned video lands in exactly one bucket, so
/// `scanned == kept + deleted + flagged + not_found + failed + skipped`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunCounters {
    /// Videos present in the listing.
    pub scanned: u64,
    /// Allow-listed one-star videos.
    pub kept: u64,
    /// One-star videos whose target was removed.
    pub deleted: u64,
    /// One-star videos reported without deletion.
    pub flagged: u64,
    /// One-star videos whose target was already gone.
    pub not_found: u64,
    /// One-star videos whose removal failed.
    pub failed: u64,
    /// Videos without a one-star rating.
    pub skipped: u64,
}

impl RunCounters {
    /// Count one item's outcome.
    pub const fn record(&mut self, outcome: ItemOutcome) {
        match outcome {
            ItemOutcome::Kept => self.kept += 1,
            ItemOutcome::Deleted => self.deleted += 1,
            ItemOutcome::Flagged => self.flagged += 1,
            ItemOutcome::NotFound => self.not_found += 1,
            ItemOutcome::DeleteError => self.failed += 1,
        }
    }

    /// Number of videos that reached the actuator.
    #[must_use]
    pub const fn classified(&self) -> u64 {
        self.kept + self.deleted + self.flagged + self.not_found + self.failed
    }

    /// `true` when every scanned video is accounted for exactly once.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.scanned == self.classified() + self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(keep: bool) -> MediaItem {
        MediaItem {
            title: "Old Show".to_string(),
            file_path: PathBuf::from("/tv/Old Show/Pilot.mkv"),
            dir_path: PathBuf::from("/tv/Old Show"),
            keep,
        }
    }

    #[test]
    fn target_switches_on_directory_mode() {
        let item = item(false);
        assert_eq!(item.target(false), Path::new("/tv/Old Show/Pilot.mkv"));
        assert_eq!(item.target(true), Path::new("/tv/Old Show"));
    }

    #[test]
    fn record_routes_each_outcome_to_its_counter() {
        let mut counters = RunCounters {
            scanned: 6,
            skipped: 1,
            ..RunCounters::default()
        };
        for outcome in [
            ItemOutcome::Kept,
            ItemOutcome::Deleted,
            ItemOutcome::Flagged,
            ItemOutcome::NotFound,
            ItemOutcome::DeleteError,
        ] {
            counters.record(outcome);
        }
        assert_eq!(counters.kept, 1);
        assert_eq!(counters.deleted, 1);
        assert_eq!(counters.flagged, 1);
        assert_eq!(counters.not_found, 1);
        assert_eq!(counters.failed, 1);
        assert_eq!(counters.classified(), 5);
        assert!(counters.is_balanced());
    }

    #[test]
    fn outcome_tags_are_snake_case() {
        assert_eq!(ItemOutcome::NotFound.as_str(), "not_found");
        assert_eq!(ItemOutcome::DeleteError.as_str(), "delete_error");
    }
}
