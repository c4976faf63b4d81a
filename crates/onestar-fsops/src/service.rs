//! Per-item disposition: keep, flag, or remove from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use onestar_config::RunConfig;
use onestar_library::{ItemOutcome, MediaItem, RunCounters};
use serde::Serialize;
use tracing::{error, info};

use crate::error::{RemoveError, RemoveResult};

/// Removal primitives used by [`PruneService`].
pub trait PathRemover {
    /// Remove a single file or symlink.
    ///
    /// # Errors
    ///
    /// Returns the IO error reported by the filesystem.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Remove a directory and everything below it.
    ///
    /// # Errors
    ///
    /// Returns the IO error reported by the filesystem.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// [`PathRemover`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsRemover;

impl PathRemover for FsRemover {
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }
}

/// Switches that decide what happens to a one-star item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrunePolicy {
    /// Remove targets; when `false` items are only flagged.
    pub delete_enabled: bool,
    /// Target the containing directory instead of the media file.
    pub delete_directories: bool,
}

impl PrunePolicy {
    /// Policy derived from a resolved run configuration.
    #[must_use]
    pub const fn from_config(config: &RunConfig) -> Self {
        Self {
            delete_enabled: config.delete_enabled,
            delete_directories: config.delete_directories,
        }
    }
}

/// What happened to one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemReport {
    /// Item title.
    pub title: String,
    /// Path that was (or would have been) removed.
    pub path: PathBuf,
    /// Terminal outcome.
    pub outcome: ItemOutcome,
    /// Failure description for [`ItemOutcome::DeleteError`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcomes for every item plus the final counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PruneReport {
    /// One entry per item, in processing order.
    pub items: Vec<ItemReport>,
    /// Counters carried in from classification and completed here.
    pub counters: RunCounters,
}

/// Applies a [`PrunePolicy`] to classified items, one at a time.
#[derive(Debug, Clone)]
pub struct PruneService<R = FsRemover> {
    policy: PrunePolicy,
    remover: R,
}

impl PruneService<FsRemover> {
    /// Service that removes targets through `std::fs`.
    #[must_use]
    pub const fn new(policy: PrunePolicy) -> Self {
        Self {
            policy,
            remover: FsRemover,
        }
    }
}

enum Removal {
    Removed,
    Missing,
}

impl<R: PathRemover> PruneService<R> {
    /// Service with a custom removal backend.
    #[must_use]
    pub const fn with_remover(policy: PrunePolicy, remover: R) -> Self {
        Self { policy, remover }
    }

    /// Dispose of every item in order, completing `counters`.
    ///
    /// A failed removal is recorded against its item and processing moves on.
    #[must_use]
    pub fn apply(&self, items: &[MediaItem], mut counters: RunCounters) -> PruneReport {
        let mut reports = Vec::with_capacity(items.len());
        for item in items {
            let report = self.dispose(item);
            counters.record(report.outcome);
            reports.push(report);
        }
        PruneReport {
            items: reports,
            counters,
        }
    }

    /// Dispose of a single item.
    #[must_use]
    pub fn dispose(&self, item: &MediaItem) -> ItemReport {
        let path = item.target(self.policy.delete_directories);
        let title = item.title.as_str();

        let (outcome, error) = if item.keep {
            info!(
                outcome = ItemOutcome::Kept.as_str(),
                title,
                path = %path.display(),
                "keeping allow-listed show"
            );
            (ItemOutcome::Kept, None)
        } else if !self.policy.delete_enabled {
            info!(
                outcome = ItemOutcome::Flagged.as_str(),
                title,
                path = %path.display(),
                "flagged; deletion disabled"
            );
            (ItemOutcome::Flagged, None)
        } else {
            info!(title, path = %path.display(), "deleting");
            match self.remove_target(path) {
                Ok(Removal::Removed) => {
                    info!(
                        outcome = ItemOutcome::Deleted.as_str(),
                        title,
                        path = %path.display(),
                        "deleted"
                    );
                    (ItemOutcome::Deleted, None)
                }
                Ok(Removal::Missing) => {
                    info!(
                        outcome = ItemOutcome::NotFound.as_str(),
                        title,
                        path = %path.display(),
                        "target not found"
                    );
                    (ItemOutcome::NotFound, None)
                }
                Err(err) => {
                    let detail = err.detail();
                    error!(
                        outcome = ItemOutcome::DeleteError.as_str(),
                        title,
                        path = %path.display(),
                        error = %detail,
                        "failed to delete target"
                    );
                    (ItemOutcome::DeleteError, Some(detail))
                }
            }
        };

        ItemReport {
            title: item.title.clone(),
            path: path.to_path_buf(),
            outcome,
            error,
        }
    }

    fn remove_target(&self, path: &Path) -> RemoveResult<Removal> {
        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Ok(Removal::Missing);
            }
            Err(source) => return Err(RemoveError::io("inspect", path, source)),
        };

        if metadata.is_dir() {
            self.remover
                .remove_dir_all(path)
                .map_err(|source| RemoveError::io("remove_dir_all", path, source))?;
        } else {
            self.remover
                .remove_file(path)
                .map_err(|source| RemoveError::io("remove_file", path, source))?;
        }
        Ok(Removal::Removed)
    }
}
