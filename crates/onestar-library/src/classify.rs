//! One-star filter and keep/delete disposition.
//!
//! # Design
//! - The server stores ratings on a 0-10 scale where each star is two
//!   points, so a one-star rating is the value `2`. The sentinel is fixed.
//! - Every video is scanned; only one-star videos become [`MediaItem`]s.
//! - A one-star video without a title or file cannot be acted on safely and
//!   aborts the run.

use std::path::PathBuf;

use onestar_config::AllowList;
use tracing::{debug, warn};

use crate::document::{VideoNode, parse_listing};
use crate::error::{LibraryError, LibraryResult};
use crate::model::{MediaItem, RunCounters};
use crate::path::DirectoryDeriver;

/// `userRating` value of a one-star video.
pub const ONE_STAR_RATING: f64 = 2.0;

/// Classifier output: one-star items in listing order plus the counters
/// accumulated so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// One-star items, in listing order.
    pub items: Vec<MediaItem>,
    /// `scanned` and `skipped` are filled; the actuator fills the rest.
    pub counters: RunCounters,
}

/// Parse a raw listing and classify it.
///
/// # Errors
///
/// Propagates parse failures from [`parse_listing`] and classification
/// failures from [`classify`].
pub fn classify_listing(document: &str, allow_list: &AllowList) -> LibraryResult<Classification> {
    let videos = parse_listing(document)?;
    classify(&videos, allow_list)
}

/// Keep one-star videos and resolve their paths and disposition.
///
/// # Errors
///
/// Returns [`LibraryError::MissingAttribute`] when a one-star video has no
/// title or no media file.
pub fn classify(videos: &[VideoNode], allow_list: &AllowList) -> LibraryResult<Classification> {
    let deriver = DirectoryDeriver::new()?;
    let mut counters = RunCounters::default();
    let mut items = Vec::new();

    for video in videos {
        counters.scanned += 1;
        let position = counters.scanned;

        if !is_one_star(video, position) {
            counters.skipped += 1;
            continue;
        }

        let title = video
            .title
            .clone()
            .ok_or(LibraryError::MissingAttribute {
                field: "title",
                position,
                title: None,
            })?;
        let file = video
            .file
            .clone()
            .ok_or_else(|| LibraryError::MissingAttribute {
                field: "file",
                position,
                title: Some(title.clone()),
            })?;
        let dir = deriver.derive(&file);
        let keep = allow_list.contains(&title);

        debug!(
            position,
            rating_key = video.rating_key.as_deref().unwrap_or_default(),
            title = %title,
            file = %file,
            dir = %dir,
            keep,
            "one-star video"
        );

        items.push(MediaItem {
            title,
            file_path: PathBuf::from(file),
            dir_path: PathBuf::from(dir),
            keep,
        });
    }

    Ok(Classification { items, counters })
}

fn is_one_star(video: &VideoNode, position: u64) -> bool {
    let Some(raw) = video.user_rating.as_deref() else {
        return false;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) => (value - ONE_STAR_RATING).abs() < f64::EPSILON,
        Err(_) => {
            warn!(position, rating = raw, "ignoring video with non-numeric rating");
            false
        }
    }
}
