#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(dead_code, unused, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

//! Media server library access: fetching the recently viewed listing,
//! parsing it into video nodes, and classifying one-star items.
//!
//! Layout:
//! - `client.rs`: HTTP fetcher behind the [`LibrarySource`] seam
//! - `document.rs`: XML listing parser
//! - `classify.rs`: rating filter and keep/delete disposition
//! - `path.rs`: directory derivation from media file paths
//! - `model.rs`: media items, outcomes, and run counters

pub mod classify;
pub mod client;
pub mod document;
pub mod error;
pub mod model;
pub mod path;

pub use classify::{Classification, ONE_STAR_RATING, classify, classify_listing};
pub use client::{LibraryClient, LibrarySource};
pub use document::{VideoNode, parse_listing};
pub use error::{LibraryError, LibraryResult};
pub use model::{ItemOutcome, MediaItem, RunCounters};
pub use path::DirectoryDeriver;
