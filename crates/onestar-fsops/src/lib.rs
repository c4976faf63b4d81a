//! Filesystem actuator for classified one-star items.
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

pub mod error;
pub mod service;

pub use error::{RemoveError, RemoveResult};
pub use service::{FsRemover, ItemReport, PathRemover, PrunePolicy, PruneReport, PruneService};
