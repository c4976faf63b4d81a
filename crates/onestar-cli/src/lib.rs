#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(dead_code, unused, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::redundant_pub_crate)]

//! Command-line front end for pruning one-star media.
//!
//! Layout:
//! - `cli.rs`: argument parsing, settings resolution, and the run entrypoint
//! - `client.rs`: CLI errors and the shared HTTP client
//! - `pipeline.rs`: fetch, classify, and act for one run
//! - `output.rs`: summary renderers
//! - `main.rs`: thin entrypoint delegating to `run()`

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod output;
pub(crate) mod pipeline;

pub use cli::run;
