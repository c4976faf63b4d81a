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

//! Run configuration for the one-star pruner.
//!
//! Layout: `defaults.rs` (built-in values), `model.rs` (settings document,
//! overrides, and the resolved [`RunConfig`]), `loader.rs` (settings file
//! discovery), `validate.rs` (field checks), `error.rs` (typed failures).

pub mod defaults;
pub mod error;
pub mod loader;
pub mod model;
mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    LoadedSettings, SkippedLocation, default_search_paths, discover_settings, load_settings_file,
    settings_search_paths,
};
pub use model::{
    AllowList, AllowListSummary, LogLevelSetting, RunConfig, SectionSetting, SettingsFile,
    SettingsOverrides,
};
