//! Built-in values applied when neither the command line nor the settings
//! file provides one.
//!
//! # Design
//! - Server documentation commonly lists `127.0.0.1` as the host; the tool
//!   resolves `localhost`, which is kept as the default.
//! - The rating sentinel lives with the classifier, not here, because it is
//!   not configurable.

/// Host queried when none is configured.
pub const DEFAULT_HOST: &str = "localhost";
/// Media server HTTP port.
pub const DEFAULT_PORT: u16 = 32_400;
/// Library section queried when none is configured.
pub const DEFAULT_SECTION: &str = "1";
/// Log filter used when neither `RUST_LOG` nor the settings file set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// File name searched for in the home directory and the working directory.
pub const SETTINGS_FILE_NAME: &str = ".onestar-settings.yml";
