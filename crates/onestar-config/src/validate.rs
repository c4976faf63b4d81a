//! Field checks applied while resolving a [`RunConfig`](crate::RunConfig).

use crate::error::{ConfigError, ConfigResult};

pub(crate) fn validate_host(host: &str) -> ConfigResult<()> {
    if host.trim().is_empty() {
        return Err(ConfigError::invalid("host", host, "must not be empty"));
    }
    if host.chars().any(|ch| ch.is_whitespace() || ch == '/') {
        return Err(ConfigError::invalid(
            "host",
            host,
            "must not contain whitespace or '/'",
        ));
    }
    Ok(())
}

pub(crate) fn validate_port(port: u16) -> ConfigResult<()> {
    if port == 0 {
        return Err(ConfigError::invalid(
            "port",
            &port.to_string(),
            "must be between 1 and 65535",
        ));
    }
    Ok(())
}

pub(crate) fn validate_section(section: &str) -> ConfigResult<()> {
    if section.trim().is_empty() {
        return Err(ConfigError::invalid("section", section, "must not be empty"));
    }
    if section
        .chars()
        .any(|ch| ch.is_whitespace() || matches!(ch, '/' | '?' | '#'))
    {
        return Err(ConfigError::invalid(
            "section",
            section,
            "must be a single path segment",
        ));
    }
    Ok(())
}

/// Map the numeric levels used by older settings files onto filter names.
pub(crate) const fn numeric_level_name(level: u32) -> &'static str {
    match level {
        0..=5 => "trace",
        6..=10 => "debug",
        11..=29 => "info",
        30..=39 => "warn",
        _ => "error",
    }
}
