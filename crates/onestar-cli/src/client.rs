//! CLI error type and the shared HTTP client.

use std::fmt::{self, Display, Formatter};

use anyhow::anyhow;
use onestar_config::ConfigError;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

const CLIENT_USER_AGENT: &str = concat!("onestar/", env!("CARGO_PKG_VERSION"));

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        Self::validation(format!("{:#}", anyhow::Error::from(error)))
    }
}

/// Build the HTTP client used for the listing request.
///
/// No timeout is configured; the request runs to completion or failure.
pub(crate) fn build_http_client() -> CliResult<Client> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

    Client::builder()
        .default_headers(default_headers)
        .build()
        .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn exit_codes_separate_validation_from_failure() {
        assert_eq!(CliError::validation("bad").exit_code(), 2);
        assert_eq!(CliError::failure(anyhow!("down")).exit_code(), 3);
    }

    #[test]
    fn failure_message_includes_cause_chain() {
        let err = CliError::failure(anyhow!("connection refused").context("library request failed"));
        assert_eq!(
            err.display_message(),
            "library request failed: connection refused"
        );
    }

    #[test]
    fn config_errors_become_validation_with_cause() {
        let err = CliError::from(ConfigError::Io {
            path: PathBuf::from("/etc/onestar.yml"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        });
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.display_message(),
            "failed to read settings file /etc/onestar.yml: missing"
        );
    }

    #[test]
    fn http_client_builds() {
        assert!(build_http_client().is_ok());
    }
}
