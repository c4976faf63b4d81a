//! Argument parsing, settings resolution, and the run entrypoint.

use std::path::{Path, PathBuf};

use clap::builder::BoolishValueParser;
use clap::{Parser, ValueEnum};
use onestar_config::{
    ConfigError, LoadedSettings, LogLevelSetting, RunConfig, SettingsFile, SettingsOverrides,
    default_search_paths, discover_settings, load_settings_file,
};
use onestar_fsops::{PrunePolicy, PruneService};
use onestar_library::LibraryClient;
use onestar_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
use reqwest::Client;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::client::{CliError, CliResult, build_http_client};
use crate::output::render_summary;
use crate::pipeline::run_pipeline;

struct CliDependencies {
    client: Client,
}

impl CliDependencies {
    fn new() -> CliResult<Self> {
        Ok(Self {
            client: build_http_client()?,
        })
    }
}

/// Parses CLI arguments, performs one prune run, and prints the summary.
/// Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    match execute(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn execute(cli: Cli) -> CliResult<()> {
    let loaded = load_settings(cli.config.as_deref())?;
    let level = resolve_log_level(cli.log_level.as_deref(), &loaded.settings);
    let format = resolve_log_format(cli.log_format, &loaded.settings)?;
    init_logging(&LoggingConfig {
        level: &level,
        format,
    })
    .map_err(CliError::failure)?;

    let deps = CliDependencies::new()?;
    let run_id = Uuid::new_v4();
    prune(&cli, &loaded, &deps)
        .instrument(info_span!("prune", %run_id))
        .await
}

async fn prune(cli: &Cli, loaded: &LoadedSettings, deps: &CliDependencies) -> CliResult<()> {
    log_settings_source(loaded);

    let config = RunConfig::resolve(&loaded.settings, &cli.overrides())?;
    let endpoint = config.endpoint()?;
    let source = LibraryClient::new(deps.client.clone(), endpoint);
    let service = PruneService::new(PrunePolicy::from_config(&config));

    let report = run_pipeline(&config, &source, &service).await?;
    render_summary(&report, cli.output)
}

fn load_settings(explicit: Option<&Path>) -> CliResult<LoadedSettings> {
    let loaded = match explicit {
        Some(path) => load_settings_file(path)?,
        None => discover_settings(&default_search_paths())?,
    };
    Ok(loaded)
}

fn log_settings_source(loaded: &LoadedSettings) {
    for skipped in &loaded.skipped {
        warn!(
            path = %skipped.path.display(),
            error = %skipped.error,
            "settings location unavailable"
        );
    }
    match &loaded.source {
        Some(path) => info!(path = %path.display(), "settings loaded"),
        None => warn!("no settings file found; using defaults"),
    }
}

fn resolve_log_level(flag: Option<&str>, settings: &SettingsFile) -> String {
    flag.map(|value| {
        value
            .trim()
            .parse::<u32>()
            .map_or_else(|_| LogLevelSetting::Name(value.to_string()), LogLevelSetting::Numeric)
    })
    .as_ref()
    .or(settings.logging_level.as_ref())
    .map_or_else(|| DEFAULT_LOG_LEVEL.to_string(), LogLevelSetting::to_filter)
}

fn resolve_log_format(flag: Option<LogFormatArg>, settings: &SettingsFile) -> CliResult<LogFormat> {
    if let Some(flag) = flag {
        return Ok(flag.into());
    }
    match settings.log_format.as_deref() {
        None => Ok(LogFormat::Pretty),
        Some(value) => LogFormat::parse(value).ok_or_else(|| {
            CliError::from(ConfigError::InvalidField {
                field: "log_format",
                value: Some(value.to_string()),
                reason: "expected 'pretty' or 'json'",
            })
        }),
    }
}

#[derive(Parser)]
#[command(
    name = "onestar",
    version,
    about = "Delete media rated one star on a Plex library section"
)]
struct Cli {
    #[arg(long, env = "ONESTAR_HOST", help = "Media server host")]
    host: Option<String>,
    #[arg(long, env = "ONESTAR_PORT", help = "Media server port")]
    port: Option<u16>,
    #[arg(long, env = "ONESTAR_SECTION", help = "Library section identifier")]
    section: Option<String>,
    #[arg(
        long,
        env = "ONESTAR_DELETE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        help = "Delete one-star media instead of only flagging it"
    )]
    delete: Option<bool>,
    #[arg(
        long = "delete-dir",
        env = "ONESTAR_DELETE_DIR",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        help = "Delete the containing directory instead of the media file"
    )]
    delete_dir: Option<bool>,
    #[arg(
        long = "keep",
        value_name = "TITLE",
        help = "Show title to keep; replaces the settings file list"
    )]
    keep: Vec<String>,
    #[arg(long, env = "ONESTAR_CONFIG", help = "Settings file to load")]
    config: Option<PathBuf>,
    #[arg(long, env = "ONESTAR_LOG_LEVEL", help = "Log level name or number")]
    log_level: Option<String>,
    #[arg(long, env = "ONESTAR_LOG_FORMAT", value_enum)]
    log_format: Option<LogFormatArg>,
    #[arg(
        long = "output",
        alias = "format",
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select the summary output format"
    )]
    output: OutputFormat,
}

impl Cli {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            host: self.host.clone(),
            port: self.port,
            section: self.section.clone(),
            delete: self.delete,
            shows: (!self.keep.is_empty()).then(|| self.keep.clone()),
            delete_dir: self.delete_dir,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Json => Self::Json,
        }
    }
}
