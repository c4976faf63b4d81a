//! One run: fetch the listing, classify it, and act on each item.

use onestar_config::RunConfig;
use onestar_fsops::{PathRemover, PruneReport, PruneService};
use onestar_library::{LibrarySource, classify_listing};
use tracing::{debug, info};

use crate::client::{CliError, CliResult};

/// Fetch, classify, then act. Fetch and parse failures abort the run; removal
/// failures are recorded per item.
pub(crate) async fn run_pipeline<S, R>(
    config: &RunConfig,
    source: &S,
    service: &PruneService<R>,
) -> CliResult<PruneReport>
where
    S: LibrarySource + ?Sized,
    R: PathRemover,
{
    log_run_settings(config);

    let document = source.recently_viewed().await.map_err(CliError::failure)?;
    let classification =
        classify_listing(&document, &config.allow_list).map_err(CliError::failure)?;
    info!(
        scanned = classification.counters.scanned,
        one_star = classification.items.len(),
        "listing classified"
    );

    Ok(service.apply(&classification.items, classification.counters))
}

fn log_run_settings(config: &RunConfig) {
    info!("run starting");
    debug!(
        host = %config.host,
        port = config.port,
        section = %config.section,
        "settings"
    );

    if config.allow_list.is_empty() {
        debug!("no shows listed for keeping; every one-star item is a candidate");
    } else {
        let shows = config.allow_list.summary();
        debug!(count = shows.listed, "shows detected for keeping");
        debug!(shows = %shows.rendered, "shows to keep");
    }

    if config.delete_enabled {
        debug!(
            whole_directory = config.delete_directories,
            "Delete: enabled"
        );
    } else {
        debug!("Delete: disabled, flagging only");
    }
}
