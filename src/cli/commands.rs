use crate::cli::args::Cli;
use crate::error::Result;
use crate::fetch::{Fetcher, HttpTransport, RetryPolicy};
use crate::processors::{BatchProcessor, BatchSummary, CommandHook, CutoutProcessor};
use crate::readers::{ConfigReader, TargetSource};
use crate::utils::progress::ProgressReporter;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

pub fn run(cli: Cli) -> Result<()> {
    info!("Reading config from {}", cli.config.display());
    let config = ConfigReader::new().read_config(&cli.config)?;
    let base_url = Url::parse(&cli.base_url)?;

    let policy = RetryPolicy::new(cli.max_attempts, Duration::from_millis(cli.retry_delay_ms));
    let fetcher = Fetcher::new(Box::new(HttpTransport::new()?)).with_policy(policy);

    let mut batch = BatchProcessor::new(CutoutProcessor::new(fetcher, base_url))
        .with_size_pix(cli.size_pix)
        .with_prefix(cli.prefix)
        .with_suffix(cli.suffix)
        .with_format(cli.format);

    if let Some(command) = cli.post_command.as_deref() {
        batch = batch.with_hook(Box::new(CommandHook::parse(command)?));
    }

    let source = TargetSource::from(cli.target_file);
    let progress = if cli.no_progress {
        ProgressReporter::silent()
    } else {
        ProgressReporter::new(0, "Fetching cutouts...", false)
    };

    let entries = batch.run(&config, source, Some(&progress))?;
    let summary = BatchSummary::from_entries(&entries);
    progress.finish_with_message(&summary.summary());

    if summary.failed > 0 {
        warn!("{}", summary.summary());
    } else {
        info!("{}", summary.summary());
    }

    Ok(())
}
