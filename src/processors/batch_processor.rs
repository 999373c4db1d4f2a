use crate::error::Result;
use crate::models::{CutoutRequest, FetchConfig, Target};
use crate::processors::cutout_processor::{CutoutOutcome, CutoutProcessor};
use crate::processors::hooks::PostProcess;
use crate::readers::TargetSource;
use crate::utils::constants::{DEFAULT_FORMAT, DEFAULT_SIZE_PIX};
use crate::utils::filename::make_filename;
use crate::utils::progress::ProgressReporter;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Result for one row of the target table.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub target: Target,
    pub outfile: PathBuf,
    pub outcome: CutoutOutcome,
}

/// Tally of a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        entries
            .iter()
            .fold(Self::default(), |mut summary, entry| {
                match entry.outcome {
                    CutoutOutcome::Downloaded => summary.downloaded += 1,
                    CutoutOutcome::Skipped => summary.skipped += 1,
                    CutoutOutcome::Failed => summary.failed += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.failed
    }

    pub fn summary(&self) -> String {
        format!(
            "{} targets: {} downloaded, {} skipped, {} failed",
            self.total(),
            self.downloaded,
            self.skipped,
            self.failed
        )
    }
}

/// Walks a target table in order and fetches one cutout per row.
pub struct BatchProcessor {
    processor: CutoutProcessor,
    size_pix: u32,
    prefix: String,
    suffix: Option<String>,
    format: String,
    hook: Option<Box<dyn PostProcess>>,
}

impl BatchProcessor {
    pub fn new(processor: CutoutProcessor) -> Self {
        Self {
            processor,
            size_pix: DEFAULT_SIZE_PIX,
            prefix: String::new(),
            suffix: None,
            format: DEFAULT_FORMAT.to_string(),
            hook: None,
        }
    }

    pub fn with_size_pix(mut self, size_pix: u32) -> Self {
        self.size_pix = size_pix;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Filename label; the survey is used when unset or empty.
    pub fn with_suffix(mut self, suffix: Option<String>) -> Self {
        self.suffix = suffix.filter(|s| !s.is_empty());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_hook(mut self, hook: Box<dyn PostProcess>) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Fetch every target in `source`.
    ///
    /// Per-target transport failures are logged and recorded as
    /// [`CutoutOutcome::Failed`]; the batch moves on. Table, filename,
    /// filesystem and hook errors abort the run.
    pub fn run(
        &mut self,
        config: &FetchConfig,
        source: TargetSource,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<BatchEntry>> {
        let table = source.load()?;
        let targets = table.targets(&config.columns)?;
        let suffix = self.suffix.clone().unwrap_or_else(|| config.survey.clone());

        info!(
            "Fetching {} cutouts from survey '{}' ({} arcmin, {} px, band '{}') into {}",
            targets.len(),
            config.survey,
            config.size_arcmin,
            self.size_pix,
            config.band,
            config.outdir.display()
        );

        fs::create_dir_all(&config.outdir)?;

        if let Some(p) = progress {
            p.set_length(targets.len() as u64);
        }

        let mut entries = Vec::with_capacity(targets.len());
        for target in targets {
            let filename = make_filename(&target.name, &self.prefix, &suffix, &self.format)?;
            let outfile = config.outdir.join(filename);

            if let Some(p) = progress {
                p.set_message(&format!("Fetching {}", target.name));
            }

            let request = CutoutRequest::new(
                target.ra,
                target.dec,
                config.survey.as_str(),
                config.size_arcmin,
                self.size_pix,
                self.format.as_str(),
            );
            let hook = self.hook.as_deref_mut();
            let outcome = self.processor.grab_cutout(&request, &outfile, hook)?;

            if outcome == CutoutOutcome::Failed {
                warn!("Giving up on {} ({})", target.name, outfile.display());
            }

            if let Some(p) = progress {
                p.increment(1);
            }

            entries.push(BatchEntry {
                target,
                outfile,
                outcome,
            });
        }

        Ok(entries)
    }
}
