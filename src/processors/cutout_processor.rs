use crate::error::Result;
use crate::fetch::Fetcher;
use crate::models::CutoutRequest;
use crate::processors::hooks::PostProcess;
use std::path::Path;
use tracing::debug;
use url::Url;

/// What happened to a single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutoutOutcome {
    Downloaded,
    /// The output file already existed; nothing was fetched.
    Skipped,
    /// Every attempt failed with a transient error.
    Failed,
}

/// Fetches the cutout for one position unless it is already on disk.
pub struct CutoutProcessor {
    fetcher: Fetcher,
    base_url: Url,
}

impl CutoutProcessor {
    pub fn new(fetcher: Fetcher, base_url: Url) -> Self {
        Self { fetcher, base_url }
    }

    pub fn grab_cutout<H>(
        &self,
        request: &CutoutRequest,
        outfile: &Path,
        hook: Option<&mut H>,
    ) -> Result<CutoutOutcome>
    where
        H: PostProcess + ?Sized,
    {
        if outfile.exists() {
            debug!("Skipping {}, already present", outfile.display());
            return Ok(CutoutOutcome::Skipped);
        }

        let url = request.url(&self.base_url)?;
        debug!("Requesting {}", url);

        if !self.fetcher.download(&url, outfile)? {
            return Ok(CutoutOutcome::Failed);
        }

        if let Some(hook) = hook {
            hook.process(outfile)?;
        }

        Ok(CutoutOutcome::Downloaded)
    }
}
