use crate::error::Result;
use crate::fetch::retry::{RetryPolicy, Sleeper, ThreadSleeper};
use crate::fetch::transport::Transport;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{error, info, warn};
use url::Url;

/// Downloads one URL to one file with bounded, fixed-delay retry.
pub struct Fetcher {
    transport: Box<dyn Transport>,
    sleeper: Box<dyn Sleeper>,
    policy: RetryPolicy,
}

impl Fetcher {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            sleeper: Box::new(ThreadSleeper),
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Box<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Fetch `url` into `outfile`.
    ///
    /// Returns `Ok(false)` once every attempt has failed with a transient
    /// error. Anything else (bad request, local I/O) is returned as `Err`
    /// straight away. The body is written to a temporary file next to
    /// `outfile` and renamed into place only after a complete response, so a
    /// failed fetch never leaves a file at `outfile`.
    pub fn download(&self, url: &Url, outfile: &Path) -> Result<bool> {
        let max_attempts = self.policy.max_attempts;

        for attempt in 1..=max_attempts {
            match self.transport.get(url) {
                Ok(body) => {
                    write_atomically(outfile, &body)?;
                    info!("Downloaded {} ({} bytes)", outfile.display(), body.len());
                    return Ok(true);
                }
                Err(e) if e.is_transient() => {
                    warn!(
                        "Failed attempt {}/{} to download {}: {}",
                        attempt,
                        max_attempts,
                        outfile.display(),
                        e
                    );
                }
                Err(e) => return Err(e),
            }

            if attempt < max_attempts {
                self.sleeper.sleep(self.policy.delay);
            }
        }

        error!("Failed to download image {}", outfile.display());
        Ok(false)
    }
}

fn write_atomically(outfile: &Path, body: &[u8]) -> Result<()> {
    let dir = match outfile.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(body)?;
    temp.flush()?;
    temp.persist(outfile).map_err(|e| e.error)?;

    Ok(())
}
