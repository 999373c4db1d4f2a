use crate::error::{CutoutError, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// One GET of a cutout, returning the body bytes.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<Vec<u8>>;
}

/// Blocking HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(300))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<Vec<u8>> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(CutoutError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }
}
