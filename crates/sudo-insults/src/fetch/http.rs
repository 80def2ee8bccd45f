//! Blocking HTTP source.

use std::io::Read;
use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder};

use crate::error::{InsultsError, Result};

use super::source::Source;

/// Where sudo publishes its insult headers.
pub const DEFAULT_BASE_URL: &str = "http://www.sudo.ws/repos/sudo/raw-file/tip/plugins/sudoers/";

/// Size of each read from the response body.
pub const CHUNK_SIZE: usize = 1024;

/// Fetches files over plain HTTP GET.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Create a new HTTP source from [`HttpSource::client_builder`].
    pub fn new() -> Result<Self> {
        let client = Self::client_builder()
            .build()
            .map_err(|e| InsultsError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// Builder for the default client.
    ///
    /// No overall request timeout is set; a slow download runs to completion.
    pub fn client_builder() -> ClientBuilder {
        Client::builder()
            .timeout(None::<Duration>)
            .user_agent(concat!("sudo-insults/", env!("CARGO_PKG_VERSION")))
    }

    /// Use a preconfigured client (proxies, TLS, timeouts).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Source for HttpSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|source| InsultsError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(InsultsError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut body = Vec::new();
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            let read = response
                .read(&mut chunk)
                .map_err(|source| InsultsError::Body {
                    url: url.to_string(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..read]);
        }

        log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
