use async_trait::async_trait;
use futures_util::StreamExt;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

use sitecraft_core::{
    application::{ApplicationError, ports::AssetFetcher},
    error::{SitecraftError, SitecraftResult},
};

const USER_AGENT: &str = concat!("sitecraft/", env!("CARGO_PKG_VERSION"));

/// `AssetFetcher` backed by a `reqwest` client.
///
/// Redirects are followed (release downloads bounce through a CDN). Any
/// final status outside 2xx is a `NetworkFailure`.
#[derive(Debug, Clone)]
pub struct HttpAssetFetcher {
    client: reqwest::Client,
}

impl HttpAssetFetcher {
    pub fn new() -> SitecraftResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SitecraftError::Internal {
                message: format!("HTTP client could not be built: {e}"),
            })?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (proxies, timeouts).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn get(&self, url: &str) -> SitecraftResult<reqwest::Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| network(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApplicationError::NetworkFailure {
                url: url.to_string(),
                reason: format!("HTTP {status}"),
            }
            .into());
        }
        Ok(response)
    }
}

fn network(url: &str, err: &reqwest::Error) -> SitecraftError {
    ApplicationError::NetworkFailure {
        url: url.to_string(),
        reason: err.to_string(),
    }
    .into()
}

#[async_trait]
impl AssetFetcher for HttpAssetFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> SitecraftResult<Vec<u8>> {
        let body = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|e| network(url, &e))?;
        debug!(bytes = body.len(), "Body received");
        Ok(body.to_vec())
    }

    #[instrument(skip(self, destination), fields(destination = %destination.display()))]
    async fn download(&self, url: &str, destination: &Path) -> SitecraftResult<u64> {
        // Status is checked before the file exists, so a 404 leaves nothing behind.
        let response = self.get(url).await?;

        let mut file = tokio::fs::File::create(destination)
            .await
            .map_err(|e| ApplicationError::filesystem(destination, "create file", &e))?;

        let mut written = 0u64;
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| network(url, &e))?;
            file.write_all(&chunk)
                .await
                .map_err(|e| ApplicationError::filesystem(destination, "write file", &e))?;
            written += chunk.len() as u64;
        }

        file.flush()
            .await
            .map_err(|e| ApplicationError::filesystem(destination, "flush file", &e))?;
        file.sync_all()
            .await
            .map_err(|e| ApplicationError::filesystem(destination, "sync file", &e))?;

        debug!(bytes = written, "Download complete");
        Ok(written)
    }
}
