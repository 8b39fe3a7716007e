//! Raw retrieval of source bodies over HTTP(S) or from local files.

use async_trait::async_trait;
use pandemic_common::{PandemicError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Retrieves the body behind a URI.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Returns the full body as text.
    async fn fetch(&self, uri: &str) -> Result<String>;
}

/// URI schemes a source may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// `http://` or `https://`
    Http,
    /// `file://`
    File,
}

impl Scheme {
    /// Classifies `uri` by its scheme, which is case-insensitive.
    pub fn of(uri: &str) -> Result<Self> {
        Self::of_url(&parse_uri(uri)?)
    }

    fn of_url(url: &Url) -> Result<Self> {
        match url.scheme() {
            "http" | "https" => Ok(Self::Http),
            "file" => Ok(Self::File),
            other => Err(PandemicError::config(format!(
                "Unsupported source scheme '{other}': only http, https and file URIs are supported"
            ))),
        }
    }
}

fn parse_uri(uri: &str) -> Result<Url> {
    Url::parse(uri.trim())
        .map_err(|e| PandemicError::config_with_source(format!("Invalid source URI '{uri}'"), e))
}

/// HTTP fetcher sharing one connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pandemic-charts/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PandemicError::fetch_with_source("Failed to create HTTP client", e))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, uri: &str) -> Result<String> {
        let response = self.client.get(uri).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PandemicError::fetch_with_status(
                format!("{uri} answered {status}"),
                status.as_u16(),
            ));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Fetched source body");
        Ok(body)
    }
}

/// Reads `file://` URIs from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

#[async_trait]
impl Fetch for FileFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, uri: &str) -> Result<String> {
        let url = parse_uri(uri)?;
        if Scheme::of_url(&url)? != Scheme::File {
            return Err(PandemicError::config(format!("{uri} is not a file URI")));
        }
        let path = url
            .to_file_path()
            .map_err(|()| PandemicError::fetch(format!("{uri} does not name a local path")))?;

        let body = tokio::fs::read_to_string(&path).await.map_err(|e| {
            PandemicError::fetch_with_source(format!("Failed to read {}", path.display()), e)
        })?;
        debug!(bytes = body.len(), "Read source file");
        Ok(body)
    }
}
