//! Web page source.
//!
//! Fetches the page source over HTTP. The body is HTML, so units are marked
//! [`TextKind::Html`] and markup is stripped during analysis.

use std::time::Duration;

use log::{debug, info};
use reqwest::Url;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{SourceText, TextKind, TextSource};
use crate::error::{Result, WordgapError};

/// HTTP settings for [`UrlSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlSourceConfig {
    /// Upper bound on connecting plus reading the page, in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for UrlSourceConfig {
    fn default() -> Self {
        UrlSourceConfig {
            timeout_secs: 30,
            user_agent: format!("wordgap/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Fetches one web page.
#[derive(Debug, Clone)]
pub struct UrlSource {
    url: Url,
    client: Client,
}

impl UrlSource {
    pub fn new(url: &str) -> Result<Self> {
        Self::with_config(url, UrlSourceConfig::default())
    }

    pub fn with_config(url: &str, config: UrlSourceConfig) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| WordgapError::invalid_argument(format!("Invalid URL '{url}': {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| WordgapError::other(format!("Failed to build HTTP client: {e}")))?;

        Ok(UrlSource { url, client })
    }
}

impl TextSource for UrlSource {
    fn fetch(&self) -> Result<Vec<SourceText>> {
        info!("Accessing URL: {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| WordgapError::source_unavailable(format!("{}: {e}", self.url)))?;

        let text = response
            .text()
            .map_err(|e| WordgapError::source_unavailable(format!("{}: {e}", self.url)))?;
        debug!("Fetched {} bytes from {}", text.len(), self.url);

        Ok(vec![SourceText::new(self.label(), text, TextKind::Html)])
    }

    fn label(&self) -> String {
        self.url.to_string()
    }

    fn name(&self) -> &'static str {
        "url"
    }
}
