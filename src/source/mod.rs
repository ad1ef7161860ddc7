//! External data sources
//!
//! The manifest and the post bodies are external collaborators reached over
//! HTTP. The traits keep the resolution pipeline testable without a live
//! server.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::config::ViewerConfig;
use crate::manifest::PostSummary;

/// Errors from the fetch layer
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid resource address: {0}")]
    Address(#[from] url::ParseError),
}

/// Supplies the post manifest
#[async_trait]
pub trait ManifestSource: Send + Sync {
    async fn fetch_manifest(&self) -> Result<Vec<PostSummary>, SourceError>;
}

/// Supplies raw post bodies by content reference
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_content(&self, reference: &str) -> Result<String, SourceError>;
}

/// HTTP-backed source for both the manifest and post content
pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
    manifest_path: String,
    content_dir: String,
}

impl HttpSource {
    pub fn new(config: &ViewerConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        // A base without a trailing slash would drop its last path segment
        // on join
        let mut base = Url::parse(&config.url)?;
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        Ok(Self {
            client,
            base,
            manifest_path: config.manifest_path.clone(),
            content_dir: config.content_dir.clone(),
        })
    }

    fn manifest_url(&self) -> Result<Url, SourceError> {
        Ok(self.base.join(&self.manifest_path)?)
    }

    fn content_url(&self, reference: &str) -> Result<Url, SourceError> {
        let path = format!("{}/{}", self.content_dir.trim_end_matches('/'), reference);
        Ok(self.base.join(&path)?)
    }
}

#[async_trait]
impl ManifestSource for HttpSource {
    async fn fetch_manifest(&self) -> Result<Vec<PostSummary>, SourceError> {
        let url = self.manifest_url()?;
        tracing::debug!("Fetching manifest from {url}");
        let posts = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(posts)
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch_content(&self, reference: &str) -> Result<String, SourceError> {
        let url = self.content_url(reference)?;
        tracing::debug!("Fetching post body from {url}");
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_for(base: &str) -> HttpSource {
        let config = ViewerConfig {
            url: base.to_string(),
            ..ViewerConfig::default()
        };
        HttpSource::new(&config).unwrap()
    }

    #[test]
    fn test_manifest_url() {
        let source = source_for("https://blog.example.com/");
        assert_eq!(
            source.manifest_url().unwrap().as_str(),
            "https://blog.example.com/posts/posts.json"
        );
    }

    #[test]
    fn test_content_url() {
        let source = source_for("https://blog.example.com/");
        assert_eq!(
            source.content_url("hello.md").unwrap().as_str(),
            "https://blog.example.com/posts/hello.md"
        );
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let source = source_for("https://example.com/blog");
        assert_eq!(
            source.manifest_url().unwrap().as_str(),
            "https://example.com/blog/posts/posts.json"
        );
    }
}
