//! Viewer configuration (viewer.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Site title, shown in the CLI listing header
    pub title: String,

    /// Base address the manifest and post bodies are fetched from
    pub url: String,

    /// Manifest location, relative to `url`
    pub manifest_path: String,

    /// Directory post bodies live in, relative to `url`
    pub content_dir: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,

    /// Code highlighting options
    #[serde(default)]
    pub highlight: HighlightConfig,
}

/// Code block highlighting options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Syntect theme name
    pub theme: String,

    /// Render a line-number gutter next to code blocks
    pub line_numbers: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            url: "http://localhost:4000/".to_string(),
            manifest_path: "posts/posts.json".to_string(),
            content_dir: "posts".to_string(),
            timeout_secs: 20,
            highlight: HighlightConfig::default(),
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_numbers: false,
        }
    }
}

impl ViewerConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
