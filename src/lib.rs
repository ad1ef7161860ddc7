//! blogview: a minimal client-side blog viewer
//!
//! This crate fetches a manifest of posts, resolves the requested entry from
//! a page address's `?id=` query parameter, converts the post body from
//! Markdown to HTML, and writes exactly one of four views (list, post,
//! not found, error) into an output region.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod location;
pub mod manifest;
pub mod source;
pub mod view;

use anyhow::Result;
use std::path::Path;

use crate::content::MarkdownRenderer;
use crate::location::Location;
use crate::source::HttpSource;
use crate::view::{OutputRegion, ViewRenderer};

/// The main viewer application
pub struct Blogview {
    /// Viewer configuration
    pub config: config::ViewerConfig,
    source: HttpSource,
    renderer: ViewRenderer,
}

impl Blogview {
    /// Create a viewer from a base directory, reading `viewer.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("viewer.yml");
        let config = if config_path.exists() {
            config::ViewerConfig::load(&config_path)?
        } else {
            config::ViewerConfig::default()
        };
        Self::with_config(config)
    }

    /// Create a viewer from an already-built configuration
    pub fn with_config(config: config::ViewerConfig) -> Result<Self> {
        let source = HttpSource::new(&config)?;
        let renderer = ViewRenderer::new(MarkdownRenderer::with_options(
            &config.highlight.theme,
            config.highlight.line_numbers,
        ));
        Ok(Self {
            config,
            source,
            renderer,
        })
    }

    /// Resolve and render the view for one page address
    pub async fn view(&self, location: &Location, region: &mut OutputRegion) {
        commands::view::run(&self.source, &self.source, &self.renderer, location, region).await;
    }

    /// Print the posts the manifest describes
    pub async fn list(&self) -> Result<()> {
        commands::list::run(&self.source).await
    }
}
