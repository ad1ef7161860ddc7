//! Viewer configuration

mod viewer;

pub use viewer::{HighlightConfig, ViewerConfig};
