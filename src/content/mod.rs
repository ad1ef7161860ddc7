//! Content processing

mod markdown;

pub use markdown::MarkdownRenderer;
