//! Shared helpers for building display markup

mod html;
mod url;

pub use html::*;
pub use url::*;
