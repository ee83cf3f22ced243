//! Helper functions for view components
//!
//! Formatting only: URL building, tag builders, escaping and markdown.

mod html;
mod markdown;
mod url;

pub use html::*;
pub use markdown::*;
pub use url::*;
