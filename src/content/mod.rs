//! Content module - the agent identity, the copy deck and the resolved document

pub mod agent;
mod document;
mod error;
pub mod loader;
pub mod sections;
pub mod template;

pub use agent::{AgentIdentity, SocialLink};
pub use document::{ContentDocument, SECTION_NAMES};
pub use error::{ConfigurationError, ContentError, ReferenceError};
pub use loader::{load, load_with_copy, DEFAULT_COPY};
pub use sections::*;
