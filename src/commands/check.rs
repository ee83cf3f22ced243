//! Validate a site without writing anything

use anyhow::Result;

use crate::content::{ContentDocument, ReferenceError};
use crate::Site;

/// Resolve every cross-reference the pages will follow
pub fn references(document: &ContentDocument) -> Vec<ReferenceError> {
    let mut errors = Vec::new();

    for post in &document.blog.posts {
        if let Err(e) = document.blog.resolve(post.id) {
            errors.push(e);
        }
    }

    for (anchor, _, _) in document.faq.anchors() {
        if let Err(e) = document.faq.resolve_anchor(&anchor) {
            errors.push(e);
        }
    }

    errors
}

pub fn run(site: &Site) -> Result<()> {
    let document = site.load_content()?;
    let errors = references(&document);

    for error in &errors {
        tracing::warn!("{}", error);
    }
    if !errors.is_empty() {
        anyhow::bail!("{} broken reference(s)", errors.len());
    }

    println!(
        "Content for {} is valid: {} posts, {} FAQ entries, {} testimonials",
        document.agent.name,
        document.blog.posts.len(),
        document.faq.anchors().count(),
        document.testimonials.items.len()
    );
    Ok(())
}
