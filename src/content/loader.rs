//! Content loader - builds the content document from an agent identity

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::agent::AgentIdentity;
use super::document::{ContentDocument, CopySections};
use super::error::{ConfigurationError, ContentError, ReferenceError};
use super::template::Placeholders;

lazy_static! {
    static ref FAQ_PREFIX_RE: Regex = Regex::new(r"^[A-Za-z0-9-]+$").unwrap();
    static ref FAQ_ID_RE: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

/// Copy deck compiled into the binary
pub const DEFAULT_COPY: &str = include_str!("default_copy.yml");

/// Build the content document with the built-in copy deck
pub fn load(agent: AgentIdentity) -> Result<ContentDocument, ContentError> {
    load_with_copy(agent, DEFAULT_COPY)
}

/// Build the content document from an agent and a YAML copy deck
///
/// Either every field resolves and validates, or no document is returned.
pub fn load_with_copy(
    agent: AgentIdentity,
    copy_yaml: &str,
) -> Result<ContentDocument, ContentError> {
    agent.validate()?;

    let raw: Value = serde_yaml::from_str(copy_yaml)
        .map_err(|e| ConfigurationError::InvalidCopy(e.to_string()))?;
    let resolved = Placeholders::from_agent(&agent).interpolate_tree(raw)?;
    let mut copy: CopySections = serde_json::from_value(resolved)
        .map_err(|e| ConfigurationError::InvalidCopy(e.to_string()))?;

    copy.hero.years_counter_value = agent.years();
    copy.loan_process.years_counter_value = agent.years();

    let document = ContentDocument::assemble(agent, copy);
    validate(&document)?;

    tracing::debug!(
        "Loaded content for {}: {} services, {} testimonials, {} posts, {} FAQ categories",
        document.agent.name,
        document.services.items.len(),
        document.testimonials.items.len(),
        document.blog.posts.len(),
        document.faq.categories.len()
    );

    Ok(document)
}

/// Structural checks that need the whole document
fn validate(doc: &ContentDocument) -> Result<(), ContentError> {
    check_assets(doc)?;
    check_faq_identifiers(doc)?;

    if doc.hero.slides.is_empty() {
        return Err(ConfigurationError::EmptyField("hero.slides".to_string()).into());
    }

    ensure_unique("service", doc.services.items.iter().map(|s| s.id))?;
    ensure_unique("testimonial", doc.testimonials.items.iter().map(|t| t.id))?;
    ensure_unique("blog post", doc.blog.posts.iter().map(|p| p.id))?;
    ensure_unique("post detail", doc.blog.post_details.iter().map(|d| d.id))?;
    ensure_unique(
        "FAQ category prefix",
        doc.faq.categories.iter().map(|c| c.id_prefix.as_str()),
    )?;
    ensure_unique(
        "FAQ question",
        doc.faq
            .categories
            .iter()
            .flat_map(|c| c.questions.iter().map(|q| q.id.as_str())),
    )?;

    for detail in &doc.blog.post_details {
        if doc.blog.summary(detail.id).is_none() {
            return Err(ReferenceError::MissingPostSummary(detail.id).into());
        }
    }

    Ok(())
}

fn ensure_unique<T, I>(section: &'static str, ids: I) -> Result<(), ContentError>
where
    T: Eq + Hash + Display,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if seen.contains(&id) {
            return Err(ContentError::duplicate(section, id));
        }
        seen.insert(id);
    }
    Ok(())
}

/// FAQ ids become URL fragments; prefixes must not contain the anchor separator
fn check_faq_identifiers(doc: &ContentDocument) -> Result<(), ConfigurationError> {
    let invalid = |field: String, id: &str, rule| ConfigurationError::InvalidIdentifier {
        field,
        id: id.to_string(),
        rule,
    };

    for (i, category) in doc.faq.categories.iter().enumerate() {
        if !FAQ_PREFIX_RE.is_match(&category.id_prefix) {
            return Err(invalid(
                format!("faq.categories[{}].idPrefix", i),
                &category.id_prefix,
                "only letters, digits and `-` are allowed",
            ));
        }
        for (j, entry) in category.questions.iter().enumerate() {
            if !FAQ_ID_RE.is_match(&entry.id) {
                return Err(invalid(
                    format!("faq.categories[{}].questions[{}].id", i, j),
                    &entry.id,
                    "only letters, digits, `-` and `_` are allowed",
                ));
            }
        }
    }

    Ok(())
}

/// Asset paths are opaque but must be present, and hero images need captions
fn check_assets(doc: &ContentDocument) -> Result<(), ConfigurationError> {
    let mut paths: Vec<(String, &str)> = Vec::new();

    for (name, images) in [
        ("mainImages", &doc.hero.main_images),
        ("paginationImages", &doc.hero.pagination_images),
    ] {
        for (i, image) in images.iter().enumerate() {
            paths.push((format!("hero.{}[{}].src", name, i), &image.src));
            paths.push((format!("hero.{}[{}].alt", name, i), &image.alt));
        }
    }
    paths.push(("about.image1Src".to_string(), &doc.about.image1_src));
    paths.push(("about.image2Src".to_string(), &doc.about.image2_src));
    for (i, item) in doc.services.items.iter().enumerate() {
        paths.push((format!("services.items[{}].imageSrc", i), &item.image_src));
    }
    for (i, item) in doc.testimonials.items.iter().enumerate() {
        paths.push((format!("testimonials.items[{}].avatar", i), &item.avatar));
    }
    for (i, post) in doc.blog.posts.iter().enumerate() {
        paths.push((format!("blog.posts[{}].imageSrc", i), &post.image_src));
        paths.push((format!("blog.posts[{}].alt", i), &post.alt));
    }
    for (i, item) in doc.common.navigation.iter().enumerate() {
        paths.push((format!("common.navigation[{}].path", i), &item.path));
    }

    match paths.into_iter().find(|(_, value)| value.trim().is_empty()) {
        Some((path, _)) => Err(ConfigurationError::EmptyField(path)),
        None => Ok(()),
    }
}
