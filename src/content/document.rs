//! The content document

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::agent::AgentIdentity;
use super::error::ReferenceError;
use super::sections::*;

/// Every section of the site's copy, fully resolved
///
/// Built once by [`super::load`] and shared read-only with every view. The
/// section names are the stable paths views bind to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub agent: AgentIdentity,
    pub metadata: MetadataContent,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub services: ServicesContent,
    pub about_agent: AboutAgentContent,
    pub projects: ProjectsContent,
    pub testimonials: TestimonialsContent,
    pub blog: BlogContent,
    pub faq: FaqContent,
    pub contact_page: ContactPageContent,
    pub loan_process: LoanProcessContent,
    pub not_found: NotFoundContent,
    pub common: CommonContent,
}

/// Section names in document order
pub const SECTION_NAMES: &[&str] = &[
    "agent",
    "metadata",
    "hero",
    "about",
    "services",
    "aboutAgent",
    "projects",
    "testimonials",
    "blog",
    "faq",
    "contactPage",
    "loanProcess",
    "notFound",
    "common",
];

/// Everything the copy deck supplies: the document minus the agent record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct CopySections {
    pub metadata: MetadataContent,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub services: ServicesContent,
    pub about_agent: AboutAgentContent,
    pub projects: ProjectsContent,
    pub testimonials: TestimonialsContent,
    pub blog: BlogContent,
    pub faq: FaqContent,
    pub contact_page: ContactPageContent,
    pub loan_process: LoanProcessContent,
    pub not_found: NotFoundContent,
    pub common: CommonContent,
}

impl ContentDocument {
    pub(crate) fn assemble(agent: AgentIdentity, copy: CopySections) -> Self {
        Self {
            agent,
            metadata: copy.metadata,
            hero: copy.hero,
            about: copy.about,
            services: copy.services,
            about_agent: copy.about_agent,
            projects: copy.projects,
            testimonials: copy.testimonials,
            blog: copy.blog,
            faq: copy.faq,
            contact_page: copy.contact_page,
            loan_process: copy.loan_process,
            not_found: copy.not_found,
            common: copy.common,
        }
    }

    /// The whole document as a JSON tree
    pub fn to_value(&self) -> Value {
        // Plain structs of strings and integers always serialize
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Read the value at a dotted path such as `faq.categories.0.idPrefix`
    pub fn lookup(&self, path: &str) -> Result<Value, ReferenceError> {
        let unknown = || ReferenceError::UnknownPath(path.to_string());
        let mut current = self.to_value();

        for segment in path.split('.').filter(|s| !s.is_empty()) {
            current = match current {
                Value::Object(mut map) => map.remove(segment).ok_or_else(unknown)?,
                Value::Array(mut items) => {
                    let index: usize = segment.parse().map_err(|_| unknown())?;
                    if index >= items.len() {
                        return Err(unknown());
                    }
                    items.swap_remove(index)
                }
                _ => return Err(unknown()),
            };
        }

        Ok(current)
    }

    /// Every string leaf in the document with its path, in document order
    pub fn string_fields(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        collect_strings(&self.to_value(), String::new(), &mut out);
        out
    }
}

fn collect_strings(value: &Value, path: String, out: &mut Vec<(String, String)>) {
    match value {
        Value::String(s) => out.push((path, s.clone())),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                collect_strings(item, format!("{}.{}", path, i), out);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                collect_strings(item, child, out);
            }
        }
        _ => {}
    }
}
