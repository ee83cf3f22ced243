//! Typed content sections
//!
//! Each section is decoded from the resolved copy deck. Keys are camelCase so
//! that a section can be addressed by the same path views bind to, e.g.
//! `blog.posts.0.title`. Unknown keys are rejected to catch copy typos early.

use serde::{Deserialize, Serialize};

use super::error::ReferenceError;

/// SEO metadata templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MetadataContent {
    /// Appended to every page title, e.g. "| James Hall - Toronto Realtor"
    pub base_title_suffix: String,
    pub base_description: String,
    /// Title of the home page, before the suffix
    pub home_title: String,
}

impl MetadataContent {
    /// Full `<title>` text for a page
    pub fn page_title(&self, title: &str) -> String {
        format!("{} {}", title, self.base_title_suffix)
    }
}

/// An image path with its caption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeroSlide {
    pub headline_html: String,
    pub description: String,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeroContent {
    pub slides: Vec<HeroSlide>,
    pub main_images: Vec<ImageRef>,
    pub pagination_images: Vec<ImageRef>,
    pub clients_counter_label: String,
    pub years_counter_label: String,
    /// Set from the agent's experience, never from copy
    #[serde(skip_deserializing)]
    pub years_counter_value: u32,
    pub search_placeholder: String,
    pub search_button_text: String,
    pub logo_alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AboutContent {
    pub section_title: String,
    pub main_paragraph: String,
    pub call_label: String,
    pub help_label: String,
    pub more_button_text: String,
    pub expertise_title: String,
    pub expertise_intro: String,
    /// Rendered as a checklist in this order
    pub expertise_items: Vec<String>,
    pub image1_src: String,
    pub image2_src: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceItem {
    pub id: u32,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub image_src: String,
    /// Animation delay token, e.g. "0.2s"
    pub delay: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServicesContent {
    pub section_title: String,
    pub intro_paragraph: String,
    pub button_text: String,
    pub items: Vec<ServiceItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AboutAgentContent {
    pub section_title: String,
    pub description: String,
    pub agent_description: String,
    pub button_text: String,
}

/// Client success stories grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectsContent {
    pub section_title: String,
    pub intro_paragraph: String,
    pub story_titles: Vec<String>,
    pub empty_box_text: String,
    pub button_text: String,
    pub link_target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Testimonial {
    pub id: u32,
    pub description: String,
    pub avatar: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TestimonialsContent {
    pub section_title: String,
    pub intro_paragraph: String,
    pub items: Vec<Testimonial>,
}

/// Blog listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PostSummary {
    pub id: u32,
    pub image_src: String,
    pub alt: String,
    pub tag: String,
    /// Display string, never parsed
    pub date: String,
    pub title: String,
    pub description: String,
}

impl PostSummary {
    /// Route of the post detail page, relative to the site root
    pub fn path(&self) -> String {
        format!("blog/{}-{}/", self.id, slug::slugify(&self.title))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PullQuote {
    pub text: String,
    pub author: String,
}

/// One block of a post body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PostBlock {
    /// Markdown text; blank lines split it into paragraphs
    Paragraph(String),
    Quote(PullQuote),
}

/// Narrative body of a post, joined to its summary by `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PostDetail {
    pub id: u32,
    pub body: Vec<PostBlock>,
}

impl PostDetail {
    pub fn quotes(&self) -> impl Iterator<Item = &PullQuote> {
        self.body.iter().filter_map(|block| match block {
            PostBlock::Quote(q) => Some(q),
            PostBlock::Paragraph(_) => None,
        })
    }
}

/// A post summary joined with its detail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPost<'a> {
    pub summary: &'a PostSummary,
    pub detail: &'a PostDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlogContent {
    pub section_title: String,
    pub intro_paragraph: String,
    pub grid_title: String,
    pub detail_author: String,
    pub related_title: String,
    pub newsletter_title: String,
    pub newsletter_description: String,
    pub posts: Vec<PostSummary>,
    pub post_details: Vec<PostDetail>,
    pub sidebar_ad_title: String,
    pub sidebar_ad_text: String,
    pub sidebar_ad_button: String,
}

impl BlogContent {
    pub fn summary(&self, id: u32) -> Option<&PostSummary> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn detail(&self, id: u32) -> Option<&PostDetail> {
        self.post_details.iter().find(|d| d.id == id)
    }

    /// Join a post's summary and detail
    pub fn resolve(&self, id: u32) -> Result<ResolvedPost<'_>, ReferenceError> {
        match (self.summary(id), self.detail(id)) {
            (Some(summary), Some(detail)) => Ok(ResolvedPost { summary, detail }),
            (Some(_), None) => Err(ReferenceError::MissingPostDetail(id)),
            (None, Some(_)) => Err(ReferenceError::MissingPostSummary(id)),
            (None, None) => Err(ReferenceError::UnknownPost(id)),
        }
    }

    /// Other posts in declared order, excluding `id`
    pub fn related(&self, id: u32, limit: usize) -> impl Iterator<Item = &PostSummary> {
        self.posts.iter().filter(move |p| p.id != id).take(limit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FaqEntry {
    /// Unique across all categories
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FaqCategory {
    pub title: String,
    /// Anchor namespace, unique across categories
    pub id_prefix: String,
    pub questions: Vec<FaqEntry>,
}

impl FaqCategory {
    /// DOM anchor of one of this category's entries
    pub fn anchor(&self, entry: &FaqEntry) -> String {
        faq_anchor(&self.id_prefix, &entry.id)
    }
}

/// Joins a category prefix and a question id into an anchor
///
/// Prefixes may not contain the separator, so the first `_` always marks
/// where the prefix ends and distinct pairs never share an anchor.
pub const ANCHOR_SEPARATOR: char = '_';

/// Anchor for an FAQ entry
pub fn faq_anchor(id_prefix: &str, id: &str) -> String {
    format!("{}{}{}", id_prefix, ANCHOR_SEPARATOR, id)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FaqContent {
    pub page_title: String,
    pub contact_box_question: String,
    pub contact_box_text: String,
    pub sidebar_contact_title: String,
    pub categories: Vec<FaqCategory>,
}

impl FaqContent {
    /// Every entry with its anchor, categories and questions in declared order
    pub fn anchors(&self) -> impl Iterator<Item = (String, &FaqCategory, &FaqEntry)> {
        self.categories.iter().flat_map(|category| {
            category
                .questions
                .iter()
                .map(move |entry| (category.anchor(entry), category, entry))
        })
    }

    pub fn resolve_anchor(&self, anchor: &str) -> Result<(&FaqCategory, &FaqEntry), ReferenceError> {
        self.anchors()
            .find(|(a, _, _)| a == anchor)
            .map(|(_, category, entry)| (category, entry))
            .ok_or_else(|| ReferenceError::UnknownAnchor(anchor.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactPageContent {
    pub form_title: String,
    pub form_description: String,
    pub form_button_text: String,
    pub about_title: String,
    pub about_description: String,
}

/// Home loan process page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoanProcessContent {
    pub facts_title: String,
    pub facts_description1: String,
    pub facts_description2: String,
    pub facts_button_text: String,
    pub facts_counter1_label: String,
    pub facts_counter2_label: String,
    pub facts_counter3_label: String,
    #[serde(skip_deserializing)]
    pub years_counter_value: u32,
    pub process_title: String,
    pub process_description: String,
    pub process_step_description: String,
    pub calculator_title: String,
    pub calculator_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NotFoundContent {
    pub message_html: String,
    pub button_text: String,
}

/// Copy shared by components that appear on several pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommonContent {
    pub cta_title: String,
    pub cta_description: String,
    pub cta_button_text: String,
    pub brands_title: String,
    pub brands_description: String,
    pub logo_alt: String,
    pub book_call_text: String,
    pub copyright_html: String,
    /// Header menu, in display order
    pub navigation: Vec<NavLink>,
}

/// One header menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}
