//! List site content

use anyhow::Result;

use crate::content::SECTION_NAMES;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let document = site.load_content()?;

    match content_type {
        "section" | "sections" => {
            println!("Sections ({}):", SECTION_NAMES.len());
            for name in SECTION_NAMES {
                println!("  {}", name);
            }
        }
        "service" | "services" => {
            let items = &document.services.items;
            println!("Services ({}):", items.len());
            for item in items {
                println!("  {} - {}", item.id, item.title);
            }
        }
        "testimonial" | "testimonials" => {
            let items = &document.testimonials.items;
            println!("Testimonials ({}):", items.len());
            for item in items {
                println!("  {} - {} ({})", item.id, item.name, item.role);
            }
        }
        "post" | "posts" => {
            let posts = &document.blog.posts;
            println!("Posts ({}):", posts.len());
            for post in posts {
                let status = if document.blog.detail(post.id).is_some() {
                    ""
                } else {
                    " [no detail]"
                };
                println!(
                    "  {} - {} [/{}]{}",
                    post.date,
                    post.title,
                    post.path(),
                    status
                );
            }
        }
        "faq" => {
            for category in &document.faq.categories {
                println!("{} ({}):", category.title, category.questions.len());
                for entry in &category.questions {
                    println!("  #{} {}", category.anchor(entry), entry.question);
                }
            }
        }
        "project" | "projects" => {
            let titles = &document.projects.story_titles;
            println!("Projects ({}):", titles.len());
            for title in titles {
                println!("  {}", title);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: sections, services, testimonials, posts, faq, projects",
                content_type
            );
        }
    }

    Ok(())
}
