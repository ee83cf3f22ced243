//! Generator module - renders every page of the site into the public directory

use anyhow::{anyhow, Result};
use chrono::Datelike;
use std::fs;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::content::{ContentDocument, ReferenceError};
use crate::helpers::strip_html;
use crate::views::{self, ViewContext};
use crate::Site;

/// Reference failures met while rendering
///
/// A failure does not stop generation: the affected page gets the not-found
/// presentation and the failure is recorded here.
#[derive(Debug, Default)]
pub struct RenderReport {
    /// Routes written, in generation order
    pub pages: Vec<String>,
    pub failures: Vec<(String, ReferenceError)>,
}

impl RenderReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Static site generator
pub struct Generator<'a> {
    site: &'a Site,
    document: &'a ContentDocument,
    year: i32,
}

impl<'a> Generator<'a> {
    /// Create a new generator stamped with the current year
    pub fn new(site: &'a Site, document: &'a ContentDocument) -> Self {
        Self {
            site,
            document,
            year: chrono::Local::now().year(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Generate the entire site
    pub fn generate(&self) -> Result<RenderReport> {
        fs::create_dir_all(&self.site.public_dir)?;
        let mut report = RenderReport::default();

        // Static assets first so generated pages win on conflicts
        self.copy_static_assets()?;

        self.write_page(&mut report, "/", |ctx| self.home_body(ctx))?;
        self.write_page(&mut report, "/blog/", |ctx| self.blog_body(ctx))?;
        self.generate_post_pages(&mut report)?;
        self.write_page(&mut report, "/faq/", |ctx| self.faq_body(ctx))?;
        self.write_page(&mut report, "/contact/", |ctx| self.contact_body(ctx))?;
        self.write_page(&mut report, "/loan-process/", |ctx| self.loan_body(ctx))?;
        self.write_page(&mut report, "/404.html", |ctx| self.not_found_body(ctx))?;

        tracing::info!("Generated {} pages", report.pages.len());
        Ok(report)
    }

    fn home_body(&self, ctx: &ViewContext) -> Page {
        let doc = self.document;
        let sections = [
            views::hero(ctx, &doc.hero, &doc.agent),
            views::about(ctx, &doc.about, &doc.agent),
            views::services(ctx, &doc.services),
            views::about_agent(ctx, &doc.about_agent, &doc.agent),
            views::projects(ctx, &doc.projects),
            views::testimonials(ctx, &doc.testimonials),
            views::blog_section(ctx, &doc.blog),
            views::brands(ctx, &doc.common),
            views::contact_section(ctx, &doc.contact_page, &doc.agent),
        ];
        Page {
            title: doc.metadata.home_title.clone(),
            description: None,
            main: sections.concat(),
            cta: false,
        }
    }

    fn blog_body(&self, ctx: &ViewContext) -> Page {
        let blog = &self.document.blog;
        Page {
            title: blog.grid_title.clone(),
            description: Some(blog.intro_paragraph.clone()),
            main: views::blog_grid(ctx, blog),
            cta: true,
        }
    }

    fn faq_body(&self, ctx: &ViewContext) -> Page {
        let faq = &self.document.faq;
        Page {
            title: faq.page_title.clone(),
            description: None,
            main: views::faq_page(ctx, faq, &self.document.agent),
            cta: true,
        }
    }

    fn contact_body(&self, ctx: &ViewContext) -> Page {
        let contact = &self.document.contact_page;
        Page {
            title: contact.form_title.clone(),
            description: Some(contact.about_description.clone()),
            main: views::contact_section(ctx, contact, &self.document.agent),
            cta: false,
        }
    }

    fn loan_body(&self, ctx: &ViewContext) -> Page {
        let loan = &self.document.loan_process;
        Page {
            title: loan.process_title.clone(),
            description: Some(loan.process_description.clone()),
            main: views::loan_process(ctx, loan, &self.document.agent),
            cta: true,
        }
    }

    fn not_found_body(&self, ctx: &ViewContext) -> Page {
        let not_found = &self.document.not_found;
        Page {
            title: "404".to_string(),
            description: Some(strip_html(&not_found.message_html)),
            main: views::not_found(ctx, not_found),
            cta: false,
        }
    }

    /// One page per post summary; unresolvable posts render as not found
    fn generate_post_pages(&self, report: &mut RenderReport) -> Result<()> {
        let blog = &self.document.blog;

        for post in &blog.posts {
            let route = format!("/{}", post.path());
            let mut failure = None;

            self.write_page(report, &route, |ctx| match views::blog_detail(ctx, blog, post.id) {
                Ok(main) => Page {
                    title: post.title.clone(),
                    description: Some(post.description.clone()),
                    main,
                    cta: true,
                },
                Err(e) => {
                    tracing::warn!("Post {} cannot be rendered: {}", post.id, e);
                    failure = Some(e);
                    self.not_found_body(ctx)
                }
            })?;

            if let Some(e) = failure {
                report.failures.push((route, e));
            }
        }

        Ok(())
    }

    /// Render a page through the shared layout and write it under its route
    fn write_page<F>(&self, report: &mut RenderReport, route: &str, body: F) -> Result<()>
    where
        F: FnOnce(&ViewContext) -> Page,
    {
        let doc = self.document;
        let ctx = ViewContext::new(&self.site.config, route, self.year);
        let page = body(&ctx);

        let mut content = views::header(&ctx, &doc.agent, &doc.common);
        content.push_str("<main>\n");
        content.push_str(&page.main);
        if page.cta {
            content.push_str(&views::cta(&ctx, &doc.common, &doc.agent));
        }
        content.push_str("</main>\n");
        content.push_str(&views::footer(&ctx, &doc.agent, &doc.common));

        let html = views::page(
            &ctx,
            &doc.metadata,
            &page.title,
            page.description.as_deref(),
            &content,
        );

        let output_path = self.output_path(route);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow!("Failed to create dir {:?}: {}", parent, e))?;
        }
        fs::write(&output_path, &html)
            .map_err(|e| anyhow!("Failed to write {:?}: {}", output_path, e))?;
        tracing::debug!("Generated: {:?}", output_path);

        report.pages.push(route.to_string());
        Ok(())
    }

    /// Routes ending in `/` become directories with an index.html
    fn output_path(&self, route: &str) -> PathBuf {
        let clean = route.trim_start_matches('/');
        if clean.is_empty() || clean.ends_with('/') {
            self.site.public_dir.join(clean).join("index.html")
        } else {
            self.site.public_dir.join(clean)
        }
    }

    /// Copy the static directory (images, css, js) into the public directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            tracing::debug!("No static directory at {:?}", static_dir);
            return Ok(());
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = self.site.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            copied += 1;
        }

        tracing::debug!("Copied {} static files", copied);
        Ok(())
    }
}

/// What a route contributes inside the shared layout
struct Page {
    title: String,
    description: Option<String>,
    main: String,
    cta: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::init_site;
    use tempfile::TempDir;

    fn sample_site() -> (TempDir, Site) {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    #[test]
    fn test_generate_writes_every_page() {
        let (_dir, site) = sample_site();
        let doc = site.load_content().unwrap();
        let report = Generator::new(&site, &doc).with_year(2026).generate().unwrap();

        assert!(report.is_clean());
        for path in [
            "index.html",
            "blog/index.html",
            "faq/index.html",
            "contact/index.html",
            "loan-process/index.html",
            "404.html",
        ] {
            assert!(site.public_dir.join(path).exists(), "missing {}", path);
        }
        for post in &doc.blog.posts {
            assert!(site.public_dir.join(post.path()).join("index.html").exists());
        }
        assert!(site.public_dir.join("css/styles.css").exists());

        let home = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
        assert!(home.contains(r#"id="contact""#));
        assert!(home.contains("&copy; 2026 James Hall"));
    }

    #[test]
    fn test_home_title_from_copy() {
        let (_dir, site) = sample_site();
        let doc = site.load_content().unwrap();
        Generator::new(&site, &doc).generate().unwrap();

        let home = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
        assert!(home.contains("<title>Home | James Hall - Toronto Realtor</title>"));
        assert!(!home.contains("Toronto Realtor | James Hall"));
    }

    #[test]
    fn test_cta_link_depends_on_page() {
        let (_dir, site) = sample_site();
        let doc = site.load_content().unwrap();
        Generator::new(&site, &doc).generate().unwrap();

        let faq = fs::read_to_string(site.public_dir.join("faq/index.html")).unwrap();
        assert!(faq.contains(r#"<a href="/contact/" class="tf-btn">Contact James Today</a>"#));
        let home = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
        assert!(home.contains(r##"href="#contact""##));
    }

    #[test]
    fn test_dead_link_renders_not_found() {
        let (_dir, site) = sample_site();
        let mut doc = site.load_content().unwrap();
        doc.blog.post_details.retain(|d| d.id != 5);

        let report = Generator::new(&site, &doc).generate().unwrap();
        assert!(!report.is_clean());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].1, ReferenceError::MissingPostDetail(5));

        let post = doc.blog.summary(5).unwrap();
        let html =
            fs::read_to_string(site.public_dir.join(post.path()).join("index.html")).unwrap();
        assert!(html.contains("page-404"));
        assert!(html.contains("Back to Home"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let (_dir, site) = sample_site();
        let doc = site.load_content().unwrap();
        Generator::new(&site, &doc).with_year(2026).generate().unwrap();
        let first = fs::read_to_string(site.public_dir.join("faq/index.html")).unwrap();
        Generator::new(&site, &doc).with_year(2026).generate().unwrap();
        let second = fs::read_to_string(site.public_dir.join("faq/index.html")).unwrap();
        assert_eq!(first, second);
    }
}
