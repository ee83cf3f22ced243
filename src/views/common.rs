//! Components shared across pages

use super::ViewContext;
use crate::content::{AgentIdentity, CommonContent, NotFoundContent};
use crate::helpers::{html_escape, image_tag, link_to};

/// Closing call-to-action band with the cut-out headshot
pub fn cta(ctx: &ViewContext, common: &CommonContent, agent: &AgentIdentity) -> String {
    format!(
        r#"<section class="section-CTA">
<div class="content">
<h2>{title}</h2>
<p>{description}</p>
{button}
</div>
<div class="person">{headshot}</div>
</section>
"#,
        title = html_escape(&common.cta_title),
        description = html_escape(&common.cta_description),
        button = link_to(ctx.config, &ctx.nav.contact_target(), &common.cta_button_text, Some("tf-btn")),
        headshot = image_tag(ctx.config, &agent.headshot_no_bg_image_src, &agent.name, None),
    )
}

pub fn not_found(ctx: &ViewContext, not_found: &NotFoundContent) -> String {
    format!(
        r#"<section class="page-404">
<h1>404</h1>
<p class="text-1">{message}</p>
{button}
</section>
"#,
        message = not_found.message_html,
        button = link_to(ctx.config, "/", &not_found.button_text, Some("tf-btn")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::agent::tests::sample_agent;
    use crate::content::load;

    #[test]
    fn test_cta_target_depends_on_page() {
        let doc = load(sample_agent()).unwrap();
        let config = SiteConfig::default();

        let home = ViewContext::new(&config, "/", 2026);
        let html = cta(&home, &doc.common, &doc.agent);
        assert!(html.contains(r##"href="#contact""##));
        assert!(html.contains("Contact James Today"));
        assert!(html.contains(&doc.agent.headshot_no_bg_image_src));

        let faq = ViewContext::new(&config, "/faq/", 2026);
        let html = cta(&faq, &doc.common, &doc.agent);
        assert!(html.contains(r#"href="/contact/""#));
    }

    #[test]
    fn test_not_found_keeps_markup() {
        let doc = load(sample_agent()).unwrap();
        let config = SiteConfig::default();
        let ctx = ViewContext::new(&config, "/404.html", 2026);
        let html = not_found(&ctx, &doc.not_found);
        assert!(html.contains("<br />a better place"));
        assert!(html.contains(r#"<a href="/" class="tf-btn">Back to Home</a>"#));
    }
}
