//! FAQ page

use super::ViewContext;
use crate::content::{AgentIdentity, FaqContent};
use crate::helpers::{html_escape, link_to, mailto_href, render_markdown, tel_href};

/// Categories with their questions, plus a sidebar index and contact box
///
/// Every entry gets the anchor `{idPrefix}_{id}`; the sidebar links to the
/// same anchors so they always agree.
pub fn faq_page(ctx: &ViewContext, faq: &FaqContent, agent: &AgentIdentity) -> String {
    let categories = faq
        .categories
        .iter()
        .map(|category| {
            let entries = category
                .questions
                .iter()
                .map(|entry| {
                    format!(
                        r#"<div class="faq-item" id="{anchor}">
<h6 class="faq-question">{question}</h6>
<div class="faq-answer">{answer}</div>
</div>"#,
                        anchor = html_escape(&category.anchor(entry)),
                        question = html_escape(&entry.question),
                        answer = render_markdown(&entry.answer),
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");

            format!(
                r#"<div class="faq-category" id="{prefix}">
<h3>{title}</h3>
{entries}
</div>"#,
                prefix = html_escape(&category.id_prefix),
                title = html_escape(&category.title),
                entries = entries,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let index = faq
        .anchors()
        .map(|(anchor, _, entry)| {
            format!(
                r##"<li><a href="#{}">{}</a></li>"##,
                html_escape(&anchor),
                html_escape(&entry.question)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="section-faq">
<h1>{page_title}</h1>
<div class="faq-content">
{categories}
</div>
<aside class="sidebar">
<ul class="faq-index">
{index}
</ul>
<div class="sidebar-contact">
<h5>{contact_title}</h5>
<p><a href="{tel}">{phone}</a></p>
<p><a href="{mailto}">{email}</a></p>
</div>
<div class="contact-box">
<h5>{box_question}</h5>
<p>{box_text}</p>
{box_button}
</div>
</aside>
</section>
"#,
        page_title = html_escape(&faq.page_title),
        categories = categories,
        index = index,
        contact_title = html_escape(&faq.sidebar_contact_title),
        tel = html_escape(&tel_href(&agent.phone)),
        phone = html_escape(&agent.phone),
        mailto = html_escape(&mailto_href(&agent.email)),
        email = html_escape(&agent.email),
        box_question = html_escape(&faq.contact_box_question),
        box_text = html_escape(&faq.contact_box_text),
        box_button = link_to(ctx.config, &ctx.nav.contact_target(), &faq.sidebar_contact_title, Some("tf-btn")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::agent::tests::sample_agent;
    use crate::content::load;

    #[test]
    fn test_faq_anchors_are_rendered() {
        let doc = load(sample_agent()).unwrap();
        let config = SiteConfig::default();
        let ctx = ViewContext::new(&config, "/faq/", 2026);
        let html = faq_page(&ctx, &doc.faq, &doc.agent);

        for (anchor, _, _) in doc.faq.anchors() {
            assert!(html.contains(&format!(r#"id="{}""#, anchor)));
            assert!(html.contains(&format!(r##"href="#{}""##, anchor)));
        }
        assert!(html.contains(r#"id="faq-proc_faq-q5""#));
        assert!(html.contains("About James &amp; Services"));
    }

    #[test]
    fn test_faq_question_order() {
        let doc = load(sample_agent()).unwrap();
        let config = SiteConfig::default();
        let ctx = ViewContext::new(&config, "/faq/", 2026);
        let html = faq_page(&ctx, &doc.faq, &doc.agent);

        let q1 = html.find(r#"id="faq-serv_faq-q1""#).unwrap();
        let q5 = html.find(r#"id="faq-proc_faq-q5""#).unwrap();
        let q7 = html.find(r#"id="faq-start_faq-q7""#).unwrap();
        assert!(q1 < q5 && q5 < q7);
    }
}
