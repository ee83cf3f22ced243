//! Contact form

use super::{ViewContext, CONTACT_ANCHOR};
use crate::content::{AgentIdentity, ContactPageContent};
use crate::helpers::{html_escape, mailto_href, tel_href};

/// Contact form section, also embedded at the bottom of the home page
pub fn contact_section(ctx: &ViewContext, contact: &ContactPageContent, agent: &AgentIdentity) -> String {
    let action = mailto_href(&agent.email);
    let heading = if ctx.nav.is_home() { "h2" } else { "h1" };

    format!(
        r#"<section class="section-contact" id="{anchor}">
<div class="form-wrap">
<{h} class="title">{form_title}</{h}>
<p>{form_description}</p>
<form class="form-contact" method="post" action="{action}" enctype="text/plain">
<input type="text" name="name" required>
<input type="email" name="email" required>
<input type="tel" name="phone">
<textarea name="message" required></textarea>
<button type="submit" class="tf-btn">{button}</button>
</form>
</div>
<div class="contact-info">
<h4>{about_title}</h4>
<p>{about_description}</p>
<p class="address">{address}</p>
<p><a href="{tel}">{phone}</a></p>
<p><a href="{mailto}">{email}</a></p>
</div>
</section>
"#,
        anchor = CONTACT_ANCHOR,
        h = heading,
        form_title = html_escape(&contact.form_title),
        form_description = html_escape(&contact.form_description),
        action = html_escape(&action),
        button = html_escape(&contact.form_button_text),
        about_title = html_escape(&contact.about_title),
        about_description = html_escape(&contact.about_description),
        address = html_escape(&agent.address),
        tel = html_escape(&tel_href(&agent.phone)),
        phone = html_escape(&agent.phone),
        mailto = html_escape(&action),
        email = html_escape(&agent.email),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::agent::tests::sample_agent;
    use crate::content::load;

    #[test]
    fn test_contact_section() {
        let doc = load(sample_agent()).unwrap();
        let config = SiteConfig::default();
        let ctx = ViewContext::new(&config, "/contact/", 2026);
        let html = contact_section(&ctx, &doc.contact_page, &doc.agent);

        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains("Send James a Message"));
        assert!(html.contains("quality real estate guidance in Toronto."));
        assert!(html.contains(r#"<h1 class="title">"#));
        assert!(html.contains("jameshall@property.ca"));
    }

    #[test]
    fn test_contact_section_on_home_uses_subheading() {
        let doc = load(sample_agent()).unwrap();
        let config = SiteConfig::default();
        let ctx = ViewContext::new(&config, "/", 2026);
        let html = contact_section(&ctx, &doc.contact_page, &doc.agent);
        assert!(html.contains(r#"<h2 class="title">"#));
    }
}
