//! Page shell, header and footer

use super::ViewContext;
use crate::content::{AgentIdentity, CommonContent, MetadataContent};
use crate::helpers::{full_url_for, html_escape, image_tag, link_to, mailto_href, tel_href, url_for};

/// Wrap rendered sections in a full HTML document
pub fn page(
    ctx: &ViewContext,
    metadata: &MetadataContent,
    title: &str,
    description: Option<&str>,
    body: &str,
) -> String {
    let description = description.unwrap_or(&metadata.base_description);
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<meta property="og:title" content="{title}">
<meta property="og:url" content="{url}">
<link rel="stylesheet" href="{css}">
<meta name="generator" content="realtor-site {version}">
</head>
<body>
{body}
</body>
</html>
"#,
        lang = html_escape(&ctx.config.language),
        title = html_escape(&metadata.page_title(title)),
        description = html_escape(description),
        url = html_escape(&full_url_for(ctx.config, ctx.nav.route())),
        css = url_for(ctx.config, "/css/styles.css"),
        version = env!("CARGO_PKG_VERSION"),
        body = body,
    )
}

fn logo(ctx: &ViewContext, agent: &AgentIdentity, alt: &str, class: &str) -> String {
    agent
        .logo_src
        .as_deref()
        .map(|src| image_tag(ctx.config, src, alt, Some(class)))
        .unwrap_or_default()
}

/// Site header with brand, navigation and the booking button
pub fn header(ctx: &ViewContext, agent: &AgentIdentity, common: &CommonContent) -> String {
    let nav = common
        .navigation
        .iter()
        .map(|item| {
            let class = if ctx.nav.route() == item.path {
                r#" class="current-menu""#
            } else {
                ""
            };
            format!(
                "<li{}>{}</li>",
                class,
                link_to(ctx.config, &item.path, &item.label, None)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<header id="header-main" class="header style-6">
<div class="header-logo"><a href="{home}" class="site-logo">{logo}<span class="text-logo">{name}</span></a></div>
<nav class="main-menu"><ul class="navigation">
{nav}
</ul></nav>
<div class="header-right">{book}</div>
</header>
"#,
        home = url_for(ctx.config, "/"),
        logo = logo(ctx, agent, &common.logo_alt, "logo-image"),
        name = html_escape(&agent.name),
        nav = nav,
        book = link_to(
            ctx.config,
            "/contact/",
            &common.book_call_text,
            Some("tf-btn style-border")
        ),
    )
}

/// Site footer with contact details and social links
pub fn footer(ctx: &ViewContext, agent: &AgentIdentity, common: &CommonContent) -> String {
    let social = agent
        .social_links
        .iter()
        .map(|link| {
            format!(
                r#"<li><a href="{}" aria-label="{}"><i class="{}"></i></a></li>"#,
                html_escape(&link.url),
                html_escape(&link.name),
                html_escape(&link.icon_class)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<footer id="footer" class="footer">
<div class="footer-info">
<p class="address">{address}</p>
<p><a href="{tel}">{phone}</a></p>
<p><a href="{mailto}">{email}</a></p>
<p class="brokerage">{brokerage}</p>
</div>
<ul class="tf-social">
{social}
</ul>
<p class="copyright">&copy; {year} {copyright}</p>
</footer>
"#,
        address = html_escape(&agent.address),
        tel = html_escape(&tel_href(&agent.phone)),
        phone = html_escape(&agent.phone),
        mailto = html_escape(&mailto_href(&agent.email)),
        email = html_escape(&agent.email),
        brokerage = html_escape(&agent.brokerage_name),
        social = social,
        year = ctx.year,
        copyright = common.copyright_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::agent::tests::sample_agent;
    use crate::content::{load, load_with_copy, DEFAULT_COPY};

    #[test]
    fn test_page_title_uses_suffix() {
        let doc = load(sample_agent()).unwrap();
        let config = SiteConfig::default();
        let ctx = ViewContext::new(&config, "/faq/", 2026);
        let html = page(&ctx, &doc.metadata, "FAQ", None, "<main></main>");
        assert!(html.contains("<title>FAQ | James Hall - Toronto Realtor</title>"));
        assert!(html.contains(&doc.metadata.base_description));
        assert!(html.contains("<main></main>"));
    }

    #[test]
    fn test_header_marks_current_route() {
        let doc = load(sample_agent()).unwrap();
        let config = SiteConfig::default();
        let ctx = ViewContext::new(&config, "/faq/", 2026);
        let html = header(&ctx, &doc.agent, &doc.common);
        assert!(html.contains(r#"<li class="current-menu"><a href="/faq/">FAQ</a></li>"#));
        assert!(html.contains("James Hall Logo"));
        assert!(html.contains("Book a Call"));
    }

    #[test]
    fn test_header_menu_from_copy() {
        let deck = DEFAULT_COPY.replace("label: Loan Process", "label: Mortgages");
        let doc = load_with_copy(sample_agent(), &deck).unwrap();
        let config = SiteConfig::default();
        let ctx = ViewContext::new(&config, "/loan-process/", 2026);
        let html = header(&ctx, &doc.agent, &doc.common);
        assert!(html.contains(
            r#"<li class="current-menu"><a href="/loan-process/">Mortgages</a></li>"#
        ));
        assert!(!html.contains("Loan Process"));
        let home = html.find(r#"href="/">Home"#).unwrap();
        let contact = html.find(r#"href="/contact/">Contact"#).unwrap();
        assert!(home < contact);
    }

    #[test]
    fn test_footer_social_order() {
        let doc = load(sample_agent()).unwrap();
        let config = SiteConfig::default();
        let ctx = ViewContext::new(&config, "/", 2026);
        let html = footer(&ctx, &doc.agent, &doc.common);
        let fb = html.find("icon-fb").unwrap();
        let li = html.find("icon-linked").unwrap();
        assert!(fb < li);
        assert!(html.contains("tel:4165645464"));
        assert!(html.contains("&copy; 2026 James Hall, REALTOR"));
    }
}
