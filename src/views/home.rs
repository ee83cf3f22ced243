//! Home page sections

use super::ViewContext;
use crate::content::{
    AboutAgentContent, AboutContent, AgentIdentity, CommonContent, HeroContent, ProjectsContent,
    ServicesContent, TestimonialsContent,
};
use crate::helpers::{html_escape, image_tag, link_to, mailto_href, tel_href};

/// Hero slider: every declared slide, then the image strips and counters
pub fn hero(ctx: &ViewContext, hero: &HeroContent, agent: &AgentIdentity) -> String {
    let contact = ctx.nav.contact_target();

    let slides = hero
        .slides
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            format!(
                r#"<div class="swiper-slide" data-index="{i}">
<div class="text-display title">{headline}</div>
<p class="text-1">{description}</p>
{button}
</div>"#,
                i = i,
                headline = slide.headline_html,
                description = html_escape(&slide.description),
                button = link_to(ctx.config, &contact, &slide.button_text, Some("tf-btn style-border")),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let images = |class: &str, list: &[crate::content::ImageRef]| {
        list.iter()
            .map(|img| {
                format!(
                    r#"<div class="swiper-slide">{}</div>"#,
                    image_tag(ctx.config, &img.src, &img.alt, Some(class))
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let badge = agent
        .logo_src
        .as_deref()
        .map(|src| image_tag(ctx.config, src, &hero.logo_alt, Some("hero-badge-image")))
        .unwrap_or_default();

    format!(
        r#"<section class="page-title home06">
<div class="left swiper hero-thumbs-1">
{slides}
</div>
<div class="right">
<div class="hero-logo-badge">{badge}</div>
<div class="swiper hero-thumbs-2">
{main}
</div>
<div class="swiper hero-pagination">
{pagination}
</div>
</div>
<div class="counters">
<div class="counter"><span class="counter-label">{clients}</span></div>
<div class="counter"><span class="odometer" data-max="{years}">{years}</span><span class="counter-label">{years_label}</span></div>
</div>
<form class="hero-search" action="{contact}">
<input type="text" placeholder="{placeholder}">
<button type="submit">{search}</button>
</form>
</section>
"#,
        slides = slides,
        badge = badge,
        main = images("slide-inner", hero.main_images.as_slice()),
        pagination = images("pagi-thumb", hero.pagination_images.as_slice()),
        clients = html_escape(&hero.clients_counter_label),
        years = hero.years_counter_value,
        years_label = html_escape(&hero.years_counter_label),
        contact = html_escape(&contact),
        placeholder = html_escape(&hero.search_placeholder),
        search = html_escape(&hero.search_button_text),
    )
}

/// About section with contact shortcuts and the expertise checklist
pub fn about(ctx: &ViewContext, about: &AboutContent, agent: &AgentIdentity) -> String {
    let expertise = about
        .expertise_items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                r#"<li class="text-1" data-wow-delay="{:.1}s"><i class="icon-check-cycle"></i>{}</li>"#,
                i as f32 * 0.1,
                html_escape(item)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="section-dream-home">
<div class="left">
<div class="text-display-4 title">{title}</div>
<p class="text-1 description">{paragraph}</p>
<div class="contact-item"><div class="title">{call}</div><h6><a href="{tel}">{phone}</a></h6></div>
<div class="contact-item"><div class="title">{help}</div><h6><a href="{mailto}">{email}</a></h6></div>
</div>
<div class="center">{image1}</div>
<div class="right">
<div class="text-11 title">{expertise_title}</div>
<p class="description">{expertise_intro}</p>
<ul class="list-check">
{expertise}
</ul>
{image2}
</div>
</section>
"#,
        title = html_escape(&about.section_title),
        paragraph = html_escape(&about.main_paragraph),
        call = html_escape(&about.call_label),
        tel = html_escape(&tel_href(&agent.phone)),
        phone = html_escape(&agent.phone),
        help = html_escape(&about.help_label),
        mailto = html_escape(&mailto_href(&agent.email)),
        email = html_escape(&agent.email),
        image1 = image_tag(ctx.config, &about.image1_src, &about.section_title, Some("parallax-img")),
        expertise_title = html_escape(&about.expertise_title),
        expertise_intro = html_escape(&about.expertise_intro),
        expertise = expertise,
        image2 = image_tag(ctx.config, &about.image2_src, &about.expertise_title, None),
    )
}

pub fn services(ctx: &ViewContext, services: &ServicesContent) -> String {
    let items = services
        .items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="service-item" id="service-{id}" data-wow-delay="{delay}">
<i class="{icon}"></i>
{image}
<h4>{title}</h4>
<p>{description}</p>
</div>"#,
                id = item.id,
                delay = html_escape(&item.delay),
                icon = html_escape(&item.icon),
                image = image_tag(ctx.config, &item.image_src, &item.title, None),
                title = html_escape(&item.title),
                description = html_escape(&item.description),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="section-services">
<h2>{title}</h2>
<p>{intro}</p>
<div class="swiper services">
{items}
</div>
{button}
</section>
"#,
        title = html_escape(&services.section_title),
        intro = html_escape(&services.intro_paragraph),
        items = items,
        button = link_to(ctx.config, "/contact/", &services.button_text, Some("tf-btn")),
    )
}

/// Agent card
pub fn about_agent(ctx: &ViewContext, section: &AboutAgentContent, agent: &AgentIdentity) -> String {
    format!(
        r#"<section class="section-team">
<h2>{title}</h2>
<p>{description}</p>
<div class="team-item">
{headshot}
<h5>{name}</h5>
<p>{designation}</p>
<p>{agent_description}</p>
</div>
{button}
</section>
"#,
        title = html_escape(&section.section_title),
        description = html_escape(&section.description),
        headshot = image_tag(ctx.config, &agent.headshot_image_src, &agent.name, None),
        name = html_escape(&agent.name),
        designation = html_escape(&agent.designation),
        agent_description = html_escape(&section.agent_description),
        button = link_to(ctx.config, "/contact/", &section.button_text, Some("tf-btn")),
    )
}

/// Success stories grid with the trailing call-to-action box
pub fn projects(ctx: &ViewContext, projects: &ProjectsContent) -> String {
    let stories = projects
        .story_titles
        .iter()
        .map(|title| {
            format!(
                r#"<div class="project-item">{}</div>"#,
                link_to(ctx.config, &projects.link_target, title, None)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="section-projects">
<h2>{title}</h2>
<p>{intro}</p>
<div class="grid">
{stories}
<div class="project-item empty"><p>{empty}</p>{button}</div>
</div>
</section>
"#,
        title = html_escape(&projects.section_title),
        intro = html_escape(&projects.intro_paragraph),
        stories = stories,
        empty = html_escape(&projects.empty_box_text),
        button = link_to(ctx.config, &projects.link_target, &projects.button_text, Some("tf-btn")),
    )
}

pub fn testimonials(ctx: &ViewContext, testimonials: &TestimonialsContent) -> String {
    let items = testimonials
        .items
        .iter()
        .map(|t| {
            format!(
                r#"<div class="testimonial-item" data-id="{id}">
<p class="description">{description}</p>
<div class="author">{avatar}<h6>{name}</h6><span>{role}</span></div>
</div>"#,
                id = t.id,
                description = html_escape(&t.description),
                avatar = image_tag(ctx.config, &t.avatar, &t.name, Some("avatar")),
                name = html_escape(&t.name),
                role = html_escape(&t.role),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="section-testimonials">
<h2>{title}</h2>
<p>{intro}</p>
<div class="swiper testimonials">
{items}
</div>
</section>
"#,
        title = html_escape(&testimonials.section_title),
        intro = html_escape(&testimonials.intro_paragraph),
        items = items,
    )
}

pub fn brands(ctx: &ViewContext, common: &CommonContent) -> String {
    format!(
        r#"<section class="section-brands">
<h3>{title}</h3>
<p>{description}</p>
{button}
</section>
"#,
        title = html_escape(&common.brands_title),
        description = html_escape(&common.brands_description),
        button = link_to(ctx.config, &ctx.nav.contact_target(), &common.cta_button_text, Some("tf-btn")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::agent::tests::sample_agent;
    use crate::content::{load, HeroSlide};

    #[test]
    fn test_hero_renders_every_slide() {
        let mut doc = load(sample_agent()).unwrap();
        doc.hero.slides.push(HeroSlide {
            headline_html: "Second <span>slide</span>".to_string(),
            description: "Another".to_string(),
            button_text: "Go".to_string(),
        });
        let config = SiteConfig::default();
        let ctx = ViewContext::new(&config, "/", 2026);
        let html = hero(&ctx, &doc.hero, &doc.agent);

        assert!(html.contains("Trusted Toronto Realtor</span>: Meet <span class='text_white'>James Hall</span>"));
        assert!(html.contains("Second <span>slide</span>"));
        assert!(html.contains(r##"<a href="#contact" class="tf-btn style-border">Learn How I Can Help</a>"##));
        assert!(html.contains("Years in Toronto"));
        assert!(html.contains(r#"data-max="3""#));
    }

    #[test]
    fn test_hero_image_order() {
        let doc = load(sample_agent()).unwrap();
        let config = SiteConfig::default();
        let ctx = ViewContext::new(&config, "/", 2026);
        let html = hero(&ctx, &doc.hero, &doc.agent);

        let positions: Vec<usize> = doc
            .hero
            .main_images
            .iter()
            .map(|img| html.find(&img.src).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_about_checklist_order() {
        let doc = load(sample_agent()).unwrap();
        let config = SiteConfig::default();
        let ctx = ViewContext::new(&config, "/", 2026);
        let html = about(&ctx, &doc.about, &doc.agent);

        let buyers = html.find("</i>Buyers</li>").unwrap();
        let sellers = html.find("</i>Sellers</li>").unwrap();
        let investors = html.find("</i>Investors</li>").unwrap();
        assert!(buyers < sellers && sellers < investors);
        assert!(html.contains("Call James"));
        assert!(html.contains(r#"data-wow-delay="0.2s""#));
    }

    #[test]
    fn test_testimonials_escape_names() {
        let doc = load(sample_agent()).unwrap();
        let config = SiteConfig::default();
        let ctx = ViewContext::new(&config, "/", 2026);
        let html = testimonials(&ctx, &doc.testimonials);
        assert!(html.contains("Jade, Stefano, Sofia &amp; Nate"));
        assert_eq!(html.matches("testimonial-item").count(), 9);
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let doc = load(sample_agent()).unwrap();
        let config = SiteConfig::default();
        let ctx = ViewContext::new(&config, "/", 2026);
        assert_eq!(services(&ctx, &doc.services), services(&ctx, &doc.services));
        assert_eq!(
            testimonials(&ctx, &doc.testimonials),
            testimonials(&ctx, &doc.testimonials)
        );
        assert_eq!(projects(&ctx, &doc.projects), projects(&ctx, &doc.projects));
    }
}
