//! Blog listing and detail components

use super::ViewContext;
use crate::content::{BlogContent, PostBlock, PostSummary, ReferenceError};
use crate::helpers::{html_escape, image_tag, link_to, render_markdown};

/// Number of related posts shown under a post
const RELATED_POSTS: usize = 3;

/// A post preview linking to its detail page
pub fn post_card(ctx: &ViewContext, post: &PostSummary) -> String {
    format!(
        r#"<div class="blog-article-item" data-id="{id}">
<div class="article-thumb">{image}</div>
<div class="article-content">
<div class="time"><span class="tag">{tag}</span><span class="date">{date}</span></div>
<h4 class="title">{link}</h4>
<p>{description}</p>
</div>
</div>"#,
        id = post.id,
        image = image_tag(ctx.config, &post.image_src, &post.alt, None),
        tag = html_escape(&post.tag),
        date = html_escape(&post.date),
        link = link_to(ctx.config, &post.path(), &post.title, None),
        description = html_escape(&post.description),
    )
}

fn cards<'a>(ctx: &ViewContext, posts: impl Iterator<Item = &'a PostSummary>) -> String {
    posts
        .map(|post| post_card(ctx, post))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Market insights section on the home page
pub fn blog_section(ctx: &ViewContext, blog: &BlogContent) -> String {
    format!(
        r#"<section class="section-blog">
<h2>{title}</h2>
<p>{intro}</p>
<div class="grid">
{cards}
</div>
</section>
"#,
        title = html_escape(&blog.section_title),
        intro = html_escape(&blog.intro_paragraph),
        cards = cards(ctx, blog.posts.iter()),
    )
}

/// Blog index page body
pub fn blog_grid(ctx: &ViewContext, blog: &BlogContent) -> String {
    format!(
        r#"<section class="section-blog-grid">
<h1>{title}</h1>
<div class="grid">
{cards}
</div>
<aside class="newsletter"><h5>{newsletter}</h5><p>{newsletter_text}</p></aside>
</section>
"#,
        title = html_escape(&blog.grid_title),
        cards = cards(ctx, blog.posts.iter()),
        newsletter = html_escape(&blog.newsletter_title),
        newsletter_text = html_escape(&blog.newsletter_description),
    )
}

/// Full post page body
///
/// Fails when the post's summary and detail do not both exist; the caller
/// decides how to present and report that.
pub fn blog_detail(ctx: &ViewContext, blog: &BlogContent, id: u32) -> Result<String, ReferenceError> {
    let post = blog.resolve(id)?;

    let body = post
        .detail
        .body
        .iter()
        .map(|block| match block {
            PostBlock::Paragraph(text) => render_markdown(text),
            PostBlock::Quote(quote) => format!(
                "<blockquote>\n<p>{}</p>\n<cite>{}</cite>\n</blockquote>\n",
                html_escape(&quote.text),
                html_escape(&quote.author)
            ),
        })
        .collect::<String>();

    Ok(format!(
        r#"<article class="blog-details" data-id="{id}">
<div class="heading">
<span class="tag">{tag}</span>
<h1>{title}</h1>
<div class="meta"><span class="author">{author}</span><span class="date">{date}</span></div>
</div>
<div class="image">{image}</div>
<div class="content">
{body}</div>
<aside class="sidebar">
<div class="sidebar-ad"><h5>{ad_title}</h5><p>{ad_text}</p>{ad_button}</div>
<div class="newsletter"><h5>{newsletter}</h5><p>{newsletter_text}</p></div>
</aside>
<section class="related-posts">
<h3>{related_title}</h3>
<div class="grid">
{related}
</div>
</section>
</article>
"#,
        id = post.summary.id,
        tag = html_escape(&post.summary.tag),
        title = html_escape(&post.summary.title),
        author = html_escape(&blog.detail_author),
        date = html_escape(&post.summary.date),
        image = image_tag(ctx.config, &post.summary.image_src, &post.summary.alt, None),
        body = body,
        ad_title = html_escape(&blog.sidebar_ad_title),
        ad_text = html_escape(&blog.sidebar_ad_text),
        ad_button = link_to(ctx.config, &ctx.nav.contact_target(), &blog.sidebar_ad_button, Some("tf-btn")),
        newsletter = html_escape(&blog.newsletter_title),
        newsletter_text = html_escape(&blog.newsletter_description),
        related_title = html_escape(&blog.related_title),
        related = cards(ctx, blog.related(id, RELATED_POSTS)),
    ))
}
