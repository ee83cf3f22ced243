//! Markdown rendering for narrative copy

use pulldown_cmark::{html, CowStr, Event, Options, Parser};

/// Render a markdown block to HTML
///
/// Raw HTML in the source is emitted as escaped text: narrative copy is not a
/// trusted markup field.
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SMART_PUNCTUATION;
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(CowStr::from(raw.into_string())),
        other => other,
    });

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs() {
        let out = render_markdown("First.\n\nSecond.");
        assert_eq!(out, "<p>First.</p>\n<p>Second.</p>\n");
    }

    #[test]
    fn test_raw_html_escaped() {
        let out = render_markdown("Hi <script>x</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }
}
