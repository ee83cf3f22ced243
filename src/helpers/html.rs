//! HTML helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::url::url_for;
use crate::config::SiteConfig;

/// Characters escaped inside `mailto:` and `tel:` hrefs
const HREF_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'#');

/// Generate an anchor tag
///
/// # Examples
/// ```ignore
/// link_to(&config, "/contact/", "Contact", Some("tf-btn")) // -> <a href="/contact/" class="tf-btn">Contact</a>
/// ```
pub fn link_to(config: &SiteConfig, path: &str, text: &str, class: Option<&str>) -> String {
    let external = path.starts_with("http://") || path.starts_with("https://");
    let href = if external || path.starts_with('#') {
        path.to_string()
    } else {
        url_for(config, path)
    };

    let class_attr = class
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default();

    if external {
        format!(
            r#"<a href="{}"{} target="_blank" rel="noopener">{}</a>"#,
            html_escape(&href),
            class_attr,
            html_escape(text)
        )
    } else {
        format!(
            r#"<a href="{}"{}>{}</a>"#,
            html_escape(&href),
            class_attr,
            html_escape(text)
        )
    }
}

/// Generate an image tag
///
/// # Examples
/// ```ignore
/// image_tag(&config, "/images/photo.jpg", "My Photo", None)
/// ```
pub fn image_tag(config: &SiteConfig, path: &str, alt: &str, class: Option<&str>) -> String {
    let src = if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        url_for(config, path)
    };

    let class_attr = class
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default();

    format!(
        r#"<img src="{}" alt="{}"{} loading="lazy">"#,
        html_escape(&src),
        html_escape(alt),
        class_attr
    )
}

/// `tel:` href for a display phone number
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

/// `mailto:` href for an address
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", utf8_percent_encode(email.trim(), HREF_ESCAPE))
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = "/site/".to_string();
        config
    }

    #[test]
    fn test_link_to() {
        let config = test_config();
        assert_eq!(
            link_to(&config, "/contact/", "Contact", None),
            r#"<a href="/site/contact/">Contact</a>"#
        );
        assert_eq!(
            link_to(&config, "#contact", "Jump", Some("tf-btn")),
            r##"<a href="#contact" class="tf-btn">Jump</a>"##
        );
        assert!(link_to(&config, "https://x.com", "X", None).contains(r#"target="_blank""#));
    }

    #[test]
    fn test_image_tag_escapes_alt() {
        let config = test_config();
        let tag = image_tag(&config, "/images/a.jpg", "Jade & Nate", None);
        assert_eq!(
            tag,
            r#"<img src="/site/images/a.jpg" alt="Jade &amp; Nate" loading="lazy">"#
        );
    }

    #[test]
    fn test_contact_hrefs() {
        assert_eq!(tel_href("416-564-5464"), "tel:4165645464");
        assert_eq!(tel_href("+1 (416) 564 5464"), "tel:+14165645464");
        assert_eq!(mailto_href(" jameshall@property.ca "), "mailto:jameshall@property.ca");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("Meet <span>James</span>"), "Meet James");
    }
}
