//! View components
//!
//! Each component is a function that receives the document sub-tree(s) it
//! renders, by reference, and returns markup. Components only format: every
//! piece of copy comes from the content document. Navigation-dependent
//! behavior lives in [`NavContext`], never in the document.

mod blog;
mod common;
mod contact;
mod faq;
mod home;
mod layout;
mod loan;

pub use blog::{blog_detail, blog_grid, blog_section, post_card};
pub use common::{cta, not_found};
pub use contact::contact_section;
pub use faq::faq_page;
pub use home::{about, about_agent, brands, hero, projects, services, testimonials};
pub use layout::{footer, header, page};
pub use loan::loan_process;

use crate::config::SiteConfig;

/// Anchor of the contact form on the home page
pub const CONTACT_ANCHOR: &str = "contact";

/// Route of the page being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavContext<'a> {
    route: &'a str,
}

impl<'a> NavContext<'a> {
    pub fn new(route: &'a str) -> Self {
        Self { route }
    }

    pub fn home() -> NavContext<'static> {
        NavContext { route: "/" }
    }

    pub fn route(&self) -> &'a str {
        self.route
    }

    pub fn is_home(&self) -> bool {
        self.route.trim_matches('/').is_empty()
    }

    /// On the home page, contact links scroll to the in-page form
    pub fn contact_target(&self) -> String {
        if self.is_home() {
            format!("#{}", CONTACT_ANCHOR)
        } else {
            "/contact/".to_string()
        }
    }
}

/// Everything a component may know besides its content
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub config: &'a SiteConfig,
    pub nav: NavContext<'a>,
    /// Year shown in the footer
    pub year: i32,
}

impl<'a> ViewContext<'a> {
    pub fn new(config: &'a SiteConfig, route: &'a str, year: i32) -> Self {
        Self {
            config,
            nav: NavContext::new(route),
            year,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[test]
    fn test_nav_context() {
        assert!(NavContext::home().is_home());
        assert!(NavContext::new("").is_home());
        assert!(!NavContext::new("/faq/").is_home());
        assert_eq!(NavContext::home().contact_target(), "#contact");
        assert_eq!(NavContext::new("/blog/").contact_target(), "/contact/");
    }
}
