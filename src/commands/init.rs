//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Site;

const CONFIG_TEMPLATE: &str = r##"# Site configuration

# URL
url: http://example.com
root: /
language: en

# Directory
public_dir: public
static_dir: static

# Uncomment to replace the built-in copy deck with your own
# copy: copy.yml

# Every page of the site is derived from this record
agent:
  name: James Hall
  first_name: James
  title: Toronto Realtor
  designation: REALTOR
  location: Toronto
  region: Greater Toronto Area
  experience_years: 3
  phone: 416-564-5464
  email: jameshall@property.ca
  address: 36 Distillery Lane, Suite 500, Toronto, ON
  brokerage_name: Property.ca Inc. Brokerage
  headshot_image_src: /images/agent/headshot.jpeg
  headshot_no_bg_image_src: /images/agent/headshot_bg.png
  logo_src: /images/logo/logo.svg
  social_links:
    - name: Facebook
      url: "#"
      icon_class: icon-fb
    - name: LinkedIn
      url: "#"
      icon_class: icon-linked
"##;

const STYLESHEET: &str = r#"body { margin: 0; font-family: sans-serif; color: #161e2d; }
main section { padding: 4rem 1.5rem; }
.tf-btn { display: inline-block; padding: .75rem 1.5rem; border-radius: 4px; background: #1563df; color: #fff; }
.tf-btn.style-border { background: transparent; border: 1px solid currentColor; }
.current-menu a { font-weight: 600; }
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    fs::create_dir_all(target_dir.join("static/css"))?;
    fs::create_dir_all(target_dir.join("static/images/agent"))?;
    fs::create_dir_all(target_dir.join("static/images/logo"))?;

    fs::write(&config_path, CONFIG_TEMPLATE)?;
    fs::write(target_dir.join("static/css/styles.css"), STYLESHEET)?;

    tracing::debug!("Wrote {:?}", config_path);
    Ok(())
}

/// Run the init command with an existing site
pub fn run(site: &Site) -> Result<()> {
    init_site(&site.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_site_loads() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.agent.name, "James Hall");
        assert_eq!(site.config.agent.social_links.len(), 2);
        assert_eq!(site.config.agent.social_links[1].icon_class, "icon-linked");
        assert!(site.config.agent.social_links.iter().all(|l| l.url == "#"));
        assert!(site.static_dir.join("css/styles.css").exists());

        let doc = site.load_content().unwrap();
        assert_eq!(doc.agent.first_name, "James");
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
