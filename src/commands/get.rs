//! Print a value from the content document

use anyhow::Result;

use crate::Site;

/// Resolve a dotted path such as `blog.posts.0.title` to pretty JSON
pub fn lookup(site: &Site, path: &str) -> Result<String> {
    let document = site.load_content()?;
    let value = document.lookup(path)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn run(site: &Site, path: &str) -> Result<()> {
    println!("{}", lookup(site, path)?);
    Ok(())
}
