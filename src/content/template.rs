//! Placeholder interpolation
//!
//! Every derived string in the content document is produced here. Copy deck
//! templates reference agent fields as `{name}`, `{location}` and so on; the
//! loader resolves the whole deck in one pass before decoding it into typed
//! sections, so no view ever composes agent-dependent copy itself.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::agent::AgentIdentity;
use super::error::ConfigurationError;
use crate::helpers::html_escape;

lazy_static! {
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"\{([a-z_]+)\}").unwrap();
}

/// Fields whose key ends with this suffix carry trusted markup
const HTML_SUFFIX: &str = "Html";

/// Placeholder values derived from an agent identity
#[derive(Debug, Clone)]
pub struct Placeholders {
    values: IndexMap<&'static str, String>,
}

impl Placeholders {
    /// Build the placeholder table for an agent
    pub fn from_agent(agent: &AgentIdentity) -> Self {
        let mut values = IndexMap::new();
        values.insert("name", agent.name.clone());
        values.insert("first_name", agent.first_name.clone());
        values.insert("title", agent.title.clone());
        values.insert("designation", agent.designation.clone());
        values.insert("location", agent.location.clone());
        values.insert("region", agent.region.clone());
        values.insert("experience_years", agent.years().to_string());
        values.insert("phone", agent.phone.clone());
        values.insert("email", agent.email.clone());
        values.insert("address", agent.address.clone());
        values.insert("brokerage", agent.brokerage_name.clone());
        values.insert("headshot", agent.headshot_image_src.clone());
        values.insert("headshot_no_bg", agent.headshot_no_bg_image_src.clone());
        Self { values }
    }

    /// Look up a single placeholder value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Names of every supported placeholder, in a stable order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    /// Resolve the placeholders in one template
    ///
    /// `field` is only used to name the template in errors. With `escape` set,
    /// substituted values are HTML-escaped while the template text is kept.
    pub fn interpolate(
        &self,
        field: &str,
        template: &str,
        escape: bool,
    ) -> Result<String, ConfigurationError> {
        let mut result = String::with_capacity(template.len());
        let mut last = 0;

        for caps in PLACEHOLDER_RE.captures_iter(template) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let key = &caps[1];
            let value = self
                .get(key)
                .ok_or_else(|| ConfigurationError::UnknownPlaceholder {
                    field: field.to_string(),
                    placeholder: key.to_string(),
                })?;

            result.push_str(&template[last..whole.start()]);
            if escape {
                result.push_str(&html_escape(value));
            } else {
                result.push_str(value);
            }
            last = whole.end();
        }

        result.push_str(&template[last..]);
        Ok(result)
    }

    /// Resolve every string in a copy deck tree
    pub fn interpolate_tree(&self, value: Value) -> Result<Value, ConfigurationError> {
        self.walk(value, "", false)
    }

    fn walk(&self, value: Value, path: &str, escape: bool) -> Result<Value, ConfigurationError> {
        match value {
            Value::String(s) => Ok(Value::String(self.interpolate(path, &s, escape)?)),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| self.walk(item, &format!("{}[{}]", path, i), escape))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            Value::Object(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                for (key, item) in map {
                    let child = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", path, key)
                    };
                    let escape = escape || key.ends_with(HTML_SUFFIX);
                    out.insert(key, self.walk(item, &child, escape)?);
                }
                Ok(Value::Object(out))
            }
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::agent::tests::sample_agent;
    use serde_json::json;

    #[test]
    fn test_interpolate() {
        let p = Placeholders::from_agent(&sample_agent());
        assert_eq!(
            p.interpolate("metadata.baseTitleSuffix", "| {name} - {title}", false)
                .unwrap(),
            "| James Hall - Toronto Realtor"
        );
        assert_eq!(p.interpolate("x", "no placeholders", false).unwrap(), "no placeholders");
    }

    #[test]
    fn test_unknown_placeholder() {
        let p = Placeholders::from_agent(&sample_agent());
        let err = p
            .interpolate("hero.yearsCounterLabel", "Years in {city}", false)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnknownPlaceholder {
                field: "hero.yearsCounterLabel".to_string(),
                placeholder: "city".to_string(),
            }
        );
    }

    #[test]
    fn test_years_label_binds_location() {
        let p = Placeholders::from_agent(&sample_agent());
        let label = p.interpolate("l", "Years in {location}", false).unwrap();
        assert_eq!(label, "Years in Toronto");
        assert!(!label.contains('3'));
    }

    #[test]
    fn test_tree_paths_and_html_escape() {
        let mut agent = sample_agent();
        agent.name = "Jo & Co".to_string();
        let p = Placeholders::from_agent(&agent);

        let tree = json!({
            "hero": {
                "headlineHtml": "Meet <span>{name}</span>",
                "slides": [{ "description": "{name} in {location}" }]
            }
        });
        let out = p.interpolate_tree(tree).unwrap();
        assert_eq!(out["hero"]["headlineHtml"], "Meet <span>Jo &amp; Co</span>");
        assert_eq!(out["hero"]["slides"][0]["description"], "Jo & Co in Toronto");

        let bad = json!({ "faq": { "categories": [{ "title": "{nope}" }] } });
        match p.interpolate_tree(bad).unwrap_err() {
            ConfigurationError::UnknownPlaceholder { field, .. } => {
                assert_eq!(field, "faq.categories[0].title")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_placeholder_names() {
        let p = Placeholders::from_agent(&sample_agent());
        let names: Vec<_> = p.names().collect();
        assert_eq!(names.len(), 13);
        assert_eq!(names[0], "name");
        assert_eq!(p.get("experience_years"), Some("3"));
        assert_eq!(p.get("brokerage"), Some("Property.ca Inc. Brokerage"));
        assert_eq!(p.get("city"), None);
    }

    #[test]
    fn test_non_strings_untouched() {
        let p = Placeholders::from_agent(&sample_agent());
        let out = p.interpolate_tree(json!({ "id": 4, "flag": true })).unwrap();
        assert_eq!(out, json!({ "id": 4, "flag": true }));
    }
}
