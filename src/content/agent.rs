//! Agent identity: the primitive record every derived field is built from

use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;

/// The agent the site is about
///
/// Read from the `agent:` block of `_config.yml` (snake_case keys) and exposed
/// to views under the `agent` section (camelCase keys).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase", deserialize = "snake_case"))]
pub struct AgentIdentity {
    /// Full name, e.g. "James Hall"
    pub name: String,
    /// Used in informal copy ("Call James")
    pub first_name: String,
    /// Professional title, e.g. "Toronto Realtor"
    pub title: String,
    /// e.g. "REALTOR", "Broker"
    pub designation: String,
    /// Primary city served
    pub location: String,
    /// Broader region served
    pub region: String,
    /// Absent is an error; zero is a valid value
    pub experience_years: Option<u32>,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub brokerage_name: String,
    pub headshot_image_src: String,
    pub headshot_no_bg_image_src: String,
    /// Brand mark shown in the header, hero badge and about section
    pub logo_src: Option<String>,
    pub social_links: Vec<SocialLink>,
}

/// A social profile shown in the footer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase", deserialize = "snake_case"))]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon_class: String,
}

impl AgentIdentity {
    /// Years of experience, zero until validated
    pub fn years(&self) -> u32 {
        self.experience_years.unwrap_or_default()
    }

    /// Check that every required field is populated
    ///
    /// Fields are checked in declaration order; the first empty one is reported.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let required = [
            ("name", &self.name),
            ("first_name", &self.first_name),
            ("title", &self.title),
            ("designation", &self.designation),
            ("location", &self.location),
            ("region", &self.region),
            ("phone", &self.phone),
            ("email", &self.email),
            ("address", &self.address),
            ("brokerage_name", &self.brokerage_name),
            ("headshot_image_src", &self.headshot_image_src),
            ("headshot_no_bg_image_src", &self.headshot_no_bg_image_src),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigurationError::MissingField(field.to_string()));
            }
        }

        if self.experience_years.is_none() {
            return Err(ConfigurationError::MissingField(
                "experience_years".to_string(),
            ));
        }

        if let Some(logo) = &self.logo_src {
            if logo.trim().is_empty() {
                return Err(ConfigurationError::MissingField("logo_src".to_string()));
            }
        }

        for (i, link) in self.social_links.iter().enumerate() {
            let fields = [
                ("name", &link.name),
                ("url", &link.url),
                ("icon_class", &link.icon_class),
            ];
            for (field, value) in fields {
                if value.trim().is_empty() {
                    return Err(ConfigurationError::MissingField(format!(
                        "social_links[{}].{}",
                        i, field
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_agent() -> AgentIdentity {
        AgentIdentity {
            name: "James Hall".to_string(),
            first_name: "James".to_string(),
            title: "Toronto Realtor".to_string(),
            designation: "REALTOR".to_string(),
            location: "Toronto".to_string(),
            region: "Greater Toronto Area".to_string(),
            experience_years: Some(3),
            phone: "416-564-5464".to_string(),
            email: "jameshall@property.ca".to_string(),
            address: "36 Distillery Lane, Suite 500, Toronto, ON".to_string(),
            brokerage_name: "Property.ca Inc. Brokerage".to_string(),
            headshot_image_src: "/images/agent/headshot.jpeg".to_string(),
            headshot_no_bg_image_src: "/images/agent/headshot_bg.png".to_string(),
            logo_src: Some("/images/logo/logo.svg".to_string()),
            social_links: vec![
                SocialLink {
                    name: "Facebook".to_string(),
                    url: "#".to_string(),
                    icon_class: "icon-fb".to_string(),
                },
                SocialLink {
                    name: "LinkedIn".to_string(),
                    url: "#".to_string(),
                    icon_class: "icon-linked".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_valid_agent() {
        assert_eq!(sample_agent().validate(), Ok(()));
    }

    #[test]
    fn test_missing_field_is_named() {
        let mut agent = sample_agent();
        agent.location = "  ".to_string();
        assert_eq!(
            agent.validate(),
            Err(ConfigurationError::MissingField("location".to_string()))
        );
    }

    #[test]
    fn test_missing_social_url() {
        let mut agent = sample_agent();
        agent.social_links[1].url.clear();
        assert_eq!(
            agent.validate(),
            Err(ConfigurationError::MissingField(
                "social_links[1].url".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_snake_case() {
        let yaml = r#"
name: Jane Roe
first_name: Jane
experience_years: 12
social_links:
  - name: Instagram
    url: https://instagram.com/jane
    icon_class: icon-ins
"#;
        let agent: AgentIdentity = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(agent.first_name, "Jane");
        assert_eq!(agent.experience_years, Some(12));
        assert_eq!(agent.social_links[0].icon_class, "icon-ins");
        assert_eq!(
            agent.validate(),
            Err(ConfigurationError::MissingField("title".to_string()))
        );
    }

    #[test]
    fn test_missing_experience_is_named() {
        let yaml = r##"
name: James Hall
first_name: James
title: Toronto Realtor
designation: REALTOR
location: Toronto
region: Greater Toronto Area
phone: 416-564-5464
email: jameshall@property.ca
address: 36 Distillery Lane
brokerage_name: Property.ca Inc. Brokerage
headshot_image_src: /images/agent/headshot.jpeg
headshot_no_bg_image_src: /images/agent/headshot_bg.png
"##;
        let agent: AgentIdentity = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(agent.experience_years, None);
        assert_eq!(
            agent.validate(),
            Err(ConfigurationError::MissingField(
                "experience_years".to_string()
            ))
        );

        let agent: AgentIdentity =
            serde_yaml::from_str(&format!("{}experience_years: 0\n", yaml)).unwrap();
        assert_eq!(agent.validate(), Ok(()));
        assert_eq!(agent.years(), 0);
    }

    #[test]
    fn test_serialize_camel_case() {
        let value = serde_json::to_value(sample_agent()).unwrap();
        assert_eq!(value["firstName"], "James");
        assert_eq!(value["experienceYears"], 3);
        assert_eq!(value["socialLinks"][0]["iconClass"], "icon-fb");
    }
}
