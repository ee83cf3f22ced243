//! Content loading and resolution errors

use thiserror::Error;

/// The agent record or the copy deck cannot produce a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("required agent field `{0}` is missing or empty")]
    MissingField(String),

    #[error("copy field `{field}` references unknown placeholder `{{{placeholder}}}`")]
    UnknownPlaceholder { field: String, placeholder: String },

    #[error("copy field `{0}` must not be empty")]
    EmptyField(String),

    #[error("invalid copy deck: {0}")]
    InvalidCopy(String),

    #[error("copy field `{field}` has invalid identifier `{id}`: {rule}")]
    InvalidIdentifier {
        field: String,
        id: String,
        rule: &'static str,
    },
}

/// A cross-reference between sections did not resolve
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("blog post {0} has a summary but no detail")]
    MissingPostDetail(u32),

    #[error("blog post {0} has a detail but no summary")]
    MissingPostSummary(u32),

    #[error("no blog post with id {0}")]
    UnknownPost(u32),

    #[error("no FAQ entry with anchor `{0}`")]
    UnknownAnchor(String),

    #[error("no content at path `{0}`")]
    UnknownPath(String),
}

/// Any failure while building a content document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("duplicate {section} id `{id}`")]
    DuplicateIdentifier { section: &'static str, id: String },

    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

impl ContentError {
    pub(crate) fn duplicate(section: &'static str, id: impl ToString) -> Self {
        Self::DuplicateIdentifier {
            section,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = ContentError::from(ConfigurationError::MissingField("location".to_string()));
        assert_eq!(
            err.to_string(),
            "required agent field `location` is missing or empty"
        );

        let err = ConfigurationError::UnknownPlaceholder {
            field: "hero.yearsCounterLabel".to_string(),
            placeholder: "city".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "copy field `hero.yearsCounterLabel` references unknown placeholder `{city}`"
        );
    }

    #[test]
    fn test_duplicate_message() {
        let err = ContentError::duplicate("testimonial", 3);
        assert_eq!(err.to_string(), "duplicate testimonial id `3`");
    }
}
