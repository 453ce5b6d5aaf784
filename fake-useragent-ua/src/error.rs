use std::{borrow::Cow, fmt};

use crate::Category;

/// Error returned when a user-agent category is requested
/// that is either not a known label or not present in the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory {
    label: Cow<'static, str>,
}

impl UnknownCategory {
    pub(crate) fn from_category(category: Category) -> Self {
        Self {
            label: Cow::Borrowed(category.as_str()),
        }
    }

    pub(crate) fn from_label(label: impl Into<String>) -> Self {
        Self {
            label: Cow::Owned(label.into()),
        }
    }

    /// The label of the category that was requested.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown user-agent category: {}", self.label)
    }
}

impl std::error::Error for UnknownCategory {}

fake_useragent_utils::macros::error::static_str_error! {
    #[doc = "invalid agent table: every category needs at least one non-empty user-agent string"]
    pub struct InvalidAgentTable;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_display() {
        let err = UnknownCategory::from_category(Category::Safari);
        assert_eq!(err.label(), "safari");
        assert_eq!(err.to_string(), "unknown user-agent category: safari");

        let err = UnknownCategory::from_label("netscape");
        assert_eq!(err.label(), "netscape");
        assert_eq!(err.to_string(), "unknown user-agent category: netscape");
    }

    #[test]
    fn test_invalid_agent_table_display() {
        assert_eq!(
            InvalidAgentTable::new().to_string(),
            "invalid agent table: every category needs at least one non-empty user-agent string"
        );
    }
}
