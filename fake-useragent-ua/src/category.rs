use fake_useragent_utils::macros::str::match_ignore_ascii_case_str;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

use crate::UnknownCategory;

/// The browser family a user-agent string belongs to.
///
/// Used as the key of an [`AgentTable`](crate::AgentTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Google Chrome
    Chrome,
    /// Mozilla Firefox
    Firefox,
    /// Apple Safari
    Safari,
    /// Microsoft Edge (Chromium based)
    Edge,
    /// Opera (Chromium based)
    Opera,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Chrome,
        Self::Firefox,
        Self::Safari,
        Self::Edge,
        Self::Opera,
    ];

    /// The lowercase label of the category, e.g. `"chrome"`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
            Self::Safari => "safari",
            Self::Edge => "edge",
            Self::Opera => "opera",
        }
    }

    /// The product token identifying this family within a user-agent string.
    ///
    /// Chromium derived browsers also advertise `Chrome` and `Safari`,
    /// so the token is only meaningful to check for presence.
    #[must_use]
    pub fn product_token(&self) -> &'static str {
        match self {
            Self::Chrome => "Chrome",
            Self::Firefox => "Firefox",
            Self::Safari => "Safari",
            Self::Edge => "Edg",
            Self::Opera => "OPR",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "chrome" | "google-chrome" => Ok(Self::Chrome),
                "firefox" | "ff" => Ok(Self::Firefox),
                "safari" => Ok(Self::Safari),
                "edge" => Ok(Self::Edge),
                "opera" => Ok(Self::Opera),
                _ => Err(UnknownCategory::from_label(s)),
            }
        }
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{Token, assert_de_tokens_error, assert_tokens};

    #[test]
    fn test_category_parse() {
        assert_eq!("chrome".parse::<Category>().unwrap(), Category::Chrome);
        assert_eq!("ChRoMe".parse::<Category>().unwrap(), Category::Chrome);
        assert_eq!(
            "google-chrome".parse::<Category>().unwrap(),
            Category::Chrome
        );
        assert_eq!("FIREFOX".parse::<Category>().unwrap(), Category::Firefox);
        assert_eq!("ff".parse::<Category>().unwrap(), Category::Firefox);
        assert_eq!("safari".parse::<Category>().unwrap(), Category::Safari);
        assert_eq!("Edge".parse::<Category>().unwrap(), Category::Edge);
        assert_eq!("opera".parse::<Category>().unwrap(), Category::Opera);
    }

    #[test]
    fn test_category_parse_unknown() {
        let err = "netscape".parse::<Category>().unwrap_err();
        assert_eq!(err.label(), "netscape");

        let err = "".parse::<Category>().unwrap_err();
        assert_eq!(err.label(), "");
    }

    #[test]
    fn test_category_display_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_serde() {
        assert_tokens(&Category::Chrome, &[Token::Str("chrome")]);
        assert_tokens(&Category::Firefox, &[Token::Str("firefox")]);
        assert_de_tokens_error::<Category>(
            &[Token::Str("lynx")],
            "unknown user-agent category: lynx",
        );
    }

    #[test]
    fn test_category_order_follows_declaration() {
        let mut categories = Category::ALL;
        categories.reverse();
        categories.sort();
        assert_eq!(categories, Category::ALL);
    }
}
