use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// What a length is being used for. Tags outside the four known ones are
/// kept verbatim in `Other` and take the default arm of every lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum UsageContext {
    #[default]
    Typography,
    Layout,
    Spacing,
    Borders,
    Other(String),
}

impl UsageContext {
    /// The named contexts, in the order they are offered to users
    pub const KNOWN: [UsageContext; 4] = [
        UsageContext::Typography,
        UsageContext::Layout,
        UsageContext::Spacing,
        UsageContext::Borders,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            UsageContext::Typography => "typography",
            UsageContext::Layout => "layout",
            UsageContext::Spacing => "spacing",
            UsageContext::Borders => "borders",
            UsageContext::Other(tag) => tag,
        }
    }
}

impl From<&str> for UsageContext {
    fn from(tag: &str) -> Self {
        // Tags are lookup keys: "Layout" is not "layout"
        match tag {
            "typography" => UsageContext::Typography,
            "layout" => UsageContext::Layout,
            "spacing" => UsageContext::Spacing,
            "borders" => UsageContext::Borders,
            _ => UsageContext::Other(tag.to_string()),
        }
    }
}

impl From<String> for UsageContext {
    fn from(tag: String) -> Self {
        UsageContext::from(tag.as_str())
    }
}

impl From<UsageContext> for String {
    fn from(context: UsageContext) -> Self {
        context.as_str().to_string()
    }
}

impl FromStr for UsageContext {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UsageContext::from(s))
    }
}

impl fmt::Display for UsageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(UsageContext::from("typography"), UsageContext::Typography);
        assert_eq!(UsageContext::from("layout"), UsageContext::Layout);
        assert_eq!(UsageContext::from("spacing"), UsageContext::Spacing);
        assert_eq!(UsageContext::from("borders"), UsageContext::Borders);
    }

    #[test]
    fn test_tags_match_exactly() {
        assert_eq!(
            UsageContext::from("Layout"),
            UsageContext::Other("Layout".to_string())
        );
        assert_eq!(
            UsageContext::from(" spacing "),
            UsageContext::Other(" spacing ".to_string())
        );
        assert_eq!(UsageContext::from("Layout").to_string(), "Layout");
    }

    #[test]
    fn test_unknown_tag_is_kept() {
        let context = UsageContext::from("icons");
        assert_eq!(context, UsageContext::Other("icons".to_string()));
        assert_eq!(context.to_string(), "icons");
    }

    #[test]
    fn test_serde_round_trips_through_tag() {
        assert_eq!(
            serde_json::to_string(&UsageContext::Borders).unwrap(),
            "\"borders\""
        );
        let context: UsageContext = serde_json::from_str("\"custom\"").unwrap();
        assert_eq!(context, UsageContext::Other("custom".to_string()));
    }
}
