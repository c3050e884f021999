// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const NAME_MAX_LEN: usize = 64;

/// Placeholder used when a skill is written without a logo.
pub const DEFAULT_LOGO: &str = "💻";

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    Trimmed(&'static str),
    TooLong(&'static str, usize),
    InvalidValue(&'static str),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::Trimmed(name) => {
                write!(f, "{name} must not contain leading/trailing whitespace")
            }
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
            Self::InvalidValue(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ParseError {}

/// Case-folded form used for the uniqueness constraint.
#[must_use]
pub fn normalize_skill_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct SkillName(String);

impl SkillName {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("name"));
        }
        if input.trim() != input {
            return Err(ParseError::Trimmed("name"));
        }
        if input.chars().count() > NAME_MAX_LEN {
            return Err(ParseError::TooLong("name", NAME_MAX_LEN));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn normalized(&self) -> String {
        normalize_skill_name(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "tools" => Ok(Self::Tools),
            _ => Err(ParseError::InvalidValue(
                "category must be one of 'frontend', 'backend', 'tools'",
            )),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Tools => "tools",
        }
    }

    /// Display label for listings, as rendered on the marketing page.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools & Others",
        }
    }
}

/// How a skill's icon is sourced: an inline emoji glyph, an external
/// image URL, or a locally uploaded image file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum LogoType {
    Emoji,
    Url,
    Upload,
}

impl LogoType {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "emoji" => Ok(Self::Emoji),
            "url" => Ok(Self::Url),
            "upload" => Ok(Self::Upload),
            _ => Err(ParseError::InvalidValue(
                "logo_type must be one of 'emoji', 'url', 'upload'",
            )),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emoji => "emoji",
            Self::Url => "url",
            Self::Upload => "upload",
        }
    }
}

impl Default for LogoType {
    fn default() -> Self {
        Self::Emoji
    }
}

/// A persisted skill row. Timestamps are epoch milliseconds assigned by
/// the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Skill {
    pub id: i64,
    pub name: SkillName,
    pub category: SkillCategory,
    pub logo: String,
    pub logo_type: LogoType,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Skill {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: i64,
        name: SkillName,
        category: SkillCategory,
        logo: String,
        logo_type: LogoType,
        created_at: i64,
        updated_at: i64,
    ) -> Self {
        Self {
            id,
            name,
            category,
            logo,
            logo_type,
            created_at,
            updated_at,
        }
    }
}

/// Write-side payload for create/update. `logo` and `logo_type` default
/// together when omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDraft {
    pub name: SkillName,
    pub category: SkillCategory,
    pub logo: String,
    pub logo_type: LogoType,
}

impl SkillDraft {
    pub fn new(
        name: SkillName,
        category: SkillCategory,
        logo: Option<String>,
        logo_type: Option<LogoType>,
    ) -> Self {
        let logo = match logo {
            Some(l) if !l.is_empty() => l,
            _ => DEFAULT_LOGO.to_string(),
        };
        Self {
            name,
            category,
            logo,
            logo_type: logo_type.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rejects_empty_and_padded() {
        assert_eq!(SkillName::parse(""), Err(ParseError::Empty("name")));
        assert_eq!(
            SkillName::parse(" React"),
            Err(ParseError::Trimmed("name"))
        );
        assert_eq!(
            SkillName::parse(&"x".repeat(NAME_MAX_LEN + 1)),
            Err(ParseError::TooLong("name", NAME_MAX_LEN))
        );
    }

    #[test]
    fn normalization_folds_case() {
        let a = SkillName::parse("React").expect("name");
        let b = SkillName::parse("rEACT").expect("name");
        assert_eq!(a.normalized(), b.normalized());
    }

    #[test]
    fn draft_defaults_logo_and_type_together() {
        let draft = SkillDraft::new(
            SkillName::parse("Git").expect("name"),
            SkillCategory::Tools,
            None,
            None,
        );
        assert_eq!(draft.logo, DEFAULT_LOGO);
        assert_eq!(draft.logo_type, LogoType::Emoji);
    }

    #[test]
    fn draft_empty_logo_falls_back_to_placeholder() {
        let draft = SkillDraft::new(
            SkillName::parse("Git").expect("name"),
            SkillCategory::Tools,
            Some(String::new()),
            Some(LogoType::Url),
        );
        assert_eq!(draft.logo, DEFAULT_LOGO);
        assert_eq!(draft.logo_type, LogoType::Url);
    }

    #[test]
    fn category_round_trips_wire_values() {
        for raw in ["frontend", "backend", "tools"] {
            let cat = SkillCategory::parse(raw).expect("category");
            assert_eq!(cat.as_str(), raw);
        }
        assert!(SkillCategory::parse("Frontend").is_err());
    }
}
