// SPDX-License-Identifier: Apache-2.0

use folio_model::{LogoType, Skill, SkillCategory};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SkillDto {
    pub id: i64,
    pub name: String,
    pub category: SkillCategory,
    pub logo: String,
    pub logo_type: LogoType,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Skill> for SkillDto {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id,
            name: skill.name.as_str().to_string(),
            category: skill.category,
            logo: skill.logo,
            logo_type: skill.logo_type,
            created_at: skill.created_at,
            updated_at: skill.updated_at,
        }
    }
}

/// Create/update body. Unknown fields are ignored, as the original
/// surface ignored them; missing `logo`/`logoType` take the documented
/// defaults downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SkillPayloadDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UploadResponseDto {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageDto {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_dto_uses_camel_case_on_the_wire() {
        let dto = SkillDto {
            id: 1,
            name: "React".to_string(),
            category: SkillCategory::Frontend,
            logo: "⚛️".to_string(),
            logo_type: LogoType::Emoji,
            created_at: 1,
            updated_at: 2,
        };
        let value = serde_json::to_value(&dto).expect("serialize");
        assert_eq!(value["logoType"], "emoji");
        assert_eq!(value["createdAt"], 1);
        assert_eq!(value["category"], "frontend");
    }

    #[test]
    fn payload_tolerates_unknown_fields() {
        let payload: SkillPayloadDto = serde_json::from_str(
            r#"{"name":"React","category":"frontend","proficiency":9}"#,
        )
        .expect("deserialize");
        assert_eq!(payload.name.as_deref(), Some("React"));
        assert!(payload.logo.is_none());
    }
}
