// SPDX-License-Identifier: Apache-2.0

use crate::dto::SkillPayloadDto;
use crate::errors::{ApiError, ApiErrorCode};
use folio_model::{LogoType, SkillCategory, SkillDraft, SkillName};
use serde_json::json;

/// Validates a write payload into a domain draft. Missing name or
/// category is the 400 case; malformed values surface field errors.
pub fn draft_from_payload(payload: &SkillPayloadDto) -> Result<SkillDraft, ApiError> {
    let (Some(raw_name), Some(raw_category)) = (payload.name.as_deref(), payload.category.as_deref())
    else {
        return Err(ApiError::missing_fields());
    };
    if raw_name.is_empty() || raw_category.is_empty() {
        return Err(ApiError::missing_fields());
    }

    let name = SkillName::parse(raw_name).map_err(|e| {
        ApiError::new(
            ApiErrorCode::ValidationFailed,
            "invalid skill name",
            json!({"field": "name", "reason": e.to_string()}),
        )
    })?;
    let category = SkillCategory::parse(raw_category).map_err(|e| {
        ApiError::new(
            ApiErrorCode::ValidationFailed,
            "invalid skill category",
            json!({"field": "category", "reason": e.to_string()}),
        )
    })?;
    let logo_type = match payload.logo_type.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(LogoType::parse(raw).map_err(|e| {
            ApiError::new(
                ApiErrorCode::ValidationFailed,
                "invalid logo type",
                json!({"field": "logoType", "reason": e.to_string()}),
            )
        })?),
    };

    Ok(SkillDraft::new(
        name,
        category,
        payload.logo.clone(),
        logo_type,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::DEFAULT_LOGO;

    fn payload(name: Option<&str>, category: Option<&str>) -> SkillPayloadDto {
        SkillPayloadDto {
            name: name.map(String::from),
            category: category.map(String::from),
            logo: None,
            logo_type: None,
        }
    }

    #[test]
    fn missing_name_or_category_is_the_400_shape() {
        for p in [
            payload(None, Some("frontend")),
            payload(Some("React"), None),
            payload(Some(""), Some("frontend")),
        ] {
            let err = draft_from_payload(&p).expect_err("validation");
            assert_eq!(err.code, ApiErrorCode::ValidationFailed);
        }
    }

    #[test]
    fn omitted_logo_fields_default_together() {
        let draft =
            draft_from_payload(&payload(Some("React"), Some("frontend"))).expect("draft");
        assert_eq!(draft.logo, DEFAULT_LOGO);
        assert_eq!(draft.logo_type, LogoType::Emoji);
    }

    #[test]
    fn explicit_logo_fields_pass_through() {
        let mut p = payload(Some("React"), Some("frontend"));
        p.logo = Some("⚛️".to_string());
        p.logo_type = Some("emoji".to_string());
        let draft = draft_from_payload(&p).expect("draft");
        assert_eq!(draft.logo, "⚛️");
        assert_eq!(draft.logo_type, LogoType::Emoji);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err =
            draft_from_payload(&payload(Some("React"), Some("fullstack"))).expect_err("category");
        assert_eq!(err.code, ApiErrorCode::ValidationFailed);
    }
}
