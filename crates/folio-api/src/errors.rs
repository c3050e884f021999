// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ApiErrorCode {
    ValidationFailed,
    SkillExists,
    SkillNotFound,
    NoFileReceived,
    InvalidFileType,
    PayloadTooLarge,
    Internal,
}

impl ApiErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationFailed => "validation_failed",
            Self::SkillExists => "skill_exists",
            Self::SkillNotFound => "skill_not_found",
            Self::NoFileReceived => "no_file_received",
            Self::InvalidFileType => "invalid_file_type",
            Self::PayloadTooLarge => "payload_too_large",
            Self::Internal => "internal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn missing_fields() -> Self {
        Self::new(
            ApiErrorCode::ValidationFailed,
            "Name and category are required",
            json!({}),
        )
    }

    #[must_use]
    pub fn skill_exists() -> Self {
        Self::new(ApiErrorCode::SkillExists, "Skill already exists", json!({}))
    }

    #[must_use]
    pub fn skill_not_found(id: i64) -> Self {
        Self::new(
            ApiErrorCode::SkillNotFound,
            "Skill not found",
            json!({"id": id}),
        )
    }

    #[must_use]
    pub fn internal(message: &str) -> Self {
        Self::new(ApiErrorCode::Internal, message, json!({}))
    }
}

const _: fn() = || {
    fn assert_traits<T: Serialize + for<'de> Deserialize<'de>>() {}
    assert_traits::<ApiErrorCode>();
};
