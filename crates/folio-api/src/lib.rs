#![forbid(unsafe_code)]
//! Wire contract: DTOs, error envelope, and error-code→status mapping.
//! The JSON field casing (`logoType`, `createdAt`) matches what the
//! admin client and marketing page already consume.

mod convert;
mod dto;
mod error_mapping;
mod errors;

pub use convert::draft_from_payload;
pub use dto::{MessageDto, SkillDto, SkillPayloadDto, UploadResponseDto};
pub use error_mapping::http_status_for;
pub use errors::{ApiError, ApiErrorCode};

pub const CRATE_NAME: &str = "folio-api";
pub const API_VERSION: &str = "1";
