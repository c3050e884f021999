// SPDX-License-Identifier: Apache-2.0

use crate::ApiErrorCode;

/// Single source of truth for the code→status table. Validation-shaped
/// failures are 400, duplicates 409, missing rows 404, everything else
/// collapses to 500.
#[must_use]
pub const fn http_status_for(code: ApiErrorCode) -> u16 {
    match code {
        ApiErrorCode::ValidationFailed
        | ApiErrorCode::NoFileReceived
        | ApiErrorCode::InvalidFileType => 400,
        ApiErrorCode::SkillNotFound => 404,
        ApiErrorCode::SkillExists => 409,
        ApiErrorCode::PayloadTooLarge => 413,
        ApiErrorCode::Internal => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_matches_the_documented_statuses() {
        assert_eq!(http_status_for(ApiErrorCode::ValidationFailed), 400);
        assert_eq!(http_status_for(ApiErrorCode::InvalidFileType), 400);
        assert_eq!(http_status_for(ApiErrorCode::NoFileReceived), 400);
        assert_eq!(http_status_for(ApiErrorCode::SkillNotFound), 404);
        assert_eq!(http_status_for(ApiErrorCode::SkillExists), 409);
        assert_eq!(http_status_for(ApiErrorCode::PayloadTooLarge), 413);
        assert_eq!(http_status_for(ApiErrorCode::Internal), 500);
    }
}
