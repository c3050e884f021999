// SPDX-License-Identifier: Apache-2.0

use folio_api::{MessageDto, SkillDto, SkillPayloadDto, UploadResponseDto};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::path::Path;

#[derive(Debug)]
#[non_exhaustive]
pub enum CliError {
    /// Non-2xx answer; carries the server-provided message.
    Api { status: u16, message: String },
    Http(reqwest::Error),
    Io(std::io::Error),
    Usage(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api { status, message } => write!(f, "server error ({status}): {message}"),
            Self::Http(e) => write!(f, "request failed: {e}"),
            Self::Io(e) => write!(f, "io failure: {e}"),
            Self::Usage(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

fn mime_for_logo(path: &Path) -> Result<&'static str, CliError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => Ok("image/png"),
        Some("jpg" | "jpeg") => Ok("image/jpeg"),
        Some("svg") => Ok("image/svg+xml"),
        other => Err(CliError::Usage(format!(
            "unsupported logo file extension {other:?}; use png, jpg, jpeg, or svg"
        ))),
    }
}

pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    #[must_use]
    pub fn new(base: String) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    async fn expect_api<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, CliError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }
        let message = resp
            .json::<Value>()
            .await
            .ok()
            .and_then(|v| {
                v.pointer("/error/message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| status.to_string());
        Err(CliError::Api {
            status: status.as_u16(),
            message,
        })
    }

    pub async fn list_public(&self) -> Result<Vec<SkillDto>, CliError> {
        let resp = self
            .http
            .get(format!("{}/api/skills", self.base))
            .send()
            .await?;
        Self::expect_api(resp).await
    }

    pub async fn list_admin(&self) -> Result<Vec<SkillDto>, CliError> {
        let resp = self
            .http
            .get(format!("{}/api/admin/skills", self.base))
            .send()
            .await?;
        Self::expect_api(resp).await
    }

    pub async fn create(&self, payload: &SkillPayloadDto) -> Result<SkillDto, CliError> {
        let resp = self
            .http
            .post(format!("{}/api/admin/skills", self.base))
            .json(payload)
            .send()
            .await?;
        Self::expect_api(resp).await
    }

    pub async fn update(&self, id: i64, payload: &SkillPayloadDto) -> Result<SkillDto, CliError> {
        let resp = self
            .http
            .put(format!("{}/api/admin/skills/{id}", self.base))
            .json(payload)
            .send()
            .await?;
        Self::expect_api(resp).await
    }

    pub async fn delete(&self, id: i64) -> Result<MessageDto, CliError> {
        let resp = self
            .http
            .delete(format!("{}/api/admin/skills/{id}", self.base))
            .send()
            .await?;
        Self::expect_api(resp).await
    }

    pub async fn upload(&self, path: &Path) -> Result<UploadResponseDto, CliError> {
        let mime = mime_for_logo(path)?;
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("logo")
            .to_string();
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)
            .map_err(|e| CliError::Usage(e.to_string()))?;
        let resp = self
            .http
            .post(format!("{}/api/upload", self.base))
            .multipart(Form::new().part("file", part))
            .send()
            .await?;
        Self::expect_api(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn logo_mime_follows_the_server_allowlist() {
        assert_eq!(mime_for_logo(&PathBuf::from("a.png")).expect("png"), "image/png");
        assert_eq!(
            mime_for_logo(&PathBuf::from("a.jpeg")).expect("jpeg"),
            "image/jpeg"
        );
        assert!(mime_for_logo(&PathBuf::from("a.gif")).is_err());
        assert!(mime_for_logo(&PathBuf::from("noext")).is_err());
    }
}
