//! remove.bg API client
//!
//! One multipart POST per image. No retry: a failed call is reported with the
//! status and body text the API returned.

use std::path::PathBuf;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};

/// Public remove.bg endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.remove.bg/v1.0/removebg";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "REMOVE_BG_API_KEY";

/// Longest response body kept in an error message
const MAX_ERROR_BODY: usize = 500;

#[derive(Debug, thiserror::Error)]
pub enum CutoutError {
    #[error("no remove.bg API key: pass --api-key or set {}", API_KEY_ENV)]
    MissingApiKey,

    #[error("failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("remove.bg request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("remove.bg returned {status}: {body}")]
    Api { status: StatusCode, body: String },
}

pub type Result<T> = std::result::Result<T, CutoutError>;

/// Pick the API key from the flag, then the environment. Blank values count
/// as missing.
pub fn resolve_api_key(flag: Option<String>, env: Option<String>) -> Result<String> {
    flag.into_iter()
        .chain(env)
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
        .ok_or(CutoutError::MissingApiKey)
}

/// remove.bg client
pub struct RemoveBgClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl RemoveBgClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    /// Client for a different endpoint, e.g. a local mock
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload `image` and return the cut-out PNG bytes.
    ///
    /// `size` is passed through as the API's `size` field (`auto`,
    /// `preview`, `full`, ...).
    pub async fn remove_background(
        &self,
        image: Vec<u8>,
        file_name: &str,
        size: &str,
    ) -> Result<Vec<u8>> {
        let form = Form::new()
            .part(
                "image_file",
                Part::bytes(image).file_name(file_name.to_string()),
            )
            .text("size", size.to_string());

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-Api-Key", self.api_key.as_str())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CutoutError::Api {
                status,
                body: truncate(body),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

fn truncate(mut body: String) -> String {
    if let Some((idx, _)) = body.char_indices().nth(MAX_ERROR_BODY) {
        body.truncate(idx);
        body.push_str("...");
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_prefers_flag() {
        let key = resolve_api_key(Some("flag".into()), Some("env".into())).unwrap();
        assert_eq!(key, "flag");
    }

    #[test]
    fn api_key_falls_back_to_env() {
        assert_eq!(
            resolve_api_key(Some("  ".into()), Some("env".into())).unwrap(),
            "env"
        );
        assert_eq!(resolve_api_key(None, Some("env".into())).unwrap(), "env");
    }

    #[test]
    fn missing_api_key_mentions_env_var() {
        let err = resolve_api_key(None, Some(String::new())).unwrap_err();
        assert!(matches!(err, CutoutError::MissingApiKey));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "é".repeat(MAX_ERROR_BODY + 10);
        let out = truncate(body);
        assert_eq!(out.chars().count(), MAX_ERROR_BODY + 3);
        assert!(out.ends_with("..."));
        assert_eq!(truncate("short".into()), "short");
    }

    #[test]
    fn default_endpoint() {
        assert_eq!(RemoveBgClient::new("k").endpoint(), DEFAULT_ENDPOINT);
    }
}
