// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Gemini REST client
//!
//! Calls `POST {base}/{model}:generateContent` directly with `reqwest`.
//! The key travels in the `x-goog-api-key` header, never in the URL, and
//! transport errors are stripped of their URL before formatting.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::error::AiError;
use crate::model::{GenerateContentRequest, GenerateContentResponse, GenerativeModel};

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Default Gemini model endpoint root
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// [`GenerativeModel`] backed by the Gemini HTTP API
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiClient {
    /// Create a client; a missing or blank key is accepted here and
    /// reported as [`AiError::MissingCredential`] on each call
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the endpoint root after construction.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Whether an API key is configured
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/{model}:generateContent", self.base_url)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<Option<String>, AiError> {
        let api_key = self.api_key.as_deref().ok_or(AiError::MissingCredential)?;
        let url = self.endpoint(model);
        debug!(%url, turns = request.contents.len(), "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await
            .map_err(|err| {
                AiError::Transport(format!("Gemini API request failed: {}", err.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, &body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| {
                AiError::Transport(format!("Failed to read Gemini response: {}", err.without_url()))
            })?;

        Ok(parsed.text())
    }
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn map_http_error(status: StatusCode, body: &str) -> AiError {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.to_string());

    AiError::Api {
        status: status.as_u16(),
        message,
    }
}
