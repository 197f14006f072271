// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The `generateContent` exchange and the trait that performs it
//!
//! Request and response shapes follow the Gemini REST API. They are public
//! so callers (and tests) can inspect exactly what would be sent.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AiError;

/// Speaker of a [`Content`] turn on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Human turn
    User,
    /// Model turn
    Model,
}

/// A text part of a turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Text content
    pub text: String,
}

/// One conversation turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Speaker; omitted for system instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Parts of the turn
    pub parts: Vec<Part>,
}

impl Content {
    /// A single-part turn
    #[must_use]
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role: Some(role),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// A single-part system instruction
    #[must_use]
    pub fn instruction(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// All text parts joined together
    #[must_use]
    pub fn joined_text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Output constraints for structured generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// MIME type of the expected output
    pub response_mime_type: String,
    /// OpenAPI-style schema the output must satisfy
    pub response_schema: Value,
}

impl GenerationConfig {
    /// JSON output constrained by `schema`
    #[must_use]
    pub fn json(schema: Value) -> Self {
        Self {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
        }
    }
}

/// Body of a `generateContent` request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns, oldest first; the last one is answered
    pub contents: Vec<Content>,
    /// Persona and ground rules for the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// Structured output constraints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// A single user turn with no extra configuration
    #[must_use]
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::text(Role::User, text)],
            system_instruction: None,
            generation_config: None,
        }
    }

    /// The turn the model is asked to answer
    #[must_use]
    pub fn live_turn(&self) -> Option<&Content> {
        self.contents.last()
    }
}

/// Body of a `generateContent` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidate answers
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One candidate answer
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Answer content; absent when generation was blocked
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// Parts of a candidate answer
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    /// Answer parts
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

/// One part of a candidate answer
#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    /// Text, absent for non-text parts
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, `None` when there is none
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

/// Something that can answer a `generateContent` request
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Send `request` to `model` and return the answer text
    ///
    /// `Ok(None)` means the service answered without any text.
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<Option<String>, AiError>;
}

#[async_trait]
impl<T: GenerativeModel + ?Sized> GenerativeModel for std::sync::Arc<T> {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<Option<String>, AiError> {
        (**self).generate_content(model, request).await
    }
}
