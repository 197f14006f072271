// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The three exchanges with the generative model
//!
//! - full analysis of a raw log into an [`AnalysisResult`]
//! - free-text explanation of one commit
//! - contextual chat over an analysis result
//!
//! Request construction is split out into `*_request` functions so the exact
//! payload can be inspected without a model.
//!
//! # Example
//!
//! ```no_run
//! use git_tutor_ai::{AnalysisRequest, AnalysisService, GeminiClient};
//!
//! # async fn run() -> Result<(), git_tutor_ai::AiError> {
//! let service = AnalysisService::new(GeminiClient::new(std::env::var("API_KEY").ok()));
//! let result = service
//!     .analyze_log(&AnalysisRequest::new("commit abc\nMessage: feat: init"))
//!     .await?;
//! println!("{} commits classified", result.commits.len());
//! # Ok(())
//! # }
//! ```

use tracing::{debug, info, warn};

use crate::error::AiError;
use crate::model::{Content, GenerateContentRequest, GenerationConfig, GenerativeModel, Role};
use crate::prompt::{self, Tone};
use crate::schema::analysis_schema;
use crate::types::{AnalysisResult, ChatMessage, ChatRole, Commit};

/// Returned by [`AnalysisService::explain_commit`] when the model gives no text
pub const EXPLANATION_FALLBACK: &str = "Could not generate explanation.";

/// Returned by [`AnalysisService::chat`] when the model gives no text
pub const CHAT_FALLBACK: &str = "I couldn't process that.";

/// Default model for analysis and explanations
pub const DEFAULT_ANALYSIS_MODEL: &str = "gemini-2.5-flash";

/// Default model for chat
pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-pro-preview";

/// Which model serves which exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSettings {
    /// Model for analysis and explanations
    pub analysis: String,
    /// Model for chat
    pub chat: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            analysis: DEFAULT_ANALYSIS_MODEL.to_string(),
            chat: DEFAULT_CHAT_MODEL.to_string(),
        }
    }
}

/// Input to the full analysis call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Raw `git log` text
    pub log: String,
    /// Repository URL, if the user gave one
    pub repo_url: Option<String>,
    /// User's description of the project, if any
    pub description: Option<String>,
}

impl AnalysisRequest {
    /// Request for a bare log
    #[must_use]
    pub fn new(log: impl Into<String>) -> Self {
        Self {
            log: log.into(),
            ..Default::default()
        }
    }

    /// Attach the repository URL
    #[must_use]
    pub fn with_repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }

    /// Attach the user's description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Decode and normalise the analysis payload
///
/// # Errors
///
/// Returns [`AiError::Decode`] when the text is not JSON of the analysis
/// shape, including when a commit carries an unknown category.
pub fn decode_analysis(text: &str) -> Result<AnalysisResult, AiError> {
    let mut result: AnalysisResult = serde_json::from_str(text.trim())?;

    if result.repo_url.as_deref().is_some_and(|u| u.trim().is_empty()) {
        result.repo_url = None;
    }

    let dups = result.duplicate_hashes();
    if !dups.is_empty() {
        warn!(duplicates = ?dups, "Analysis returned duplicate commit hashes");
    }

    Ok(result)
}

/// Build the full analysis request
#[must_use]
pub fn analysis_request(request: &AnalysisRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        generation_config: Some(GenerationConfig::json(analysis_schema())),
        ..GenerateContentRequest::prompt(prompt::analysis_prompt(
            &request.log,
            request.repo_url.as_deref(),
            request.description.as_deref(),
        ))
    }
}

/// Build the commit explanation request
#[must_use]
pub fn explanation_request(commit: &Commit, tone: Tone) -> GenerateContentRequest {
    GenerateContentRequest::prompt(prompt::explanation_prompt(commit, tone))
}

/// Build the chat request
///
/// Contents are the context preamble, the primer reply, every transcript
/// message but the last as history, then the last message as the live
/// turn.
///
/// # Errors
///
/// Returns [`AiError::EmptyTranscript`] when there is nothing to send.
pub fn chat_request(
    transcript: &[ChatMessage],
    context: &AnalysisResult,
) -> Result<GenerateContentRequest, AiError> {
    if transcript.is_empty() {
        return Err(AiError::EmptyTranscript);
    }

    let mut contents = Vec::with_capacity(transcript.len() + 2);
    contents.push(Content::text(Role::User, prompt::chat_preamble(context)));
    contents.push(Content::text(Role::Model, prompt::CHAT_PRIMER_REPLY));
    contents.extend(transcript.iter().map(|m| {
        let role = match m.role {
            ChatRole::User => Role::User,
            ChatRole::Assistant => Role::Model,
        };
        Content::text(role, m.content.as_str())
    }));

    Ok(GenerateContentRequest {
        contents,
        system_instruction: Some(Content::instruction(prompt::CHAT_SYSTEM_INSTRUCTION)),
        generation_config: None,
    })
}

/// Runs analysis, explanation and chat against a [`GenerativeModel`]
pub struct AnalysisService<M> {
    model: M,
    settings: ModelSettings,
}

impl<M: GenerativeModel> AnalysisService<M> {
    /// Create a service with the default model names
    #[must_use]
    pub fn new(model: M) -> Self {
        Self::with_settings(model, ModelSettings::default())
    }

    /// Create a service with explicit model names
    #[must_use]
    pub fn with_settings(model: M, settings: ModelSettings) -> Self {
        Self { model, settings }
    }

    /// Model names in use
    #[must_use]
    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    /// Classify every commit in a raw log
    ///
    /// # Errors
    ///
    /// - [`AiError::EmptyResponse`] when the model returns no payload
    /// - [`AiError::Decode`] when the payload violates the schema
    /// - any error from the model, unchanged
    pub async fn analyze_log(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AiError> {
        debug!(log_bytes = request.log.len(), "Requesting log analysis");
        let body = analysis_request(request);

        let text = self
            .model
            .generate_content(&self.settings.analysis, &body)
            .await?
            .ok_or(AiError::EmptyResponse)?;

        let result = decode_analysis(&text)?;
        info!(
            repo = %result.repo_name,
            commits = result.commits.len(),
            "Analysis complete"
        );
        Ok(result)
    }

    /// Explain why a commit was made
    ///
    /// `student_mode` selects the beginner tone over the expert one.
    ///
    /// # Errors
    ///
    /// Any error from the model, unchanged. An empty answer is not an
    /// error; it yields [`EXPLANATION_FALLBACK`].
    pub async fn explain_commit(&self, commit: &Commit, student_mode: bool) -> Result<String, AiError> {
        let tone = Tone::from_student_mode(student_mode);
        debug!(hash = %commit.hash, ?tone, "Requesting commit explanation");
        let body = explanation_request(commit, tone);

        Ok(self
            .model
            .generate_content(&self.settings.analysis, &body)
            .await?
            .unwrap_or_else(|| EXPLANATION_FALLBACK.to_string()))
    }

    /// Answer the last message of `transcript` in the context of `result`
    ///
    /// The whole transcript is replayed on every call.
    ///
    /// # Errors
    ///
    /// [`AiError::EmptyTranscript`] before any request when `transcript` is
    /// empty; otherwise any error from the model, unchanged. An empty
    /// answer yields [`CHAT_FALLBACK`].
    pub async fn chat(
        &self,
        transcript: &[ChatMessage],
        result: &AnalysisResult,
    ) -> Result<String, AiError> {
        let body = chat_request(transcript, result)?;
        debug!(history = transcript.len() - 1, "Sending chat turn");

        Ok(self
            .model
            .generate_content(&self.settings.chat, &body)
            .await?
            .unwrap_or_else(|| CHAT_FALLBACK.to_string()))
    }
}
