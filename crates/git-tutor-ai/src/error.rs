// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for git-tutor-ai

use thiserror::Error;

/// Errors that can occur while talking to the generative model
#[derive(Debug, Error)]
pub enum AiError {
    /// No API key was configured
    #[error("API key is missing. Set API_KEY in the environment.")]
    MissingCredential,

    /// The model answered without any text payload
    #[error("Empty response from AI")]
    EmptyResponse,

    /// A chat call was made with no messages to send
    #[error("Chat transcript is empty")]
    EmptyTranscript,

    /// The request never produced a response
    #[error("AI request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("AI service error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the service's error body, or the raw body
        message: String,
    },

    /// The payload did not match the analysis schema
    #[error("AI response did not match the analysis schema: {0}")]
    Decode(#[from] serde_json::Error),
}
