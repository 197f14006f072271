// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! git-tutor-ai: Generative-AI analysis contract for git-tutor
//!
//! This library crate defines the request and response shapes exchanged
//! with the generative model (full log analysis, commit explanation and
//! contextual chat) and a Gemini REST client that performs them.

#![warn(missing_docs)]

//! ## Contract
//!
//! The analysis call is constrained by a JSON response schema whose
//! category `enum` is generated from [`CommitType`], the same closed type
//! the decoder uses. A category outside that set fails to decode instead of
//! passing through as a string.
//!
//! ## Testing without a network
//!
//! Every exchange goes through the [`GenerativeModel`] trait, so tests can
//! substitute an in-process model and inspect the exact
//! [`GenerateContentRequest`] that would have been sent.

pub mod error;
pub mod gemini;
pub mod model;
pub mod prompt;
pub mod schema;
pub mod service;
pub mod types;

pub use error::AiError;
pub use gemini::GeminiClient;
pub use model::{Content, GenerateContentRequest, GenerativeModel, Role};
pub use prompt::Tone;
pub use service::{
    AnalysisRequest, AnalysisService, CHAT_FALLBACK, EXPLANATION_FALLBACK, ModelSettings,
    analysis_request, chat_request, decode_analysis, explanation_request,
};
pub use types::{
    AnalysisResult, ChatMessage, ChatRole, Commit, CommitType, ImpactScore, Transcript,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::AiError;
    pub use crate::model::GenerativeModel;
    pub use crate::service::{AnalysisRequest, AnalysisService, ModelSettings};
    pub use crate::types::{AnalysisResult, ChatMessage, ChatRole, Commit, CommitType, Transcript};
}
