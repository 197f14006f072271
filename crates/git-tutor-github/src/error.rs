// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for git-tutor-github

use thiserror::Error;

/// Errors that can occur while turning a GitHub URL into a commit log
///
/// The display strings are shown to the user verbatim next to the URL input.
#[derive(Debug, Error)]
pub enum GithubError {
    /// The URL does not contain `github.com/<owner>/<repo>`
    #[error("Invalid GitHub URL. Please use format: https://github.com/owner/repo")]
    InvalidUrl {
        /// The URL as supplied by the user
        url: String,
    },

    /// Repository metadata request returned 404
    #[error("Repository not found.")]
    NotFound {
        /// Repository in `owner/repo` form
        repo: String,
    },

    /// Repository metadata request returned 403
    #[error("GitHub API rate limit exceeded. Please paste log manually.")]
    RateLimited,

    /// Any other non-success response
    #[error("Failed to fetch {resource}.")]
    Fetch {
        /// What was being fetched ("repository details" or "commits")
        resource: &'static str,
        /// HTTP status code of the failed response
        status: u16,
    },

    /// The request never produced a response
    #[error("GitHub request failed: {0}")]
    Transport(String),

    /// The response body was not the expected JSON shape
    #[error("Unexpected GitHub response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GithubError {
    /// HTTP status carried by this error, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::RateLimited => Some(403),
            Self::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}
