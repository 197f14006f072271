// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fetch repository metadata and recent commits from the GitHub REST API
//!
//! Two sequential anonymous requests per call. Nothing is retried or
//! cached; rate limiting is reported, not waited out.
//!
//! # Example
//!
//! ```no_run
//! use git_tutor_github::{GithubClient, ReqwestTransport};
//!
//! # async fn run() -> Result<(), git_tutor_github::GithubError> {
//! let client = GithubClient::new(ReqwestTransport::new()?);
//! let data = client.fetch_repo_data("https://github.com/rust-lang/cargo").await?;
//! println!("{}: {}", data.name, data.description);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::{CommitItem, RepoMetadata};
use crate::error::GithubError;
use crate::log::synthesize_log;
use crate::repo::RepoRef;
use crate::transport::HttpTransport;

/// Public GitHub REST API root
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Number of commits requested from the commits endpoint
pub const COMMITS_PER_PAGE: usize = 30;

/// What the adapter hands back to the landing inputs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GithubRepoData {
    /// Repository description, empty when none is set
    pub description: String,
    /// Synthesized log text
    pub log: String,
    /// Canonical `owner/repo` name
    pub name: String,
}

/// GitHub log adapter
pub struct GithubClient<T> {
    transport: T,
    api_base: String,
}

impl<T: HttpTransport> GithubClient<T> {
    /// Create a client against the public API
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_api_base(transport, DEFAULT_API_BASE)
    }

    /// Create a client against a different API root (e.g. GitHub Enterprise)
    #[must_use]
    pub fn with_api_base(transport: T, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self {
            transport,
            api_base,
        }
    }

    /// The API root requests are sent to
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build a log and description for the repository at `url`
    ///
    /// # Errors
    ///
    /// - [`GithubError::InvalidUrl`] before any request if `url` is not a
    ///   GitHub repository URL
    /// - [`GithubError::NotFound`] / [`GithubError::RateLimited`] on a 404 /
    ///   403 metadata response, without fetching commits
    /// - [`GithubError::Fetch`] on any other non-success response
    /// - [`GithubError::Transport`] / [`GithubError::Decode`] when a
    ///   response is missing or malformed
    pub async fn fetch_repo_data(&self, url: &str) -> Result<GithubRepoData, GithubError> {
        let repo = RepoRef::parse(url)?;
        let metadata = self.fetch_metadata(&repo).await?;
        let commits = self.fetch_commits(&repo).await?;

        info!(
            repo = %metadata.full_name,
            commits = commits.len(),
            "Fetched GitHub history"
        );

        Ok(GithubRepoData {
            description: metadata.description.unwrap_or_default(),
            log: synthesize_log(&commits),
            name: metadata.full_name,
        })
    }

    async fn fetch_metadata(&self, repo: &RepoRef) -> Result<RepoMetadata, GithubError> {
        let url = format!("{}{}", self.api_base, repo.api_path());
        debug!(%url, "Fetching repository metadata");

        let response = self.transport.get(&url).await?;
        match response.status {
            s if (200..300).contains(&s) => Ok(serde_json::from_str(&response.body)?),
            404 => Err(GithubError::NotFound {
                repo: repo.to_string(),
            }),
            403 => Err(GithubError::RateLimited),
            status => Err(GithubError::Fetch {
                resource: "repository details",
                status,
            }),
        }
    }

    async fn fetch_commits(&self, repo: &RepoRef) -> Result<Vec<CommitItem>, GithubError> {
        let url = format!(
            "{}{}/commits?per_page={COMMITS_PER_PAGE}",
            self.api_base,
            repo.api_path()
        );
        debug!(%url, "Fetching commits");

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(GithubError::Fetch {
                resource: "commits",
                status: response.status,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}
