// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository URL parsing

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::GithubError;

/// Matches `github.com/<owner>/<repo>`; the repo segment stops at `/` or `.`
/// so a trailing `.git` is dropped.
fn repo_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"github\.com/([^/]+)/([^/.]+)").expect("repository pattern is valid")
    })
}

/// An `(owner, repo)` pair extracted from a GitHub URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    /// Account or organisation that owns the repository
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RepoRef {
    /// Extract the owner and repository from a URL
    ///
    /// Accepts anything containing `github.com/<owner>/<repo>`, with or
    /// without scheme, trailing path or `.git` suffix.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::InvalidUrl`] when the pattern does not match.
    pub fn parse(url: &str) -> Result<Self, GithubError> {
        let captures = repo_pattern()
            .captures(url)
            .ok_or_else(|| GithubError::InvalidUrl {
                url: url.to_string(),
            })?;

        Ok(Self {
            owner: captures[1].to_string(),
            repo: captures[2].to_string(),
        })
    }

    /// Path of the repository metadata endpoint, relative to the API base
    #[must_use]
    pub fn api_path(&self) -> String {
        format!("/repos/{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
