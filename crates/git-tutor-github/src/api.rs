// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! GitHub REST response shapes
//!
//! Only the fields the log adapter reads are declared; everything else in
//! the response is ignored by serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoMetadata {
    /// Canonical `owner/repo` name
    pub full_name: String,
    /// Free-text description, `null` when the owner never set one
    #[serde(default)]
    pub description: Option<String>,
}

/// One element of `GET /repos/{owner}/{repo}/commits`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitItem {
    /// Full commit SHA
    pub sha: String,
    /// Git-level commit data
    pub commit: CommitDetail,
}

/// The `commit` object inside a [`CommitItem`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitDetail {
    /// Git author identity; GitHub sends `null` for some imported commits
    #[serde(default)]
    pub author: Option<CommitAuthor>,
    /// Full commit message
    pub message: String,
}

/// Git author identity and authoring time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAuthor {
    /// Author name
    #[serde(default)]
    pub name: Option<String>,
    /// Author email
    #[serde(default)]
    pub email: Option<String>,
    /// Authoring timestamp (ISO 8601)
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}
