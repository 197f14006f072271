// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! git-tutor-github: GitHub commit log adapter for git-tutor
//!
//! This library crate turns a GitHub repository URL into a `git log`-like
//! text blob and a description, using two anonymous calls to the public
//! GitHub REST API.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use git_tutor_github::{GithubClient, ReqwestTransport};
//!
//! # async fn run() -> Result<(), git_tutor_github::GithubError> {
//! let client = GithubClient::new(ReqwestTransport::new()?);
//! let data = client.fetch_repo_data("https://github.com/owner/repo").await?;
//! print!("{}", data.log);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod log;
pub mod repo;
pub mod transport;

pub use client::{COMMITS_PER_PAGE, DEFAULT_API_BASE, GithubClient, GithubRepoData};
pub use error::GithubError;
pub use repo::RepoRef;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::{GithubClient, GithubRepoData};
    pub use crate::error::GithubError;
    pub use crate::repo::RepoRef;
    pub use crate::transport::{HttpResponse, HttpTransport, ReqwestTransport};
}
