// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! HTTP transport used by [`GithubClient`](crate::GithubClient)

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use crate::error::GithubError;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues anonymous GET requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform a GET request and return whatever the server answered
    ///
    /// Non-success statuses are returned as responses, not errors; only a
    /// failure to get any response is an `Err`.
    async fn get(&self, url: &str) -> Result<HttpResponse, GithubError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    async fn get(&self, url: &str) -> Result<HttpResponse, GithubError> {
        (**self).get(url).await
    }
}

/// [`HttpTransport`] backed by `reqwest`
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport that sends the headers the GitHub API expects
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Transport`] if the TLS backend cannot be
    /// initialised.
    pub fn new() -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("git-tutor/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| GithubError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, GithubError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GithubError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GithubError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
