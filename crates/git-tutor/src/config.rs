// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the git-tutor console
//!
//! Every setting can come from a flag or an environment variable. There is
//! no config file and nothing is written to disk.

use clap::Parser;
use git_tutor_ai::ModelSettings;
use git_tutor_ai::service::{DEFAULT_ANALYSIS_MODEL, DEFAULT_CHAT_MODEL};
use git_tutor_github::DEFAULT_API_BASE;

/// Secondary variable consulted when `API_KEY` is unset
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// AI Git Tutor - learn a repository from its commit history
#[derive(Parser, Debug, Clone)]
#[command(name = "git-tutor")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Gemini API key
    ///
    /// Optional at startup; analysis, explanations and chat fail until one
    /// is provided. Falls back to GEMINI_API_KEY.
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for log analysis and commit explanations
    #[arg(long, env = "GIT_TUTOR_MODEL", default_value = DEFAULT_ANALYSIS_MODEL)]
    pub model: String,

    /// Model used for chat
    #[arg(long, env = "GIT_TUTOR_CHAT_MODEL", default_value = DEFAULT_CHAT_MODEL)]
    pub chat_model: String,

    /// GitHub REST API root
    #[arg(long, env = "GIT_TUTOR_GITHUB_API", default_value = DEFAULT_API_BASE)]
    pub github_api: String,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they do not mix with the console
    /// output on stdout.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_ANALYSIS_MODEL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            github_api: DEFAULT_API_BASE.to_string(),
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// The credential from `--api-key`/`API_KEY`, else `GEMINI_API_KEY`
    ///
    /// Blank values count as absent.
    #[must_use]
    pub fn resolved_api_key(&self) -> Option<String> {
        resolve_api_key(self.api_key.as_deref(), || {
            std::env::var(FALLBACK_API_KEY_ENV).ok()
        })
    }

    /// Model names for the analysis service
    #[must_use]
    pub fn model_settings(&self) -> ModelSettings {
        ModelSettings {
            analysis: self.model.clone(),
            chat: self.chat_model.clone(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A model name is empty
    /// - The GitHub API root is not an http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel("--model"));
        }
        if self.chat_model.trim().is_empty() {
            return Err(ConfigError::EmptyModel("--chat-model"));
        }
        let api = self.github_api.trim();
        let has_host = api
            .strip_prefix("https://")
            .or_else(|| api.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ConfigError::InvalidApiBase(self.github_api.clone()));
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

fn resolve_api_key(
    explicit: Option<&str>,
    fallback: impl FnOnce() -> Option<String>,
) -> Option<String> {
    let non_blank = |k: &String| !k.trim().is_empty();
    explicit
        .map(str::to_string)
        .filter(non_blank)
        .or_else(fallback)
        .filter(non_blank)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A model flag was given an empty value
    #[error("Model name for {0} must not be empty")]
    EmptyModel(&'static str),

    /// GitHub API root is not usable
    #[error("GitHub API base must be an http(s) URL: {0}")]
    InvalidApiBase(String),
}
