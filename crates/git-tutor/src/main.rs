// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! git-tutor: learn a repository from its commit history
//!
//! Reads commands from stdin and prints views to stdout. Logs go to stderr.

use anyhow::Context;
use clap::Parser;
use git_tutor::{App, Config, console};
use git_tutor_ai::{AnalysisService, GeminiClient};
use git_tutor_github::{GithubClient, ReqwestTransport};
use tokio::io::BufReader;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    config.validate().context("Invalid configuration")?;

    let transport = ReqwestTransport::new().context("Failed to build HTTP client")?;
    let github = GithubClient::with_api_base(transport, &config.github_api);

    let gemini = GeminiClient::new(config.resolved_api_key());
    if !gemini.has_credential() {
        warn!("No API key set (API_KEY or GEMINI_API_KEY); analysis and chat will fail");
    }
    let ai = AnalysisService::with_settings(gemini, config.model_settings());

    info!(
        model = %config.model,
        chat_model = %config.chat_model,
        github_api = %config.github_api,
        "Starting git-tutor"
    );

    let app = App::new(github, ai);
    console::run(&app, BufReader::new(tokio::io::stdin()), std::io::stdout()).await?;
    Ok(())
}
