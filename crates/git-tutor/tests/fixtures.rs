// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test fixtures for git-tutor integration tests
//!
//! In-process stand-ins for GitHub and the generative model. The model
//! classifies commits from their conventional-commit prefix and falls back
//! to the keyword hints in the analysis prompt, which is enough to drive the
//! whole application deterministically.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use git_tutor::App;
use git_tutor_ai::{AiError, AnalysisService, GenerateContentRequest, GenerativeModel};
use git_tutor_github::{GithubClient, GithubError, HttpResponse, HttpTransport};
use serde_json::{Value, json};
use tokio::sync::Notify;

pub type TestApp = App<Arc<FakeTransport>, Arc<TutorModel>>;

/// Build an app over the given fakes
pub fn test_app(transport: Arc<FakeTransport>, model: Arc<TutorModel>) -> TestApp {
    App::new(GithubClient::new(transport), AnalysisService::new(model))
}

// ============================================================================
// GitHub
// ============================================================================

/// Serves canned responses by exact URL
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, HttpResponse>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn with(mut self, url: &str, status: u16, body: Value) -> Self {
        self.routes.insert(
            url.to_string(),
            HttpResponse {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("lock").clone()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, GithubError> {
        self.requests.lock().expect("lock").push(url.to_string());
        self.routes
            .get(url)
            .cloned()
            .ok_or_else(|| GithubError::Transport(format!("no route for {url}")))
    }
}

pub fn github_commit(sha: &str, message: &str) -> Value {
    json!({
        "sha": sha,
        "commit": {
            "author": {"name": "Ada", "email": "ada@example.com", "date": "2024-03-01T12:00:00Z"},
            "message": message
        }
    })
}

// ============================================================================
// Generative model
// ============================================================================

/// Which exchange a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    Analysis,
    Explanation,
    Chat,
}

pub fn exchange(request: &GenerateContentRequest) -> Exchange {
    if request.generation_config.is_some() {
        Exchange::Analysis
    } else if request.system_instruction.is_some() {
        Exchange::Chat
    } else {
        Exchange::Explanation
    }
}

/// Deterministic model that reads the prompt it is given
///
/// With `gate_first_analysis`, the first analysis call signals `entered`
/// and then waits for `release` before answering.
#[derive(Default)]
pub struct TutorModel {
    pub calls: Mutex<Vec<(String, GenerateContentRequest)>>,
    pub fail_with: Mutex<Option<AiError>>,
    pub gate_first_analysis: bool,
    pub entered: Notify,
    pub release: Notify,
    analyses: AtomicUsize,
}

impl TutorModel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn gated() -> Arc<Self> {
        Arc::new(Self {
            gate_first_analysis: true,
            ..Default::default()
        })
    }

    pub fn failing(error: AiError) -> Arc<Self> {
        Arc::new(Self {
            fail_with: Mutex::new(Some(error)),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> Vec<(String, GenerateContentRequest)> {
        self.calls.lock().expect("lock").clone()
    }

    pub fn exchanges(&self) -> Vec<Exchange> {
        self.calls().iter().map(|(_, r)| exchange(r)).collect()
    }
}

#[async_trait]
impl GenerativeModel for TutorModel {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<Option<String>, AiError> {
        self.calls
            .lock()
            .expect("lock")
            .push((model.to_string(), request.clone()));

        if let Some(error) = self.fail_with.lock().expect("lock").take() {
            return Err(error);
        }

        let prompt = request
            .contents
            .first()
            .map(|c| c.joined_text())
            .unwrap_or_default();

        match exchange(request) {
            Exchange::Analysis => {
                let call = self.analyses.fetch_add(1, Ordering::SeqCst);
                if self.gate_first_analysis && call == 0 {
                    self.entered.notify_one();
                    self.release.notified().await;
                }
                Ok(Some(analyse(&prompt).to_string()))
            }
            Exchange::Explanation => {
                let tone = prompt.lines().next().unwrap_or_default();
                Ok(Some(format!("{tone}\nThe change removes a real risk.")))
            }
            Exchange::Chat => {
                let live = request
                    .live_turn()
                    .map(|c| c.joined_text())
                    .unwrap_or_default();
                Ok(Some(format!("You asked: {live}")))
            }
        }
    }
}

/// Classify a commit subject the way a careful reviewer would
pub fn classify(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    let prefix = lower.split(':').next().unwrap_or_default().trim();
    match prefix {
        "feat" => return "Feature",
        "fix" => return "Bug Fix",
        "refactor" => return "Refactor",
        "perf" => return "Performance",
        "security" => return "Security",
        "docs" => return "Documentation",
        "chore" => return "Chore",
        _ => {}
    }
    if ["sanitize", "vuln", "secret", "auth"].iter().any(|k| lower.contains(k)) {
        "Security"
    } else if ["optimize", "slow", "memory"].iter().any(|k| lower.contains(k)) {
        "Performance"
    } else {
        "Chore"
    }
}

fn impact(category: &str) -> u8 {
    match category {
        "Security" => 9,
        "Feature" => 8,
        "Performance" => 7,
        "Bug Fix" => 6,
        "Refactor" => 5,
        _ => 2,
    }
}

/// Build an analysis payload from the raw log embedded in the prompt
pub fn analyse(prompt: &str) -> Value {
    let log = prompt.split("Raw Log:\n").nth(1).unwrap_or_default();
    let mut commits = Vec::new();
    let mut current: Option<serde_json::Map<String, Value>> = None;

    for line in log.lines() {
        if let Some(hash) = line.strip_prefix("commit ") {
            commits.extend(current.take());
            let mut c = serde_json::Map::new();
            c.insert("hash".into(), json!(hash.trim()));
            c.insert("shortHash".into(), json!(hash.trim().chars().take(7).collect::<String>()));
            c.insert("filesChanged".into(), json!(1));
            c.insert("codeSmells".into(), json!([]));
            current = Some(c);
        } else if let Some(c) = current.as_mut() {
            if let Some(author) = line.strip_prefix("Author: ") {
                let name = author.split(" <").next().unwrap_or(author);
                c.insert("author".into(), json!(name));
            } else if let Some(date) = line.strip_prefix("Date:") {
                c.insert("date".into(), json!(date.trim()));
            } else if let Some(message) = line.strip_prefix("Message: ") {
                let category = classify(message);
                c.insert("message".into(), json!(message));
                c.insert("type".into(), json!(category));
                c.insert("impactScore".into(), json!(impact(category)));
                c.insert("summary".into(), json!(format!("{category} change")));
                if category == "Bug Fix" {
                    c.insert("codeSmells".into(), json!(["Missing Null Check"]));
                }
            } else if line.contains(" changed,") {
                let n: u32 = line
                    .split_whitespace()
                    .next()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(1);
                c.insert("filesChanged".into(), json!(n));
            }
        }
    }
    commits.extend(current);

    json!({
        "repoName": "demo-project",
        "projectType": "NestJS API",
        "whatItIs": "A backend service.",
        "whatItDoes": "Authenticates users and serves analytics.",
        "overview": "Recent work hardened security and performance.",
        "commits": commits
    })
}
