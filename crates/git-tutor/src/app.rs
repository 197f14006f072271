// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Runs async requests against the shared [`AppState`]
//!
//! Each operation takes the lock to start a request and read its inputs,
//! releases it for the network call, then takes it again to dispatch the
//! completion. Overlapping calls for the same slot are allowed; the state's
//! tickets decide which result is kept.

use std::sync::Arc;

use chrono::Utc;
use git_tutor_ai::{AnalysisRequest, AnalysisService, GenerativeModel};
use git_tutor_github::{GithubClient, HttpTransport};
use tokio::sync::Mutex;
use tracing::debug;

use crate::state::{Action, AppState, Dispatch, Slot, View};

/// The orchestrator: state plus the two adapters that fill it
pub struct App<T, M> {
    state: Arc<Mutex<AppState>>,
    github: GithubClient<T>,
    ai: AnalysisService<M>,
}

impl<T: HttpTransport, M: GenerativeModel> App<T, M> {
    /// Create an app on the landing view
    #[must_use]
    pub fn new(github: GithubClient<T>, ai: AnalysisService<M>) -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::new())),
            github,
            ai,
        }
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> AppState {
        self.state.lock().await.clone()
    }

    /// Apply a synchronous action
    pub async fn dispatch(&self, action: Action) -> Dispatch {
        self.state.lock().await.dispatch(action)
    }

    /// Fill the landing inputs with the built-in demo
    pub async fn load_demo(&self) -> Dispatch {
        self.dispatch(Action::LoadDemo).await
    }

    /// Switch views
    pub async fn navigate(&self, view: View) -> Dispatch {
        self.dispatch(Action::Navigate(view)).await
    }

    /// Select the commit at `index` and show it
    pub async fn select_commit(&self, index: usize) -> Dispatch {
        self.dispatch(Action::SelectCommit(index)).await
    }

    /// Fill the log and description from the repository URL input
    pub async fn load_github(&self) -> Dispatch {
        let (ticket, url) = {
            let mut state = self.state.lock().await;
            let Dispatch::Started(ticket) = state.dispatch(Action::Start(Slot::Github)) else {
                return Dispatch::Ignored;
            };
            (ticket, state.inputs().repo_url.clone())
        };

        let outcome = self
            .github
            .fetch_repo_data(url.trim())
            .await
            .map_err(|e| e.to_string());

        self.dispatch(Action::GithubLoaded(ticket, outcome)).await
    }

    /// Analyse the log input
    pub async fn analyze(&self) -> Dispatch {
        let (ticket, request) = {
            let mut state = self.state.lock().await;
            let Dispatch::Started(ticket) = state.dispatch(Action::Start(Slot::Analysis)) else {
                return Dispatch::Ignored;
            };
            let inputs = state.inputs();
            let mut request = AnalysisRequest::new(inputs.log.clone());
            if !inputs.repo_url.trim().is_empty() {
                request = request.with_repo_url(inputs.repo_url.trim());
            }
            if !inputs.description.trim().is_empty() {
                request = request.with_description(inputs.description.trim());
            }
            (ticket, request)
        };

        let outcome = self
            .ai
            .analyze_log(&request)
            .await
            .map_err(|e| e.to_string());

        self.dispatch(Action::AnalysisFinished(ticket, outcome)).await
    }

    /// Explain the selected commit
    ///
    /// `student_mode` switches the tone first when given.
    pub async fn explain_selected(&self, student_mode: Option<bool>) -> Dispatch {
        let (ticket, commit, student_mode) = {
            let mut state = self.state.lock().await;
            if let Some(on) = student_mode {
                state.dispatch(Action::SetStudentMode(on));
            }
            let Dispatch::Started(ticket) = state.dispatch(Action::Start(Slot::Explanation))
            else {
                return Dispatch::Ignored;
            };
            let Some(commit) = state.selected_commit().cloned() else {
                return Dispatch::Ignored;
            };
            (ticket, commit, state.student_mode())
        };

        let outcome = self
            .ai
            .explain_commit(&commit, student_mode)
            .await
            .map_err(|e| e.to_string());

        self.dispatch(Action::ExplanationFinished(ticket, outcome))
            .await
    }

    /// Send a chat message about the analysed repository
    pub async fn send_chat(&self, content: impl Into<String>) -> Dispatch {
        let (ticket, transcript, context) = {
            let mut state = self.state.lock().await;
            let action = Action::SendChat {
                content: content.into(),
                at: Utc::now(),
            };
            let Dispatch::Started(ticket) = state.dispatch(action) else {
                return Dispatch::Ignored;
            };
            let Some(context) = state.analysis().cloned() else {
                return Dispatch::Ignored;
            };
            (ticket, state.transcript().messages().to_vec(), context)
        };
        debug!(turns = transcript.len(), "Chat turn started");

        let reply = self
            .ai
            .chat(&transcript, &context)
            .await
            .map_err(|e| e.to_string());

        self.dispatch(Action::ChatReplied {
            ticket,
            reply,
            at: Utc::now(),
        })
        .await
    }
}
