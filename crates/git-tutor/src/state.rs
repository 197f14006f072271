// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Application state and its single dispatcher
//!
//! Every change to [`AppState`] goes through [`AppState::dispatch`]. Async
//! work is bracketed by a `Start` action, which hands out a [`Ticket`], and
//! a completion action carrying that ticket. A completion whose ticket is no
//! longer the latest for its slot is dropped, so the last request started
//! wins regardless of the order responses arrive in.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use git_tutor_ai::{AnalysisResult, ChatMessage, Commit, Transcript};
use git_tutor_github::GithubRepoData;
use tracing::{debug, warn};

use crate::demo;

/// Shown when the analysis call fails for any reason
pub const ANALYSIS_FAILED: &str =
    "Analysis failed. Please make sure the API Key is set in your environment.";

/// Shown in place of an explanation when the call fails
pub const EXPLANATION_FAILED: &str = "Failed to generate explanation. Please check your API key.";

/// Appended to the transcript when a chat call fails
pub const CHAT_FAILED: &str = "Sorry, I had trouble connecting to the AI brain.";

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Input form: URL, description, log
    #[default]
    Landing,
    /// Repository summary and aggregates
    Dashboard,
    /// One commit and its explanation
    CommitDetail,
}

/// A piece of state filled by an async call
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    /// Landing inputs filled from GitHub
    Github,
    /// The analysis result
    Analysis,
    /// Explanation of the selected commit
    Explanation,
    /// Assistant replies in the transcript
    Chat,
}

/// Identifies one in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    /// Slot the request will fill
    pub slot: Slot,
    /// Generation of the slot when the request started
    pub generation: u64,
}

/// Text the user typed on the landing view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingInputs {
    /// Repository URL
    pub repo_url: String,
    /// Free-text description of the project
    pub description: String,
    /// Raw `git log` output
    pub log: String,
}

/// Something that can change the state
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the URL input
    SetRepoUrl(String),
    /// Replace the description input
    SetDescription(String),
    /// Replace the log input
    SetLog(String),
    /// Fill the inputs with the built-in demo
    LoadDemo,
    /// Switch views
    Navigate(View),
    /// Select a commit by index and show it
    SelectCommit(usize),
    /// Choose the explanation tone
    SetStudentMode(bool),
    /// Begin a request for `Slot`
    Start(Slot),
    /// Append a user chat message and begin a chat request
    SendChat {
        /// Message text
        content: String,
        /// When it was sent
        at: DateTime<Utc>,
    },
    /// GitHub request finished
    GithubLoaded(Ticket, Result<GithubRepoData, String>),
    /// Analysis request finished
    AnalysisFinished(Ticket, Result<AnalysisResult, String>),
    /// Explanation request finished
    ExplanationFinished(Ticket, Result<String, String>),
    /// Chat request finished
    ChatReplied {
        /// Ticket from `SendChat`
        ticket: Ticket,
        /// Reply text or error description
        reply: Result<String, String>,
        /// When the reply arrived
        at: DateTime<Utc>,
    },
}

/// What [`AppState::dispatch`] did with an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// State changed
    Applied,
    /// Action made no sense in the current state and was dropped
    Ignored,
    /// A request may now be sent under this ticket
    Started(Ticket),
    /// A completion arrived for a superseded request and was dropped
    Stale,
}

/// Everything the session holds in memory
#[derive(Debug, Clone, Default)]
pub struct AppState {
    view: View,
    inputs: LandingInputs,
    analysis: Option<AnalysisResult>,
    selected: Option<usize>,
    student_mode: bool,
    explanation: Option<String>,
    transcript: Transcript,
    generations: BTreeMap<Slot, u64>,
    in_flight: BTreeMap<Slot, usize>,
    errors: BTreeMap<Slot, String>,
}

impl AppState {
    /// Fresh session on the landing view
    #[must_use]
    pub fn new() -> Self {
        Self {
            student_mode: true,
            ..Default::default()
        }
    }

    /// Current view
    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    /// Landing inputs
    #[must_use]
    pub fn inputs(&self) -> &LandingInputs {
        &self.inputs
    }

    /// Current analysis result
    #[must_use]
    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    /// Index of the selected commit
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected commit
    #[must_use]
    pub fn selected_commit(&self) -> Option<&Commit> {
        self.analysis.as_ref()?.commit(self.selected?)
    }

    /// Whether explanations use the beginner tone
    #[must_use]
    pub fn student_mode(&self) -> bool {
        self.student_mode
    }

    /// Explanation of the selected commit, once requested
    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Chat transcript
    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Whether a request for `slot` is outstanding
    #[must_use]
    pub fn is_busy(&self, slot: Slot) -> bool {
        self.in_flight.get(&slot).copied().unwrap_or(0) > 0
    }

    /// Last error for `slot`, cleared when a new request starts
    #[must_use]
    pub fn error(&self, slot: Slot) -> Option<&str> {
        self.errors.get(&slot).map(String::as_str)
    }

    fn generation(&self, slot: Slot) -> u64 {
        self.generations.get(&slot).copied().unwrap_or(0)
    }

    fn bump(&mut self, slot: Slot) -> u64 {
        let next = self.generation(slot) + 1;
        self.generations.insert(slot, next);
        next
    }

    fn start(&mut self, slot: Slot) -> Ticket {
        // Chat replies append rather than overwrite, so sends share a
        // generation that only moves when the transcript is reset.
        let generation = if slot == Slot::Chat {
            self.generation(slot)
        } else {
            self.bump(slot)
        };
        *self.in_flight.entry(slot).or_insert(0) += 1;
        self.errors.remove(&slot);
        debug!(?slot, generation, "Request started");
        Ticket { slot, generation }
    }

    /// Account for a finished request; `false` if its result must be dropped
    fn finish(&mut self, ticket: Ticket) -> bool {
        if let Some(n) = self.in_flight.get_mut(&ticket.slot) {
            *n = n.saturating_sub(1);
        }
        let current = self.generation(ticket.slot) == ticket.generation;
        if !current {
            warn!(
                slot = ?ticket.slot,
                generation = ticket.generation,
                latest = self.generation(ticket.slot),
                "Dropping stale result"
            );
        }
        current
    }

    fn select(&mut self, index: usize) -> Dispatch {
        let len = self.analysis.as_ref().map_or(0, |a| a.commits.len());
        if index >= len {
            return Dispatch::Ignored;
        }
        if self.selected != Some(index) {
            self.selected = Some(index);
            self.explanation = None;
            self.errors.remove(&Slot::Explanation);
            self.bump(Slot::Explanation);
        }
        self.view = View::CommitDetail;
        Dispatch::Applied
    }

    /// Apply an action
    pub fn dispatch(&mut self, action: Action) -> Dispatch {
        match action {
            Action::SetRepoUrl(url) => {
                self.inputs.repo_url = url;
                self.errors.remove(&Slot::Github);
                Dispatch::Applied
            }
            Action::SetDescription(description) => {
                self.inputs.description = description;
                Dispatch::Applied
            }
            Action::SetLog(log) => {
                self.inputs.log = log;
                Dispatch::Applied
            }
            Action::LoadDemo => {
                self.inputs = LandingInputs {
                    repo_url: demo::DEMO_REPO_URL.to_string(),
                    description: demo::DEMO_DESCRIPTION.to_string(),
                    log: demo::DEMO_GIT_LOG.trim().to_string(),
                };
                self.errors.remove(&Slot::Github);
                Dispatch::Applied
            }
            Action::Navigate(View::Landing) => {
                self.view = View::Landing;
                Dispatch::Applied
            }
            Action::Navigate(View::Dashboard) => {
                if self.analysis.is_none() {
                    return Dispatch::Ignored;
                }
                self.view = View::Dashboard;
                Dispatch::Applied
            }
            Action::Navigate(View::CommitDetail) => match self.selected {
                Some(_) if self.analysis.is_some() => {
                    self.view = View::CommitDetail;
                    Dispatch::Applied
                }
                _ => self.select(0),
            },
            Action::SelectCommit(index) => self.select(index),
            Action::SetStudentMode(on) => {
                self.student_mode = on;
                Dispatch::Applied
            }
            Action::Start(slot) => {
                let ready = match slot {
                    Slot::Github => !self.inputs.repo_url.trim().is_empty(),
                    Slot::Analysis => !self.inputs.log.trim().is_empty(),
                    Slot::Explanation => self.selected_commit().is_some(),
                    Slot::Chat => false,
                };
                if ready {
                    Dispatch::Started(self.start(slot))
                } else {
                    Dispatch::Ignored
                }
            }
            Action::SendChat { content, at } => {
                if content.trim().is_empty() || self.analysis.is_none() {
                    return Dispatch::Ignored;
                }
                self.transcript.push(ChatMessage::user(content, at));
                Dispatch::Started(self.start(Slot::Chat))
            }
            Action::GithubLoaded(ticket, outcome) => {
                if !self.finish(ticket) {
                    return Dispatch::Stale;
                }
                match outcome {
                    Ok(data) => {
                        self.inputs.log = data.log;
                        if !data.description.is_empty() {
                            self.inputs.description = data.description;
                        }
                    }
                    Err(message) => {
                        self.errors.insert(Slot::Github, message);
                    }
                }
                Dispatch::Applied
            }
            Action::AnalysisFinished(ticket, outcome) => {
                if !self.finish(ticket) {
                    return Dispatch::Stale;
                }
                match outcome {
                    Ok(result) => {
                        self.analysis = Some(result);
                        self.selected = None;
                        self.explanation = None;
                        self.transcript = Transcript::new();
                        self.bump(Slot::Explanation);
                        self.bump(Slot::Chat);
                        self.view = View::Dashboard;
                    }
                    Err(detail) => {
                        warn!(%detail, "Analysis failed");
                        self.errors.insert(Slot::Analysis, ANALYSIS_FAILED.to_string());
                    }
                }
                Dispatch::Applied
            }
            Action::ExplanationFinished(ticket, outcome) => {
                if !self.finish(ticket) {
                    return Dispatch::Stale;
                }
                match outcome {
                    Ok(text) => self.explanation = Some(text),
                    Err(detail) => {
                        warn!(%detail, "Explanation failed");
                        self.explanation = Some(EXPLANATION_FAILED.to_string());
                    }
                }
                Dispatch::Applied
            }
            Action::ChatReplied { ticket, reply, at } => {
                if !self.finish(ticket) {
                    return Dispatch::Stale;
                }
                let content = reply.unwrap_or_else(|detail| {
                    warn!(%detail, "Chat failed");
                    CHAT_FAILED.to_string()
                });
                self.transcript.push(ChatMessage::assistant(content, at));
                Dispatch::Applied
            }
        }
    }
}
