// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Analysis result, commit and chat types
//!
//! These are the shapes the model is asked to produce and the shapes the
//! rest of git-tutor holds in memory. Field names serialize in camelCase to
//! match the response schema.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

// ============================================================================
// Commit category
// ============================================================================

/// Closed set of commit categories
///
/// The same list feeds the response schema's `enum` and the decoder, so a
/// category outside this set fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CommitType {
    /// New functionality
    Feature,
    /// Defect fix
    #[serde(rename = "Bug Fix")]
    BugFix,
    /// Restructuring without behaviour change
    Refactor,
    /// Build, tooling or housekeeping
    Chore,
    /// Documentation only
    Documentation,
    /// Speed or memory improvement
    Performance,
    /// Security hardening or vulnerability fix
    Security,
    /// Could not be classified
    Unknown,
}

impl CommitType {
    /// Every category, in display order
    pub const ALL: [CommitType; 8] = [
        Self::Feature,
        Self::BugFix,
        Self::Refactor,
        Self::Chore,
        Self::Documentation,
        Self::Performance,
        Self::Security,
        Self::Unknown,
    ];

    /// Display label, identical to the serialized form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "Feature",
            Self::BugFix => "Bug Fix",
            Self::Refactor => "Refactor",
            Self::Chore => "Chore",
            Self::Documentation => "Documentation",
            Self::Performance => "Performance",
            Self::Security => "Security",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`CommitType`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown commit category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for CommitType {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// Impact score
// ============================================================================

/// Importance rating in `1..=10`
///
/// Decoding rounds fractional values and clamps out-of-range ones, since the
/// schema can only ask for a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ImpactScore(u8);

impl ImpactScore {
    /// Lowest score
    pub const MIN: u8 = 1;
    /// Highest score
    pub const MAX: u8 = 10;

    /// Wrap a score, rejecting values outside `1..=10`
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Round and clamp an arbitrary number into range
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if !value.is_finite() {
            return Self(Self::MIN);
        }
        let rounded = value.round().clamp(f64::from(Self::MIN), f64::from(Self::MAX));
        Self(rounded as u8)
    }

    /// The score as an integer
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for ImpactScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        let score = Self::clamped(raw);
        if f64::from(score.0) != raw {
            warn!(raw, clamped = score.0, "Impact score outside 1..=10, clamped");
        }
        Ok(score)
    }
}

impl fmt::Display for ImpactScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accept any JSON number as a non-negative count
fn count_from_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    // float-to-int casts saturate, NaN becomes 0
    Ok(raw.round().max(0.0) as u32)
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Commit and AnalysisResult
// ============================================================================

/// One classified commit, as produced by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    /// Full commit hash
    pub hash: String,
    /// Abbreviated hash
    #[serde(default)]
    pub short_hash: String,
    /// Author as written in the log
    #[serde(default)]
    pub author: String,
    /// Date as written in the log
    #[serde(default)]
    pub date: String,
    /// Commit message
    pub message: String,
    /// Category
    #[serde(rename = "type")]
    pub category: CommitType,
    /// Importance rating
    pub impact_score: ImpactScore,
    /// Junior-friendly one-line summary
    #[serde(default)]
    pub summary: String,
    /// Files touched, read from stat lines or estimated
    #[serde(default, deserialize_with = "count_from_number")]
    pub files_changed: u32,
    /// Suspected code smells
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code_smells: Vec<String>,
}

impl Commit {
    /// First line of the message
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Short hash, falling back to the first 7 characters of the full hash
    #[must_use]
    pub fn display_hash(&self) -> &str {
        if self.short_hash.is_empty() {
            let end = self
                .hash
                .char_indices()
                .nth(7)
                .map_or(self.hash.len(), |(i, _)| i);
            &self.hash[..end]
        } else {
            &self.short_hash
        }
    }
}

/// Everything the model inferred about a repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Repository name
    pub repo_name: String,
    /// Repository URL, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    /// Inferred kind of project, e.g. "Go API"
    #[serde(default)]
    pub project_type: String,
    /// One-sentence pitch
    #[serde(default)]
    pub what_it_is: String,
    /// Paragraph describing functionality and stack
    #[serde(default)]
    pub what_it_does: String,
    /// Narrative of the recent history
    #[serde(default)]
    pub overview: String,
    /// Commits in the order returned (newest first)
    #[serde(default)]
    pub commits: Vec<Commit>,
}

impl AnalysisResult {
    /// Commit at `index`
    #[must_use]
    pub fn commit(&self, index: usize) -> Option<&Commit> {
        self.commits.get(index)
    }

    /// Hashes that appear more than once, in first-seen order
    #[must_use]
    pub fn duplicate_hashes(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut dups = Vec::new();
        for c in &self.commits {
            if !seen.insert(c.hash.as_str()) && !dups.contains(&c.hash.as_str()) {
                dups.push(c.hash.as_str());
            }
        }
        dups
    }
}

// ============================================================================
// Chat
// ============================================================================

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The person using git-tutor
    User,
    /// The model
    Assistant,
}

/// One chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author of the message
    pub role: ChatRole,
    /// Message text
    pub content: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            timestamp,
        }
    }

    /// Create an assistant message
    #[must_use]
    pub fn assistant(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            timestamp,
        }
    }
}

/// Append-only chat history with strictly increasing timestamps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Create an empty transcript
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message
    ///
    /// A timestamp at or before the previous message's is moved to one
    /// millisecond after it.
    pub fn push(&mut self, mut message: ChatMessage) -> &ChatMessage {
        if let Some(last) = self.messages.last() {
            if message.timestamp <= last.timestamp {
                message.timestamp = last.timestamp + Duration::milliseconds(1);
            }
        }
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// All messages, oldest first
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Most recent message
    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Number of messages
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no message has been sent yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
