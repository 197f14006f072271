// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Prompt text sent to the model

use std::fmt::Write as _;

use crate::types::{AnalysisResult, Commit};

/// Shown in the prompt when the user left an optional field blank
const NOT_PROVIDED: &str = "Not provided";

/// Persona for the chat assistant
pub const CHAT_SYSTEM_INSTRUCTION: &str = "You are an AI Git Tutor for this specific repository. \
Use the provided commit history and project description to answer user questions. \
If you don't know the answer based on the history, say so. \
Be helpful, educational, and encouraging.";

/// Model turn that acknowledges the context preamble
pub const CHAT_PRIMER_REPLY: &str = "Understood. I have analyzed the repository history. \
Ask me anything about how the code has evolved, specific bugs, or architectural decisions.";

/// Audience of a commit explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Computer-science student, with analogies
    Beginner,
    /// Senior engineer doing code review
    #[default]
    Expert,
}

impl Tone {
    /// `true` selects [`Tone::Beginner`]
    #[must_use]
    pub fn from_student_mode(student_mode: bool) -> Self {
        if student_mode {
            Self::Beginner
        } else {
            Self::Expert
        }
    }

    /// Instruction line that opens the explanation prompt
    #[must_use]
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Beginner => {
                "Explain it like I am a computer science student beginner. Use analogies."
            }
            Self::Expert => {
                "Explain it like a Senior Engineer performing a code review. Be technical and concise."
            }
        }
    }
}

fn or_not_provided(value: Option<&str>) -> &str {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_PROVIDED)
}

/// Prompt for the full analysis call
#[must_use]
pub fn analysis_prompt(log: &str, repo_url: Option<&str>, description: Option<&str>) -> String {
    format!(
        "You are an expert Senior Software Engineer and Git Tutor.
Analyze the following raw git log to reconstruct the story of this repository.

Context provided by the user:
Repo URL: {url}
User's description of what the repo does: \"{description}\"

Use the user's description to ground \"What it does\", but verify it against the evidence in the git log.

Infer:
1. What kind of project this is (e.g. \"React Dashboard\", \"Go API\", \"Python Data Tool\") from file extensions and message context.
2. \"What it is\": a concise one-sentence pitch.
3. \"What it does\": a detailed paragraph explaining the functionality, tech stack, and recent evolution inferred from the changes.
4. An \"Overview\" of the history in this log (e.g. \"Recently the team focused on refactoring the auth module...\").

Then, for each commit:
1. Determine the 'type' (Feature, Bug Fix, Refactor, Chore, Documentation, Performance, Security).
   - Keywords like \"optimize\", \"slow\", \"memory\" suggest Performance.
   - Keywords like \"sanitize\", \"vuln\", \"auth\", \"secret\" suggest Security.
2. Assign an 'impactScore' from 1 to 10 based on how critical the change seems.
3. Write a 'summary' that explains the change simply for a junior developer.
4. Take 'filesChanged' from stat lines if available, otherwise estimate it.
5. List 'codeSmells' that might have triggered this change or are implied by the fix (e.g. \"Duplicate Code\", \"Magic Numbers\", \"Hardcoded Secrets\", \"Large Function\", \"Spaghetti Code\"). Use an empty array if there are none.

Raw Log:
{log}
",
        url = or_not_provided(repo_url),
        description = or_not_provided(description),
    )
}

/// Prompt for a single-commit explanation
#[must_use]
pub fn explanation_prompt(commit: &Commit, tone: Tone) -> String {
    let smells = if commit.code_smells.is_empty() {
        "None".to_string()
    } else {
        commit.code_smells.join(", ")
    };

    format!(
        "{instruction}

Analyze this commit:
Message: {message}
Author: {author}
Type: {category}
Code Smells Detected: {smells}

Explain the 'Why'. Why was this change needed? What problem did it solve? What is the potential impact?
If code smells were detected, explain why they are bad practice.
",
        instruction = tone.instruction(),
        message = commit.message,
        author = commit.author,
        category = commit.category,
    )
}

/// Repository summary that opens every chat conversation
#[must_use]
pub fn chat_context(result: &AnalysisResult) -> String {
    let mut context = format!(
        "Repo Name: {}\nProject Type: {}\nWhat it is: {}\nWhat it does: {}\nOverview: {}\nCommits:\n",
        result.repo_name, result.project_type, result.what_it_is, result.what_it_does, result.overview,
    );
    for c in &result.commits {
        // writing to a String cannot fail
        let _ = writeln!(context, "- [{}] {} ({})", c.display_hash(), c.message, c.category);
    }
    context
}

/// User turn carrying [`chat_context`]
#[must_use]
pub fn chat_preamble(result: &AnalysisResult) -> String {
    format!(
        "Here is the repository history context: {}",
        chat_context(result)
    )
}
