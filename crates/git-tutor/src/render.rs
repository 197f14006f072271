// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Plain-text rendering of each view

use std::fmt::Write as _;

use git_tutor_ai::{AnalysisResult, ChatRole, Commit, Transcript};

use crate::dashboard::DashboardStats;
use crate::state::{AppState, Slot, View};

const RULE: &str = "------------------------------------------------------------";

/// Render whatever the current view shows
#[must_use]
pub fn view(state: &AppState) -> String {
    match (state.view(), state.analysis()) {
        (View::Dashboard, Some(result)) => dashboard(result),
        (View::CommitDetail, Some(_)) => commit_detail(state),
        _ => landing(state),
    }
}

/// Landing inputs and any notices against them
#[must_use]
pub fn landing(state: &AppState) -> String {
    let inputs = state.inputs();
    let mut out = String::new();
    let _ = writeln!(out, "AI Git Tutor\n{RULE}");
    let _ = writeln!(out, "Repository URL : {}", or_dash(&inputs.repo_url));
    let _ = writeln!(out, "Description    : {}", or_dash(&inputs.description));
    let commits = inputs
        .log
        .lines()
        .filter(|l| l.starts_with("commit "))
        .count();
    let _ = writeln!(
        out,
        "Log            : {} lines, {commits} commits",
        inputs.log.lines().count()
    );
    for slot in [Slot::Github, Slot::Analysis] {
        if let Some(notice) = state.error(slot) {
            let _ = writeln!(out, "! {notice}");
        }
    }
    out
}

/// Repository summary and aggregates
#[must_use]
pub fn dashboard(result: &AnalysisResult) -> String {
    let stats = DashboardStats::from_analysis(result);
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})\n{RULE}", result.repo_name, result.project_type);
    if let Some(url) = &result.repo_url {
        let _ = writeln!(out, "{url}");
    }
    let _ = writeln!(out, "What it is   : {}", result.what_it_is);
    let _ = writeln!(out, "What it does : {}", result.what_it_does);
    let _ = writeln!(out, "\nOverview\n{}\n", result.overview);

    let _ = writeln!(out, "Commit types");
    for (category, n) in &stats.categories {
        let _ = writeln!(out, "  {:<14} {n}", category.as_str());
    }

    let _ = writeln!(out, "\nImpact (oldest first)");
    for point in &stats.timeline {
        let _ = writeln!(
            out,
            "  {:<8} {:<10} {:>2} [{}]",
            point.hash,
            "#".repeat(usize::from(point.impact)),
            point.impact,
            point.category
        );
    }
    if let Some(avg) = stats.average_impact {
        let _ = writeln!(out, "  average impact {avg:.1}");
    }

    if !stats.top_smells.is_empty() {
        let _ = writeln!(out, "\nCode smells");
        for (smell, n) in &stats.top_smells {
            let _ = writeln!(out, "  {smell} x{n}");
        }
    }
    out
}

/// Numbered list of analysed commits
#[must_use]
pub fn commit_list(result: &AnalysisResult, selected: Option<usize>) -> String {
    let mut out = String::new();
    for (i, c) in result.commits.iter().enumerate() {
        let marker = if selected == Some(i) { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker}{:>3}. {} {:<13} {}",
            i + 1,
            c.display_hash(),
            c.category.as_str(),
            c.subject()
        );
    }
    out
}

fn commit_header(out: &mut String, index: usize, total: usize, commit: &Commit) {
    let _ = writeln!(out, "Commit {} of {total}: {}\n{RULE}", index + 1, commit.display_hash());
    let _ = writeln!(out, "{}", commit.message);
    let _ = writeln!(out, "Author  : {}", or_dash(&commit.author));
    let _ = writeln!(out, "Date    : {}", or_dash(&commit.date));
    let _ = writeln!(
        out,
        "Type    : {}   Impact: {}/10   Files: {}",
        commit.category, commit.impact_score, commit.files_changed
    );
    let _ = writeln!(out, "Summary : {}", commit.summary);
    if !commit.code_smells.is_empty() {
        let _ = writeln!(out, "Smells  : {}", commit.code_smells.join(", "));
    }
}

/// Selected commit with its explanation
#[must_use]
pub fn commit_detail(state: &AppState) -> String {
    let mut out = String::new();
    let (Some(result), Some(index)) = (state.analysis(), state.selected_index()) else {
        return out;
    };
    let Some(commit) = result.commit(index) else {
        return out;
    };
    commit_header(&mut out, index, result.commits.len(), commit);

    let mode = if state.student_mode() { "student" } else { "expert" };
    let _ = writeln!(out, "\nExplanation ({mode})");
    if state.is_busy(Slot::Explanation) {
        let _ = writeln!(out, "  thinking...");
    } else if let Some(text) = state.explanation() {
        let _ = writeln!(out, "{text}");
    } else {
        let _ = writeln!(out, "  type `explain` to ask why this change was made");
    }
    out
}

/// Chat transcript
#[must_use]
pub fn transcript(transcript: &Transcript) -> String {
    let mut out = String::new();
    for m in transcript.messages() {
        let who = match m.role {
            ChatRole::User => "you",
            ChatRole::Assistant => "tutor",
        };
        let _ = writeln!(out, "[{}] {who}: {}", m.timestamp.format("%H:%M:%S"), m.content);
    }
    out
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}
