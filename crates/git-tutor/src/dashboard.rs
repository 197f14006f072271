// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Aggregates shown on the dashboard view

use std::collections::HashMap;

use git_tutor_ai::{AnalysisResult, CommitType};

/// Number of code smells listed on the dashboard
pub const TOP_SMELLS: usize = 5;

/// One point of the impact timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactPoint {
    /// Short hash shown on the axis
    pub hash: String,
    /// Impact score, 1 to 10
    pub impact: u8,
    /// Commit category
    pub category: CommitType,
}

/// Summary figures derived from an analysis result
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    /// Commits per category in [`CommitType::ALL`] order, zero counts omitted
    pub categories: Vec<(CommitType, usize)>,
    /// Impact per commit, oldest first
    pub timeline: Vec<ImpactPoint>,
    /// Mean impact score, `None` with no commits
    pub average_impact: Option<f64>,
    /// Most frequent code smells, ties broken by first appearance
    pub top_smells: Vec<(String, usize)>,
}

impl DashboardStats {
    /// Compute every aggregate for `result`
    #[must_use]
    pub fn from_analysis(result: &AnalysisResult) -> Self {
        Self {
            categories: category_counts(result),
            timeline: impact_timeline(result),
            average_impact: average_impact(result),
            top_smells: top_smells(result, TOP_SMELLS),
        }
    }
}

/// Commits per category in [`CommitType::ALL`] order, zero counts omitted
#[must_use]
pub fn category_counts(result: &AnalysisResult) -> Vec<(CommitType, usize)> {
    CommitType::ALL
        .iter()
        .map(|&t| (t, result.commits.iter().filter(|c| c.category == t).count()))
        .filter(|&(_, n)| n > 0)
        .collect()
}

/// Impact per commit, reversed so the oldest commit comes first
///
/// Logs list the newest commit first.
#[must_use]
pub fn impact_timeline(result: &AnalysisResult) -> Vec<ImpactPoint> {
    result
        .commits
        .iter()
        .rev()
        .map(|c| ImpactPoint {
            hash: c.display_hash().to_string(),
            impact: c.impact_score.get(),
            category: c.category,
        })
        .collect()
}

/// Mean impact score
#[must_use]
pub fn average_impact(result: &AnalysisResult) -> Option<f64> {
    if result.commits.is_empty() {
        return None;
    }
    let total: u32 = result
        .commits
        .iter()
        .map(|c| u32::from(c.impact_score.get()))
        .sum();
    Some(f64::from(total) / result.commits.len() as f64)
}

/// The `limit` most frequent code smells
#[must_use]
pub fn top_smells(result: &AnalysisResult, limit: usize) -> Vec<(String, usize)> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for smell in result.commits.iter().flat_map(|c| &c.code_smells) {
        let smell = smell.trim();
        if smell.is_empty() {
            continue;
        }
        let n = counts.entry(smell).or_insert(0);
        if *n == 0 {
            order.push(smell);
        }
        *n += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|s| (s.to_string(), counts[s]))
        .collect();
    // stable sort keeps first-appearance order among ties
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}
