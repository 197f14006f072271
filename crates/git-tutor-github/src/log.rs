// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Synthesized `git log` text
//!
//! The commits endpoint carries no file statistics, so each block ends with
//! a note telling the model to estimate impact instead.

use chrono::SecondsFormat;

use crate::api::CommitItem;

/// Marker appended to every block in place of `--stat` output
pub const STATS_UNAVAILABLE: &str = " [Stats unavailable via public API - AI will estimate impact]";

/// Render one commit as a log block, terminated by a newline
#[must_use]
pub fn format_commit(item: &CommitItem) -> String {
    let author = item.commit.author.as_ref();
    let name = author
        .and_then(|a| a.name.as_deref())
        .unwrap_or("Unknown");
    let email = author.and_then(|a| a.email.as_deref()).unwrap_or("");
    let date = author
        .and_then(|a| a.date)
        .map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default();

    format!(
        "commit {sha}\nAuthor: {name} <{email}>\nDate:   {date}\nMessage: {message}\n\n{STATS_UNAVAILABLE}\n",
        sha = item.sha,
        message = item.commit.message,
    )
}

/// Render all commits in the order received, separated by blank lines
#[must_use]
pub fn synthesize_log(items: &[CommitItem]) -> String {
    items
        .iter()
        .map(format_commit)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CommitAuthor, CommitDetail};
    use chrono::{TimeZone, Utc};
    use similar_asserts::assert_eq;

    fn item(sha: &str, message: &str) -> CommitItem {
        CommitItem {
            sha: sha.to_string(),
            commit: CommitDetail {
                author: Some(CommitAuthor {
                    name: Some("Sarah Dev".to_string()),
                    email: Some("sarah@example.com".to_string()),
                    date: Some(Utc.with_ymd_and_hms(2023, 10, 5, 14, 30, 0).unwrap()),
                }),
                message: message.to_string(),
            },
        }
    }

    #[test]
    fn test_format_commit_layout() {
        let block = format_commit(&item("a1b2c3d", "feat: Implement JWT authentication"));
        assert_eq!(
            block,
            "commit a1b2c3d\n\
             Author: Sarah Dev <sarah@example.com>\n\
             Date:   2023-10-05T14:30:00Z\n\
             Message: feat: Implement JWT authentication\n\
             \n \
             [Stats unavailable via public API - AI will estimate impact]\n"
        );
    }

    #[test]
    fn test_format_commit_missing_author() {
        let mut c = item("abc", "m");
        c.commit.author = None;
        let block = format_commit(&c);
        assert!(block.contains("Author: Unknown <>\n"));
        assert!(block.contains("Date:   \n"));
    }

    #[test]
    fn test_synthesize_separates_blocks_with_blank_line() {
        let log = synthesize_log(&[item("one", "first"), item("two", "second")]);
        assert!(log.contains("estimate impact]\n\ncommit two\n"));
        assert!(log.starts_with("commit one\n"));
    }

    #[test]
    fn test_synthesize_empty() {
        assert_eq!(synthesize_log(&[]), "");
    }
}
