// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Scripted console sessions

mod fixtures;

use std::sync::Arc;

use fixtures::{FakeTransport, TutorModel, test_app};
use git_tutor::console;

async fn session(script: &str) -> String {
    let app = test_app(Arc::new(FakeTransport::default()), TutorModel::new());
    let mut out = Vec::new();
    console::run(&app, script.as_bytes(), &mut out)
        .await
        .expect("console io");
    String::from_utf8(out).expect("utf8")
}

#[tokio::test]
async fn test_demo_session() {
    let out = session(
        "demo\nanalyze\ncommits\nselect 5\nexplain expert\nchat why sanitize?\nhistory\nquit\n",
    )
    .await;

    assert!(out.contains("demo-project (NestJS API)"));
    assert!(out.contains("  5. p3q4r5s Security"));
    assert!(out.contains("Commit 5 of 5: p3q4r5s"));
    assert!(out.contains("Explanation (expert)"));
    assert!(out.contains("Explain it like a Senior Engineer"));
    assert!(out.contains("tutor: You asked: why sanitize?"));
    assert!(out.contains("you: why sanitize?"));
    assert!(out.trim_end().ends_with("Bye."));
}

#[tokio::test]
async fn test_pasted_log() {
    let out = session(
        "log\ncommit abcdef1\nAuthor: Ada <a@b.c>\nDate:   2024-01-01\nMessage: perf: faster\n.\nanalyze\nnext\nnext\n",
    )
    .await;

    assert!(out.contains("Log            : 4 lines, 1 commits"));
    assert!(out.contains("Performance"));
    assert!(out.contains("Commit 1 of 1: abcdef1"));
    assert!(out.contains("No more commits in that direction."));
    // end of input ends the session
    assert!(out.trim_end().ends_with("Bye."));
}

#[tokio::test]
async fn test_guidance_before_analysis() {
    let out = session("dashboard\nselect 1\nexplain\nchat hi\nfetch\nanalyze\nfrobnicate\n").await;
    assert!(out.contains("Run `analyze` first."));
    assert!(out.contains("No such commit."));
    assert!(out.contains("Select a commit first."));
    assert!(out.contains("Run `analyze` before chatting."));
    assert!(out.contains("Set a repository URL first with `url`."));
    assert!(out.contains("Paste a log with `log` or load `demo` first."));
    assert!(out.contains("unknown command `frobnicate`"));
}
