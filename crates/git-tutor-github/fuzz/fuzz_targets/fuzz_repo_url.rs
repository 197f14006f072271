// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for GitHub repository URL parsing

#![no_main]

use libfuzzer_sys::fuzz_target;

use git_tutor_github::RepoRef;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(repo) = RepoRef::parse(input) {
            // Extracted segments are never empty and never contain a slash
            assert!(!repo.owner.is_empty() && !repo.owner.contains('/'));
            assert!(!repo.repo.is_empty() && !repo.repo.contains('/'));
        }
    }
});
