// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for commits response decoding and log synthesis

#![no_main]

use libfuzzer_sys::fuzz_target;

use git_tutor_github::api::CommitItem;
use git_tutor_github::log::synthesize_log;

fuzz_target!(|data: &[u8]| {
    if let Ok(items) = serde_json::from_slice::<Vec<CommitItem>>(data) {
        // Every decoded item yields a block starting with "commit "
        let log = synthesize_log(&items);
        assert_eq!(log.is_empty(), items.is_empty());
    }
});
