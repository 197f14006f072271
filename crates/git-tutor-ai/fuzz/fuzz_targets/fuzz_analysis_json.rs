// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for analysis response decoding
//!
//! This fuzzes `decode_analysis`, which parses whatever text the model
//! returned for the structured analysis call.

#![no_main]

use libfuzzer_sys::fuzz_target;

use git_tutor_ai::decode_analysis;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Decoding never panics, and anything accepted keeps scores in range
        if let Ok(result) = decode_analysis(input) {
            for commit in &result.commits {
                let score = commit.impact_score.get();
                assert!((1..=10).contains(&score));
            }
        }
    }
});
