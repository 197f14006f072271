// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Response schema for the full analysis call

use serde_json::{Value, json};

use crate::types::CommitType;

/// Category labels allowed in the `type` field
#[must_use]
pub fn category_enum() -> Vec<&'static str> {
    CommitType::ALL.iter().map(CommitType::as_str).collect()
}

/// Schema for a single commit entry
#[must_use]
pub fn commit_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "hash": { "type": "STRING" },
            "shortHash": { "type": "STRING" },
            "author": { "type": "STRING" },
            "date": { "type": "STRING" },
            "message": { "type": "STRING" },
            "type": { "type": "STRING", "enum": category_enum() },
            "impactScore": {
                "type": "INTEGER",
                "description": "Importance of the change from 1 (trivial) to 10 (critical)"
            },
            "summary": { "type": "STRING" },
            "filesChanged": { "type": "INTEGER" },
            "codeSmells": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": [
            "hash", "shortHash", "author", "date", "message",
            "type", "impactScore", "summary", "filesChanged"
        ]
    })
}

/// Schema the full analysis response must satisfy
#[must_use]
pub fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "repoName": { "type": "STRING" },
            "repoUrl": { "type": "STRING" },
            "projectType": {
                "type": "STRING",
                "description": "E.g. React Web App, Python CLI"
            },
            "whatItIs": {
                "type": "STRING",
                "description": "A one-line description of the project entity"
            },
            "whatItDoes": {
                "type": "STRING",
                "description": "A detailed description of the project functionality based on the code evidence"
            },
            "overview": { "type": "STRING" },
            "commits": { "type": "ARRAY", "items": commit_schema() }
        },
        "required": [
            "repoName", "projectType", "whatItIs", "whatItDoes", "overview", "commits"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_enum_matches_commit_type() {
        let schema = analysis_schema();
        let labels: Vec<String> = schema["properties"]["commits"]["items"]["properties"]["type"]
            ["enum"]
            .as_array()
            .expect("enum array")
            .iter()
            .map(|v| v.as_str().expect("string").to_string())
            .collect();

        let expected: Vec<String> = CommitType::ALL
            .iter()
            .map(|t| serde_json::to_value(t).expect("serialize"))
            .map(|v| v.as_str().expect("string").to_string())
            .collect();

        assert_eq!(labels, expected);
    }

    #[test]
    fn test_repo_url_is_optional() {
        let schema = analysis_schema();
        let required = schema["required"].as_array().expect("required");
        assert!(!required.iter().any(|v| v == "repoUrl"));
        assert!(required.iter().any(|v| v == "commits"));
    }

    #[test]
    fn test_code_smells_optional() {
        let schema = commit_schema();
        let required = schema["required"].as_array().expect("required");
        assert!(!required.iter().any(|v| v == "codeSmells"));
    }
}
