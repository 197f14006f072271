// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for git-tutor-ai
//!
//! A scripted in-process model stands in for the Gemini API and records
//! every request, so each test can check both the payload sent and how the
//! answer is interpreted.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use git_tutor_ai::model::GenerationConfig;
use git_tutor_ai::prompt::{CHAT_PRIMER_REPLY, CHAT_SYSTEM_INSTRUCTION};
use git_tutor_ai::{
    AiError, AnalysisRequest, AnalysisResult, AnalysisService, CHAT_FALLBACK, ChatMessage,
    CommitType, EXPLANATION_FALLBACK, GenerateContentRequest, GenerativeModel, ModelSettings,
    Role, Transcript,
};
use serde_json::json;
use similar_asserts::assert_eq;

// ============================================================================
// Scripted model
// ============================================================================

type Reply = Result<Option<String>, AiError>;

#[derive(Default)]
struct ScriptedModel {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<(String, GenerateContentRequest)>>,
}

impl ScriptedModel {
    fn replying(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::default(),
        })
    }

    fn calls(&self) -> Vec<(String, GenerateContentRequest)> {
        self.calls.lock().expect("lock").clone()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<Option<String>, AiError> {
        self.calls
            .lock()
            .expect("lock")
            .push((model.to_string(), request.clone()));
        self.replies
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or(Ok(None))
    }
}

fn text(s: &str) -> Reply {
    Ok(Some(s.to_string()))
}

fn analysis_json() -> serde_json::Value {
    json!({
        "repoName": "example/demo-project",
        "repoUrl": "https://github.com/example/demo-project",
        "projectType": "NestJS API",
        "whatItIs": "A backend for auth and analytics.",
        "whatItDoes": "Handles JWT login and dashboard analytics.",
        "overview": "Recent work focused on performance and security.",
        "commits": [
            {
                "hash": "p3q4r5s", "shortHash": "p3q4r5s",
                "author": "Mike Junior", "date": "2023-10-09 10:00:00",
                "message": "security: Sanitize user input to prevent XSS attacks",
                "type": "Security", "impactScore": 9, "summary": "Blocks XSS.",
                "filesChanged": 2, "codeSmells": []
            },
            {
                "hash": "l0m1n2o", "shortHash": "l0m1n2o",
                "author": "Alex Lead", "date": "2023-10-08 16:45:00",
                "message": "perf: Optimize database query for dashboard analytics",
                "type": "Performance", "impactScore": 6.4, "summary": "Faster queries.",
                "filesChanged": 2
            }
        ]
    })
}

fn analysis_result() -> AnalysisResult {
    serde_json::from_value(analysis_json()).expect("decode fixture")
}

// ============================================================================
// Full analysis
// ============================================================================

#[tokio::test]
async fn test_analyze_log_decodes_result() {
    let model = ScriptedModel::replying(vec![text(&analysis_json().to_string())]);
    let service = AnalysisService::new(model.clone());

    let result = service
        .analyze_log(
            &AnalysisRequest::new("commit p3q4r5s\nMessage: security: Sanitize")
                .with_repo_url("https://github.com/example/demo-project")
                .with_description("A NestJS backend"),
        )
        .await
        .expect("analysis");

    assert_eq!(result.commits.len(), 2);
    assert_eq!(result.commits[0].category, CommitType::Security);
    assert_eq!(result.commits[1].category, CommitType::Performance);
    assert_eq!(result.commits[1].impact_score.get(), 6);
    assert!(result.commits[1].code_smells.is_empty());

    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    let (model_name, request) = &calls[0];
    assert_eq!(model_name, "gemini-2.5-flash");
    assert_eq!(
        request.generation_config.as_ref().map(|c| c.response_mime_type.as_str()),
        Some("application/json")
    );
    let prompt = request.contents[0].joined_text();
    assert!(prompt.contains("Repo URL: https://github.com/example/demo-project"));
    assert!(prompt.contains("\"A NestJS backend\""));
    assert!(prompt.contains("commit p3q4r5s"));
}

#[tokio::test]
async fn test_analyze_log_empty_payload() {
    let model = ScriptedModel::replying(vec![Ok(None)]);
    let service = AnalysisService::new(model);

    let err = service
        .analyze_log(&AnalysisRequest::new("commit x"))
        .await
        .expect_err("empty");

    assert!(matches!(err, AiError::EmptyResponse));
}

#[tokio::test]
async fn test_analyze_log_rejects_unknown_category() {
    let mut value = analysis_json();
    value["commits"][0]["type"] = json!("Hotfix");
    let model = ScriptedModel::replying(vec![text(&value.to_string())]);
    let service = AnalysisService::new(model);

    let err = service
        .analyze_log(&AnalysisRequest::new("commit x"))
        .await
        .expect_err("unknown category");

    assert!(matches!(err, AiError::Decode(_)));
}

#[tokio::test]
async fn test_analyze_log_clamps_impact_scores() {
    let mut value = analysis_json();
    value["commits"][0]["impactScore"] = json!(42);
    value["commits"][1]["impactScore"] = json!(-3);
    let model = ScriptedModel::replying(vec![text(&value.to_string())]);
    let service = AnalysisService::new(model);

    let result = service
        .analyze_log(&AnalysisRequest::new("commit x"))
        .await
        .expect("analysis");

    let scores: Vec<u8> = result.commits.iter().map(|c| c.impact_score.get()).collect();
    assert_eq!(scores, vec![10, 1]);
}

#[tokio::test]
async fn test_analyze_log_propagates_transport_error() {
    let model = ScriptedModel::replying(vec![Err(AiError::Transport("connection reset".to_string()))]);
    let service = AnalysisService::new(model);

    let err = service
        .analyze_log(&AnalysisRequest::new("commit x"))
        .await
        .expect_err("transport");

    assert_eq!(err.to_string(), "AI request failed: connection reset");
}

#[tokio::test]
async fn test_custom_model_settings_are_used() {
    let model = ScriptedModel::replying(vec![text("ok"), text("hi")]);
    let service = AnalysisService::with_settings(
        model.clone(),
        ModelSettings {
            analysis: "flash-test".to_string(),
            chat: "pro-test".to_string(),
        },
    );
    let result = analysis_result();

    service
        .explain_commit(&result.commits[0], false)
        .await
        .expect("explain");
    service
        .chat(
            &[ChatMessage::user("hello", Utc::now())],
            &result,
        )
        .await
        .expect("chat");

    let names: Vec<String> = model.calls().into_iter().map(|(m, _)| m).collect();
    assert_eq!(names, vec!["flash-test", "pro-test"]);
}

// ============================================================================
// Commit explanation
// ============================================================================

#[tokio::test]
async fn test_explain_commit_tone_differs() {
    let model = ScriptedModel::replying(vec![
        text("Think of it like a bouncer at a club..."),
        text("Input is escaped before rendering; closes a stored XSS vector."),
    ]);
    let service = AnalysisService::new(model.clone());
    let commit = &analysis_result().commits[0];

    let beginner = service.explain_commit(commit, true).await.expect("beginner");
    let expert = service.explain_commit(commit, false).await.expect("expert");

    assert!(!beginner.is_empty());
    assert!(!expert.is_empty());
    assert_ne!(beginner, expert);

    let calls = model.calls();
    let beginner_prompt = calls[0].1.contents[0].joined_text();
    let expert_prompt = calls[1].1.contents[0].joined_text();
    assert_ne!(beginner_prompt, expert_prompt);
    assert!(beginner_prompt.contains("Use analogies."));
    assert!(expert_prompt.contains("Be technical and concise."));
    assert!(calls[0].1.generation_config.is_none());
}

#[tokio::test]
async fn test_explain_commit_fallback() {
    let model = ScriptedModel::replying(vec![Ok(None)]);
    let service = AnalysisService::new(model);

    let explanation = service
        .explain_commit(&analysis_result().commits[0], true)
        .await
        .expect("explain");

    assert_eq!(explanation, EXPLANATION_FALLBACK);
}

// ============================================================================
// Contextual chat
// ============================================================================

#[tokio::test]
async fn test_chat_replays_history_in_order() {
    let model = ScriptedModel::replying(vec![text("It was slow.")]);
    let service = AnalysisService::new(model.clone());
    let result = analysis_result();

    let t0 = Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap();
    let mut transcript = Transcript::new();
    transcript.push(ChatMessage::user("m1: who fixed XSS?", t0));
    transcript.push(ChatMessage::assistant("m2: Mike did.", t0 + Duration::seconds(1)));
    transcript.push(ChatMessage::user("m3: why was the query changed?", t0 + Duration::seconds(2)));

    let reply = service
        .chat(transcript.messages(), &result)
        .await
        .expect("chat");
    assert_eq!(reply, "It was slow.");

    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    let (model_name, request) = &calls[0];
    assert_eq!(model_name, "gemini-3-pro-preview");

    let turns: Vec<(Option<Role>, String)> = request
        .contents
        .iter()
        .map(|c| (c.role, c.joined_text()))
        .collect();
    assert_eq!(turns.len(), 5);
    assert_eq!(turns[0].0, Some(Role::User));
    assert!(turns[0].1.starts_with("Here is the repository history context: Repo Name: example/demo-project"));
    assert!(turns[0].1.contains("- [p3q4r5s] security: Sanitize user input to prevent XSS attacks (Security)"));
    assert_eq!(turns[1], (Some(Role::Model), CHAT_PRIMER_REPLY.to_string()));
    assert_eq!(turns[2], (Some(Role::User), "m1: who fixed XSS?".to_string()));
    assert_eq!(turns[3], (Some(Role::Model), "m2: Mike did.".to_string()));
    assert_eq!(
        request.live_turn().map(|c| c.joined_text()),
        Some("m3: why was the query changed?".to_string())
    );

    let instruction = request
        .system_instruction
        .as_ref()
        .map(|c| c.joined_text())
        .expect("system instruction");
    assert_eq!(instruction, CHAT_SYSTEM_INSTRUCTION);
}

#[tokio::test]
async fn test_chat_single_message_has_no_history() {
    let model = ScriptedModel::replying(vec![text("Hello!")]);
    let service = AnalysisService::new(model.clone());

    service
        .chat(&[ChatMessage::user("hi", Utc::now())], &analysis_result())
        .await
        .expect("chat");

    let request = &model.calls()[0].1;
    assert_eq!(request.contents.len(), 3);
    assert_eq!(request.live_turn().map(|c| c.joined_text()).as_deref(), Some("hi"));
}

#[tokio::test]
async fn test_chat_fallback_on_empty_reply() {
    let model = ScriptedModel::replying(vec![Ok(None)]);
    let service = AnalysisService::new(model);

    let reply = service
        .chat(&[ChatMessage::user("hi", Utc::now())], &analysis_result())
        .await
        .expect("chat");

    assert_eq!(reply, CHAT_FALLBACK);
}

#[tokio::test]
async fn test_chat_empty_transcript_sends_nothing() {
    let model = ScriptedModel::replying(vec![text("unused")]);
    let service = AnalysisService::new(model.clone());

    let err = service
        .chat(&[], &analysis_result())
        .await
        .expect_err("empty transcript");

    assert!(matches!(err, AiError::EmptyTranscript));
    assert!(model.calls().is_empty());
}

#[test]
fn test_generation_config_wire_names() {
    let value = serde_json::to_value(GenerationConfig::json(json!({}))).expect("serialize");
    assert_eq!(
        value,
        json!({"responseMimeType": "application/json", "responseSchema": {}})
    );
}
