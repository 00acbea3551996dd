use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sentilens::analysis::SentimentAnalyzer;
use sentilens::client::{ClaudeClient, ModelClient};
use sentilens::config::ClaudeConfig;
use sentilens::Error;

fn config_for(server: &MockServer) -> ClaudeConfig {
    ClaudeConfig {
        base_url: server.uri(),
        api_key: Some("sk-test".to_string()),
        ..ClaudeConfig::default()
    }
}

fn text_reply(text: &str) -> serde_json::Value {
    json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 10, "output_tokens": 5}
    })
}

#[tokio::test]
async fn sends_prompt_with_configured_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "sk-test"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": "claude-sonnet-4-20250514",
            "max_tokens": 3000,
            "messages": [{"role": "user", "content": "hello"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("hi there")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ClaudeClient::new(None, &config_for(&server)).unwrap();
    let reply = client.send("hello", None, None).await.unwrap();
    assert_eq!(reply, "hi there");
}

#[tokio::test]
async fn overrides_replace_model_and_token_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_partial_json(json!({"model": "claude-haiku", "max_tokens": 128})))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("short")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ClaudeClient::new(None, &config_for(&server)).unwrap();
    let reply = client
        .send("hello", Some("claude-haiku"), Some(128))
        .await
        .unwrap();
    assert_eq!(reply, "short");
}

#[tokio::test]
async fn error_status_is_reported_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let client = ClaudeClient::new(None, &config_for(&server)).unwrap();
    let err = client.send("hello", None, None).await.unwrap_err();
    match err {
        Error::Api { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limited");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn reply_without_text_block_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": []})))
        .mount(&server)
        .await;

    let client = ClaudeClient::new(None, &config_for(&server)).unwrap();
    let err = client.send("hello", None, None).await.unwrap_err();
    assert!(matches!(err, Error::EmptyResponse));
}

#[tokio::test]
async fn analyzer_round_trip_through_http() {
    let server = MockServer::start().await;
    let reply =
        "Here is the analysis:\n{\"summary\": \"ok\", \"key_themes\": [\"launch\"]}\nThanks!";
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply(reply)))
        .expect(1)
        .mount(&server)
        .await;

    let client = ClaudeClient::new(None, &config_for(&server)).unwrap();
    let analyzer = SentimentAnalyzer::new(Arc::new(client));
    let comments = vec![
        json!({"text": "Great!", "author": "a"}),
        json!({"text": "Terrible.", "author": "b"}),
    ];

    let results = analyzer.analyze(&comments, "text").await.unwrap();
    assert_eq!(results.summary(), Some(&json!("ok")));
    assert_eq!(results.key_themes(), Some(&json!(["launch"])));
    assert_eq!(results.total_comments(), Some(2));
}
