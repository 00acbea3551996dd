use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ModelClient;
use crate::config::ClaudeConfig;
use crate::error::{Error, Result};

pub struct ClaudeClient {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: String,
    api_version: String,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

impl ClaudeClient {
    /// `api_key` takes precedence over the key loaded into `config`.
    pub fn new(api_key: Option<String>, config: &ClaudeConfig) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .or_else(|| config.api_key.clone().filter(|key| !key.is_empty()))
            .ok_or_else(|| Error::Configuration("ANTHROPIC_API_KEY not set".to_string()))?;

        Ok(Self {
            client: Client::new(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
        })
    }
}

#[async_trait]
impl ModelClient for ClaudeClient {
    async fn send(
        &self,
        prompt: &str,
        model: Option<&str>,
        max_tokens: Option<u32>,
    ) -> Result<String> {
        let url = format!("{}/v1/messages", self.base_url);
        let request = MessagesRequest {
            model: model.unwrap_or(self.model.as_str()),
            max_tokens: max_tokens.unwrap_or(self.max_tokens),
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!(
            "Claude request: model={}, max_tokens={}, prompt_chars={}",
            request.model,
            request.max_tokens,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let messages: MessagesResponse = response.json().await?;

        messages
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or(Error::EmptyResponse)
    }
}
