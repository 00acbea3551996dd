use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use super::parser::parse_response;
use super::prompt::{build_prompt, format_comments};
use super::types::{AnalysisResult, ANALYSIS_TIMESTAMP, TOTAL_COMMENTS};
use super::validator::validate_comments;
use crate::client::ModelClient;
use crate::error::Result;

pub struct SentimentAnalyzer {
    client: Arc<dyn ModelClient>,
    model: Option<String>,
    max_tokens: Option<u32>,
}

impl SentimentAnalyzer {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self {
            client,
            model: None,
            max_tokens: None,
        }
    }

    /// Per-run model and token limit, forwarded on every request.
    pub fn with_overrides(mut self, model: Option<String>, max_tokens: Option<u32>) -> Self {
        self.model = model;
        self.max_tokens = max_tokens;
        self
    }

    pub async fn analyze(&self, comments: &[Value], text_field: &str) -> Result<AnalysisResult> {
        validate_comments(comments, text_field)?;

        let comments_text = format_comments(comments, text_field);
        let prompt = build_prompt(&comments_text);
        debug!("Prompt built for {} comments ({} chars)", comments.len(), prompt.len());

        let reply = self
            .client
            .send(&prompt, self.model.as_deref(), self.max_tokens)
            .await?;

        let mut results = parse_response(&reply);
        if results.is_fallback() {
            info!("Model reply was not valid JSON, keeping raw analysis");
        }

        results.insert(TOTAL_COMMENTS, comments.len());
        results.insert(
            ANALYSIS_TIMESTAMP,
            Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        );

        Ok(results)
    }
}
