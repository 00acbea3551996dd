use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

pub const TOTAL_COMMENTS: &str = "total_comments";
pub const ANALYSIS_TIMESTAMP: &str = "analysis_timestamp";
pub const RAW_ANALYSIS: &str = "raw_analysis";

/// Text of a comment record under `field`.
///
/// Absent and empty values (null, `false`, `0`, `""`, `[]`, `{}`) are `None`.
/// Strings are borrowed; any other value is rendered as JSON text (`true`,
/// `["a"]`), not in Python's `str()` form (`True`, `['a']`).
pub fn comment_text<'a>(record: &'a Value, field: &str) -> Option<Cow<'a, str>> {
    match record.get(field)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(a) if a.is_empty() => None,
        Value::Object(o) if o.is_empty() => None,
        other => Some(Cow::Owned(other.to_string())),
    }
}

/// What the model returned for one comment set, plus the metadata stamped on by
/// the analyzer. Keys keep the order the model wrote them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(Map<String, Value>);

impl AnalysisResult {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn fallback(raw: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(RAW_ANALYSIS.to_string(), Value::String(raw.to_string()));
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    pub fn is_fallback(&self) -> bool {
        self.0.contains_key(RAW_ANALYSIS)
    }

    pub fn total_comments(&self) -> Option<u64> {
        self.get(TOTAL_COMMENTS).and_then(Value::as_u64)
    }

    pub fn analysis_timestamp(&self) -> Option<&str> {
        self.get(ANALYSIS_TIMESTAMP).and_then(Value::as_str)
    }

    pub fn raw_analysis(&self) -> Option<&str> {
        self.get(RAW_ANALYSIS).and_then(Value::as_str)
    }

    pub fn emotion_breakdown(&self) -> Option<&Map<String, Value>> {
        self.get("emotion_breakdown").and_then(Value::as_object)
    }

    pub fn sentiment_details(&self) -> Option<&Map<String, Value>> {
        self.get("sentiment_details").and_then(Value::as_object)
    }

    pub fn key_themes(&self) -> Option<&Value> {
        self.get("key_themes")
    }

    pub fn tone_patterns(&self) -> Option<&Value> {
        self.get("tone_patterns")
    }

    pub fn summary(&self) -> Option<&Value> {
        self.get("summary")
    }
}
