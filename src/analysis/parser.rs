use serde_json::{Map, Value};

use super::types::AnalysisResult;

/// Pulls the JSON object out of a free-form model reply.
///
/// Only the span from the first `{` to the last `}` is decoded. Anything that
/// does not decode to an object comes back as a `raw_analysis` fallback, so this
/// never fails.
pub fn parse_response(raw: &str) -> AnalysisResult {
    let span = match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => &raw[start..=end],
        _ => return AnalysisResult::fallback(raw),
    };

    match serde_json::from_str::<Map<String, Value>>(span) {
        Ok(fields) => AnalysisResult::new(fields),
        Err(_) => AnalysisResult::fallback(raw),
    }
}
