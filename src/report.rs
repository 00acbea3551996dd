use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::fmt;

use crate::analysis::AnalysisResult;

const WIDTH: usize = 70;
const SENTIMENTS: [&str; 3] = ["positive", "negative", "neutral"];

pub fn print_report(results: &AnalysisResult) {
    println!("{}", Report(results));
}

/// Human-readable report for one analysis. Sections the model left out are omitted.
pub fn render_report(results: &AnalysisResult) -> String {
    Report(results).to_string()
}

struct Report<'a>(&'a AnalysisResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let results = self.0;
        let heavy = "=".repeat(WIDTH);

        writeln!(f, "\n{}", heavy)?;
        writeln!(f, "DETAILED SENTIMENT & EMOTION ANALYSIS")?;
        writeln!(f, "{}", heavy)?;
        let total = results
            .get("total_comments")
            .map(display_value)
            .unwrap_or_else(|| "N/A".to_string());
        writeln!(f, "\nTotal Comments Analyzed: {}", total)?;

        if let Some(timestamp) = results.get("analysis_timestamp") {
            writeln!(f, "Analysis Time: {}", display_value(timestamp))?;
        }

        if let Some(emotions) = results.emotion_breakdown() {
            section(f, "EMOTION BREAKDOWN:")?;
            let mut sorted: Vec<(&String, &Value)> = emotions.iter().collect();
            sorted.sort_by(|a, b| compare_percent(b.1, a.1));
            for (emotion, pct) in sorted {
                writeln!(f, "  {:<25} {:>6}%", title_case(emotion), display_value(pct))?;
            }
        }

        if let Some(details) = results.sentiment_details() {
            section(f, "DETAILED SENTIMENT BREAKDOWN:")?;
            for sentiment in SENTIMENTS {
                if let Some(detail) = details.get(sentiment) {
                    sentiment_block(f, sentiment, detail)?;
                }
            }
        }

        if let Some(themes) = results.key_themes() {
            section(f, "KEY THEMES:")?;
            bullets(f, themes)?;
        }

        if let Some(patterns) = results.tone_patterns() {
            section(f, "TONE PATTERNS:")?;
            bullets(f, patterns)?;
        }

        if let Some(summary) = results.summary() {
            section(f, "SUMMARY:")?;
            writeln!(f, "\n{}\n", display_value(summary))?;
        }

        if let Some(raw) = results.raw_analysis() {
            section(f, "RAW ANALYSIS:")?;
            writeln!(f, "\n{}\n", raw)?;
        }

        writeln!(f, "{}", heavy)
    }
}

fn sentiment_block(f: &mut fmt::Formatter<'_>, sentiment: &str, detail: &Value) -> fmt::Result {
    let pct = detail
        .get("percentage")
        .map(display_value)
        .unwrap_or_else(|| "0".to_string());
    writeln!(f, "\n{} ({}%):", sentiment.to_uppercase(), pct)?;

    match detail.get("subcategories").and_then(Value::as_object) {
        Some(subcategories) => subcategory_lines(f, subcategories),
        None => Ok(()),
    }
}

fn subcategory_lines(
    f: &mut fmt::Formatter<'_>,
    subcategories: &Map<String, Value>,
) -> fmt::Result {
    for (name, pct) in subcategories {
        writeln!(f, "  └─ {:<23} {:>6}%", title_case(name), display_value(pct))?;
    }
    Ok(())
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let light = "-".repeat(WIDTH);
    writeln!(f, "\n{}", light)?;
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", light)
}

fn bullets(f: &mut fmt::Formatter<'_>, items: &Value) -> fmt::Result {
    match items {
        Value::Array(items) => {
            for item in items {
                writeln!(f, "  • {}", display_value(item))?;
            }
            Ok(())
        }
        other => writeln!(f, "  • {}", display_value(other)),
    }
}

/// Numbers first, larger before smaller; anything non-numeric sorts last.
fn compare_percent(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `found_it_funny` -> `Found It Funny`
fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut word_start = true;
    for ch in label.replace('_', " ").chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}
