use serde_json::Value;

use super::types::comment_text;

const INSTRUCTIONS: &str = "Analyze the sentiment and emotions of these Twitter comments in detail. Go beyond simple positive/negative/neutral and identify the specific emotions and reactions people are expressing.";

const RESPONSE_FORMAT: &str = r#"Provide a comprehensive analysis in JSON format with:

1. **Emotion Breakdown**: Identify all emotions present with percentages (e.g., amused, angry, excited, disappointed, supportive, sarcastic, confused, enthusiastic, worried, grateful, etc.)

2. **Sentiment Details**: Within each major sentiment category (positive, negative, neutral), break down the specific reactions:
   - For positive: What specifically are people positive about? (funny, inspiring, exciting, helpful, etc.)
   - For negative: What specifically are people negative about? (angry, disappointed, concerned, frustrated, etc.)
   - For neutral: What types of neutral responses? (informational, questioning, indifferent, etc.)

3. **Key Themes**: What topics or aspects are people reacting to?

4. **Tone Patterns**: Identify communication styles (sarcastic, sincere, humorous, serious, etc.)

5. **Summary**: A narrative summary that captures the emotional landscape

Return JSON in this structure:
{
    "emotion_breakdown": {
        "amused": X,
        "angry": Y,
        "excited": Z,
        ...
    },
    "sentiment_details": {
        "positive": {
            "percentage": X,
            "subcategories": {
                "found_it_funny": Y,
                "inspired": Z,
                ...
            }
        },
        "negative": {
            "percentage": X,
            "subcategories": {
                "angry": Y,
                "disappointed": Z,
                ...
            }
        },
        "neutral": {
            "percentage": X,
            "subcategories": {
                "asking_questions": Y,
                "providing_info": Z,
                ...
            }
        }
    },
    "key_themes": ["theme1", "theme2", ...],
    "tone_patterns": ["pattern1", "pattern2", ...],
    "summary": "Detailed narrative summary of the emotional landscape and what people are specifically reacting to"
}"#;

/// Numbers every record that has text under `text_field`, one per line.
///
/// Records without text are skipped, so numbering counts included comments only.
pub fn format_comments(comments: &[Value], text_field: &str) -> String {
    comments
        .iter()
        .filter_map(|comment| comment_text(comment, text_field))
        .enumerate()
        .map(|(i, text)| format!("{}. {}", i + 1, text))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(comments_text: &str) -> String {
    format!(
        "{}\n\nComments:\n{}\n\n{}",
        INSTRUCTIONS, comments_text, RESPONSE_FORMAT
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_comments_in_order() {
        let comments = vec![
            json!({"text": "Great!", "author": "a"}),
            json!({"text": "Terrible.", "author": "b"}),
        ];
        assert_eq!(format_comments(&comments, "text"), "1. Great!\n2. Terrible.");
    }

    #[test]
    fn skipped_records_do_not_leave_gaps() {
        let comments = vec![
            json!({"author": "a"}),
            json!({"text": "first"}),
            json!({"text": ""}),
            json!({"text": "second"}),
        ];
        let formatted = format_comments(&comments, "text");
        assert_eq!(formatted, "1. first\n2. second");
        assert_eq!(formatted.lines().count(), 2);
    }

    #[test]
    fn uses_configured_field() {
        let comments = vec![json!({"text": "ignored", "body": "kept"})];
        assert_eq!(format_comments(&comments, "body"), "1. kept");
    }

    #[test]
    fn nothing_to_format() {
        assert_eq!(format_comments(&[json!({"author": "x"})], "text"), "");
    }

    #[test]
    fn prompt_embeds_comments_between_instructions_and_schema() {
        let prompt = build_prompt("1. Great!");
        assert!(prompt.starts_with("Analyze the sentiment and emotions of these Twitter comments"));
        assert!(prompt.contains("\n\nComments:\n1. Great!\n\nProvide a comprehensive analysis"));
        for key in [
            "\"emotion_breakdown\"",
            "\"sentiment_details\"",
            "\"key_themes\"",
            "\"tone_patterns\"",
            "\"summary\"",
        ] {
            assert!(prompt.contains(key), "missing {}", key);
        }
        assert!(prompt.ends_with("specifically reacting to\"\n}"));
    }
}
