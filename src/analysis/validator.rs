use serde_json::Value;

use crate::error::ValidationError;

/// Checks a raw JSON value before it is treated as a comment collection.
pub fn validate(comments: &Value, text_field: &str) -> Result<(), ValidationError> {
    match comments {
        Value::Array(items) => validate_comments(items, text_field),
        Value::Null => Err(ValidationError::NoComments),
        Value::Object(o) if o.is_empty() => Err(ValidationError::NoComments),
        Value::String(s) if s.is_empty() => Err(ValidationError::NoComments),
        _ => Err(ValidationError::NotAList),
    }
}

/// Rejects an empty list, any non-object element, or a list where no record
/// has `text_field`. Records missing the field are fine as long as one has it.
pub fn validate_comments(comments: &[Value], text_field: &str) -> Result<(), ValidationError> {
    if comments.is_empty() {
        return Err(ValidationError::NoComments);
    }

    let mut missing_field_count = 0;
    for (index, comment) in comments.iter().enumerate() {
        let record = comment
            .as_object()
            .ok_or(ValidationError::NotAnObject { index })?;
        if !record.contains_key(text_field) {
            missing_field_count += 1;
        }
    }

    if missing_field_count == comments.len() {
        return Err(ValidationError::MissingField {
            field: text_field.to_string(),
        });
    }

    Ok(())
}
