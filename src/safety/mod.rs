//! Request validation done before the engine runs.

use serde_json::Value;

use crate::errors::BriefError;
use crate::merge::Hints;

/// Ensure the idea is non-empty after trimming and within `max_chars`
/// characters. Returns the trimmed text.
pub fn validate_idea(text: &str, max_chars: usize) -> Result<&str, BriefError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(BriefError::EmptyIdea);
    }
    let len = trimmed.chars().count();
    if len > max_chars {
        return Err(BriefError::IdeaTooLong { len, max: max_chars });
    }
    Ok(trimmed)
}

/// Shape-check a raw hint object.
///
/// Wrong primitive types are rejected here; invalid enum values and
/// unknown keys pass through and are ignored later by the merger.
pub fn parse_hints(raw: Value) -> Result<Hints, BriefError> {
    match raw {
        Value::Null => Ok(Hints::default()),
        Value::Object(_) => {
            serde_json::from_value(raw).map_err(|e| BriefError::InvalidHints(e.to_string()))
        }
        other => Err(BriefError::InvalidHints(format!(
            "expected an object, got {}",
            kind(&other)
        ))),
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_and_blank_ideas_are_rejected() {
        assert_eq!(validate_idea("", 10), Err(BriefError::EmptyIdea));
        assert_eq!(validate_idea(" \n\t ", 10), Err(BriefError::EmptyIdea));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 5 Arabic characters, 10 bytes
        assert_eq!(validate_idea("مرحبا", 5), Ok("مرحبا"));
        assert_eq!(
            validate_idea("abcdef", 5),
            Err(BriefError::IdeaTooLong { len: 6, max: 5 })
        );
        assert_eq!(validate_idea("  abc  ", 3), Ok("abc"));
    }

    #[test]
    fn hint_shapes_are_checked() {
        assert!(parse_hints(json!({ "siteType": "saas", "features": "FAQ" })).is_ok());
        assert!(parse_hints(Value::Null).is_ok());
        assert!(matches!(
            parse_hints(json!(["saas"])),
            Err(BriefError::InvalidHints(_))
        ));
        assert!(matches!(
            parse_hints(json!({ "projectMode": "yes" })),
            Err(BriefError::InvalidHints(_))
        ));
        assert!(matches!(
            parse_hints(json!({ "features": [1, 2] })),
            Err(BriefError::InvalidHints(_))
        ));
    }

    #[test]
    fn unknown_keys_and_bad_enums_pass_shape_check() {
        let h = parse_hints(json!({ "siteType": "spaceship", "colour": "teal" })).unwrap();
        assert_eq!(h.site_type(), None);
        assert!(h.unknown.contains_key("colour"));
    }
}
