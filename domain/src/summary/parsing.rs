//! Parsing of remote letter summaries.
//!
//! The text-generation service is asked for a bare JSON object keyed by the
//! four letters of the code. Parsing is all-or-nothing: a reply that is not
//! JSON, is not an object, or lacks any requested letter is rejected as a
//! whole so the caller can fall back without mixing sources.

use super::entities::{LetterSummary, SummarySource};
use crate::core::string::{non_blank, truncate_chars};
use crate::quiz::axis::Letter;
use crate::quiz::code::TypeCode;
use thiserror::Error;

/// Longest phrase kept from a remote reply, in characters
pub const MAX_PHRASE_CHARS: usize = 40;

/// Reasons a remote reply cannot be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryParseError {
    #[error("reply is not valid JSON: {0}")]
    NotJson(String),

    #[error("reply is not a JSON object")]
    NotAnObject,

    #[error("reply has no usable phrase for letter {0}")]
    MissingLetter(Letter),
}

/// Strip a surrounding Markdown code fence (```json ... ```), if any
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip the info string (e.g. "json") on the opening line
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse a remote reply into a [`LetterSummary`] for `code`.
///
/// Each letter of the code must map to a non-blank string. Extra keys are
/// ignored. Phrases longer than [`MAX_PHRASE_CHARS`] are cut.
pub fn parse_remote_summary(
    code: TypeCode,
    reply: &str,
) -> Result<LetterSummary, SummaryParseError> {
    let value: serde_json::Value = serde_json::from_str(strip_code_fence(reply))
        .map_err(|e| SummaryParseError::NotJson(e.to_string()))?;
    let object = value.as_object().ok_or(SummaryParseError::NotAnObject)?;

    let mut phrases = Vec::with_capacity(4);
    for letter in code.letters() {
        let phrase = object
            .get(letter.as_str())
            .and_then(|v| v.as_str())
            .and_then(non_blank)
            .ok_or(SummaryParseError::MissingLetter(letter))?;
        phrases.push(truncate_chars(phrase, MAX_PHRASE_CHARS).to_string());
    }

    let mut phrases = phrases.into_iter();
    Ok(LetterSummary::from_fn(code, SummarySource::Remote, |_| {
        phrases.next().unwrap_or_default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enfp() -> TypeCode {
        "ENFP".parse().unwrap()
    }

    #[test]
    fn test_parse_plain_object() {
        let reply = r#"{"E":"Loves the crowd","N":"Sniffs out secrets","F":"Cuddle expert","P":"Goes with the flow"}"#;
        let summary = parse_remote_summary(enfp(), reply).unwrap();
        assert!(summary.is_remote());
        assert_eq!(summary.get(Letter::N), Some("Sniffs out secrets"));
    }

    #[test]
    fn test_parse_fenced_object() {
        let reply = "```json\n{\"E\":\"a\",\"N\":\"b\",\"F\":\"c\",\"P\":\"d\"}\n```";
        let summary = parse_remote_summary(enfp(), reply).unwrap();
        assert_eq!(summary.get(Letter::P), Some("d"));
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let reply = r#"{"E":"a","N":"b","F":"c","P":"d","I":"nope"}"#;
        let summary = parse_remote_summary(enfp(), reply).unwrap();
        assert_eq!(summary.letters(), vec![Letter::E, Letter::N, Letter::F, Letter::P]);
        assert!(summary.get(Letter::I).is_none());
    }

    #[test]
    fn test_missing_letter_rejects_whole_reply() {
        let reply = r#"{"E":"a","N":"b","F":"c"}"#;
        assert_eq!(
            parse_remote_summary(enfp(), reply).unwrap_err(),
            SummaryParseError::MissingLetter(Letter::P)
        );
    }

    #[test]
    fn test_blank_or_non_string_value_rejected() {
        let reply = r#"{"E":"a","N":"  ","F":"c","P":"d"}"#;
        assert!(parse_remote_summary(enfp(), reply).is_err());
        let reply = r#"{"E":"a","N":3,"F":"c","P":"d"}"#;
        assert!(parse_remote_summary(enfp(), reply).is_err());
    }

    #[test]
    fn test_not_json() {
        let err = parse_remote_summary(enfp(), "Sure! Here is your summary").unwrap_err();
        assert!(matches!(err, SummaryParseError::NotJson(_)));
    }

    #[test]
    fn test_not_an_object() {
        let err = parse_remote_summary(enfp(), r#"["E","N"]"#).unwrap_err();
        assert_eq!(err, SummaryParseError::NotAnObject);
    }

    #[test]
    fn test_long_phrase_is_cut() {
        let long = "x".repeat(MAX_PHRASE_CHARS + 25);
        let reply = format!(r#"{{"E":"{}","N":"b","F":"c","P":"d"}}"#, long);
        let summary = parse_remote_summary(enfp(), &reply).unwrap();
        assert_eq!(summary.get(Letter::E).unwrap().chars().count(), MAX_PHRASE_CHARS);
    }
}
