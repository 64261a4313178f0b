//! Prompt templates for the letter summary request

use crate::quiz::code::TypeCode;
use crate::summary::{MAX_PHRASE_CHARS, SummaryContext};

/// Templates for generating the summary prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the letter summary request
    pub fn summary_system() -> &'static str {
        r#"You are a pet personality analyst who specialises in reading dog behaviour.
You answer with a single JSON object and nothing else."#
    }

    /// User prompt asking for one short phrase per letter of `code`
    pub fn summary_prompt(code: &TypeCode, context: &SummaryContext) -> String {
        let keys = code
            .letters()
            .iter()
            .map(|l| format!("\"{}\":\"...\"", l))
            .collect::<Vec<_>>()
            .join(",");

        format!(
            r#"The dog "{name}" is a {breed} with personality type {code}.
Write one short summary for each of the four letters of {code}, speaking about the dog.
Each summary must be at most {max} characters and should reflect the breed "{breed}" and the name "{name}".

Return strict JSON with exactly these keys: {{{keys}}}
Do not include any other text."#,
            name = context.pet_name,
            breed = context.breed,
            code = code,
            max = MAX_PHRASE_CHARS,
            keys = keys,
        )
    }
}
