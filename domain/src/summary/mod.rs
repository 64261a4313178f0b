//! Per-letter personality summaries.
//!
//! A [`LetterSummary`] maps the four letters of a code to short phrases.
//! Phrases come either from a remote text-generation reply
//! ([`parse_remote_summary`]) or from the local table ([`fallback_summary`]),
//! never from both.

mod entities;
mod fallback;
mod parsing;

pub use entities::{DEFAULT_BREED, LetterSummary, SummaryContext, SummarySource, SummaryState};
pub use fallback::{fallback_phrase, fallback_summary};
pub use parsing::{MAX_PHRASE_CHARS, SummaryParseError, parse_remote_summary};
