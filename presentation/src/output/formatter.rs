//! Output formatter trait

use serde::Serialize;
use pawtype_application::SummaryOutcome;
use pawtype_domain::{AxisTallies, LetterSummary, PetInfo, QuizResult, TypeCode, TypeProfile};

/// Everything shown for one scored quiz
#[derive(Debug, Clone, Serialize)]
pub struct QuizReport {
    pub code: TypeCode,
    pub tallies: AxisTallies,
    pub profile: TypeProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet: Option<PetInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<LetterSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_note: Option<String>,
}

impl QuizReport {
    pub fn new(code: TypeCode, tallies: AxisTallies, profile: TypeProfile) -> Self {
        Self {
            code,
            tallies,
            profile,
            pet: None,
            result_id: None,
            summary: None,
            summary_note: None,
        }
    }

    pub fn with_pet(mut self, pet: PetInfo) -> Self {
        self.pet = Some(pet);
        self
    }

    pub fn with_result(mut self, result: &QuizResult) -> Self {
        self.result_id = Some(result.id.to_string());
        self
    }

    pub fn with_summary(mut self, outcome: SummaryOutcome) -> Self {
        self.summary_note = outcome.degraded.map(|d| d.to_string());
        self.summary = Some(outcome.summary);
        self
    }
}

/// Trait for formatting quiz reports
pub trait OutputFormatter {
    /// Profile, tallies and (when present) the letter summary
    fn format(&self, report: &QuizReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &QuizReport) -> String;

    /// Only the type code
    fn format_code_only(&self, report: &QuizReport) -> String;
}
