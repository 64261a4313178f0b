//! Console output formatter for quiz results

use crate::output::formatter::{OutputFormatter, QuizReport};
use colored::Colorize;
use pawtype_domain::{Axis, LetterSummary, QuizResult, TypeProfile};

/// Formats quiz results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report
    pub fn format(report: &QuizReport) -> String {
        let mut output = Self::format_profile(report);
        if let Some(summary) = &report.summary {
            output.push_str(&Self::format_summary(summary, report.summary_note.as_deref()));
        }
        output.push_str(&Self::footer());
        output
    }

    /// Everything except the letter summary, printed while it is pending
    pub fn format_profile(report: &QuizReport) -> String {
        let mut output = String::new();

        let title = match &report.pet {
            Some(pet) => format!("{}'s Personality Type", pet.name),
            None => "Personality Type".to_string(),
        };
        output.push_str(&Self::header(&title));
        output.push('\n');

        output.push_str(&format!(
            "\n{:^60}\n{:^60}\n",
            report.code.to_string().yellow().bold(),
            report.profile.description
        ));

        if let Some(id) = &report.result_id {
            output.push_str(&format!("{} {}\n", "Saved as:".dimmed(), id));
        }

        output.push_str(&Self::section_header("Axis Tallies"));
        for axis in Axis::ALL {
            let (low, high) = report.tallies.pair(axis);
            let winner = report.code.letter(axis);
            output.push_str(&format!(
                "  {:<12} {} {:>2}  {} {:>2}   -> {}\n",
                axis.as_str(),
                axis.low_letter(),
                low,
                axis.high_letter(),
                high,
                winner.to_string().green().bold()
            ));
        }

        output.push_str(&Self::profile_details(&report.profile));
        output
    }

    /// The per-letter phrases, with the degradation note if any
    pub fn format_summary(summary: &LetterSummary, note: Option<&str>) -> String {
        let mut output = Self::section_header("Letter Summary");
        for (letter, phrase) in summary.iter() {
            output.push_str(&format!("  {}  {}\n", letter.to_string().yellow().bold(), phrase));
        }
        if let Some(note) = note {
            output.push_str(&format!("\n{} {}\n", "Note:".dimmed(), note.dimmed()));
        }
        output
    }

    /// Format as JSON
    pub fn format_json(report: &QuizReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Only the code (concise output)
    pub fn format_code_only(report: &QuizReport) -> String {
        report.code.to_string()
    }

    /// All sixteen profiles
    pub fn format_types(profiles: &[TypeProfile]) -> String {
        let mut output = Self::header("Dog Personality Types");
        output.push('\n');
        for profile in profiles {
            output.push_str(&format!(
                "\n{}  {}\n    {}\n",
                profile.code.to_string().yellow().bold(),
                profile.description,
                profile.traits.join(", ").dimmed()
            ));
        }
        output.push_str(&Self::footer());
        output
    }

    /// Past results, one line each
    pub fn format_history(results: &[QuizResult]) -> String {
        if results.is_empty() {
            return format!("{}\n", "No saved results yet.".dimmed());
        }

        let mut output = Self::header("History");
        output.push('\n');
        for result in results {
            output.push_str(&format!(
                "  {}  {}  {:<10} {}\n      {} {}\n",
                result.created_at.format("%Y-%m-%d %H:%M"),
                result.code.to_string().yellow().bold(),
                result.pet_name.as_deref().unwrap_or("-"),
                result.id.as_str().dimmed(),
                "answers:".dimmed(),
                Self::answer_list(result.answers.values())
            ));
        }
        output.push_str(&Self::footer());
        output
    }

    fn answer_list(values: &[u8]) -> String {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn profile_details(profile: &TypeProfile) -> String {
        let mut output = format!("\n{}\n", "Traits:".cyan().bold());
        for item in &profile.traits {
            output.push_str(&format!("  * {}\n", item));
        }
        output.push_str(&format!("\n{}\n", "Good fit for:".green().bold()));
        for item in &profile.compatibility {
            output.push_str(&format!("  * {}\n", item));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &QuizReport) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &QuizReport) -> String {
        Self::format_json(report)
    }

    fn format_code_only(&self, report: &QuizReport) -> String {
        Self::format_code_only(report)
    }
}
