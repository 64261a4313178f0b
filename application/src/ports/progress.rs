//! Progress notification port
//!
//! Defines the interface for reporting progress of a letter summary request.

use crate::use_cases::summarize_type::SummaryOutcome;
use pawtype_domain::TypeCode;

/// Callback for progress updates while a summary is pending
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, log line, etc.)
pub trait SummaryProgressNotifier: Send + Sync {
    /// Called when the remote attempt starts
    fn on_summary_start(&self, _code: &TypeCode) {}

    /// Called once the summary is settled (remote or fallback)
    fn on_summary_complete(&self, _outcome: &SummaryOutcome) {}

    /// Called when the request is discarded before it settles
    fn on_summary_cancelled(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoSummaryProgress;

impl SummaryProgressNotifier for NoSummaryProgress {}
