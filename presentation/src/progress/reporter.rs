//! Progress reporting while the letter summary is pending

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pawtype_application::{SummaryOutcome, SummaryProgressNotifier};
use pawtype_domain::{SummaryState, TypeCode};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while the remote summary is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
    state: Mutex<SummaryState>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            state: Mutex::new(SummaryState::Idle),
        }
    }

    /// Lifecycle state of the request this reporter follows
    pub fn state(&self) -> SummaryState {
        self.state
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish(&self, message: String) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_with_message(message);
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryProgressNotifier for ProgressReporter {
    fn on_summary_start(&self, code: &TypeCode) {
        if let Ok(mut state) = self.state.lock() {
            state.begin();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(code.to_string());
        pb.set_message("Writing letter summary...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_summary_complete(&self, outcome: &SummaryOutcome) {
        if let Ok(mut state) = self.state.lock() {
            state.settle(outcome.summary.clone());
        }

        let message = if outcome.summary.is_remote() {
            format!("{}", "Summary ready".green())
        } else {
            format!("{}", "Using built-in phrases".yellow())
        };
        self.finish(message);
    }

    fn on_summary_cancelled(&self) {
        self.finish(format!("{}", "Cancelled".red()));
    }
}
