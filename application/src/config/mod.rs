//! Application-level configuration.
//!
//! - [`SummaryParams`]: model, timeout and on/off switch for the remote summary

pub mod summary_params;

pub use summary_params::{DEFAULT_SUMMARY_TIMEOUT, SummaryParams};
