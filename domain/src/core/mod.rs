//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: text-generation models used for letter summaries
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: small UTF-8 aware helpers

pub mod error;
pub mod model;
pub mod string;
