//! Use cases (application services)

pub mod history;
pub mod submit_quiz;
pub mod summarize_type;

#[cfg(test)]
mod test_support;
