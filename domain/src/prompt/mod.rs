//! Prompt domain
//!
//! Templates for the remote letter summary request.

mod template;

pub use template::PromptTemplate;
