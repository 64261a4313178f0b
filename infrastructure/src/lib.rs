//! Infrastructure layer for pawtype
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod openai;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileOpenAiConfig, FileOutputConfig,
    FileProvidersConfig, FileSummaryConfig,
};
pub use openai::{OpenAiGateway, OpenAiSession};
pub use store::{AppStore, DEMO_USER_ID, MemoryAuthSession, MemoryResultStore};
