//! OpenAI Chat Completions adapter

mod gateway;
mod protocol;
mod session;

pub use gateway::OpenAiGateway;
pub use session::OpenAiSession;
