//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod auth_session;
pub mod llm_gateway;
pub mod progress;
pub mod result_repository;
