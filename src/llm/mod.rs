//! LLM integration module

pub mod analyzer;
pub mod client;
pub mod prompts;

pub use analyzer::{AiAnalysis, AiAnalyzer};
pub use client::LlmClient;
