//! Resume insight library
//!
//! Document-to-insight analysis pipeline: extract text from a resume file,
//! score it against ATS heuristics and an LLM, and produce a composite
//! analysis (skills, ATS compatibility, learning roadmap, authenticity risk).

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeInsightError};
