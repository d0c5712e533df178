//! Scoring and analysis stages of the resume pipeline

pub mod ats;
pub mod engine;
pub mod knowledge;
pub mod risk;
pub mod roadmap;
pub mod skills;

pub use engine::{AnalysisEngine, AnalysisResult};
