//! Input processing module
//! Handles file detection, text extraction, and normalization

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::{Extraction, InputManager};
