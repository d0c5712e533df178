//! Pipeline orchestration: extraction, scoring stages, and aggregation

use crate::analysis::ats::{AtsScore, AtsScorer};
use crate::analysis::risk::{RiskAnalyzer, RiskAssessment, RiskContext};
use crate::analysis::roadmap::{RoadmapGenerator, RoadmapPlan};
use crate::analysis::skills::{SkillExtractor, SkillProfile};
use crate::config::Config;
use crate::error::Result;
use crate::input::{Extraction, InputManager};
use crate::llm::{AiAnalysis, AiAnalyzer};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub source_file: String,
    pub analyzed_at: DateTime<Utc>,
    pub word_count: usize,
    pub char_count: usize,
    pub ai_fallback: bool,
}

/// Everything the pipeline produces for one resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub metadata: AnalysisMetadata,
    pub ai_analysis: AiAnalysis,
    pub skills: SkillProfile,
    pub ats_score: AtsScore,
    pub risk_analysis: RiskAssessment,
    pub roadmap: RoadmapPlan,
}

/// Owns every pipeline stage; built once per run so all matchers compile a
/// single time.
pub struct AnalysisEngine {
    input_manager: InputManager,
    skill_extractor: SkillExtractor,
    ats_scorer: AtsScorer,
    risk_analyzer: RiskAnalyzer,
    ai_analyzer: AiAnalyzer,
}

impl AnalysisEngine {
    pub fn new(config: &Config, ai_enabled: bool) -> Result<Self> {
        let ai_analyzer = if ai_enabled {
            AiAnalyzer::new(config)
        } else {
            AiAnalyzer::disabled()
        };

        Ok(Self {
            input_manager: InputManager::new(),
            skill_extractor: SkillExtractor::new()?,
            ats_scorer: AtsScorer::new()?,
            risk_analyzer: RiskAnalyzer::new()?,
            ai_analyzer,
        })
    }

    /// Run the full pipeline on one resume file. The deterministic stages run
    /// alongside the LLM call; only extraction failures abort the run.
    pub async fn analyze(&self, path: &Path) -> Result<AnalysisResult> {
        info!("Analyzing {}", path.display());
        let extraction = self.input_manager.extract(path).await?;
        debug!(
            "Extracted {} words ({} chars)",
            extraction.word_count, extraction.char_count
        );

        let (ai_analysis, (skills, ats_score, risk_analysis, roadmap)) = tokio::join!(
            self.ai_analyzer.analyze(&extraction.text),
            async { self.run_deterministic_stages(&extraction) },
        );

        let metadata = AnalysisMetadata {
            source_file: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            analyzed_at: Utc::now(),
            word_count: extraction.word_count,
            char_count: extraction.char_count,
            ai_fallback: ai_analysis.fallback,
        };

        Ok(AnalysisResult {
            metadata,
            ai_analysis,
            skills,
            ats_score,
            risk_analysis,
            roadmap,
        })
    }

    fn run_deterministic_stages(
        &self,
        extraction: &Extraction,
    ) -> (SkillProfile, AtsScore, RiskAssessment, RoadmapPlan) {
        let skills = self.skill_extractor.analyze(&extraction.text);
        let ats_score = self.ats_scorer.calculate(&extraction.text, &skills);

        let risk_context = RiskContext {
            skills: Some(skills.clone()),
        };
        let risk_analysis = self.risk_analyzer.analyze(&extraction.text, &risk_context);

        let roadmap = RoadmapGenerator::generate(&skills.suggested_skills, &skills.detected_role);

        (skills, ats_score, risk_analysis, roadmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AiConfig, OutputConfig, OutputFormat};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn test_config() -> Config {
        Config {
            ai: AiConfig {
                endpoint: String::new(),
                model: "test".to_string(),
                api_key_env: "UNSET_TEST_KEY".to_string(),
                timeout_secs: 1,
            },
            output: OutputConfig {
                format: OutputFormat::Json,
                color_output: false,
            },
        }
    }

    fn write_resume(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_full_pipeline_on_text_resume() {
        let file = write_resume(
            "Jane Doe\njane@example.com 555-123-4567 linkedin github\n\
             Experience: Developed services in Python and React on AWS.\n\
             Education: BSc Computer Science.\nSkills: Docker, PostgreSQL.",
        );

        let engine = AnalysisEngine::new(&test_config(), false).unwrap();
        let result = engine.analyze(file.path()).await.unwrap();

        assert!(result.skills.all_technical.contains(&"Python".to_string()));
        assert!(result.ats_score.overall_score > 0.0);
        assert!(result.ai_analysis.fallback);
        assert_eq!(
            result.roadmap.items.len(),
            result.skills.suggested_skills.len().min(6)
        );
        assert!(result.metadata.word_count > 0);
        assert!(result.metadata.source_file.ends_with(".txt"));
    }

    #[tokio::test]
    async fn test_roadmap_skills_come_from_suggestions() {
        let file = write_resume("Docker Kubernetes Jenkins Terraform pipelines");
        let engine = AnalysisEngine::new(&test_config(), false).unwrap();
        let result = engine.analyze(file.path()).await.unwrap();

        assert_eq!(result.skills.detected_role, "DevOps Engineer");
        for item in &result.roadmap.items {
            assert!(result.skills.suggested_skills.contains(&item.skill));
        }
    }

    #[tokio::test]
    async fn test_missing_file_errors() {
        let engine = AnalysisEngine::new(&test_config(), false).unwrap();
        let result = engine.analyze(Path::new("/nonexistent/resume.txt")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_result_serializes_to_json() {
        let file = write_resume("Python developer, jane@example.com");
        let engine = AnalysisEngine::new(&test_config(), false).unwrap();
        let result = engine.analyze(file.path()).await.unwrap();

        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("overallScore"));
        assert!(json.contains("ats_score"));
    }
}
