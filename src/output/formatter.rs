//! Console and JSON rendering of analysis results

use crate::analysis::engine::AnalysisResult;
use crate::analysis::risk::RiskLevel;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::{Color, Colorize};
use std::fmt::Write as _;

/// Trait for rendering a finished analysis into text.
pub trait OutputFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Colored terminal output.
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// Pretty-printed JSON for scripting and piping.
pub struct JsonFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self { use_colors }
    }

    fn score_color(score: f32) -> Color {
        if score >= 80.0 {
            Color::Green
        } else if score >= 60.0 {
            Color::Yellow
        } else {
            Color::Red
        }
    }

    fn risk_color(level: &RiskLevel) -> Color {
        match level {
            RiskLevel::Low => Color::Green,
            RiskLevel::Medium => Color::Yellow,
            RiskLevel::High => Color::Red,
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn write_header(&self, out: &mut String, result: &AnalysisResult) {
        let _ = writeln!(out, "{}", self.heading("Resume Analysis"));
        let _ = writeln!(
            out,
            "  File: {}  ({} words)",
            result.metadata.source_file, result.metadata.word_count
        );
        let _ = writeln!(
            out,
            "  Analyzed: {}",
            result.metadata.analyzed_at.format("%Y-%m-%d %H:%M UTC")
        );
        let _ = writeln!(out);
    }

    fn write_ai_section(&self, out: &mut String, result: &AnalysisResult) {
        let ai = &result.ai_analysis;
        let _ = writeln!(out, "{}", self.heading("AI Review"));
        let score_text = format!("{}/100", ai.overall_score);
        let _ = writeln!(
            out,
            "  Overall: {}{}",
            score_text.color(Self::score_color(ai.overall_score as f32)).bold(),
            if ai.fallback { " (offline analysis)" } else { "" }
        );
        let _ = writeln!(out, "  {}", ai.summary);

        let _ = writeln!(out, "\n  Strengths:");
        for strength in &ai.strengths {
            let _ = writeln!(out, "    + {}", strength.green());
        }
        let _ = writeln!(out, "  Improvements:");
        for improvement in &ai.improvements {
            let _ = writeln!(out, "    - {}", improvement.yellow());
        }
        let _ = writeln!(out);
    }

    fn write_skills_section(&self, out: &mut String, result: &AnalysisResult) {
        let skills = &result.skills;
        let _ = writeln!(out, "{}", self.heading("Skills"));
        let _ = writeln!(out, "  Detected role: {}", skills.detected_role.bold());

        for (category, found) in &skills.technical {
            let _ = writeln!(out, "  {}: {}", category, found.join(", "));
        }
        if !skills.soft.is_empty() {
            let _ = writeln!(out, "  soft skills: {}", skills.soft.join(", "));
        }
        if !skills.suggested_skills.is_empty() {
            let _ = writeln!(
                out,
                "  Suggested next: {}",
                skills.suggested_skills.join(", ").yellow()
            );
        }
        let _ = writeln!(out);
    }

    fn write_ats_section(&self, out: &mut String, result: &AnalysisResult) {
        let ats = &result.ats_score;
        let _ = writeln!(out, "{}", self.heading("ATS Compatibility"));
        let overall = format!("{:.1}/100", ats.overall_score);
        let _ = writeln!(
            out,
            "  Overall: {} ({})",
            overall.color(Self::score_color(ats.overall_score)).bold(),
            if ats.ats_friendly { "ATS-friendly".green() } else { "needs work".red() }
        );

        for (category, score) in &ats.category_scores {
            let value = format!("{:.0}", score);
            let _ = writeln!(
                out,
                "    {:<24} {}",
                category.replace('_', " "),
                value.color(Self::score_color(*score))
            );
        }

        let _ = writeln!(out, "  Recommendations:");
        for rec in &ats.recommendations {
            let _ = writeln!(out, "    * {}", rec);
        }
        let _ = writeln!(out);
    }

    fn write_risk_section(&self, out: &mut String, result: &AnalysisResult) {
        let risk = &result.risk_analysis;
        let _ = writeln!(out, "{}", self.heading("Credibility Risk"));
        let level = format!("{:?}", risk.risk_level);
        let _ = writeln!(
            out,
            "  Risk: {} (score {}/100)",
            level.color(Self::risk_color(&risk.risk_level)).bold(),
            risk.overall_risk_score
        );

        for flag in &risk.red_flags {
            let _ = writeln!(
                out,
                "    [{:?}] {}: {}",
                flag.severity, flag.category, flag.description
            );
        }
        for rec in &risk.recommendations {
            let _ = writeln!(out, "    * {}", rec);
        }
        let _ = writeln!(out);
    }

    fn write_roadmap_section(&self, out: &mut String, result: &AnalysisResult) {
        let roadmap = &result.roadmap;
        if roadmap.items.is_empty() {
            return;
        }

        let _ = writeln!(out, "{}", self.heading("Learning Roadmap"));
        let _ = writeln!(
            out,
            "  Target role: {}  (estimated {})",
            roadmap.role.bold(),
            roadmap.total_estimated_time
        );

        for phase in &roadmap.phases {
            let _ = writeln!(
                out,
                "  Phase {} - {} ({})",
                phase.phase, phase.name, phase.duration
            );
            let _ = writeln!(out, "    {}", phase.focus);
            let _ = writeln!(out, "    Skills: {}", phase.skills.join(", ").yellow());
        }

        for item in &roadmap.items {
            let _ = writeln!(
                out,
                "  {} [{:?}, {}]",
                item.skill.bold(),
                item.priority,
                item.estimated_time
            );
            for resource in &item.resources {
                let _ = writeln!(out, "    - {} ({})", resource.name, resource.resource_type);
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let mut out = String::new();

        self.write_header(&mut out, result);
        self.write_ai_section(&mut out, result);
        self.write_skills_section(&mut out, result);
        self.write_ats_section(&mut out, result);
        self.write_risk_section(&mut out, result);
        self.write_roadmap_section(&mut out, result);

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Pick the formatter for a configured output format.
pub fn formatter_for(format: &OutputFormat, use_colors: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ats::AtsScorer;
    use crate::analysis::engine::AnalysisMetadata;
    use crate::analysis::risk::{RiskAnalyzer, RiskContext};
    use crate::analysis::roadmap::RoadmapGenerator;
    use crate::analysis::skills::SkillExtractor;
    use crate::llm::AiAnalyzer;
    use chrono::Utc;

    fn sample_result() -> AnalysisResult {
        let text = "Jane Doe jane@example.com 555-123-4567\n\
                    Experience: developed Python services with React on AWS.\n\
                    Education: BSc. Skills: Docker.";
        let skills = SkillExtractor::new().unwrap().analyze(text);
        let ats_score = AtsScorer::new().unwrap().calculate(text, &skills);
        let risk_analysis = RiskAnalyzer::new().unwrap().analyze(
            text,
            &RiskContext {
                skills: Some(skills.clone()),
            },
        );
        let roadmap = RoadmapGenerator::generate(&skills.suggested_skills, &skills.detected_role);

        AnalysisResult {
            metadata: AnalysisMetadata {
                source_file: "resume.txt".to_string(),
                analyzed_at: Utc::now(),
                word_count: 20,
                char_count: 150,
                ai_fallback: true,
            },
            ai_analysis: AiAnalyzer::fallback_analysis(),
            skills,
            ats_score,
            risk_analysis,
            roadmap,
        }
    }

    #[test]
    fn test_console_output_contains_all_sections() {
        let formatter = ConsoleFormatter::new(false);
        let output = formatter.format_result(&sample_result()).unwrap();

        assert!(output.contains("Resume Analysis"));
        assert!(output.contains("AI Review"));
        assert!(output.contains("Skills"));
        assert!(output.contains("ATS Compatibility"));
        assert!(output.contains("Credibility Risk"));
        assert!(output.contains("Learning Roadmap"));
        assert!(output.contains("resume.txt"));
    }

    #[test]
    fn test_json_output_is_valid() {
        let formatter = JsonFormatter::new();
        let output = formatter.format_result(&sample_result()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed["ai_analysis"]["overallScore"].is_number());
        assert!(parsed["ats_score"]["overall_score"].is_number());
        assert!(parsed["roadmap"]["total_estimated_time"].is_string());
    }

    #[test]
    fn test_formatter_selection() {
        assert_eq!(
            formatter_for(&OutputFormat::Console, false).supports_format(),
            OutputFormat::Console
        );
        assert_eq!(
            formatter_for(&OutputFormat::Json, false).supports_format(),
            OutputFormat::Json
        );
    }
}
