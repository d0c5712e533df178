//! ATS (Applicant Tracking System) compatibility scoring

use crate::analysis::knowledge::{
    ACTION_VERBS, EMAIL_RE, PHONE_RE, PROFILE_KEYWORDS, SECTION_KEYWORDS,
};
use crate::analysis::skills::SkillProfile;
use crate::error::{Result, ResumeInsightError};
use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Fixed weights for the six category scores. Must sum to 1.0; asserted by
/// test so the published formula stays verifiable.
pub const ATS_WEIGHTS: &[(&str, f32)] = &[
    ("contact_information", 0.20),
    ("formatting", 0.15),
    ("keywords", 0.25),
    ("section_completeness", 0.20),
    ("action_verbs", 0.10),
    ("length", 0.10),
];

const ATS_FRIENDLY_THRESHOLD: f32 = 70.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsScore {
    pub overall_score: f32,
    pub category_scores: BTreeMap<String, f32>,
    pub recommendations: Vec<String>,
    pub ats_friendly: bool,
}

/// Composite ATS scorer. Pure over (text, skill profile); matchers are
/// compiled once at construction.
pub struct AtsScorer {
    section_matcher: AhoCorasick,
    verb_matcher: AhoCorasick,
}

impl AtsScorer {
    pub fn new() -> Result<Self> {
        let section_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(SECTION_KEYWORDS)
            .map_err(|e| ResumeInsightError::Processing(format!("Failed to build section matcher: {}", e)))?;

        let verb_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(ACTION_VERBS)
            .map_err(|e| ResumeInsightError::Processing(format!("Failed to build verb matcher: {}", e)))?;

        Ok(Self {
            section_matcher,
            verb_matcher,
        })
    }

    pub fn calculate(&self, text: &str, skills: &SkillProfile) -> AtsScore {
        let text_lower = text.to_lowercase();

        let mut category_scores = BTreeMap::new();
        category_scores.insert("contact_information".to_string(), Self::score_contact_info(&text_lower));
        category_scores.insert("formatting".to_string(), Self::score_formatting(text));
        category_scores.insert("keywords".to_string(), Self::score_keywords(skills));
        category_scores.insert(
            "section_completeness".to_string(),
            self.score_sections(&text_lower),
        );
        category_scores.insert("action_verbs".to_string(), self.score_action_verbs(&text_lower));
        category_scores.insert("length".to_string(), Self::score_length(text));

        let overall: f32 = ATS_WEIGHTS
            .iter()
            .map(|(key, weight)| category_scores[*key] * weight)
            .sum();
        let overall_score = (overall * 10.0).round() / 10.0;

        let recommendations = Self::generate_recommendations(&category_scores);

        AtsScore {
            overall_score,
            category_scores,
            recommendations,
            // Friendliness is decided on the exact weighted sum, not the
            // rounded display value
            ats_friendly: Self::is_ats_friendly(overall),
        }
    }

    fn is_ats_friendly(overall: f32) -> bool {
        overall >= ATS_FRIENDLY_THRESHOLD
    }

    /// Five equal-weight checks: email, phone, linkedin, github, portfolio.
    fn score_contact_info(text_lower: &str) -> f32 {
        let points_per_item: f32 = 100.0 / 5.0;
        let mut score: f32 = 0.0;

        if EMAIL_RE.is_match(text_lower) {
            score += points_per_item;
        }
        if PHONE_RE.is_match(text_lower) {
            score += points_per_item;
        }
        for keyword in PROFILE_KEYWORDS {
            if text_lower.contains(keyword) {
                score += points_per_item;
            }
        }

        score.min(100.0)
    }

    fn score_formatting(text: &str) -> f32 {
        static SPECIAL_CHAR_RE: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"[^\w\s.,@\-+#()/:]").expect("Invalid special char regex"));

        let mut score: f32 = 100.0;

        let special_chars = SPECIAL_CHAR_RE.find_iter(text).count();
        if special_chars > 50 {
            score -= 20.0;
        }

        let lines: Vec<&str> = text.split('\n').collect();
        let total_len: usize = lines.iter().map(|line| line.chars().count()).sum();
        let avg_line_length = total_len as f32 / lines.len().max(1) as f32;
        if avg_line_length > 200.0 {
            score -= 15.0;
        }

        if lines.len() > 10 {
            score += 10.0;
        }

        score.clamp(0.0, 100.0)
    }

    /// Banded thresholds on total technical-skill count.
    fn score_keywords(skills: &SkillProfile) -> f32 {
        match skills.total_technical() {
            n if n >= 15 => 100.0,
            n if n >= 10 => 85.0,
            n if n >= 7 => 70.0,
            n if n >= 5 => 55.0,
            n if n >= 3 => 40.0,
            _ => 25.0,
        }
    }

    fn score_sections(&self, text_lower: &str) -> f32 {
        let points_per_section = 100.0 / SECTION_KEYWORDS.len() as f32;
        let found = self.distinct_matches(&self.section_matcher, text_lower);
        (found as f32 * points_per_section).min(100.0)
    }

    fn score_action_verbs(&self, text_lower: &str) -> f32 {
        match self.distinct_matches(&self.verb_matcher, text_lower) {
            n if n >= 10 => 100.0,
            n if n >= 7 => 85.0,
            n if n >= 5 => 70.0,
            n if n >= 3 => 55.0,
            _ => 40.0,
        }
    }

    fn score_length(text: &str) -> f32 {
        let word_count = text.split_whitespace().count();

        match word_count {
            400..=800 => 100.0,
            300..=399 | 801..=1000 => 85.0,
            200..=299 | 1001..=1200 => 70.0,
            _ => 50.0,
        }
    }

    /// Number of distinct patterns from the matcher present in the text.
    fn distinct_matches(&self, matcher: &AhoCorasick, text: &str) -> usize {
        let mut seen = HashSet::new();
        for mat in matcher.find_iter(text) {
            seen.insert(mat.pattern());
        }
        seen.len()
    }

    fn generate_recommendations(scores: &BTreeMap<String, f32>) -> Vec<String> {
        let mut recommendations = Vec::new();

        if scores["contact_information"] < 80.0 {
            recommendations.push(
                "Add complete contact information including email, phone, and LinkedIn profile"
                    .to_string(),
            );
        }
        if scores["keywords"] < 70.0 {
            recommendations
                .push("Include more relevant technical skills and industry keywords".to_string());
        }
        if scores["section_completeness"] < 80.0 {
            recommendations.push(
                "Ensure all standard sections are present: Experience, Education, Skills, Projects"
                    .to_string(),
            );
        }
        if scores["action_verbs"] < 70.0 {
            recommendations.push(
                "Use more action verbs to describe your accomplishments (e.g. 'achieved', 'developed', 'led')"
                    .to_string(),
            );
        }
        if scores["formatting"] < 80.0 {
            recommendations.push(
                "Simplify formatting - avoid excessive special characters and complex layouts"
                    .to_string(),
            );
        }
        if scores["length"] < 70.0 {
            recommendations
                .push("Adjust resume length to 400-800 words for optimal ATS compatibility".to_string());
        }

        if recommendations.is_empty() {
            recommendations.push("Your resume is well-optimized for ATS systems!".to_string());
        }

        recommendations
    }
}
