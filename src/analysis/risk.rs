//! Authenticity risk analysis: scans resume text for red flags

use crate::analysis::knowledge::{
    BUZZWORDS, EMAIL_RE, GAP_DISCLOSURE_TOKENS, GENERIC_PHRASES, PHONE_RE, SUPERLATIVES,
    UNPROFESSIONAL_EMAIL_TOKENS, VAGUE_QUANTIFIERS,
};
use crate::analysis::skills::SkillProfile;
use crate::error::{Result, ResumeInsightError};
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Dimension weights for the overall risk score. Must sum to 1.0; asserted
/// by test.
pub const RISK_WEIGHTS: &[(&str, f32)] = &[
    ("exaggeration", 0.30),
    ("timeline", 0.25),
    ("skill_mismatch", 0.20),
    ("language", 0.15),
    ("format", 0.10),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedFlag {
    pub category: String,
    pub severity: Severity,
    pub description: String,
    pub impact: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub overall_risk_score: u8,
    pub risk_level: RiskLevel,
    pub red_flags: Vec<RedFlag>,
    pub recommendations: Vec<String>,
    pub detailed_analysis: BTreeMap<String, u8>,
    pub metadata: BTreeMap<String, usize>,
}

/// Optional upstream context. The skill profile feeds the skill-mismatch
/// dimension; without it that dimension only sees buzzword density.
#[derive(Debug, Clone, Default)]
pub struct RiskContext {
    pub skills: Option<SkillProfile>,
}

const CATEGORY_EXAGGERATION: &str = "Exaggerated Claims";
const CATEGORY_TIMELINE: &str = "Timeline Inconsistency";
const CATEGORY_SKILL_MISMATCH: &str = "Skill Mismatch";
const CATEGORY_LANGUAGE: &str = "Language Patterns";
const CATEGORY_FORMAT: &str = "Format Issues";

pub struct RiskAnalyzer {
    superlative_re: Regex,
    vague_re: Regex,
    year_re: Regex,
    experience_re: Regex,
    first_person_re: Regex,
    generic_matcher: AhoCorasick,
}

impl RiskAnalyzer {
    pub fn new() -> Result<Self> {
        let superlative_re = Self::word_list_regex(SUPERLATIVES)?;
        let vague_re = Self::word_list_regex(VAGUE_QUANTIFIERS)?;

        let year_re = Regex::new(r"\b(19|20)\d{2}\b")
            .map_err(|e| ResumeInsightError::Processing(format!("Invalid year regex: {}", e)))?;
        let experience_re = Regex::new(r"(?i)(\d+)\+?\s*years?\s+(?:of\s+)?experience")
            .map_err(|e| ResumeInsightError::Processing(format!("Invalid experience regex: {}", e)))?;
        let first_person_re = Regex::new(r"(?i)\b(I|me|my|mine)\b")
            .map_err(|e| ResumeInsightError::Processing(format!("Invalid pronoun regex: {}", e)))?;

        let generic_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(GENERIC_PHRASES)
            .map_err(|e| ResumeInsightError::Processing(format!("Failed to build phrase matcher: {}", e)))?;

        Ok(Self {
            superlative_re,
            vague_re,
            year_re,
            experience_re,
            first_person_re,
            generic_matcher,
        })
    }

    fn word_list_regex(words: &[&str]) -> Result<Regex> {
        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
            .map_err(|e| ResumeInsightError::Processing(format!("Invalid wordlist regex: {}", e)))
    }

    /// Never fails: an internal error degrades to a zero-score assessment
    /// with an explanatory note instead of propagating.
    pub fn analyze(&self, text: &str, context: &RiskContext) -> RiskAssessment {
        self.analyze_inner(text, context)
            .unwrap_or_else(|_| Self::degraded_assessment())
    }

    fn analyze_inner(&self, text: &str, context: &RiskContext) -> Result<RiskAssessment> {
        let text_lower = text.to_lowercase();
        let mut red_flags = Vec::new();

        let superlative_count = self.superlative_re.find_iter(text).count();
        let exaggeration =
            self.score_exaggeration(text, superlative_count, &mut red_flags);
        let timeline = self.score_timeline(text, &text_lower, &mut red_flags)?;

        let total_skills = context
            .skills
            .as_ref()
            .map(|s| s.total_technical())
            .unwrap_or(0);
        let skill_mismatch = Self::score_skill_mismatch(&text_lower, total_skills, &mut red_flags);
        let language = self.score_language(text, &mut red_flags);
        let format = Self::score_format(text, &mut red_flags);

        let mut detailed_analysis = BTreeMap::new();
        detailed_analysis.insert("exaggeration_score".to_string(), exaggeration);
        detailed_analysis.insert("timeline_score".to_string(), timeline);
        detailed_analysis.insert("skill_match_score".to_string(), skill_mismatch);
        detailed_analysis.insert("language_score".to_string(), language);
        detailed_analysis.insert("format_score".to_string(), format);

        let weighted: f32 = exaggeration as f32 * 0.30
            + timeline as f32 * 0.25
            + skill_mismatch as f32 * 0.20
            + language as f32 * 0.15
            + format as f32 * 0.10;
        let overall_risk_score = (weighted.round() as i64).clamp(0, 100) as u8;

        let risk_level = match overall_risk_score {
            0..=30 => RiskLevel::Low,
            31..=60 => RiskLevel::Medium,
            _ => RiskLevel::High,
        };

        let recommendations = Self::generate_recommendations(&red_flags, overall_risk_score);

        // Stable sort keeps insertion order among equal impacts
        red_flags.sort_by_key(|flag| Reverse(flag.impact));

        let mut metadata = BTreeMap::new();
        metadata.insert("total_words".to_string(), text.split_whitespace().count());
        metadata.insert(
            "total_sentences".to_string(),
            text.split(['.', '!', '?'])
                .filter(|s| !s.trim().is_empty())
                .count(),
        );
        metadata.insert("superlative_count".to_string(), superlative_count);
        metadata.insert("total_skills".to_string(), total_skills);

        Ok(RiskAssessment {
            overall_risk_score,
            risk_level,
            red_flags,
            recommendations,
            detailed_analysis,
            metadata,
        })
    }

    fn score_exaggeration(
        &self,
        text: &str,
        superlative_count: usize,
        red_flags: &mut Vec<RedFlag>,
    ) -> u8 {
        let mut score: i32 = 0;

        if superlative_count > 10 {
            score += 40;
            red_flags.push(RedFlag {
                category: CATEGORY_EXAGGERATION.to_string(),
                severity: Severity::High,
                description: format!(
                    "Contains {} superlatives - may indicate exaggeration",
                    superlative_count
                ),
                impact: 40,
            });
        } else if superlative_count > 5 {
            score += 20;
            red_flags.push(RedFlag {
                category: CATEGORY_EXAGGERATION.to_string(),
                severity: Severity::Medium,
                description: format!("Contains {} superlatives", superlative_count),
                impact: 20,
            });
        }

        let vague_count = self.vague_re.find_iter(text).count();
        if vague_count > 8 {
            score += 20;
            red_flags.push(RedFlag {
                category: CATEGORY_EXAGGERATION.to_string(),
                severity: Severity::Medium,
                description: "Excessive use of vague quantifiers instead of specific numbers"
                    .to_string(),
                impact: 20,
            });
        }

        score.clamp(0, 100) as u8
    }

    fn score_timeline(
        &self,
        text: &str,
        text_lower: &str,
        red_flags: &mut Vec<RedFlag>,
    ) -> Result<u8> {
        let mut score: i32 = 0;

        let mut years: Vec<i32> = Vec::new();
        for mat in self.year_re.find_iter(text) {
            let year: i32 = mat
                .as_str()
                .parse()
                .map_err(|e| ResumeInsightError::Processing(format!("Year parse failed: {}", e)))?;
            if !years.contains(&year) {
                years.push(year);
            }
        }

        if let (Some(min), Some(max)) = (years.iter().min(), years.iter().max()) {
            let career_span = max - min;

            for caps in self.experience_re.captures_iter(text) {
                let claimed: i32 = caps[1].parse().map_err(|e| {
                    ResumeInsightError::Processing(format!("Experience claim parse failed: {}", e))
                })?;
                if claimed > career_span + 2 {
                    score += 30;
                    red_flags.push(RedFlag {
                        category: CATEGORY_TIMELINE.to_string(),
                        severity: Severity::High,
                        description: format!(
                            "Claims {} years experience but timeline shows {} years",
                            claimed, career_span
                        ),
                        impact: 30,
                    });
                }
            }
        }

        // Disclosed gaps lower the risk: honesty about breaks beats hiding
        // them. Plain substring check, so "breakthrough" also triggers it --
        // a known false-positive source, kept for parity.
        if GAP_DISCLOSURE_TOKENS
            .iter()
            .any(|token| text_lower.contains(token))
        {
            score -= 10;
        }

        Ok(score.clamp(0, 100) as u8)
    }

    fn score_skill_mismatch(text_lower: &str, total_skills: usize, red_flags: &mut Vec<RedFlag>) -> u8 {
        let mut score: i32 = 0;

        if total_skills > 30 {
            score += 30;
            red_flags.push(RedFlag {
                category: CATEGORY_SKILL_MISMATCH.to_string(),
                severity: Severity::High,
                description: format!("Lists {} skills - may indicate keyword stuffing", total_skills),
                impact: 30,
            });
        } else if total_skills > 20 {
            score += 15;
            red_flags.push(RedFlag {
                category: CATEGORY_SKILL_MISMATCH.to_string(),
                severity: Severity::Medium,
                description: format!("Lists {} skills - unusually high number", total_skills),
                impact: 15,
            });
        }

        let buzzword_count = BUZZWORDS
            .iter()
            .filter(|word| text_lower.contains(*word))
            .count();
        if buzzword_count > 5 {
            score += 20;
            red_flags.push(RedFlag {
                category: CATEGORY_SKILL_MISMATCH.to_string(),
                severity: Severity::Medium,
                description: "Excessive use of buzzwords without substance".to_string(),
                impact: 20,
            });
        }

        score.clamp(0, 100) as u8
    }

    fn score_language(&self, text: &str, red_flags: &mut Vec<RedFlag>) -> u8 {
        let mut score: i32 = 0;

        let generic_count = self.generic_matcher.find_iter(text).count();
        if generic_count > 8 {
            score += 25;
            red_flags.push(RedFlag {
                category: CATEGORY_LANGUAGE.to_string(),
                severity: Severity::Medium,
                description: "Excessive use of generic phrases - may lack specific achievements"
                    .to_string(),
                impact: 25,
            });
        }

        let first_person_count = self.first_person_re.find_iter(text).count();
        if first_person_count > 20 {
            score += 15;
            red_flags.push(RedFlag {
                category: CATEGORY_LANGUAGE.to_string(),
                severity: Severity::Low,
                description: "Excessive use of first-person pronouns".to_string(),
                impact: 15,
            });
        }

        score.clamp(0, 100) as u8
    }

    fn score_format(text: &str, red_flags: &mut Vec<RedFlag>) -> u8 {
        let mut score: i32 = 0;

        let email = EMAIL_RE.find(text).map(|m| m.as_str().to_lowercase());
        if email.is_none() {
            score += 20;
            red_flags.push(RedFlag {
                category: CATEGORY_FORMAT.to_string(),
                severity: Severity::Medium,
                description: "Missing email address".to_string(),
                impact: 20,
            });
        }

        if !PHONE_RE.is_match(text) {
            score += 15;
            red_flags.push(RedFlag {
                category: CATEGORY_FORMAT.to_string(),
                severity: Severity::Low,
                description: "Missing phone number".to_string(),
                impact: 15,
            });
        }

        if let Some(email) = email {
            for token in UNPROFESSIONAL_EMAIL_TOKENS {
                if email.contains(token) {
                    score += 25;
                    red_flags.push(RedFlag {
                        category: CATEGORY_FORMAT.to_string(),
                        severity: Severity::High,
                        description: "Unprofessional email address".to_string(),
                        impact: 25,
                    });
                }
            }
        }

        score.clamp(0, 100) as u8
    }

    /// One fixed advisory per triggered category, deduplicated by category;
    /// skill mismatch carries a second, portfolio-focused ask.
    fn generate_recommendations(red_flags: &[RedFlag], overall_score: u8) -> Vec<String> {
        let triggered = |category: &str| red_flags.iter().any(|f| f.category == category);
        let mut recommendations = Vec::new();

        if triggered(CATEGORY_TIMELINE) {
            recommendations
                .push("Verify employment dates with previous employers or references".to_string());
        }
        if triggered(CATEGORY_EXAGGERATION) {
            recommendations.push(
                "Request specific examples and quantifiable achievements during interview".to_string(),
            );
        }
        if triggered(CATEGORY_SKILL_MISMATCH) {
            recommendations.push("Conduct technical assessment to verify claimed skills".to_string());
            recommendations.push("Ask for portfolio or project examples".to_string());
        }
        if triggered(CATEGORY_LANGUAGE) {
            recommendations
                .push("Probe for concrete accomplishments behind generic duty statements".to_string());
        }
        if triggered(CATEGORY_FORMAT) {
            recommendations
                .push("Request updated resume with complete contact information".to_string());
        }
        if overall_score < 20 {
            recommendations.push("Resume appears authentic with minimal red flags".to_string());
        }

        recommendations
    }

    fn degraded_assessment() -> RiskAssessment {
        let mut detailed_analysis = BTreeMap::new();
        for key in [
            "exaggeration_score",
            "timeline_score",
            "skill_match_score",
            "language_score",
            "format_score",
        ] {
            detailed_analysis.insert(key.to_string(), 0);
        }

        RiskAssessment {
            overall_risk_score: 0,
            risk_level: RiskLevel::Low,
            red_flags: Vec::new(),
            recommendations: vec!["Risk analysis could not be completed".to_string()],
            detailed_analysis,
            metadata: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> RiskAssessment {
        RiskAnalyzer::new()
            .unwrap()
            .analyze(text, &RiskContext::default())
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total: f32 = RISK_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_superlative_stuffing_flags_high() {
        let text = "best greatest perfect outstanding exceptional flawless \
                    best greatest perfect outstanding exceptional flawless";
        let assessment = analyze(text);

        assert!(assessment.detailed_analysis["exaggeration_score"] >= 40);
        assert!(assessment.red_flags.iter().any(|f| {
            f.category == "Exaggerated Claims" && f.severity == Severity::High
        }));
    }

    #[test]
    fn test_moderate_superlatives_flag_medium() {
        let text = "best greatest perfect outstanding exceptional flawless";
        let assessment = analyze(text);

        assert_eq!(assessment.detailed_analysis["exaggeration_score"], 20);
        assert!(assessment.red_flags.iter().any(|f| {
            f.category == "Exaggerated Claims" && f.severity == Severity::Medium
        }));
    }

    #[test]
    fn test_missing_email_flagged() {
        let assessment = analyze("John Doe, software engineer, 555-123-4567");

        let flag = assessment
            .red_flags
            .iter()
            .find(|f| f.description == "Missing email address")
            .expect("missing email flag");
        assert_eq!(flag.severity, Severity::Medium);
        assert_eq!(flag.category, "Format Issues");
        assert!(assessment.detailed_analysis["format_score"] >= 20);
    }

    #[test]
    fn test_unprofessional_email_flagged() {
        let assessment = analyze("Contact: partyboy69@example.com 555-123-4567");

        let count = assessment
            .red_flags
            .iter()
            .filter(|f| f.description == "Unprofessional email address")
            .count();
        // "party" and "69" both hit
        assert_eq!(count, 2);
        assert_eq!(assessment.detailed_analysis["format_score"], 50);
    }

    #[test]
    fn test_timeline_inconsistency() {
        let text = "Worked from 2018 to 2021. Over 15 years experience in cloud systems. \
                    Email: a@b.com 555-123-4567";
        let assessment = analyze(text);

        assert!(assessment.detailed_analysis["timeline_score"] >= 30);
        assert!(assessment
            .red_flags
            .iter()
            .any(|f| f.category == "Timeline Inconsistency" && f.severity == Severity::High));
    }

    #[test]
    fn test_disclosed_gap_reduces_timeline_score() {
        let base = "Worked 2018 to 2021. 15 years experience. a@b.com 555-123-4567";
        let with_gap = "Worked 2018 to 2021. 15 years experience. Took a career break. \
                        a@b.com 555-123-4567";

        let a = analyze(base);
        let b = analyze(with_gap);
        assert_eq!(
            a.detailed_analysis["timeline_score"] - b.detailed_analysis["timeline_score"],
            10
        );
    }

    #[test]
    fn test_skill_stuffing_via_context() {
        let analyzer = RiskAnalyzer::new().unwrap();
        let extractor = crate::analysis::skills::SkillExtractor::new().unwrap();

        // 31+ distinct taxonomy skills
        let text = "Python JavaScript Java Ruby PHP Swift Kotlin Go Rust TypeScript Scala \
                    Perl Dart SQL HTML CSS Bash React Angular Vue Express Django Flask Spring \
                    MySQL PostgreSQL MongoDB Redis Oracle SQLite AWS Azure Docker \
                    a@b.com 555-123-4567";
        let skills = extractor.analyze(text);
        assert!(skills.total_technical() > 30);

        let assessment = analyzer.analyze(
            text,
            &RiskContext {
                skills: Some(skills),
            },
        );
        assert_eq!(assessment.detailed_analysis["skill_match_score"], 30);
        assert!(assessment
            .red_flags
            .iter()
            .any(|f| f.category == "Skill Mismatch" && f.severity == Severity::High));
    }

    #[test]
    fn test_red_flags_sorted_by_impact_descending() {
        let text = "best greatest perfect outstanding exceptional flawless ideal supreme \
                    ultimate premier leading top"; // no contact info either
        let assessment = analyze(text);

        let impacts: Vec<u32> = assessment.red_flags.iter().map(|f| f.impact).collect();
        let mut sorted = impacts.clone();
        sorted.sort_by_key(|i| Reverse(*i));
        assert_eq!(impacts, sorted);
        assert!(impacts.len() >= 2);
    }

    #[test]
    fn test_clean_resume_scores_low() {
        let text = "Jane Doe jane@example.com 555-123-4567. Developed services in Python. \
                    Reduced latency by 40 percent in 2021.";
        let assessment = analyze(text);

        assert!(assessment.overall_risk_score <= 30);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert!(assessment
            .recommendations
            .contains(&"Resume appears authentic with minimal red flags".to_string()));
    }

    #[test]
    fn test_scores_bounded() {
        let noisy = "best greatest perfect many various I me my mine responsible for \
                     synergy leverage paradigm disruptive innovative cutting-edge \
                     next-generation revolutionary game-changing "
            .repeat(10);
        let assessment = analyze(&noisy);

        assert!(assessment.overall_risk_score <= 100);
        for (key, value) in &assessment.detailed_analysis {
            assert!(*value <= 100, "dimension {} out of bounds: {}", key, value);
        }
    }

    #[test]
    fn test_metadata_counts() {
        let assessment = analyze("One two three. Four five! Six?");
        assert_eq!(assessment.metadata["total_words"], 6);
        assert_eq!(assessment.metadata["total_sentences"], 3);
    }

    #[test]
    fn test_determinism() {
        let text = "best greatest 2018 2021 15 years experience responsible for everything";
        let a = analyze(text);
        let b = analyze(text);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
