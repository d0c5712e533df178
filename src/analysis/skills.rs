//! Skill extraction: taxonomy scan, role detection, and gap suggestions

use crate::analysis::knowledge::{
    self, DATA_SCIENTIST_SIGNALS, DEFAULT_ROLE, DEVOPS_SIGNALS, FRONTEND_SIGNALS, SOFT_SKILLS,
};
use crate::error::{Result, ResumeInsightError};
use regex::RegexSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const MAX_SUGGESTIONS: usize = 8;

/// Fixed technical skill categories, in taxonomy order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Databases,
    Cloud,
    Tools,
    Concepts,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Databases,
        SkillCategory::Cloud,
        SkillCategory::Tools,
        SkillCategory::Concepts,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Databases => "databases",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Tools => "tools",
            SkillCategory::Concepts => "concepts",
        }
    }

    pub fn skills(&self) -> &'static [&'static str] {
        match self {
            SkillCategory::Languages => knowledge::LANGUAGES,
            SkillCategory::Frameworks => knowledge::FRAMEWORKS,
            SkillCategory::Databases => knowledge::DATABASES,
            SkillCategory::Cloud => knowledge::CLOUD,
            SkillCategory::Tools => knowledge::TOOLS,
            SkillCategory::Concepts => knowledge::CONCEPTS,
        }
    }
}

/// Detected and suggested skills for one resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillProfile {
    /// Category key -> skills found, taxonomy order preserved; empty
    /// categories are omitted.
    pub technical: BTreeMap<String, Vec<String>>,
    pub soft: Vec<String>,
    /// Every technical skill found, flattened in taxonomy order.
    pub all_technical: Vec<String>,
    pub detected_role: String,
    pub suggested_skills: Vec<String>,
    pub skill_gap_count: usize,
}

impl SkillProfile {
    pub fn total_technical(&self) -> usize {
        self.all_technical.len()
    }
}

/// Scans resume text against the fixed taxonomy. Matchers are compiled once
/// at construction; `analyze` is pure and deterministic.
pub struct SkillExtractor {
    category_sets: Vec<(SkillCategory, RegexSet)>,
    soft_set: RegexSet,
}

impl SkillExtractor {
    pub fn new() -> Result<Self> {
        let mut category_sets = Vec::with_capacity(SkillCategory::ALL.len());
        for category in SkillCategory::ALL {
            category_sets.push((category, Self::build_set(category.skills())?));
        }
        let soft_set = Self::build_set(SOFT_SKILLS)?;

        Ok(Self {
            category_sets,
            soft_set,
        })
    }

    /// Case-insensitive whole-word patterns, one per skill, in table order so
    /// match indices map straight back to the taxonomy.
    fn build_set(skills: &[&str]) -> Result<RegexSet> {
        let patterns: Vec<String> = skills
            .iter()
            .map(|skill| format!(r"(?i)\b{}\b", regex::escape(skill)))
            .collect();

        RegexSet::new(&patterns)
            .map_err(|e| ResumeInsightError::Processing(format!("Failed to build skill matcher: {}", e)))
    }

    pub fn analyze(&self, text: &str) -> SkillProfile {
        let mut technical = BTreeMap::new();
        let mut all_technical = Vec::new();

        for (category, set) in &self.category_sets {
            let table = category.skills();
            let found: Vec<String> = set
                .matches(text)
                .into_iter()
                .map(|idx| table[idx].to_string())
                .collect();

            if !found.is_empty() {
                all_technical.extend(found.iter().cloned());
                technical.insert(category.key().to_string(), found);
            }
        }

        let soft: Vec<String> = self
            .soft_set
            .matches(text)
            .into_iter()
            .map(|idx| SOFT_SKILLS[idx].to_string())
            .collect();

        let detected_role = Self::detect_role(&all_technical, text);
        let suggested_skills = Self::suggest_skills(&all_technical, &soft, &detected_role);
        let skill_gap_count = suggested_skills.len();

        SkillProfile {
            technical,
            soft,
            all_technical,
            detected_role,
            suggested_skills,
            skill_gap_count,
        }
    }

    /// Ordered role-signature rules; first match wins, default otherwise.
    fn detect_role(all_technical: &[String], text: &str) -> String {
        let has_any = |signals: &[&str]| {
            all_technical
                .iter()
                .any(|skill| signals.contains(&skill.as_str()))
        };

        if has_any(DATA_SCIENTIST_SIGNALS) {
            "Data Scientist".to_string()
        } else if has_any(DEVOPS_SIGNALS) {
            "DevOps Engineer".to_string()
        } else if has_any(FRONTEND_SIGNALS) && !text.contains("Backend") {
            "Frontend Developer".to_string()
        } else {
            DEFAULT_ROLE.to_string()
        }
    }

    /// Recommended skills for the role that the resume does not already
    /// show, case-insensitively, preserving the table's ordering.
    fn suggest_skills(all_technical: &[String], soft: &[String], role: &str) -> Vec<String> {
        let present: Vec<String> = all_technical
            .iter()
            .chain(soft.iter())
            .map(|s| s.to_lowercase())
            .collect();

        knowledge::role_recommended_skills(role)
            .iter()
            .filter(|skill| !present.contains(&skill.to_lowercase()))
            .take(MAX_SUGGESTIONS)
            .map(|skill| skill.to_string())
            .collect()
    }
}
