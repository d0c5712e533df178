//! Learning roadmap generation from the detected skill gap

use crate::analysis::knowledge::{self, SkillResourceEntry};
use serde::{Deserialize, Serialize};

const MAX_ROADMAP_ITEMS: usize = 6;
const FOUNDATION_ITEMS: usize = 2;
const EXPANSION_MEDIUM_ITEMS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    fn from_label(label: &str) -> Self {
        match label {
            "High" => Priority::High,
            "Low" => Priority::Low,
            _ => Priority::Medium,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub skill: String,
    pub estimated_time: String,
    pub priority: Priority,
    pub resources: Vec<LearningResource>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub phase: u8,
    pub name: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub focus: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapPlan {
    pub items: Vec<RoadmapItem>,
    pub phases: Vec<Phase>,
    pub total_estimated_time: String,
    pub role: String,
}

/// Pure generator: suggested skills in, phased plan out. Unknown skills get
/// a synthesized default entry.
pub struct RoadmapGenerator;

impl RoadmapGenerator {
    pub fn generate(suggested_skills: &[String], detected_role: &str) -> RoadmapPlan {
        let mut items: Vec<RoadmapItem> = suggested_skills
            .iter()
            .take(MAX_ROADMAP_ITEMS)
            .map(|skill| Self::build_item(skill, detected_role))
            .collect();

        // Stable: within a priority, suggestion order is preserved
        items.sort_by_key(|item| item.priority);

        let phases = Self::build_phases(&items);

        RoadmapPlan {
            items,
            phases,
            // Fixed by contract regardless of item count
            total_estimated_time: "6-12 months".to_string(),
            role: detected_role.to_string(),
        }
    }

    fn build_item(skill: &str, role: &str) -> RoadmapItem {
        match knowledge::skill_resource(skill) {
            Some(entry) => Self::item_from_entry(skill, role, entry),
            None => Self::default_item(skill, role),
        }
    }

    fn item_from_entry(skill: &str, role: &str, entry: &SkillResourceEntry) -> RoadmapItem {
        RoadmapItem {
            skill: skill.to_string(),
            estimated_time: entry.time.to_string(),
            priority: Priority::from_label(entry.priority),
            resources: entry
                .resources
                .iter()
                .map(|(name, resource_type, url)| LearningResource {
                    name: name.to_string(),
                    resource_type: resource_type.to_string(),
                    url: url.to_string(),
                })
                .collect(),
            description: Self::describe(skill, role),
        }
    }

    fn default_item(skill: &str, role: &str) -> RoadmapItem {
        RoadmapItem {
            skill: skill.to_string(),
            estimated_time: "2-3 months".to_string(),
            priority: Priority::Medium,
            resources: vec![
                LearningResource {
                    name: format!("{} Official Documentation", skill),
                    resource_type: "Documentation".to_string(),
                    url: "#".to_string(),
                },
                LearningResource {
                    name: format!("Learn {} Online", skill),
                    resource_type: "Course".to_string(),
                    url: "#".to_string(),
                },
            ],
            description: Self::describe(skill, role),
        }
    }

    fn describe(skill: &str, role: &str) -> String {
        format!("Master {} to enhance your {} capabilities", skill, role)
    }

    /// Partition items into three fixed phases: the first two High items,
    /// the remaining High plus the first two Medium, then everything else.
    /// Empty phases are omitted.
    fn build_phases(items: &[RoadmapItem]) -> Vec<Phase> {
        let high: Vec<&RoadmapItem> = items.iter().filter(|i| i.priority == Priority::High).collect();
        let medium: Vec<&RoadmapItem> =
            items.iter().filter(|i| i.priority == Priority::Medium).collect();
        let low: Vec<&RoadmapItem> = items.iter().filter(|i| i.priority == Priority::Low).collect();

        let phase1: Vec<String> = high
            .iter()
            .take(FOUNDATION_ITEMS)
            .map(|i| i.skill.clone())
            .collect();
        let phase2: Vec<String> = high
            .iter()
            .skip(FOUNDATION_ITEMS)
            .chain(medium.iter().take(EXPANSION_MEDIUM_ITEMS))
            .map(|i| i.skill.clone())
            .collect();
        let phase3: Vec<String> = medium
            .iter()
            .skip(EXPANSION_MEDIUM_ITEMS)
            .chain(low.iter())
            .map(|i| i.skill.clone())
            .collect();

        let mut phases = Vec::new();
        if !phase1.is_empty() {
            phases.push(Phase {
                phase: 1,
                name: "Foundation Building".to_string(),
                duration: "0-3 months".to_string(),
                skills: phase1,
                focus: "Master core technologies essential for your role".to_string(),
            });
        }
        if !phase2.is_empty() {
            phases.push(Phase {
                phase: 2,
                name: "Skill Expansion".to_string(),
                duration: "3-6 months".to_string(),
                skills: phase2,
                focus: "Expand your technical toolkit with complementary skills".to_string(),
            });
        }
        if !phase3.is_empty() {
            phases.push(Phase {
                phase: 3,
                name: "Advanced Mastery".to_string(),
                duration: "6-12 months".to_string(),
                skills: phase3,
                focus: "Achieve expertise in specialized areas".to_string(),
            });
        }

        phases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_items_capped_at_six() {
        let suggested = skills(&["Python", "React", "AWS", "Docker", "Kubernetes", "Node.js", "Git", "Figma"]);
        let plan = RoadmapGenerator::generate(&suggested, "Software Engineer");
        assert_eq!(plan.items.len(), 6);
    }

    #[test]
    fn test_items_come_from_suggestions_in_relative_order() {
        let suggested = skills(&["Docker", "Python", "Kubernetes", "AWS"]);
        let plan = RoadmapGenerator::generate(&suggested, "DevOps Engineer");

        for item in &plan.items {
            assert!(suggested.contains(&item.skill));
        }
        // High (Python, AWS) first, then Medium (Docker, Kubernetes),
        // suggestion order preserved within each priority
        let order: Vec<&str> = plan.items.iter().map(|i| i.skill.as_str()).collect();
        assert_eq!(order, vec!["Python", "AWS", "Docker", "Kubernetes"]);
    }

    #[test]
    fn test_unknown_skill_gets_default_entry() {
        let plan = RoadmapGenerator::generate(&skills(&["Statistics"]), "Data Scientist");

        let item = &plan.items[0];
        assert_eq!(item.estimated_time, "2-3 months");
        assert_eq!(item.priority, Priority::Medium);
        assert_eq!(item.resources.len(), 2);
        assert_eq!(item.resources[0].name, "Statistics Official Documentation");
        assert_eq!(
            item.description,
            "Master Statistics to enhance your Data Scientist capabilities"
        );
    }

    #[test]
    fn test_phase_partition_is_exact() {
        // 1 High, 5 unknown (Medium): phase 1 gets the High item, phase 2 two
        // Mediums, phase 3 the remaining three; nothing dropped or duplicated
        let suggested = skills(&["Python", "Alpha", "Beta", "Gamma", "Delta", "Epsilon"]);
        let plan = RoadmapGenerator::generate(&suggested, "Software Engineer");

        let mut phased: Vec<String> = plan.phases.iter().flat_map(|p| p.skills.clone()).collect();
        let mut all: Vec<String> = plan.items.iter().map(|i| i.skill.clone()).collect();
        phased.sort();
        all.sort();
        assert_eq!(phased, all);

        assert_eq!(plan.phases[0].skills, vec!["Python"]);
        assert_eq!(plan.phases[1].skills, vec!["Alpha", "Beta"]);
        assert_eq!(plan.phases[2].skills, vec!["Gamma", "Delta", "Epsilon"]);
    }

    #[test]
    fn test_empty_phases_omitted() {
        // Only High-priority known skills: no Medium/Low, so no phase 3
        let plan = RoadmapGenerator::generate(&skills(&["Python", "AWS"]), "Software Engineer");
        assert_eq!(plan.phases.len(), 1);
        assert_eq!(plan.phases[0].phase, 1);

        let plan = RoadmapGenerator::generate(&[], "Software Engineer");
        assert!(plan.items.is_empty());
        assert!(plan.phases.is_empty());
    }

    #[test]
    fn test_total_time_is_fixed_literal() {
        let plan = RoadmapGenerator::generate(&skills(&["Python"]), "Software Engineer");
        assert_eq!(plan.total_estimated_time, "6-12 months");

        let plan = RoadmapGenerator::generate(&[], "Software Engineer");
        assert_eq!(plan.total_estimated_time, "6-12 months");
    }

    #[test]
    fn test_phase_metadata() {
        let suggested = skills(&["Python", "React", "AWS", "Docker", "Kubernetes", "Node.js"]);
        let plan = RoadmapGenerator::generate(&suggested, "Software Engineer");

        assert_eq!(plan.phases[0].name, "Foundation Building");
        assert_eq!(plan.phases[0].duration, "0-3 months");
        assert_eq!(plan.phases[1].name, "Skill Expansion");
        assert_eq!(plan.phases[1].duration, "3-6 months");
        assert_eq!(plan.role, "Software Engineer");
    }
}
