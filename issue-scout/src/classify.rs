//! Label-based issue classification.
//!
//! All matching is a case-insensitive substring test of each keyword against
//! each label, so `"Type: Bug"` matches `bug` and `"good first issue :+1:"`
//! matches `good first issue`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const GOOD_FIRST_ISSUE: &str = "good first issue";

/// Skill levels in priority order with their keywords.
const SKILL_KEYWORDS: [(SkillLevel, &[&str]); 3] = [
    (SkillLevel::Beginner, &[GOOD_FIRST_ISSUE, "beginner", "easy"]),
    (SkillLevel::Intermediate, &["intermediate", "medium"]),
    (SkillLevel::Advanced, &["advanced", "hard", "complex"]),
];

/// Categories in output order with their keywords.
const CATEGORY_KEYWORDS: [(Category, &[&str]); 9] = [
    (Category::Bug, &["bug", "bugfix", "error"]),
    (Category::Feature, &["feature", "enhancement", "improvement"]),
    (Category::Documentation, &["documentation", "docs"]),
    (Category::Testing, &["testing", "test", "qa"]),
    (Category::Performance, &["performance", "optimization"]),
    (Category::Security, &["security", "vulnerability"]),
    (Category::UiUx, &["ui", "ux", "design", "frontend"]),
    (Category::Backend, &["backend", "api", "server"]),
    (Category::DevOps, &["devops", "ci/cd", "infrastructure"]),
];

/// Coarse difficulty derived from labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Unknown,
}

impl SkillLevel {
    /// Lowercase name, as serialized.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "unknown" => Ok(Self::Unknown),
            other => Err(format!("unknown skill level '{other}'")),
        }
    }
}

/// Topical tag derived from labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Bug,
    Feature,
    Documentation,
    Testing,
    Performance,
    Security,
    #[serde(rename = "UI/UX")]
    UiUx,
    Backend,
    DevOps,
    /// Assigned when no other category matches.
    General,
}

impl Category {
    /// Display name, as serialized.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "Bug",
            Self::Feature => "Feature",
            Self::Documentation => "Documentation",
            Self::Testing => "Testing",
            Self::Performance => "Performance",
            Self::Security => "Security",
            Self::UiUx => "UI/UX",
            Self::Backend => "Backend",
            Self::DevOps => "DevOps",
            Self::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CATEGORY_KEYWORDS
            .iter()
            .map(|(category, _)| *category)
            .chain(std::iter::once(Self::General))
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown category '{wanted}'"))
    }
}

fn lowercase_all<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    labels.iter().map(|l| l.as_ref().to_lowercase()).collect()
}

fn any_contains(lower_labels: &[String], keywords: &[&str]) -> bool {
    lower_labels
        .iter()
        .any(|label| keywords.iter().any(|keyword| label.contains(keyword)))
}

/// Returns true if any label contains "good first issue".
#[must_use]
pub fn is_good_first_issue<S: AsRef<str>>(labels: &[S]) -> bool {
    any_contains(&lowercase_all(labels), &[GOOD_FIRST_ISSUE])
}

/// Returns the first skill level whose keywords match any label.
///
/// Groups are checked beginner → intermediate → advanced, so a label set
/// matching several groups resolves to the earliest one.
#[must_use]
pub fn determine_skill_level<S: AsRef<str>>(labels: &[S]) -> SkillLevel {
    let lower = lowercase_all(labels);
    SKILL_KEYWORDS
        .iter()
        .find(|(_, keywords)| any_contains(&lower, keywords))
        .map_or(SkillLevel::Unknown, |(level, _)| *level)
}

/// Returns every matching category in fixed order, or `[General]`.
#[must_use]
pub fn categorize_issue<S: AsRef<str>>(labels: &[S]) -> Vec<Category> {
    let lower = lowercase_all(labels);
    let categories: Vec<Category> = CATEGORY_KEYWORDS
        .iter()
        .filter(|(_, keywords)| any_contains(&lower, keywords))
        .map(|(category, _)| *category)
        .collect();

    if categories.is_empty() {
        vec![Category::General]
    } else {
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn good_first_issue_is_case_insensitive() {
        assert!(is_good_first_issue(&["Good First Issue"]));
        assert!(is_good_first_issue(&["bug", "status: good first issue"]));
        assert!(!is_good_first_issue(&["good-first-issue"]));
        assert!(!is_good_first_issue::<&str>(&[]));
    }

    #[test]
    fn skill_level_follows_priority() {
        assert_eq!(determine_skill_level(&["Easy"]), SkillLevel::Beginner);
        assert_eq!(determine_skill_level(&["medium"]), SkillLevel::Intermediate);
        assert_eq!(determine_skill_level(&["complex"]), SkillLevel::Advanced);
        assert_eq!(determine_skill_level(&["bug"]), SkillLevel::Unknown);
        assert_eq!(
            determine_skill_level(&["hard", "good first issue"]),
            SkillLevel::Beginner
        );
        assert_eq!(
            determine_skill_level(&["advanced", "Medium"]),
            SkillLevel::Intermediate
        );
    }

    #[test]
    fn single_label_can_hit_several_groups() {
        // "beginner-hard" contains both a beginner and an advanced keyword.
        assert_eq!(determine_skill_level(&["beginner-hard"]), SkillLevel::Beginner);
    }

    #[test]
    fn categories_keep_fixed_order() {
        let categories = categorize_issue(&["frontend", "docs", "Bug"]);
        assert_eq!(
            categories,
            vec![Category::Bug, Category::Documentation, Category::UiUx]
        );
    }

    #[test]
    fn one_label_can_trigger_several_categories() {
        // "api-test" hits Testing ("test") and Backend ("api").
        assert_eq!(
            categorize_issue(&["api-test"]),
            vec![Category::Testing, Category::Backend]
        );
    }

    #[test]
    fn unmatched_labels_are_general() {
        assert_eq!(categorize_issue(&["question"]), vec![Category::General]);
        assert_eq!(categorize_issue::<String>(&[]), vec![Category::General]);
    }

    #[test]
    fn substring_matching_is_loose() {
        // "guide" contains "ui".
        assert_eq!(categorize_issue(&["guide"]), vec![Category::UiUx]);
        assert_eq!(categorize_issue(&["CI/CD"]), vec![Category::DevOps]);
    }

    #[test]
    fn category_serializes_display_names() {
        let json = serde_json::to_string(&vec![Category::UiUx, Category::General]).unwrap();
        assert_eq!(json, r#"["UI/UX","General"]"#);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("ui/ux".parse::<Category>(), Ok(Category::UiUx));
        assert_eq!("devops".parse::<Category>(), Ok(Category::DevOps));
        assert_eq!("General".parse::<Category>(), Ok(Category::General));
        assert!("misc".parse::<Category>().is_err());
        assert_eq!("Beginner".parse::<SkillLevel>(), Ok(SkillLevel::Beginner));
        assert!("expert".parse::<SkillLevel>().is_err());
    }
}
