//! Issues enriched with stack, skill level and category metadata.

use super::RawIssue;
use crate::classify::{categorize_issue, determine_skill_level, is_good_first_issue};
use crate::classify::{Category, SkillLevel};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A [`RawIssue`] plus derived metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedIssue {
    #[serde(flatten)]
    pub issue: RawIssue,

    /// Stack of the owning repository; empty if it was never detected.
    pub stack: Vec<String>,

    pub is_good_first_issue: bool,

    pub skill_level: SkillLevel,

    /// Never empty.
    pub category: Vec<Category>,
}

impl ProcessedIssue {
    /// Classifies `issue` and attaches `stack`.
    #[must_use]
    pub fn new(issue: RawIssue, stack: Vec<String>) -> Self {
        let is_good_first_issue = is_good_first_issue(&issue.labels);
        let skill_level = determine_skill_level(&issue.labels);
        let category = categorize_issue(&issue.labels);

        Self {
            issue,
            stack,
            is_good_first_issue,
            skill_level,
            category,
        }
    }
}

/// Enriches every issue, looking its stack up by repository full name.
#[must_use]
pub fn process_issues(
    issues: Vec<RawIssue>,
    stacks: &HashMap<String, Vec<String>>,
) -> Vec<ProcessedIssue> {
    issues
        .into_iter()
        .map(|issue| {
            let stack = stacks
                .get(&issue.repo_full_name)
                .cloned()
                .unwrap_or_default();
            ProcessedIssue::new(issue, stack)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    fn issue(repo_full_name: &str, labels: &[&str]) -> RawIssue {
        let (owner, name) = repo_full_name.split_once('/').unwrap();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        RawIssue {
            id: 1,
            title: "Add memo support".to_string(),
            url: format!("https://github.com/{repo_full_name}/issues/1"),
            number: 1,
            state: "open".to_string(),
            created_at: at,
            updated_at: at,
            labels: labels.iter().map(|l| l.to_string()).collect(),
            repo_owner: owner.to_string(),
            repo_name: name.to_string(),
            repo_full_name: repo_full_name.to_string(),
            body: String::new(),
            comments_count: 0,
        }
    }

    #[test]
    fn attaches_stack_and_metadata() {
        let stacks = HashMap::from([(
            "stellar/js-stellar-sdk".to_string(),
            vec!["TypeScript".to_string(), "JavaScript".to_string()],
        )]);

        let processed = process_issues(
            vec![issue("stellar/js-stellar-sdk", &["good first issue", "docs"])],
            &stacks,
        );

        assert_eq!(processed.len(), 1);
        let first = &processed[0];
        assert_eq!(first.stack, vec!["TypeScript", "JavaScript"]);
        assert!(first.is_good_first_issue);
        assert_eq!(first.skill_level, SkillLevel::Beginner);
        assert_eq!(first.category, vec![Category::Documentation]);
    }

    #[test]
    fn unknown_repository_gets_empty_stack() {
        let processed = process_issues(vec![issue("other/repo", &[])], &HashMap::new());

        assert!(processed[0].stack.is_empty());
        assert_eq!(processed[0].skill_level, SkillLevel::Unknown);
        assert_eq!(processed[0].category, vec![Category::General]);
    }

    #[test]
    fn serializes_flat_camel_case() {
        let processed = ProcessedIssue::new(issue("stellar/go", &["bug"]), vec!["Go".to_string()]);
        let value = serde_json::to_value(&processed).unwrap();

        assert_eq!(value["repoFullName"], "stellar/go");
        assert_eq!(value["isGoodFirstIssue"], false);
        assert_eq!(value["skillLevel"], "unknown");
        assert_eq!(value["category"][0], "Bug");
        assert_eq!(value["commentsCount"], 0);
        assert!(value.get("issue").is_none());
    }
}
