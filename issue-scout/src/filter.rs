//! Filtering of enriched issues for display.

use crate::classify::{Category, SkillLevel};
use crate::issues::ProcessedIssue;
use std::collections::BTreeSet;

/// Display filter. Empty or unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    /// Issue matches if its stack contains any of these.
    pub stacks: Vec<String>,

    /// Issue matches if its skill level is exactly this.
    pub skill_level: Option<SkillLevel>,

    /// Issue matches if it has any of these categories.
    pub categories: Vec<Category>,

    /// Only good first issues.
    pub good_first_issue_only: bool,

    /// Case-insensitive text searched in title, body and repository names.
    pub query: Option<String>,
}

impl IssueFilter {
    /// Returns true if `issue` passes every criterion.
    #[must_use]
    pub fn matches(&self, issue: &ProcessedIssue) -> bool {
        if !self.stacks.is_empty() && !self.stacks.iter().any(|s| issue.stack.contains(s)) {
            return false;
        }

        if self.skill_level.is_some_and(|level| level != issue.skill_level) {
            return false;
        }

        if !self.categories.is_empty()
            && !self.categories.iter().any(|c| issue.category.contains(c))
        {
            return false;
        }

        if self.good_first_issue_only && !issue.is_good_first_issue {
            return false;
        }

        match self.query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => matches_text(issue, &query.to_lowercase()),
            _ => true,
        }
    }

    /// Returns the matching issues in their original order.
    #[must_use]
    pub fn apply<'a>(&self, issues: &'a [ProcessedIssue]) -> Vec<&'a ProcessedIssue> {
        issues.iter().filter(|issue| self.matches(issue)).collect()
    }
}

fn matches_text(issue: &ProcessedIssue, lower_query: &str) -> bool {
    let raw = &issue.issue;
    [
        &raw.title,
        &raw.body,
        &raw.repo_full_name,
        &raw.repo_owner,
        &raw.repo_name,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(lower_query))
}

/// Distinct stack tags across `issues`, sorted.
#[must_use]
pub fn available_stacks(issues: &[ProcessedIssue]) -> Vec<String> {
    issues
        .iter()
        .flat_map(|issue| issue.stack.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct categories across `issues`, sorted by display name.
#[must_use]
pub fn available_categories(issues: &[ProcessedIssue]) -> Vec<Category> {
    let mut categories: Vec<Category> = issues
        .iter()
        .flat_map(|issue| issue.category.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    categories.sort_by_key(|c| c.as_str());
    categories
}
