//! In-memory GitHub used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use issue_scout::github::{ApiError, GitHubApi, IssueRecord, OwnerRecord, RepositoryRecord};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Scripted responses plus a log of every call made.
#[derive(Default)]
pub struct FakeGitHub {
    searches: HashMap<String, Vec<RepositoryRecord>>,
    failing_searches: HashSet<String>,
    languages: HashMap<String, Option<String>>,
    files: HashSet<String>,
    broken_files: HashSet<String>,
    issues: HashMap<String, Vec<IssueRecord>>,
    failing_issues: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

fn failure() -> ApiError {
    ApiError::RateLimitExceeded { reset_at: 0 }
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: &str, records: Vec<RepositoryRecord>) -> Self {
        self.searches.insert(query.to_string(), records);
        self
    }

    pub fn failing_search(mut self, query: &str) -> Self {
        self.failing_searches.insert(query.to_string());
        self
    }

    /// Registers repository metadata. Unregistered repositories fail the
    /// metadata fetch.
    pub fn with_repository(mut self, full_name: &str, language: Option<&str>) -> Self {
        self.languages
            .insert(full_name.to_string(), language.map(str::to_string));
        self
    }

    pub fn with_file(mut self, full_name: &str, path: &str) -> Self {
        self.files.insert(format!("{full_name}/{path}"));
        self
    }

    /// Makes probing `path` fail with something other than not-found.
    pub fn broken_file(mut self, full_name: &str, path: &str) -> Self {
        self.broken_files.insert(format!("{full_name}/{path}"));
        self
    }

    pub fn with_issues(mut self, full_name: &str, records: Vec<IssueRecord>) -> Self {
        self.issues.insert(full_name.to_string(), records);
        self
    }

    pub fn failing_issues(mut self, full_name: &str) -> Self {
        self.failing_issues.insert(full_name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.starts_with(prefix))
            .collect()
    }

    fn log(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    async fn search_repositories(
        &self,
        query: &str,
        per_page: u8,
    ) -> Result<Vec<RepositoryRecord>, ApiError> {
        self.log(format!("search:{query}"));
        if self.failing_searches.contains(query) {
            return Err(failure());
        }
        let records = self.searches.get(query).cloned().unwrap_or_default();
        Ok(records.into_iter().take(usize::from(per_page)).collect())
    }

    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryRecord, ApiError> {
        let full_name = format!("{owner}/{repo}");
        self.log(format!("repo:{full_name}"));
        match self.languages.get(&full_name) {
            Some(language) => {
                let mut record = repository(owner, repo, 0);
                record.language = language.clone();
                Ok(record)
            }
            None => Err(failure()),
        }
    }

    async fn check_content(&self, owner: &str, repo: &str, path: &str) -> Result<(), ApiError> {
        let key = format!("{owner}/{repo}/{path}");
        self.log(format!("content:{key}"));
        if self.broken_files.contains(&key) {
            Err(failure())
        } else if self.files.contains(&key) {
            Ok(())
        } else {
            Err(ApiError::NotFound { path: key })
        }
    }

    async fn list_open_issues(
        &self,
        owner: &str,
        repo: &str,
        per_page: u8,
    ) -> Result<Vec<IssueRecord>, ApiError> {
        let full_name = format!("{owner}/{repo}");
        self.log(format!("issues:{full_name}"));
        if self.failing_issues.contains(&full_name) {
            return Err(failure());
        }
        let records = self.issues.get(&full_name).cloned().unwrap_or_default();
        Ok(records.into_iter().take(usize::from(per_page)).collect())
    }
}

/// Repository search record.
pub fn repository(owner: &str, name: &str, stars: u64) -> RepositoryRecord {
    let full_name = format!("{owner}/{name}");
    RepositoryRecord {
        name: name.to_string(),
        html_url: format!("https://github.com/{full_name}"),
        full_name,
        owner: Some(OwnerRecord {
            login: owner.to_string(),
        }),
        description: Some(format!("{name} repository")),
        stargazers_count: stars,
        language: None,
        topics: vec!["stellar".to_string()],
        updated_at: None,
    }
}

/// Search record whose owner is missing.
pub fn ownerless_repository(name: &str, stars: u64) -> RepositoryRecord {
    let mut record = repository("ghost", name, stars);
    record.owner = None;
    record
}

fn issue_value(id: u64, number: u64, title: &str, labels: Value) -> Value {
    json!({
        "id": id,
        "number": number,
        "title": title,
        "html_url": format!("https://github.com/example/repo/issues/{number}"),
        "state": "open",
        "created_at": "2024-04-01T09:00:00Z",
        "updated_at": "2024-04-02T09:00:00Z",
        "labels": labels,
        "body": "Steps to reproduce",
        "comments": 1
    })
}

/// Plain issue record with label names.
pub fn issue(id: u64, number: u64, title: &str, labels: &[&str]) -> IssueRecord {
    let labels: Vec<Value> = labels
        .iter()
        .map(|name| json!({ "id": id * 100, "name": name }))
        .collect();
    serde_json::from_value(issue_value(id, number, title, Value::Array(labels))).unwrap()
}

/// Issue record with labels given as raw JSON.
pub fn issue_with_raw_labels(id: u64, number: u64, title: &str, labels: Value) -> IssueRecord {
    serde_json::from_value(issue_value(id, number, title, labels)).unwrap()
}

/// Pull request entry as returned by the issues endpoint.
pub fn pull_request(id: u64, number: u64, title: &str) -> IssueRecord {
    let mut value = issue_value(id, number, title, json!([]));
    value["pull_request"] = json!({
        "url": format!("https://api.github.com/repos/example/repo/pulls/{number}")
    });
    serde_json::from_value(value).unwrap()
}
