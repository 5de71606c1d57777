//! Repository technology stack detection.
//!
//! The stack starts with the repository's primary language and is extended
//! by probing the default branch for well-known manifest files.

use crate::github::{ApiError, GitHubApi};
use crate::outcome::Outcome;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Manifest files checked in order, with the stack tag each one implies.
///
/// `package.json` appears twice: it implies both JavaScript and TypeScript.
pub const MANIFEST_STACKS: [(&str, &str); 6] = [
    ("Cargo.toml", "Rust"),
    ("package.json", "JavaScript"),
    ("package.json", "TypeScript"),
    ("go.mod", "Go"),
    ("requirements.txt", "Python"),
    ("Gemfile", "Ruby"),
];

/// Detects the technology stack of `owner/repo`.
///
/// Tags appear once each, language first, then manifest tags in
/// [`MANIFEST_STACKS`] order. A missing manifest is not an error, and a
/// manifest lookup that fails for another reason counts as absent; the
/// remaining manifests are still checked.
///
/// # Returns
///
/// [`Outcome::Failure`] with the tags found so far if the metadata fetch
/// fails, or with every detected tag if any manifest lookup failed.
pub async fn detect_stack<C: GitHubApi + ?Sized>(
    client: &C,
    owner: &str,
    repo: &str,
) -> Outcome<Vec<String>> {
    let mut stack = Vec::new();

    match collect_stack(client, owner, repo, &mut stack).await {
        Ok(()) => {
            debug!(repo = %format!("{owner}/{repo}"), stack = ?stack, "Detected stack");
            Outcome::Success(stack)
        }
        Err(e) => {
            warn!(
                repo = %format!("{owner}/{repo}"),
                error = %e,
                detected = ?stack,
                "Failed to detect stack"
            );
            Outcome::Failure {
                partial: stack,
                reason: e.to_string(),
            }
        }
    }
}

async fn collect_stack<C: GitHubApi + ?Sized>(
    client: &C,
    owner: &str,
    repo: &str,
    stack: &mut Vec<String>,
) -> Result<(), ApiError> {
    let metadata = client.get_repository(owner, repo).await?;
    if let Some(language) = metadata.language {
        stack.push(language);
    }

    let mut checked: HashMap<&str, bool> = HashMap::new();
    let mut first_error = None;
    for (file, tag) in MANIFEST_STACKS {
        let exists = match checked.get(file) {
            Some(exists) => *exists,
            None => {
                let exists = match manifest_exists(client, owner, repo, file).await {
                    Ok(exists) => exists,
                    Err(e) => {
                        warn!(
                            repo = %format!("{owner}/{repo}"),
                            file,
                            error = %e,
                            "Manifest lookup failed, treating as absent"
                        );
                        first_error.get_or_insert(e);
                        false
                    }
                };
                checked.insert(file, exists);
                exists
            }
        };

        if exists && !stack.iter().any(|s| s == tag) {
            stack.push(tag.to_string());
        }
    }

    first_error.map_or(Ok(()), Err)
}

async fn manifest_exists<C: GitHubApi + ?Sized>(
    client: &C,
    owner: &str,
    repo: &str,
    file: &str,
) -> Result<bool, ApiError> {
    match client.check_content(owner, repo, file).await {
        Ok(()) => Ok(true),
        Err(e) if e.is_not_found() => Ok(false),
        Err(e) => Err(e),
    }
}
