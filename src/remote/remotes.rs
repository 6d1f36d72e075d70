//! GitHub remote detection.

use crate::areas::config::GitConfig;
use derive_new::new;

/// Regex matching the GitHub remote URL forms Git produces:
/// scp-like SSH, explicit ssh://, and https://. The trailing `.git` and any
/// trailing slash are optional.
const GITHUB_REMOTE_REGEX: &str =
    r"^(?:git@github\.com:|ssh://git@github\.com/|https://github\.com/)([^/]+)/(.+?)(?:\.git)?/?$";

/// A GitHub repository coordinate, e.g. `octo/widgets`.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RepoSlug {
    owner: String,
    name: String,
}

impl RepoSlug {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Collect the GitHub repositories among the configured remotes, in remote
/// name order. Non-GitHub remotes are silently skipped.
pub fn github_remotes(config: &GitConfig) -> anyhow::Result<Vec<RepoSlug>> {
    let remote_regex = regex::Regex::new(GITHUB_REMOTE_REGEX)?;

    let mut slugs = Vec::new();
    for (_, url) in config.remote_urls() {
        if let Some(captures) = remote_regex.captures(&url) {
            let slug = RepoSlug::new(captures[1].to_string(), captures[2].to_string());
            if !slugs.contains(&slug) {
                slugs.push(slug);
            }
        }
    }

    Ok(slugs)
}
