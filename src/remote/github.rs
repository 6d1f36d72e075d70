//! Minimal GitHub pull-request API client.
//!
//! Only the two endpoints the correlation step needs:
//!
//! - `GET /repos/{owner}/{repo}/pulls?state=all` for the pull requests
//! - `GET /repos/{owner}/{repo}/pulls/{number}/commits` for their commits
//!
//! Requests authenticate with basic auth (username + API token) and carry
//! the mandatory `User-Agent`. Pagination is not implemented; one page of
//! up to 100 entries per request.

use crate::artifacts::objects::object_id::ObjectId;
use crate::remote::credentials::Credentials;
use crate::remote::remotes::RepoSlug;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;

const GITHUB_API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("git-staredown/", env!("CARGO_PKG_VERSION"));
const PAGE_SIZE: usize = 100;

/// A pull request as returned by the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    /// Absent when the author's account has been deleted.
    pub user: Option<PullRequestAuthor>,
    /// Absent while the pull request has never been merged or test-merged.
    pub merge_commit_sha: Option<String>,
}

impl PullRequest {
    /// The author handle, with GitHub's placeholder for deleted accounts.
    pub fn author_handle(&self) -> &str {
        self.user
            .as_ref()
            .map(|user| user.login.as_str())
            .unwrap_or("ghost")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestAuthor {
    pub login: String,
}

#[derive(Debug, Deserialize)]
struct PullRequestCommit {
    sha: String,
}

pub struct GithubClient {
    http: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

impl GithubClient {
    pub fn new(credentials: Credentials) -> anyhow::Result<Self> {
        Self::with_base_url(credentials, GITHUB_API_BASE.to_string())
    }

    /// Point the client at a different API root (test servers).
    pub fn with_base_url(credentials: Credentials, base_url: String) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Unable to build HTTP client")?;

        Ok(Self {
            http,
            credentials,
            base_url,
        })
    }

    /// Fetch the repository's pull requests, open and closed alike.
    pub async fn list_pulls(&self, slug: &RepoSlug) -> anyhow::Result<Vec<PullRequest>> {
        let url = format!(
            "{}/repos/{}/{}/pulls?state=all&per_page={PAGE_SIZE}",
            self.base_url,
            slug.owner(),
            slug.name()
        );

        self.get_json(&url)
            .await
            .context(format!("Unable to list pull requests for {slug}"))
    }

    /// The set of commit ids a pull request carries, including its
    /// merge-result commit: commit ids can change when a pull request gets
    /// merged, so the resulting sha has to be scanned for as well.
    pub async fn pull_commit_ids(
        &self,
        slug: &RepoSlug,
        pull: &PullRequest,
    ) -> anyhow::Result<HashSet<ObjectId>> {
        let url = format!(
            "{}/repos/{}/{}/pulls/{}/commits?per_page={PAGE_SIZE}",
            self.base_url,
            slug.owner(),
            slug.name(),
            pull.number
        );

        let commits: Vec<PullRequestCommit> = self
            .get_json(&url)
            .await
            .context(format!("Unable to list commits of {slug}#{}", pull.number))?;

        let mut commit_ids = HashSet::new();
        for commit in commits {
            commit_ids.insert(ObjectId::try_parse(commit.sha)?);
        }
        if let Some(merge_commit_sha) = &pull.merge_commit_sha {
            commit_ids.insert(ObjectId::try_parse(merge_commit_sha.clone())?);
        }

        Ok(commit_ids)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> anyhow::Result<T> {
        let response = self
            .http
            .get(url)
            .basic_auth(
                self.credentials.username(),
                Some(self.credentials.token()),
            )
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_pull_request_payload() {
        let payload = r#"{
            "number": 42,
            "title": "Teach the parser about escapes",
            "user": { "login": "octocat" },
            "merge_commit_sha": "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
        }"#;

        let pull: PullRequest = serde_json::from_str(payload).unwrap();
        assert_eq!(pull.number, 42);
        assert_eq!(pull.author_handle(), "octocat");
        assert_eq!(
            pull.merge_commit_sha.as_deref(),
            Some("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
        );
    }

    #[test]
    fn deleted_author_falls_back_to_ghost() {
        let payload = r#"{
            "number": 7,
            "title": "Orphaned change",
            "user": null,
            "merge_commit_sha": null
        }"#;

        let pull: PullRequest = serde_json::from_str(payload).unwrap();
        assert_eq!(pull.author_handle(), "ghost");
        assert!(pull.merge_commit_sha.is_none());
    }
}
