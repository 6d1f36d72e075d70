//! The staredown operation: which pull requests touched a file?
//!
//! Two phases, strictly in this order so no network call happens when the
//! local trace already rules out any match:
//!
//! 1. Trace the file's change history from HEAD through the local commit
//!    graph.
//! 2. For each GitHub remote, fetch the pull requests, intersect each one's
//!    commit-id set against the traced set and print a line per match.

use crate::areas::database::CommitCache;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::trace::file_tracer::FileTracer;
use crate::artifacts::trace::path_resolver::PathResolver;
use crate::error::StaredownError;
use crate::remote::credentials::resolve_credentials;
use crate::remote::github::GithubClient;
use crate::remote::remotes::github_remotes;
use crate::remote::report::format_discovered_pull;
use std::collections::HashSet;
use std::io::Write;

impl Repository {
    /// Trace `filename` through the commit graph starting at HEAD.
    ///
    /// Returns the set of commit ids at which the file's content changed; an
    /// empty set when the file never existed in the visible history (or the
    /// branch is unborn).
    pub fn changed_commit_ids(&self, filename: &str) -> anyhow::Result<HashSet<ObjectId>> {
        let Some(head_oid) = self.refs().read_head()? else {
            return Ok(HashSet::new());
        };

        let database = self.database();
        let commit_cache = CommitCache::new();
        let path_resolver = PathResolver::new(|tree_oid: &ObjectId| {
            database.parse_object_as_tree(tree_oid)
        });

        let file_tracer = FileTracer::new(
            |commit_oid: &ObjectId| commit_cache.get_or_load_slim_commit(database, commit_oid),
            |tree_oid: &ObjectId, path: &str| {
                Ok(path_resolver
                    .resolve(tree_oid, path)?
                    .map(|entry| entry.oid().clone()))
            },
        );

        file_tracer.trace(&head_oid, filename)
    }

    /// Run the full operation and print one line per matching pull request.
    pub async fn staredown(&self, filename: &str) -> anyhow::Result<()> {
        let remotes = github_remotes(self.config())?;
        if remotes.is_empty() {
            return Err(StaredownError::NoGithubRemote {
                repo_path: self.path().display().to_string(),
            }
            .into());
        }

        let credentials = resolve_credentials(self.config()).await?;

        let changed_commit_ids = self.changed_commit_ids(filename)?;
        if changed_commit_ids.is_empty() {
            return Err(StaredownError::FileNeverExisted.into());
        }

        let client = GithubClient::new(credentials)?;

        for slug in &remotes {
            for pull in client.list_pulls(slug).await? {
                let pull_commit_ids = client.pull_commit_ids(slug, &pull).await?;

                let matched: Vec<ObjectId> = pull_commit_ids
                    .intersection(&changed_commit_ids)
                    .cloned()
                    .collect();

                if !matched.is_empty() {
                    writeln!(
                        self.writer(),
                        "{}",
                        format_discovered_pull(slug, &pull, &matched)
                    )?;
                }
            }
        }

        Ok(())
    }
}
