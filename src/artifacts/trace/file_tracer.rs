//! File-history tracer.
//!
//! Walks the commit ancestry graph from a starting commit and collects every
//! commit at which a path's content changed relative to its direct parents.
//!
//! ## Algorithm
//!
//! An explicit work-list traversal (no native recursion, so arbitrarily deep
//! linear histories cannot exhaust the call stack):
//!
//! 1. Pop a commit from the work-list and resolve the path against its tree.
//! 2. If present, resolve the path against each parent's tree. The commit is
//!    recorded as "changed" when it has no parents, when at least one parent
//!    lacks the path, or when no parent that has the path carries the same
//!    content address.
//! 3. Push every not-yet-visited parent, marking it visited at push time so
//!    sibling branches reaching the same ancestor never queue it twice.
//!
//! The visited check at enqueue time guarantees each reachable commit is
//! processed at most once, whatever diamond or merge shape the graph has,
//! and terminates even on an accidentally cyclic graph.
//!
//! ## Change policy
//!
//! A merge commit whose entry matches at least one parent (and whose path
//! exists in all parents) is NOT a change: the content arrived through that
//! parent. A parent lacking the path always counts as a change, even when
//! another parent holds identical content.

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

/// Traversal-scoped state, owned by exactly one `trace` call.
///
/// `visited` holds every commit id already scheduled for processing;
/// `changed` accumulates the result.
#[derive(Debug, Default)]
struct TraceContext {
    visited: HashSet<ObjectId>,
    changed: HashSet<ObjectId>,
}

/// Traces a file's change history through the commit graph.
///
/// Generic over two loader functions, in the same style as the resolver, so
/// the algorithm runs unchanged against the on-disk object database or an
/// in-memory graph in tests:
///
/// - `commit_loader`: commit id -> slim commit (parents + root tree id)
/// - `entry_resolver`: (root tree id, path) -> content address, or `None`
///   when the path is absent in that snapshot
///
/// Loader errors are real object-store failures and propagate unchanged; an
/// absent path is a value, never an error.
#[derive(Debug, Clone)]
pub struct FileTracer<CommitLoaderFn, EntryResolverFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
    EntryResolverFn: Fn(&ObjectId, &str) -> anyhow::Result<Option<ObjectId>>,
{
    commit_loader: CommitLoaderFn,
    entry_resolver: EntryResolverFn,
}

impl<CommitLoaderFn, EntryResolverFn> FileTracer<CommitLoaderFn, EntryResolverFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
    EntryResolverFn: Fn(&ObjectId, &str) -> anyhow::Result<Option<ObjectId>>,
{
    pub fn new(commit_loader: CommitLoaderFn, entry_resolver: EntryResolverFn) -> Self {
        Self {
            commit_loader,
            entry_resolver,
        }
    }

    /// Collect the ids of all commits reachable from `start_commit_id` at
    /// which `path`'s content changed.
    ///
    /// The result is a set; no iteration order is guaranteed.
    pub fn trace(
        &self,
        start_commit_id: &ObjectId,
        path: &str,
    ) -> anyhow::Result<HashSet<ObjectId>> {
        let mut context = TraceContext::default();
        let mut work_list = vec![start_commit_id.clone()];
        context.visited.insert(start_commit_id.clone());

        while let Some(commit_id) = work_list.pop() {
            let commit = (self.commit_loader)(&commit_id)?;

            if let Some(here) = (self.entry_resolver)(&commit.tree_oid, path)? {
                if self.changed_against_parents(&commit, &here, path)? {
                    context.changed.insert(commit_id);
                }
            }

            // Mark visited at enqueue time: a commit queued by one branch
            // must not be re-queued by a sibling branch in the same pass
            for parent_id in commit.parents {
                if context.visited.insert(parent_id.clone()) {
                    work_list.push(parent_id);
                }
            }
        }

        Ok(context.changed)
    }

    /// Apply the change policy for one commit whose entry resolved to `here`.
    fn changed_against_parents(
        &self,
        commit: &SlimCommit,
        here: &ObjectId,
        path: &str,
    ) -> anyhow::Result<bool> {
        if commit.parents.is_empty() {
            // Root commit: the file is new by definition
            return Ok(true);
        }

        let mut absent_in_some_parent = false;
        let mut matches_some_parent = false;

        for parent_id in &commit.parents {
            let parent = (self.commit_loader)(parent_id)?;
            match (self.entry_resolver)(&parent.tree_oid, path)? {
                None => absent_in_some_parent = true,
                Some(parent_entry) if parent_entry == *here => matches_some_parent = true,
                Some(_) => {}
            }
        }

        Ok(absent_in_some_parent || !matches_some_parent)
    }
}
