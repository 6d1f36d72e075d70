//! Path resolution against tree snapshots.
//!
//! Resolving a path that does not exist is a legitimate outcome, not an
//! error: the path may simply not have existed at that point in history. The
//! resolver therefore answers `Ok(None)` ("absent") for any missing segment
//! at any depth, and reserves `Err` for real object-store failures.

use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;

/// Resolves slash-separated relative paths against a root tree.
///
/// Generic over a tree-loader function so it can run against the on-disk
/// object database or an in-memory graph in tests. The loader returns
/// `Ok(None)` when the referenced object exists but is not a tree.
#[derive(Debug, Clone)]
pub struct PathResolver<TreeLoaderFn>
where
    TreeLoaderFn: Fn(&ObjectId) -> anyhow::Result<Option<Tree>>,
{
    tree_loader: TreeLoaderFn,
}

impl<TreeLoaderFn> PathResolver<TreeLoaderFn>
where
    TreeLoaderFn: Fn(&ObjectId) -> anyhow::Result<Option<Tree>>,
{
    pub fn new(tree_loader: TreeLoaderFn) -> Self {
        Self { tree_loader }
    }

    /// Resolve `path` against the tree rooted at `root_tree_oid`.
    ///
    /// Descends one segment at a time. A missing segment, or an intermediate
    /// segment that is not a directory, yields `Ok(None)`. The final segment
    /// is returned whatever kind of entry it is.
    pub fn resolve(
        &self,
        root_tree_oid: &ObjectId,
        path: &str,
    ) -> anyhow::Result<Option<DatabaseEntry>> {
        if path.is_empty() {
            anyhow::bail!("cannot resolve an empty path");
        }

        let mut current_tree_oid = root_tree_oid.clone();
        let mut components = path.split('/').peekable();

        while let Some(component) = components.next() {
            let Some(tree) = (self.tree_loader)(&current_tree_oid)? else {
                return Ok(None);
            };
            let Some(entry) = tree.entry(component) else {
                return Ok(None);
            };

            if components.peek().is_none() {
                return Ok(Some(entry.clone()));
            }

            // More segments to go: only directories can be descended into
            if !entry.is_tree() {
                return Ok(None);
            }
            current_tree_oid = entry.oid().clone();
        }

        Ok(None)
    }
}
