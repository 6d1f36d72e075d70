//! Git references (HEAD and branch tips)
//!
//! References are human-readable names pointing to commits:
//! - Direct: a file containing a 40-character SHA-1
//! - Symbolic: a file containing `ref: <path>` (e.g. HEAD -> refs/heads/main)
//!
//! Loose ref files live under `.git/`; refs that have been packed away are
//! looked up in `.git/packed-refs` instead. This tool only ever reads refs.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::Path;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Symref chase limit; a longer chain means a broken repository
const MAX_SYMREF_DEPTH: usize = 5;

/// Read-only Git references resolver rooted at the `.git` directory.
#[derive(Debug, new)]
pub struct Refs {
    path: Box<Path>,
}

/// A reference file's content: either a symbolic pointer or a direct oid.
#[derive(Debug, Clone)]
enum SymRefOrOid {
    SymRef { ref_name: String },
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef {
                ref_name: symref_match[1].to_string(),
            }))
        } else {
            Ok(Some(SymRefOrOid::Oid(ObjectId::try_parse(
                content.to_string(),
            )?)))
        }
    }
}

impl Refs {
    /// Resolve HEAD to the current branch tip.
    ///
    /// Returns `None` for an unborn branch (HEAD points at a ref that does
    /// not exist yet, loose or packed).
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.read_ref(HEAD_REF_NAME)
    }

    /// Resolve a reference by name, chasing symbolic references.
    pub fn read_ref(&self, ref_name: &str) -> anyhow::Result<Option<ObjectId>> {
        let mut current = ref_name.to_string();

        for _ in 0..MAX_SYMREF_DEPTH {
            match SymRefOrOid::read_symref_or_oid(&self.path.join(&current))? {
                Some(SymRefOrOid::Oid(oid)) => return Ok(Some(oid)),
                Some(SymRefOrOid::SymRef { ref_name }) => current = ref_name,
                None => return self.read_packed_ref(&current),
            }
        }

        Err(anyhow::anyhow!(
            "Too many levels of symbolic references resolving {ref_name}"
        ))
    }

    /// Look a reference up in `.git/packed-refs`.
    ///
    /// Lines are `<oid> <ref-name>`; `#` starts a comment and `^` lines
    /// carry peeled tag targets, both are skipped.
    fn read_packed_ref(&self, ref_name: &str) -> anyhow::Result<Option<ObjectId>> {
        let packed_refs_path = self.path.join("packed-refs");
        if !packed_refs_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&packed_refs_path).context(format!(
            "Unable to read packed refs {}",
            packed_refs_path.display()
        ))?;

        for line in content.lines() {
            if line.starts_with('#') || line.starts_with('^') {
                continue;
            }
            if let Some((oid, name)) = line.split_once(' ')
                && name.trim() == ref_name
            {
                return Ok(Some(ObjectId::try_parse(oid.to_string())?));
            }
        }

        Ok(None)
    }
}
