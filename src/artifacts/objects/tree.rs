//! Git tree object
//!
//! Trees represent directory snapshots. Each entry maps a path-segment name
//! to either a blob (file) or another tree (subdirectory), identified by its
//! content address. Trees are content-addressed themselves, so identical
//! subtrees across commits share the same object ID.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! This crate only ever reads trees; there is no write path.

use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::BTreeMap;
use std::io::BufRead;

/// A directory snapshot: immutable mapping from entry name to entry.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    entries: BTreeMap<String, DatabaseEntry>,
}

impl Tree {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, DatabaseEntry)>) -> Self {
        Tree {
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up a single path segment in this tree.
    pub fn entry(&self, name: &str) -> Option<&DatabaseEntry> {
        self.entries.get(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &DatabaseEntry)> {
        self.entries.iter()
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut entries = BTreeMap::new();
        let mut reader = reader;

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            // Read "mode " (space-delimited)
            let n = reader.read_until(b' ', &mut mode_bytes)?;
            if n == 0 {
                break; // clean EOF: no more entries
            }
            // Must end with ' ' or it's malformed
            if *mode_bytes.last().unwrap() != b' ' {
                return Err(anyhow::anyhow!("unexpected EOF in mode"));
            }
            mode_bytes.pop(); // drop the space

            let mode_str = std::str::from_utf8(&mode_bytes)?;
            let mode = EntryMode::from_octal_str(mode_str)?;

            // Read "name\0"
            name_bytes.clear();
            let n = reader.read_until(b'\0', &mut name_bytes)?;
            if n == 0 || *name_bytes.last().unwrap() != b'\0' {
                return Err(anyhow::anyhow!("unexpected EOF in name"));
            }
            name_bytes.pop(); // drop NUL
            let name = std::str::from_utf8(&name_bytes)?.to_owned();

            // Read object id
            let oid =
                ObjectId::read_h40_from(&mut reader).context("unexpected EOF in object id")?;

            entries.insert(name, DatabaseEntry::new(oid, mode));
        }

        Ok(Tree { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn oid(seed: char) -> ObjectId {
        ObjectId::try_parse(seed.to_string().repeat(40)).unwrap()
    }

    fn serialize_entry(mode: &str, name: &str, entry_oid: &ObjectId) -> Vec<u8> {
        let mut bytes = format!("{mode} {name}\0").into_bytes();
        entry_oid.write_h40_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn deserializes_files_and_directories() {
        let mut body = serialize_entry("100644", "README", &oid('a'));
        body.extend(serialize_entry("40000", "src", &oid('b')));

        let tree = Tree::deserialize(Cursor::new(body)).unwrap();

        let readme = tree.entry("README").unwrap();
        assert_eq!(readme.oid(), &oid('a'));
        assert!(!readme.is_tree());

        let src = tree.entry("src").unwrap();
        assert_eq!(src.oid(), &oid('b'));
        assert!(src.is_tree());
    }

    #[test]
    fn missing_name_is_absent() {
        let body = serialize_entry("100644", "README", &oid('a'));
        let tree = Tree::deserialize(Cursor::new(body)).unwrap();

        assert!(tree.entry("LICENSE").is_none());
    }

    #[test]
    fn empty_tree_has_no_entries() {
        let tree = Tree::deserialize(Cursor::new(Vec::new())).unwrap();
        assert_eq!(tree.entries().count(), 0);
    }

    #[test]
    fn truncated_entry_is_an_error() {
        let mut body = serialize_entry("100644", "README", &oid('a'));
        body.truncate(body.len() - 5);

        assert!(Tree::deserialize(Cursor::new(body)).is_err());
    }
}
