//! On-disk repository fixture.
//!
//! Builds real loose-object repositories without shelling out to git: objects
//! are serialized in the canonical formats, zlib-compressed and stored under
//! `.git/objects`, so the crate's readers are exercised end to end.

use flate2::Compression;
use flate2::write::ZlibEncoder;
use staredown::artifacts::objects::object_id::ObjectId;
use std::io::Write;
use std::path::{Path, PathBuf};

const AUTHOR_LINE: &str = "Jane Doe <jane@example.com> 1640995200 +0000";

pub struct RepoFixture {
    root: PathBuf,
}

impl RepoFixture {
    /// Create the `.git` skeleton (objects, refs, HEAD on master) at `root`.
    pub fn init(root: &Path) -> Self {
        let git_dir = root.join(".git");
        std::fs::create_dir_all(git_dir.join("objects")).expect("Failed to create objects dir");
        std::fs::create_dir_all(git_dir.join("refs").join("heads"))
            .expect("Failed to create refs dir");
        std::fs::write(git_dir.join("HEAD"), "ref: refs/heads/master\n")
            .expect("Failed to write HEAD");

        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn git_dir(&self) -> PathBuf {
        self.root.join(".git")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.git_dir().join("config"), content).expect("Failed to write config");
    }

    /// Point the current branch at `oid` through a loose ref file.
    pub fn set_head_to(&self, oid: &ObjectId) {
        std::fs::write(
            self.git_dir().join("refs").join("heads").join("master"),
            format!("{oid}\n"),
        )
        .expect("Failed to write branch ref");
    }

    /// Point the current branch at `oid` through packed-refs only.
    pub fn set_packed_head_to(&self, oid: &ObjectId) {
        std::fs::write(
            self.git_dir().join("packed-refs"),
            format!("# pack-refs with: peeled fully-peeled sorted \n{oid} refs/heads/master\n"),
        )
        .expect("Failed to write packed-refs");
    }

    pub fn store_blob(&self, content: &str) -> ObjectId {
        self.store_object("blob", content.as_bytes())
    }

    /// Store a tree from `(mode, name, oid)` entries. Entries are sorted by
    /// name the way git writes them.
    pub fn store_tree(&self, entries: &[(&str, &str, &ObjectId)]) -> ObjectId {
        let mut entries: Vec<_> = entries.to_vec();
        entries.sort_by_key(|(_, name, _)| name.to_string());

        let mut body = Vec::new();
        for (mode, name, oid) in entries {
            body.extend(format!("{mode} {name}\0").into_bytes());
            oid.write_h40_to(&mut body).expect("Failed to encode oid");
        }

        self.store_object("tree", &body)
    }

    pub fn store_commit(&self, tree: &ObjectId, parents: &[&ObjectId], message: &str) -> ObjectId {
        let mut body = format!("tree {tree}\n");
        for parent in parents {
            body.push_str(&format!("parent {parent}\n"));
        }
        body.push_str(&format!(
            "author {AUTHOR_LINE}\ncommitter {AUTHOR_LINE}\n\n{message}\n"
        ));

        self.store_object("commit", body.as_bytes())
    }

    fn store_object(&self, object_type: &str, body: &[u8]) -> ObjectId {
        let oid = ObjectId::hash_object(object_type, body).expect("Failed to hash object");

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(format!("{} {}\0", object_type, body.len()).as_bytes())
            .expect("Failed to compress header");
        encoder.write_all(body).expect("Failed to compress body");
        let compressed = encoder.finish().expect("Failed to finish compression");

        let object_path = self.git_dir().join("objects").join(oid.to_path());
        std::fs::create_dir_all(object_path.parent().unwrap())
            .expect("Failed to create object dir");
        std::fs::write(object_path, compressed).expect("Failed to write object");

        oid
    }
}
