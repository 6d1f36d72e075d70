/// Mode of a tree entry, as stored in the octal prefix of the entry record.
///
/// Only `Directory` entries can be descended into during path resolution;
/// everything else is a leaf.
#[derive(Debug, Clone, Eq, Ord, Default, PartialEq, PartialOrd)]
pub enum EntryMode {
    #[default]
    Regular,
    Executable,
    Symlink,
    Directory,
    /// Submodule (gitlink) entries reference a commit in another repository.
    Submodule,
}

impl EntryMode {
    pub fn is_tree(&self) -> bool {
        matches!(self, EntryMode::Directory)
    }

    /// Parse the octal mode prefix of a tree entry.
    ///
    /// Git normally writes directory modes as `40000`, but tolerates the
    /// zero-padded `040000` form found in some tools' output.
    pub fn from_octal_str(value: &str) -> anyhow::Result<Self> {
        match value.trim_start_matches('0') {
            "100644" | "100664" => Ok(EntryMode::Regular),
            "100755" => Ok(EntryMode::Executable),
            "120000" => Ok(EntryMode::Symlink),
            "40000" => Ok(EntryMode::Directory),
            "160000" => Ok(EntryMode::Submodule),
            _ => Err(anyhow::anyhow!("Invalid entry mode: {value}")),
        }
    }
}
