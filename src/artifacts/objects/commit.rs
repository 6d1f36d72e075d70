//! Git commit object
//!
//! Commits are the nodes of the ancestry graph. Each one carries:
//! - A tree object ID (directory snapshot)
//! - Zero or more parent commit IDs (zero for root commits, two or more for
//!   merges)
//! - Author information and the commit message
//!
//! ## Format
//!
//! On disk (after the loose-object header):
//! ```text
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! Headers this tool does not care about (`gpgsig`, `encoding`, ...) are
//! tolerated and skipped, including their continuation lines.

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::io::BufRead;

/// Author information parsed from the `author` header.
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Author {
    name: String,
    email: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl Author {
    /// Format author name and email as "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }
}

impl TryFrom<&str> for Author {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // Format: "name <email> timestamp timezone"
        // Split from the right to get timezone and timestamp first
        let parts: Vec<&str> = value.rsplitn(3, ' ').collect();
        if parts.len() < 3 {
            return Err(anyhow::anyhow!("Invalid author format: {value}"));
        }

        let timezone = parts[0];
        let timestamp = parts[1];
        let name_and_email = parts[2];

        let seconds: i64 = timestamp
            .parse()
            .context("Invalid author timestamp")?;
        let offset = chrono::FixedOffset::east_opt(parse_timezone_offset(timezone)?)
            .context("Invalid author timezone")?;
        let timestamp = chrono::DateTime::from_timestamp(seconds, 0)
            .context("Author timestamp out of range")?
            .with_timezone(&offset);

        let (name, email) = match (name_and_email.find('<'), name_and_email.rfind('>')) {
            (Some(open), Some(close)) if open < close => (
                name_and_email[..open].trim().to_string(),
                name_and_email[open + 1..close].to_string(),
            ),
            _ => return Err(anyhow::anyhow!("Invalid author format: {value}")),
        };

        Ok(Author {
            name,
            email,
            timestamp,
        })
    }
}

/// Parse a `+HHMM`/`-HHMM` timezone suffix into seconds east of UTC.
fn parse_timezone_offset(timezone: &str) -> anyhow::Result<i32> {
    let (sign, digits) = match timezone.split_at_checked(1) {
        Some(("+", digits)) => (1, digits),
        Some(("-", digits)) => (-1, digits),
        _ => return Err(anyhow::anyhow!("Invalid timezone: {timezone}")),
    };
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(anyhow::anyhow!("Invalid timezone: {timezone}"));
    }

    let hours: i32 = digits[..2].parse()?;
    let minutes: i32 = digits[2..].parse()?;
    Ok(sign * (hours * 3600 + minutes * 60))
}

/// A full commit object.
#[derive(Debug, Clone, new)]
pub struct Commit {
    parents: Vec<ObjectId>,
    tree_oid: ObjectId,
    author: Author,
    message: String,
}

impl Commit {
    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Reduce to the slim form used by graph traversal.
    pub fn to_slim(&self, oid: ObjectId) -> SlimCommit {
        SlimCommit {
            oid,
            parents: self.parents.clone(),
            tree_oid: self.tree_oid.clone(),
        }
    }
}

/// Just enough of a commit for the history tracer: identity, parent links and
/// the root tree address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlimCommit {
    pub oid: ObjectId,
    pub parents: Vec<ObjectId>,
    pub tree_oid: ObjectId,
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        let mut lines = content.lines();

        let mut tree_oid = None;
        let mut parents = Vec::new();
        let mut author = None;

        // Headers end at the first empty line; everything after is the message
        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }
            if let Some(oid) = line.strip_prefix("tree ") {
                tree_oid = Some(ObjectId::try_parse(oid.to_string())?);
            } else if let Some(oid) = line.strip_prefix("parent ") {
                parents.push(ObjectId::try_parse(oid.to_string())?);
            } else if let Some(value) = line.strip_prefix("author ") {
                author = Some(Author::try_from(value)?);
            }
            // committer, gpgsig and friends (plus continuation lines starting
            // with a space) are skipped
        }

        let tree_oid = tree_oid.context("Invalid commit object: missing tree line")?;
        let author = author.context("Invalid commit object: missing author line")?;
        let message = lines.collect::<Vec<&str>>().join("\n");

        Ok(Self::new(parents, tree_oid, author, message))
    }
}
