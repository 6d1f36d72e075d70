//! Git object types.
//!
//! All objects are read-only views parsed from the loose-object store:
//!
//! - `object_id`: SHA-1 object identifiers
//! - `object_type`: blob / tree / commit header dispatch
//! - `entry_mode`: tree entry modes (file, directory, symlink, submodule)
//! - `commit`: commit objects and the slim form used by graph traversal
//! - `tree`: directory snapshots mapping names to entries

pub mod commit;
pub mod entry_mode;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a full hexadecimal object ID.
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of an abbreviated object ID.
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
