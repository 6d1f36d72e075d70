//! Read-only repository access.
//!
//! Unlike a full VCS implementation this tool never writes to a repository;
//! these components only read already-existing state:
//!
//! - `database`: loose-object database reader (blobs, trees, commits)
//! - `refs`: HEAD and branch tip resolution
//! - `config`: Git configuration (remotes, credentials)
//! - `repository`: high-level handle tying the above together

pub mod config;
pub mod database;
pub mod refs;
pub mod repository;
