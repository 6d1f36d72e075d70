//! Git data structures and algorithms.
//!
//! - `database`: database entry types (oid + mode pairs found in trees)
//! - `objects`: Git object types (object ids, commits, trees)
//! - `trace`: path resolution and file-history tracing over the commit graph

pub mod database;
pub mod objects;
pub mod trace;
