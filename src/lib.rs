//! staredown: find which GitHub pull requests have touched a file.
//!
//! The crate is split into four layers:
//!
//! - `areas`: read-only access to an existing repository (object database,
//!   refs, config)
//! - `artifacts`: object types and the file-history tracing algorithms
//! - `remote`: GitHub remotes, credentials, API client and match reporting
//! - `commands`: the user-facing `staredown` operation tying it all together

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod error;
pub mod remote;
