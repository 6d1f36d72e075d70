//! File-history tracing over the commit ancestry graph.
//!
//! - `path_resolver`: resolve a slash-separated path against a tree snapshot
//! - `file_tracer`: walk the ancestry graph and collect the commits at which
//!   a path's content changed

pub mod file_tracer;
pub mod path_resolver;
