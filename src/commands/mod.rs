//! User-facing operations.

pub mod staredown;
