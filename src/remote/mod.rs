//! GitHub correlation layer.
//!
//! - `remotes`: extract GitHub repository slugs from configured remote URLs
//! - `credentials`: resolve the API username/token from Git config
//! - `github`: minimal pull-request API client
//! - `report`: match line formatting

pub mod credentials;
pub mod github;
pub mod remotes;
pub mod report;
