//! Fatal user-facing diagnostics.
//!
//! The core tracing code reports "path absent" as a value, never as an error;
//! everything that surfaces here is a condition the user has to fix before a
//! run can succeed. The CLI maps these to a distinguished exit status so
//! scripts can tell them apart from unexpected failures.

use thiserror::Error;

/// Exit status for the diagnostics below.
pub const DIAGNOSTIC_EXIT_CODE: i32 = 200;

/// Exit status when the user interrupts the run (Ctrl-C).
pub const INTERRUPT_EXIT_CODE: i32 = 255;

pub const CREDENTIALS_HELP: &str = "\
Please add GitHub username+token to Git config!
$ git config --global staredown.githubusername myemail@somewhere.com
$ git config --global staredown.githubpassword <API TOKEN>
# OR
$ git config --global staredown.githubpasswordcmd <COMMAND>";

/// Conditions that abort the run with a diagnostic instead of a backtrace.
#[derive(Debug, Error)]
pub enum StaredownError {
    #[error("No GitHub remotes seem to be configured for specified git repository {repo_path}")]
    NoGithubRemote { repo_path: String },
    #[error("{CREDENTIALS_HELP}")]
    MissingGithubCredentials,
    #[error("Did not receive GitHub token from `githubpasswordcmd`!")]
    PasswordCommandFailed,
    #[error("File has never existed in visible repository history (starting from HEAD)")]
    FileNeverExisted,
}
