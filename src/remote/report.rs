//! Match line formatting.
//!
//! One line per discovered pull request:
//!
//! ```text
//! abc1234 def5678 octo/widgets#42   @octocat    Teach the parser about escapes
//! ```
//!
//! Fields are colorized per meaning (commit ids red, repository green,
//! author blue) through the `colored` crate, which honors the global color
//! override the CLI sets for `--no-color` and redirected output.

use crate::artifacts::objects::object_id::ObjectId;
use crate::remote::github::PullRequest;
use crate::remote::remotes::RepoSlug;
use colored::Colorize;

/// Author handles longer than this are truncated with an ellipsis.
pub const MAX_USERNAME_LENGTH: usize = 10;

/// At most this many matched commit ids are shown per line.
pub const MAX_MATCHED_SHAS: usize = 3;

/// Render the match line for one pull request.
///
/// `matched` is sorted internally so the line is deterministic regardless of
/// set iteration order.
pub fn format_discovered_pull(
    slug: &RepoSlug,
    pull: &PullRequest,
    matched: &[ObjectId],
) -> String {
    let mut shas: Vec<&ObjectId> = matched.iter().collect();
    shas.sort();

    let shas = shas
        .iter()
        .take(MAX_MATCHED_SHAS)
        .map(|sha| sha.to_short_oid())
        .collect::<Vec<String>>()
        .join(" ");

    format!(
        "{} {}{} {} {}",
        shas.red(),
        slug.to_string().green(),
        format!("#{:<4}", pull.number).green(),
        format!("@{:<width$}", truncate_handle(pull.author_handle()), width = MAX_USERNAME_LENGTH)
            .blue(),
        pull.title
    )
}

/// Truncate an author handle to the display width, marking the cut with an
/// ellipsis.
fn truncate_handle(handle: &str) -> String {
    if handle.chars().count() <= MAX_USERNAME_LENGTH {
        return handle.to_string();
    }

    let mut truncated: String = handle.chars().take(MAX_USERNAME_LENGTH - 1).collect();
    truncated.push('…');
    truncated
}
