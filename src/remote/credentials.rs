//! GitHub credential lookup.
//!
//! Credentials live in Git config under the `staredown` section:
//!
//! - `staredown.githubusername` (required)
//! - `staredown.githubpassword`: an API token, or
//! - `staredown.githubpasswordcmd`: a shell command printing the token
//!   (for keychains and password managers)
//!
//! A static token takes precedence over the command form.

use crate::areas::config::GitConfig;
use crate::error::StaredownError;
use derive_new::new;

const USERNAME_KEY: &str = "staredown.githubusername";
const PASSWORD_KEY: &str = "staredown.githubpassword";
const PASSWORD_CMD_KEY: &str = "staredown.githubpasswordcmd";

#[derive(Debug, Clone, new)]
pub struct Credentials {
    username: String,
    token: String,
}

impl Credentials {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Resolve credentials from Git config, running `githubpasswordcmd` when no
/// static token is configured.
pub async fn resolve_credentials(config: &GitConfig) -> anyhow::Result<Credentials> {
    let username = config
        .get(USERNAME_KEY)
        .ok_or(StaredownError::MissingGithubCredentials)?;

    if let Some(token) = config.get(PASSWORD_KEY) {
        return Ok(Credentials::new(username.to_string(), token.to_string()));
    }

    let command = config
        .get(PASSWORD_CMD_KEY)
        .ok_or(StaredownError::MissingGithubCredentials)?;

    let output = tokio::process::Command::new("sh")
        .arg("-c")
        .arg(command)
        .output()
        .await
        .map_err(|_| StaredownError::PasswordCommandFailed)?;

    if !output.status.success() {
        return Err(StaredownError::PasswordCommandFailed.into());
    }

    let token = String::from_utf8(output.stdout)
        .map_err(|_| StaredownError::PasswordCommandFailed)?
        .trim()
        .to_string();
    if token.is_empty() {
        return Err(StaredownError::PasswordCommandFailed.into());
    }

    Ok(Credentials::new(username.to_string(), token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(content: &str) -> GitConfig {
        // parse_into is private; round-trip through a temp .git dir instead
        let temp = assert_fs::TempDir::new().unwrap();
        std::fs::write(temp.path().join("config"), content).unwrap();
        GitConfig::load(temp.path()).unwrap()
    }

    #[tokio::test]
    async fn static_token_wins_over_command() {
        let config = config_from(
            "[staredown]\n\
             \tgithubusername = octocat\n\
             \tgithubpassword = token123\n\
             \tgithubpasswordcmd = exit 1\n",
        );

        let credentials = resolve_credentials(&config).await.unwrap();
        assert_eq!(credentials.username(), "octocat");
        assert_eq!(credentials.token(), "token123");
    }

    #[tokio::test]
    async fn password_command_output_is_trimmed() {
        let config = config_from(
            "[staredown]\n\
             \tgithubusername = octocat\n\
             \tgithubpasswordcmd = echo '  token456  '\n",
        );

        let credentials = resolve_credentials(&config).await.unwrap();
        assert_eq!(credentials.token(), "token456");
    }

    #[tokio::test]
    async fn failing_password_command_is_a_diagnostic() {
        let config = config_from(
            "[staredown]\n\
             \tgithubusername = octocat\n\
             \tgithubpasswordcmd = exit 3\n",
        );

        let error = resolve_credentials(&config).await.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<StaredownError>(),
            Some(StaredownError::PasswordCommandFailed)
        ));
    }

    #[tokio::test]
    async fn missing_username_is_a_diagnostic() {
        let config = config_from("[staredown]\n\tgithubpassword = token123\n");

        let error = resolve_credentials(&config).await.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<StaredownError>(),
            Some(StaredownError::MissingGithubCredentials)
        ));
    }
}
