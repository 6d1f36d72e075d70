//! Git configuration reader.
//!
//! Parses the INI-style format of `.git/config`, with `~/.gitconfig` as a
//! fallback for keys the repository config does not set (the same precedence
//! Git applies). Only the subset this tool needs is modeled: flat key/value
//! pairs addressed as `section.key` or `section.subsection.key`.

use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;

/// Regex for `[section]` / `[section "subsection"]` headers
const SECTION_REGEX: &str = r#"^\[([A-Za-z0-9.-]+)(?:\s+"(.*)")?\]$"#;

/// Regex for `key = value` lines
const VARIABLE_REGEX: &str = r"^([A-Za-z][A-Za-z0-9-]*)\s*=\s*(.*)$";

/// Flattened Git configuration.
///
/// Keys are canonicalized as `section.key` or `section.subsection.key` with
/// section and variable names lowercased; subsection names keep their case,
/// matching Git's semantics.
#[derive(Debug, Clone, Default)]
pub struct GitConfig {
    values: HashMap<String, String>,
}

impl GitConfig {
    /// Load the repository config, backfilled from the user-global config.
    pub fn load(git_dir: &Path) -> anyhow::Result<Self> {
        let mut config = GitConfig::default();

        let repo_config_path = git_dir.join("config");
        if repo_config_path.exists() {
            let content = std::fs::read_to_string(&repo_config_path).context(format!(
                "Unable to read config file {}",
                repo_config_path.display()
            ))?;
            config.parse_into(&content)?;
        }

        if let Some(home) = std::env::var_os("HOME") {
            let global_config_path = Path::new(&home).join(".gitconfig");
            if global_config_path.exists() {
                let content = std::fs::read_to_string(&global_config_path).context(format!(
                    "Unable to read config file {}",
                    global_config_path.display()
                ))?;

                // Repository values win; only missing keys are backfilled
                let mut global = GitConfig::default();
                global.parse_into(&content)?;
                for (key, value) in global.values {
                    config.values.entry(key).or_insert(value);
                }
            }
        }

        Ok(config)
    }

    /// Parse config text into this instance; later values override earlier
    /// ones, as Git does within one file.
    fn parse_into(&mut self, content: &str) -> anyhow::Result<()> {
        let section_regex = regex::Regex::new(SECTION_REGEX)?;
        let variable_regex = regex::Regex::new(VARIABLE_REGEX)?;

        let mut section_prefix: Option<String> = None;

        for line in content.lines() {
            // Strip comments; Git allows both markers
            let line = line
                .split_once(['#', ';'])
                .map(|(before, _)| before)
                .unwrap_or(line)
                .trim();
            if line.is_empty() {
                continue;
            }

            if let Some(captures) = section_regex.captures(line) {
                let section = captures[1].to_lowercase();
                section_prefix = Some(match captures.get(2) {
                    Some(subsection) => format!("{}.{}", section, subsection.as_str()),
                    None => section,
                });
            } else if let Some(captures) = variable_regex.captures(line) {
                let prefix = section_prefix
                    .as_ref()
                    .context("Config variable outside of any section")?;
                let key = format!("{}.{}", prefix, captures[1].to_lowercase());
                self.values.insert(key, captures[2].trim().to_string());
            }
            // Anything else (bare flags, continuations) is ignored
        }

        Ok(())
    }

    /// Look up a value by canonical key, e.g. `staredown.githubusername` or
    /// `remote.origin.url`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// All configured remote URLs as `(remote name, url)` pairs.
    pub fn remote_urls(&self) -> Vec<(String, String)> {
        let mut remotes: Vec<(String, String)> = self
            .values
            .iter()
            .filter_map(|(key, value)| {
                let rest = key.strip_prefix("remote.")?;
                let name = rest.strip_suffix(".url")?;
                Some((name.to_string(), value.clone()))
            })
            .collect();

        remotes.sort();
        remotes
    }
}
