use crate::areas::config::GitConfig;
use crate::areas::database::Database;
use crate::areas::refs::Refs;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Read-only handle over an existing Git repository.
///
/// Holds the object database, refs and config plus the output writer match
/// lines are rendered to (injectable so tests can capture output).
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
    config: GitConfig,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .context(format!("Repository path does not exist: {path}"))?;

        let git_dir = path.join(".git");
        if !git_dir.is_dir() {
            return Err(anyhow::anyhow!(
                "Not a git repository: {}",
                path.display()
            ));
        }

        let database = Database::new(git_dir.join("objects").into_boxed_path());
        let refs = Refs::new(git_dir.clone().into_boxed_path());
        let config = GitConfig::load(&git_dir)?;

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            refs,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config(&self) -> &GitConfig {
        &self.config
    }
}
