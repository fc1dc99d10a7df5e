use crate::cli::errors::DeployError;
use log::debug;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// A SQL document loaded whole into memory
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFile {
    pub path: PathBuf,
    pub contents: String,
}

impl SqlFile {
    pub fn read(path: &Path) -> Result<SqlFile, DeployError> {
        let path = resolve(path);
        debug!("reading sql from {}", path.display());

        if !path.is_file() {
            return Err(DeployError::SqlFileNotFound(path));
        }

        let contents = fs::read_to_string(&path).map_err(|source| DeployError::ReadSqlFile {
            path: path.clone(),
            source,
        })?;

        Ok(SqlFile { path, contents })
    }

    /// Name used in the printed instructions, e.g. `create-bookings-table.sql`
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Number of characters, not bytes
    pub fn char_count(&self) -> usize {
        self.contents.chars().count()
    }
}

/// Relative paths are taken from the current working directory
pub fn resolve(path: &Path) -> PathBuf {
    if path.is_relative() {
        match env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    } else {
        path.to_path_buf()
    }
}
