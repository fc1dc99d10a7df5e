//! Custom error types for loading deployment inputs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    /// one or more required credentials are absent or empty
    #[error("Missing Supabase credentials\nPlease ensure {} are set in .env.local", .expected.join(" and "))]
    MissingCredentials { expected: Vec<String> },

    /// the project url could not be parsed
    #[error("Invalid Supabase url '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{} not found", .0.display())]
    SqlFileNotFound(PathBuf),

    #[error("Couldn't read {}", .path.display())]
    ReadSqlFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
