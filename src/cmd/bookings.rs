// bookings command: prepares the bookings table migration for manual deployment
use crate::cli::credentials::{Credentials, BOOKINGS_KEY_VAR, BOOKINGS_URL_VAR};
use crate::cli::errors::DeployError;
use crate::cli::instructions::{
    print_deployment_options, print_manual_steps, print_probe_outcome, print_sql_block,
    print_statements,
};
use crate::cli::rest_client::{ConnectionCheck, RestClient, DEFAULT_TIMEOUT_SECS};
use crate::cli::sql_file::SqlFile;
use crate::cli::statements::Statements;
use clap::Args;
use log::{debug, warn};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SQL_FILE: &str = "create-bookings-table.sql";

/// Prints the steps for deploying the bookings table migration
#[derive(Args, Debug, Clone)]
pub struct BookingsCommand {
    /// Supabase project url
    #[clap(long, env = BOOKINGS_URL_VAR, hide_env_values = true)]
    pub url: Option<String>,

    /// Service role key of the project
    #[clap(long = "service-key", env = BOOKINGS_KEY_VAR, hide_env_values = true)]
    pub service_key: Option<String>,

    /// SQL migration to deploy, relative to the current directory
    #[clap(short, long, default_value = DEFAULT_SQL_FILE)]
    pub file: PathBuf,

    /// Check that the REST api answers before printing the steps. Off by
    /// default; only `schema` checks the connection unasked
    #[clap(long)]
    pub probe: bool,

    /// Connection check timeout in seconds
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

pub fn execute(args: &BookingsCommand) -> Result<(), anyhow::Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run(args, &mut out, RestClient::new)
}

pub fn run<W, C, F>(args: &BookingsCommand, out: &mut W, connect: F) -> Result<(), anyhow::Error>
where
    W: Write,
    C: ConnectionCheck,
    F: FnOnce(&Credentials, Duration) -> Result<C, anyhow::Error>,
{
    let credentials = Credentials::load(
        args.url.as_deref(),
        args.service_key.as_deref(),
        [BOOKINGS_URL_VAR, BOOKINGS_KEY_VAR],
    )?;
    debug!("using {:?}", credentials);

    let client = match connect(&credentials, Duration::from_secs(args.timeout)) {
        Ok(client) => client,
        Err(e) => {
            warn!("rest client unavailable: {:#}", e);
            return print_fallback(out, &args.file, &e);
        }
    };

    let sql = SqlFile::read(&args.file)?;

    if args.probe {
        writeln!(out, "🔍 Testing Supabase connection...")?;
        print_probe_outcome(out, &client.check())?;
        writeln!(out)?;
    }

    let statements = Statements::split(&sql.contents);
    if statements.is_empty() {
        warn!("no statements in {}", sql.path.display());
    } else {
        debug!("{} statements in {}", statements.len(), sql.path.display());
    }

    writeln!(out, "🔧 Creating bookings table...")?;
    print_statements(out, &statements)?;

    print_deployment_options(out, &sql.display_name(), credentials.project_ref())?;
    print_sql_block(out, &sql.contents)?;

    Ok(())
}

// manual steps only; a missing sql file is not fatal here
fn print_fallback<W: Write>(
    out: &mut W,
    file: &Path,
    reason: &anyhow::Error,
) -> Result<(), anyhow::Error> {
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| DEFAULT_SQL_FILE.to_string());

    writeln!(
        out,
        "⚠️  REST client unavailable ({:#}). Showing manual deployment instructions...",
        reason
    )?;
    print_manual_steps(out, &file_name)?;

    match SqlFile::read(file) {
        Ok(sql) => print_sql_block(out, &sql.contents)?,
        Err(DeployError::SqlFileNotFound(path)) => {
            debug!("{} not found, skipping sql", path.display())
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
