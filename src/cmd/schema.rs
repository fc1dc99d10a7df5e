// schema command: loads a schema file, checks the project answers and prints the dashboard steps
use crate::cli::credentials::{Credentials, SCHEMA_KEY_VAR, SCHEMA_URL_VAR};
use crate::cli::instructions::{
    print_banner, print_manual_deployment, print_probe_outcome, print_schema_loaded,
};
use crate::cli::rest_client::{ConnectionCheck, ProbeOutcome, RestClient, DEFAULT_TIMEOUT_SECS};
use crate::cli::sql_file::SqlFile;
use clap::Args;
use log::{debug, warn};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SQL_FILE: &str = "supabase-schema.sql";

/// Prints the steps for deploying a schema file through the dashboard
#[derive(Args, Debug, Clone)]
pub struct SchemaCommand {
    /// Supabase project url
    #[clap(long, env = SCHEMA_URL_VAR, hide_env_values = true)]
    pub url: Option<String>,

    /// Anon key of the project
    #[clap(long = "anon-key", env = SCHEMA_KEY_VAR, hide_env_values = true)]
    pub anon_key: Option<String>,

    /// Schema file to deploy, relative to the current directory
    #[clap(short, long, default_value = DEFAULT_SQL_FILE)]
    pub file: PathBuf,

    /// Connection check timeout in seconds
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

pub fn execute(args: &SchemaCommand) -> Result<(), anyhow::Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run(args, &mut out, RestClient::new)
}

pub fn run<W, C, F>(args: &SchemaCommand, out: &mut W, connect: F) -> Result<(), anyhow::Error>
where
    W: Write,
    C: ConnectionCheck,
    F: FnOnce(&Credentials, Duration) -> Result<C, anyhow::Error>,
{
    let credentials = Credentials::load(
        args.url.as_deref(),
        args.anon_key.as_deref(),
        [SCHEMA_URL_VAR, SCHEMA_KEY_VAR],
    )?;
    debug!("using {:?}", credentials);

    let title = match credentials.project_ref() {
        Some(r) => format!("🏡 Schema Deployment ({})", r),
        None => "🏡 Schema Deployment".to_string(),
    };
    print_banner(out, &title)?;

    let sql = SqlFile::read(&args.file)?;
    print_schema_loaded(out, &sql)?;

    writeln!(out, "🔍 Testing Supabase connection...")?;
    let outcome = match connect(&credentials, Duration::from_secs(args.timeout)) {
        Ok(client) => client.check(),
        Err(e) => {
            warn!("rest client unavailable: {:#}", e);
            ProbeOutcome::Failed(format!("{:#}", e))
        }
    };
    print_probe_outcome(out, &outcome)?;

    print_manual_deployment(out, &sql, credentials.project_ref())?;

    Ok(())
}
