use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::fs;
use std::process::Command; // Run programs
use tempfile::TempDir;

const CARGO_BIN: &str = "schema-deploy";

const ENV_VARS: [&str; 4] = [
    "NEXT_PUBLIC_SUPABASE_URL",
    "SUPABASE_SERVICE_ROLE_KEY",
    "SUPABASE_URL",
    "SUPABASE_ANON_KEY",
];

const BOOKINGS_SQL: &str = "CREATE TABLE a (id int);";

// nothing listens here, so the connection check fails fast
const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

// runs the binary in `dir` with none of the credential variables inherited
fn command_in(dir: &TempDir) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(CARGO_BIN)?;
    cmd.current_dir(dir.path());
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    Ok(cmd)
}

#[test]
fn help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(CARGO_BIN)?;

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage: "))
        .stdout(predicate::str::contains("bookings"))
        .stdout(predicate::str::contains("schema"));

    Ok(())
}

#[test]
fn bookings_without_credentials_exits_1() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("create-bookings-table.sql"), BOOKINGS_SQL)?;

    let mut cmd = command_in(&dir)?;
    cmd.arg("bookings");
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Missing Supabase credentials"))
        .stdout(predicate::str::contains(
            "NEXT_PUBLIC_SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY",
        ))
        .stdout(predicate::str::contains("Creating bookings table").not());

    Ok(())
}

#[test]
fn bookings_reads_credentials_from_env_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("create-bookings-table.sql"), BOOKINGS_SQL)?;
    fs::write(
        dir.path().join(".env.local"),
        "NEXT_PUBLIC_SUPABASE_URL=https://abc.supabase.co\nSUPABASE_SERVICE_ROLE_KEY=service\n",
    )?;

    let mut cmd = command_in(&dir)?;
    cmd.arg("bookings");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Creating bookings table"));

    Ok(())
}

#[test]
fn bookings_prints_statements_and_sql() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("create-bookings-table.sql"), BOOKINGS_SQL)?;

    let mut cmd = command_in(&dir)?;
    cmd.env("NEXT_PUBLIC_SUPABASE_URL", "https://abc.supabase.co")
        .env("SUPABASE_SERVICE_ROLE_KEY", "service")
        .arg("bookings");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "  Executing statement 1/1...\n    CREATE TABLE a (id int)...\n",
        ))
        .stdout(predicate::str::contains(format!(
            "SQL to execute:\n{}\n{}\n",
            "=".repeat(60),
            BOOKINGS_SQL
        )));

    Ok(())
}

#[test]
fn bookings_missing_file_exits_1() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    let mut cmd = command_in(&dir)?;
    cmd.args([
        "bookings",
        "--url",
        "https://abc.supabase.co",
        "--service-key",
        "service",
    ]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("create-bookings-table.sql not found"))
        .stdout(predicate::str::contains("SQL to execute").not());

    Ok(())
}

#[test]
fn schema_without_credentials_exits_1() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("supabase-schema.sql"), BOOKINGS_SQL)?;

    let mut cmd = command_in(&dir)?;
    cmd.args(["schema", "--url", UNREACHABLE_URL]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("SUPABASE_URL and SUPABASE_ANON_KEY"))
        .stdout(predicate::str::contains("Testing Supabase connection").not());

    Ok(())
}

#[test]
fn schema_prints_steps_when_unreachable() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let sql = "create table properties (id uuid primary key);\n";
    fs::write(dir.path().join("supabase-schema.sql"), sql)?;

    let mut cmd = command_in(&dir)?;
    cmd.env("SUPABASE_URL", UNREACHABLE_URL)
        .env("SUPABASE_ANON_KEY", "anon")
        .args(["schema", "--timeout", "2"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Schema loaded successfully"))
        .stdout(predicate::str::contains("⚠️  Connection test: "))
        .stdout(predicate::str::contains("MANUAL DEPLOYMENT REQUIRED"))
        .stdout(predicate::str::contains(sql));

    Ok(())
}

#[test]
fn schema_missing_file_exits_1() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    let mut cmd = command_in(&dir)?;
    cmd.args([
        "schema",
        "--url",
        UNREACHABLE_URL,
        "--anon-key",
        "anon",
        "--file",
        "other.sql",
    ]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("other.sql not found"));

    Ok(())
}
