//! Console output for the manual deployment steps.
//!
//! Everything here only writes text. The SQL itself is always reproduced
//! verbatim so it can be pasted into the dashboard's SQL editor.
use crate::cli::rest_client::ProbeOutcome;
use crate::cli::sql_file::SqlFile;
use crate::cli::statements::{preview, Statements, PREVIEW_CHARS};
use std::io::{self, Write};

pub const DASHBOARD_URL: &str = "https://supabase.com/dashboard";

const SQL_RULE_WIDTH: usize = 60;
const BANNER_WIDTH: usize = 50;

/// SQL editor of the project when its reference is known
pub fn sql_editor_url(project_ref: Option<&str>) -> String {
    match project_ref {
        Some(r) => format!("{}/project/{}/sql/new", DASHBOARD_URL, r),
        None => DASHBOARD_URL.to_string(),
    }
}

pub fn psql_command(project_ref: Option<&str>, file_name: &str) -> String {
    let host = match project_ref {
        Some(r) => format!("db.{}.supabase.co", r),
        None => "[HOST]".to_string(),
    };
    format!(
        "psql postgresql://postgres:[PASSWORD]@{}:5432/postgres -f {}",
        host, file_name
    )
}

/// `  Executing statement i/n...` followed by the first 80 characters
pub fn print_statements<W: Write>(out: &mut W, statements: &Statements) -> io::Result<()> {
    let total = statements.len();
    for (n, statement) in statements.numbered() {
        writeln!(out, "  Executing statement {}/{}...", n, total)?;
        writeln!(out, "    {}...", preview(statement, PREVIEW_CHARS))?;
    }
    Ok(())
}

pub fn print_deployment_options<W: Write>(
    out: &mut W,
    file_name: &str,
    project_ref: Option<&str>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "⚠️  Note: SQL execution requires direct database access")?;
    writeln!(out)?;
    writeln!(out, "📝 To deploy, you have two options:")?;
    writeln!(out)?;
    writeln!(out, "Option 1: Use Supabase Dashboard")?;
    writeln!(out, "  1. Go to {}", DASHBOARD_URL)?;
    writeln!(out, "  2. Select your project")?;
    writeln!(out, "  3. Go to SQL Editor")?;
    writeln!(out, "  4. Click 'New Query'")?;
    writeln!(out, "  5. Copy and paste the contents of '{}'", file_name)?;
    writeln!(out, "  6. Click 'Run'")?;
    writeln!(out)?;
    writeln!(out, "Option 2: Use psql (if installed)")?;
    writeln!(out, "  {}", psql_command(project_ref, file_name))?;
    Ok(())
}

/// Shortened steps used when no REST client could be built
pub fn print_manual_steps<W: Write>(out: &mut W, file_name: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "To deploy the bookings table:")?;
    writeln!(out, "1. Go to {}", DASHBOARD_URL)?;
    writeln!(out, "2. Select your project")?;
    writeln!(out, "3. Go to SQL Editor > New Query")?;
    writeln!(out, "4. Copy the contents of '{}'", file_name)?;
    writeln!(out, "5. Paste and run")?;
    Ok(())
}

pub fn print_sql_block<W: Write>(out: &mut W, sql: &str) -> io::Result<()> {
    let rule = "=".repeat(SQL_RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "SQL to execute:")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", sql)?;
    writeln!(out, "{}", rule)?;
    Ok(())
}

pub fn print_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;
    Ok(())
}

pub fn print_schema_loaded<W: Write>(out: &mut W, sql: &SqlFile) -> io::Result<()> {
    writeln!(out, "📄 Schema loaded successfully")?;
    writeln!(out, "   Size: {} characters", sql.char_count())?;
    writeln!(out)?;
    Ok(())
}

pub fn print_probe_outcome<W: Write>(out: &mut W, outcome: &ProbeOutcome) -> io::Result<()> {
    match outcome {
        ProbeOutcome::Reachable(_) => writeln!(out, "✅ Connection successful!"),
        ProbeOutcome::Failed(msg) => writeln!(out, "⚠️  Connection test: {}", msg),
    }
}

pub fn print_manual_deployment<W: Write>(
    out: &mut W,
    sql: &SqlFile,
    project_ref: Option<&str>,
) -> io::Result<()> {
    let file_name = sql.display_name();
    let rule = "-".repeat(BANNER_WIDTH);

    writeln!(out)?;
    print_banner(out, "📋 MANUAL DEPLOYMENT REQUIRED")?;
    writeln!(out, "The schema must be deployed via Supabase Dashboard:")?;
    writeln!(out)?;
    writeln!(out, "1. Open: {}", sql_editor_url(project_ref))?;
    writeln!(out)?;
    writeln!(out, "2. Copy and paste the following SQL:")?;
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", sql.contents)?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;
    writeln!(out, "3. Click the RUN button")?;
    writeln!(out)?;
    writeln!(out, "4. Wait for SUCCESS message")?;
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(out)?;
    writeln!(out, "💡 Tip: You can also run:")?;
    writeln!(out, "   cat {} | pbcopy    (macOS)", file_name)?;
    writeln!(out, "   cat {} | xclip     (Linux)", file_name)?;
    writeln!(out)?;
    Ok(())
}
