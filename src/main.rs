use clap::{crate_authors, crate_version, Args, Parser, Subcommand};
use schema_deploy::cmd::bookings::{self, BookingsCommand};
use schema_deploy::cmd::schema::{self, SchemaCommand};
use schema_deploy::tui;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser)]
#[clap(author = crate_authors!("\n"), version = crate_version!(), about = "Prints manual deployment steps for Supabase SQL schemas", long_about = None)]
struct App {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[clap(subcommand)]
    command: SubCommands,
}

// Enum representing all available commands
#[derive(Subcommand)]
enum SubCommands {
    Bookings(BookingsCommand),
    Schema(SchemaCommand),
}

#[derive(Args)]
struct GlobalOpts {
    /// Show more information in command output
    #[clap(short, long, global = true)]
    verbose: bool,
}

fn main() {
    // .env.local wins over .env, the process environment wins over both
    dotenv::from_filename(".env.local").ok();
    dotenv::dotenv().ok();

    let app = App::parse();
    init_logging(app.global_opts.verbose);

    let res = match &app.command {
        SubCommands::Bookings(cmd) => bookings::execute(cmd),
        SubCommands::Schema(cmd) => schema::execute(cmd),
    };

    if let Err(e) = res {
        tui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let _ = TermLogger::init(
        level,
        ConfigBuilder::new().set_time_level(LevelFilter::Off).build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
