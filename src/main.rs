use clap::Parser;
use gitwc::commands::{execute_count, execute_log};
use gitwc::core::{
    error::{GitwcError, Result},
    print_error,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitwc")]
#[command(about = "Per-revision diffstats and per-file word counts for a git repository")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Also report per-file line/word/char/byte counts at the latest revision
    #[arg(long)]
    files: bool,

    /// Emit JSON instead of formatted rows
    #[arg(long)]
    json: bool,

    /// Repository location (any path inside the repository)
    location: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(&cli) {
        if let GitwcError::BranchAbsent = e {
            print_error("Not a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    execute_log(&cli.location, cli.json)?;

    if cli.files {
        execute_count(&cli.location, cli.json)?;
    }

    Ok(())
}
