use clap::Parser;
use eyre::Result;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tasklist::{Config, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "TaskList - A minimal in-memory to-do list for the terminal")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Disable coloured output (also honours NO_COLOR)
    #[arg(long)]
    no_color: bool,

    /// Remove tasks without asking for confirmation
    #[arg(short, long)]
    yes: bool,

    /// Read commands from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_flags(cli.no_color, cli.yes, cli.script, cli.verbose, io::stdin().is_terminal()).apply_env();

    if !config.color {
        colored::control::set_override(false);
    }

    // Setup tracing; logs go to stderr so they never mix with the list
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();

    match config.open_script()? {
        Some(script) => {
            let mut session = Session::new(config, script, stdout.lock());
            session.run()?;
        }
        None => {
            let stdin = io::stdin();
            let mut session = Session::new(config, stdin.lock(), stdout.lock());
            session.run()?;
        }
    }

    Ok(())
}
