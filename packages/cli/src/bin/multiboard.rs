// ABOUTME: Entry point for the multiboard command line
// ABOUTME: Parses arguments, sets up tracing, and dispatches to auth and route commands

use clap::{Parser, Subcommand};
use colored::*;
use std::process;
use std::sync::Arc;

mod cli;

use cli::auth::AuthCommands;
use cli::routes::RoutesCommands;
use multiboard_cli::logging::init_tracing;
use multiboard_cli::{AppContext, TerminalNotifier};
use multiboard_client::{LogNotifier, Notifier};

#[derive(Parser)]
#[command(name = "multiboard")]
#[command(about = "Multiboard client - board routes and user authentication")]
#[command(version)]
struct Cli {
    /// Send notifications to the log instead of the terminal
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign up, log in, and check the stored session
    #[command(subcommand)]
    Auth(AuthCommands),
    /// Inspect the client-side route table
    #[command(subcommand)]
    Routes(RoutesCommands),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    let notifier: Arc<dyn Notifier> = if cli.quiet {
        Arc::new(LogNotifier)
    } else {
        Arc::new(TerminalNotifier)
    };

    if let Err(e) = handle_command(cli.command, notifier).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands, notifier: Arc<dyn Notifier>) -> anyhow::Result<()> {
    let context = AppContext::from_env()?;

    match command {
        Commands::Auth(cmd) => cmd.execute(&context, notifier).await,
        Commands::Routes(cmd) => cmd.execute(&context),
    }
}
