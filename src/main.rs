//! devhelper - project scaffolding assistant

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use devhelper::commands::InitCommand;
use devhelper::ui::DialoguerUi;

/// devhelper - speed up your project setup
#[derive(Parser)]
#[command(name = "devhelper")]
#[command(about = "Speed up your project setup", long_about = None, version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project from a template
    Init(InitCommand),
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_level(true);
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();

    let cli = Cli::parse();

    let outcome = match &cli.command {
        Commands::Init(cmd) => cmd.execute(&DialoguerUi).await,
    };

    std::process::exit(outcome.exit_code());
}
