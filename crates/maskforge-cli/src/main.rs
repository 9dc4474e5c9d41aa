mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "maskforge", about = "Inpainting edit-mask authoring tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image dimensions and the drawing-surface geometry
    Info(commands::info::InfoArgs),
    /// Print or save a default stroke script
    Config(commands::config::ConfigArgs),
    /// Replay a stroke script and write the mask
    Render(commands::render::RenderArgs),
    /// Render several stroke scripts
    Batch(commands::batch::BatchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Batch(args) => commands::batch::run(args),
    }
}
