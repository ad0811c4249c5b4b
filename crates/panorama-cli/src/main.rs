use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use panorama_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "panorama")]
#[command(author, version, about = "A horizontally scrolling terminal portfolio")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Run the scroll animation headless and print one JSON line per frame
    Simulate {
        /// Visible width in columns
        #[arg(short = 'w', long, default_value_t = 100)]
        width: u16,
        /// Initial scroll offset
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        /// Vertical wheel delta, applied one per frame (repeatable)
        #[arg(long = "wheel", allow_negative_numbers = true)]
        wheel: Vec<f64>,
        /// Section key to navigate to after the wheel input
        #[arg(short = 'n', long)]
        navigate: Option<String>,
        /// Stop after this many frames even if not settled
        #[arg(long, default_value_t = 600)]
        max_frames: u32,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // Initialize logging; stderr keeps stdout free for the TUI and JSON output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Simulate {
            width,
            start,
            wheel,
            navigate,
            max_frames,
        }) => commands::simulate::run(
            &config,
            commands::simulate::SimulateOptions {
                width,
                start,
                wheel,
                navigate,
                max_frames,
            },
        ),
        Some(Commands::Config) => commands::config::run(&config),
    }
}
