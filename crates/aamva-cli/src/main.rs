//! AAMVA CLI
//!
//! Command-line interface for the AAMVA state ID proofer.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "aamva")]
#[command(author, version, about = "Verify state ID attributes against AAMVA", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map raw applicant data to the canonical applicant
    Applicant {
        /// Applicant data file (JSON)
        #[arg(short, long)]
        input: String,
    },

    /// Interpret a saved verification response
    Interpret {
        /// Verification response file (JSON)
        #[arg(short, long)]
        response: String,

        /// Applicant data file the request was built from (JSON)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Run a full proof against the verification service
    Proof {
        /// Applicant data file (JSON)
        #[arg(short, long)]
        input: String,

        /// Verification endpoint, overriding configuration
        #[arg(short, long, env = "AAMVA_VERIFICATION_URL")]
        url: Option<String>,
    },

    /// Show effective configuration
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("aamva={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Applicant { input } => {
            commands::applicant::show(&input)?;
        }
        Commands::Interpret { response, input } => {
            commands::proof::interpret(&response, input.as_deref())?;
        }
        Commands::Proof { input, url } => {
            commands::proof::run(&input, url).await?;
        }
        Commands::Status => {
            commands::status::show()?;
        }
    }

    Ok(())
}
