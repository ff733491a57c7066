//! Reelcraft CLI binary.
//!
//! This binary provides command-line access to the pipeline:
//! - Run the whole pipeline, from topics to workflow guide
//! - Generate and list topics only
//! - Re-render guides from a saved prompts file

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, load_config, render_guides, run_full, run_topics};

    // Parse command-line arguments
    let cli = Cli::parse();

    reelcraft::telemetry::init_console_telemetry(cli.verbose)?;

    // REELCRAFT_* overrides may live in .env too
    reelcraft::load_dotenv();

    let config = load_config(cli.config.as_deref(), cli.output_dir.clone())?;

    // Execute the requested command
    match cli.command {
        Commands::Run { topic } => {
            run_full(config, topic).await?;
        }

        Commands::Topics => {
            run_topics(config).await?;
        }

        Commands::Render { topic, prompts } => {
            render_guides(config, &topic, &prompts).await?;
        }
    }

    Ok(())
}
