//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reelcraft - tech history video topics, Leonardo AI prompts and production guides
#[derive(Parser, Debug)]
#[command(name = "reelcraft")]
#[command(about = "Generate tech history video topics, Leonardo AI prompts and production guides", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of the default search path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory to write artifacts to
    #[arg(long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the full pipeline: topics, selection, prompts and guides
    Run {
        /// 1-based topic number to use without prompting
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        topic: Option<u16>,
    },

    /// Generate, extract and save topics only
    Topics,

    /// Re-render the guides from a saved prompts file
    Render {
        /// Topic the prompts belong to
        #[arg(long)]
        topic: String,

        /// Path to a `<topic>_prompts.json` file
        #[arg(long, value_name = "FILE")]
        prompts: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_accepts_explicit_topic() {
        let cli = Cli::try_parse_from(["reelcraft", "run", "--topic", "3"]).unwrap();
        assert_eq!(cli.command, Commands::Run { topic: Some(3) });
        assert!(!cli.verbose);
    }

    #[test]
    fn run_rejects_topic_zero() {
        assert!(Cli::try_parse_from(["reelcraft", "run", "--topic", "0"]).is_err());
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "reelcraft",
            "topics",
            "-v",
            "--output-dir",
            "renders",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.command, Commands::Topics);
        assert!(cli.verbose);
        assert_eq!(cli.output_dir, Some(PathBuf::from("renders")));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn render_requires_both_arguments() {
        assert!(Cli::try_parse_from(["reelcraft", "render", "--topic", "ENIAC"]).is_err());

        let cli = Cli::try_parse_from([
            "reelcraft",
            "render",
            "--topic",
            "ENIAC",
            "--prompts",
            "output/ENIAC_prompts.json",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Commands::Render {
                topic: "ENIAC".to_string(),
                prompts: PathBuf::from("output/ENIAC_prompts.json"),
            }
        );
    }
}
