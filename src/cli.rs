//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for tipster using the `clap` crate.
//! Without a subcommand the interactive session starts.
//!
//! # Commands
//!
//! - **interactive**: Browse, search and author tips in a prompt loop (default)
//! - **show**: Print one tip by id
//! - **search**: Find tips by keyword, optionally within a category
//! - **categories**: List categories with tip counts
//! - **stats**: Collection statistics
//! - **random**: A random tip, optionally from a given category
//! - **add**: Create a tip non-interactively
//! - **export**: Write the collection as JSON or CSV
//! - **init**: Write the bundled starter tips
//!
//! # Examples
//!
//! ```no_run
//! use tipster::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! match cli.get_command() {
//!     Commands::Show { id } => println!("showing #{id}"),
//!     _ => {}
//! }
//! ```

use crate::store::TipId;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the export command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// The tips file layout: `{"tips": [...]}`
    #[default]
    Json,
    /// One row per tip with an `id,title,content,category` header
    Csv,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tipster")]
#[command(about = "Tips & tricks in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Tips file to use (overrides config)
    #[arg(long = "store", value_name = "PATH", global = true)]
    pub store: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible random picks (overrides config)
    #[arg(long = "seed", value_name = "N", global = true)]
    pub seed: Option<u64>,

    /// Disable the loading animation
    #[arg(long = "no-animation", global = true)]
    pub no_animation: bool,

    /// Suppress the banner and informational output
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive session (default)
    #[command(visible_alias = "i")]
    Interactive,

    /// Show a tip by id
    Show {
        /// Tip id
        #[arg(value_name = "ID")]
        id: TipId,
    },

    /// Search tips by keyword in title, content and category
    #[command(visible_alias = "s")]
    Search {
        /// Keyword to look for (case-insensitive)
        #[arg(value_name = "KEYWORD")]
        keyword: String,

        /// Only keep results in this category
        #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
        category: Option<String>,
    },

    /// List categories with tip counts
    #[command(visible_alias = "cats")]
    Categories,

    /// Show collection statistics
    Stats,

    /// Show a random tip
    #[command(visible_alias = "r")]
    Random {
        /// Draw from this category only
        #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
        category: Option<String>,
    },

    /// Add a new tip
    #[command(visible_alias = "a")]
    Add {
        /// Tip title
        #[arg(short = 't', long = "title")]
        title: String,

        /// Tip body
        #[arg(short = 'b', long = "content")]
        content: String,

        /// Category label
        #[arg(short = 'c', long = "category")]
        category: String,
    },

    /// Export all tips to a file
    Export {
        /// Destination file
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },

    /// Write the bundled starter tips to the tips file
    Init {
        /// Overwrite an existing tips file
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Interactive if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Interactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_interactive() {
        let cli = Cli::try_parse_from(["tipster"]).unwrap();
        assert_eq!(cli.get_command(), Commands::Interactive);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tipster", "stats", "--store", "tips.json", "--seed", "7", "-q"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("tips.json")));
        assert_eq!(cli.seed, Some(7));
        assert!(cli.quiet);
        assert_eq!(cli.get_command(), Commands::Stats);
    }

    #[test]
    fn test_search_with_category() {
        let cli = Cli::try_parse_from(["tipster", "s", "debug", "-c", "Testing"]).unwrap();
        assert_eq!(
            cli.get_command(),
            Commands::Search {
                keyword: "debug".to_string(),
                category: Some("Testing".to_string()),
            }
        );
    }

    #[test]
    fn test_export_format() {
        let cli = Cli::try_parse_from(["tipster", "export", "out.csv", "--format", "csv"]).unwrap();
        assert_eq!(
            cli.get_command(),
            Commands::Export {
                path: PathBuf::from("out.csv"),
                format: ExportFormat::Csv,
            }
        );
    }

    #[test]
    fn test_add_requires_all_fields() {
        assert!(Cli::try_parse_from(["tipster", "add", "--title", "t", "--content", "c"]).is_err());
    }

    #[test]
    fn test_show_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["tipster", "show", "abc"]).is_err());
    }
}
