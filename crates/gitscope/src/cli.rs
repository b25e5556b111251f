//! CLI command structure using clap

use clap::{Parser, Subcommand};
use gitscope_scope::Department;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitscope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config.toml
    #[arg(long, global = true, env = "GITSCOPE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search repositories, users or code
    Search {
        /// Query text (blank uses the configured default)
        query: Option<String>,

        /// What to search
        #[arg(short, long, default_value_t = Department::Repositories)]
        department: Department,

        /// Scope code searches to OWNER/NAME
        #[arg(long)]
        repo: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Show the preview of the first result
        #[arg(long)]
        preview: bool,
    },

    /// Configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Search cache
    #[command(subcommand)]
    Cache(CacheCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum CacheCommands {
    /// Show the last query and repository
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Remove cache.json
    Clear,
}
