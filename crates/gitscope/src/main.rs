mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{CacheCommands, Cli, Commands, ConfigCommands};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Search {
            query,
            department,
            repo,
            json,
            preview,
        } => commands::search::run(
            commands::search::SearchArgs {
                query: query.unwrap_or_default(),
                department,
                repo,
                json,
                preview,
            },
            config,
            cli.verbose,
        ),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Show { json } => commands::config::show(json, config, cli.verbose),
        },
        Commands::Cache(cache_cmd) => match cache_cmd {
            CacheCommands::Show { json } => commands::cache::show(json, config, cli.verbose),
            CacheCommands::Clear => commands::cache::clear(cli.verbose),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
