mod cli;
mod commands;
mod ui;

use clap::Parser;
use cli::{Cli, Command};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;
use wordrank::config::{self, Config, DEFAULT_CONFIG_FILE};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Generate {
            space,
            count,
            strategy,
            seed,
            offset,
            walk_limit,
            json,
        } => {
            let mut config = load_config_or_exit(cli.config.as_deref());
            space.apply(&mut config);
            if let Some(count) = count {
                config.count = count;
            }
            if let Some(strategy) = strategy {
                config.strategy = strategy;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            if walk_limit.is_some() {
                config.walk_limit = walk_limit;
            }
            commands::generate::run(&config, offset, json)
        }
        Command::Count { space } => {
            let mut config = load_config_or_exit(cli.config.as_deref());
            space.apply(&mut config);
            commands::count::run(&config)
        }
        Command::Get { index, space, seed } => {
            let mut config = load_config_or_exit(cli.config.as_deref());
            space.apply(&mut config);
            if seed.is_some() {
                config.seed = seed;
            }
            commands::get::run(&config, index)
        }
        Command::Demo { count, seed } => commands::demo::run(count, seed),
        Command::InitConfig { path, force } => {
            let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            commands::init_config::run(&path, force)
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn load_config_or_exit(path: Option<&Path>) -> Config {
    let path = path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    match config::read_config(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Cannot read {}: {}", path.display(), e);
            process::exit(1);
        }
    }
}
