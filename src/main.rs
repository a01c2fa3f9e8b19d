//! bdfeed - RSS and Atom feeds for BD103's blog.

mod cli;
mod config;
mod content;
mod feed;
mod generator;
mod hooks;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { .. } => cli::init::new_config(&config),
        Commands::Build { .. } => cli::build::build_feeds(&config),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}
