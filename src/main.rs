//! folio-meta - build-time SEO metadata for data-driven portfolio sites.

mod asset;
mod cli;
mod config;
mod core;
mod generator;
mod logger;
mod pipeline;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let session = Session::load(&cli)?;

    match &cli.command {
        Commands::Build => cli::build::build_site(&session),
        Commands::Query { args } => cli::query::run_query(&session, args),
    }
}
