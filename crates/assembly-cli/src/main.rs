//! assemble-transcript - Assemble captured prompt/response files into a Markdown transcript

mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let settings = config::load(&cli)?;
    tracing::debug!(
        source = %settings.source_dir.display(),
        output = %settings.output.display(),
        extension = %settings.options.extension,
        "resolved settings"
    );

    // Handle early-exit commands
    if cli.doctor {
        return commands::doctor::run(&cli, &settings);
    }

    if cli.list {
        return commands::list::run(&cli, &settings);
    }

    commands::assemble::run(&cli, &settings)
}

/// Log to stderr so stdout carries only the report. `RUST_LOG` directives are honored.
fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
