//! Aneurisk repository lookup CLI.

use clap::{ColorChoice, Parser};
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_cases, run_path, run_point, run_resolve};
use crate::logging::{LogConfig, LogFormat, init_logging};

use aneurisk_paths::DatasetRoot;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));

    let root = match &cli.root {
        Some(dir) => DatasetRoot::new(dir),
        None => DatasetRoot::from_env(),
    };

    let result = match &cli.command {
        Command::Resolve(args) => run_resolve(args),
        Command::Path(args) => run_path(&root, args),
        Command::Cases(args) => run_cases(&root, args),
        Command::Point(args) => run_point(&root, args),
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter: LevelFilter = cli.verbosity.tracing_level_filter();
    LogConfig {
        level_filter,
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stderr().is_terminal(),
        },
        use_env_filter: !cli.verbosity.is_present(),
    }
}
