// SPDX-License-Identifier: MIT
// Copyright (c) 2026 yamlvet contributors

//! yamlvet CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use yamlvet::cli::Cli;
use yamlvet::error::ExitCode;

fn init_logging(debug: bool) {
    // --debug is shorthand for YAMLVET_LOG=debug; the env var wins when set.
    let fallback = if debug { "debug" } else { "off" };
    let filter =
        EnvFilter::try_from_env("YAMLVET_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);
    tracing::debug!(args = ?cli, "parsed arguments");

    let exit_code = match yamlvet::validate::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("yamlvet: {}", e);
            match e.downcast_ref::<yamlvet::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}
