// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use logrdr::cli::Cli;
use logrdr::config::{self, Config};
use logrdr::discovery;
use logrdr::error::{Error, ExitCode};
use logrdr::report;
use logrdr::run::{self, RunOptions};

fn main() -> std::process::ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("logrdr: {:#}", e);
            e.downcast_ref::<Error>()
                .map(Error::exit_code)
                .unwrap_or(ExitCode::InternalError)
                .into()
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOGRDR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn execute(cli: &Cli) -> anyhow::Result<ExitCode> {
    let Some(file) = &cli.file else {
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::Success);
    };

    let config = load_config(cli)?;
    let options = RunOptions {
        file: file.clone(),
        db: cli.db.clone(),
        max_line_length: cli
            .max_line_length
            .unwrap_or(config.reader.max_line_length),
        store: config.store,
        verbose: cli.verbose,
    };

    let report = run::run(&options)?;
    let output = report::format_report(cli.output, &report)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    let summary = &report.summary;
    if summary.store_disabled {
        eprintln!(
            "warning: record store unusable, {} record(s) not stored",
            summary.persistence_failures
        );
    } else if summary.persistence_failures > 0 {
        eprintln!(
            "warning: {} record(s) could not be stored",
            summary.persistence_failures
        );
    }
    Ok(ExitCode::Success)
}

/// Explicit `--config`, else the nearest logrdr.toml, else defaults.
fn load_config(cli: &Cli) -> Result<Config, Error> {
    if let Some(path) = &cli.config {
        return Ok(config::load(path)?);
    }
    let cwd = std::env::current_dir().map_err(|source| Error::Input {
        path: ".".into(),
        source,
    })?;
    match discovery::find_config(&cwd) {
        Some(path) => Ok(config::load(&path)?),
        None => Ok(Config::default()),
    }
}
