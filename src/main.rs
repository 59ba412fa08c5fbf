use std::io::{self, Read};
use std::str::FromStr;

use anyhow::Result;
use clap::Parser;

use assetmin::batch::{run_batch, RunOptions};
use assetmin::cli::{Cli, Command};
use assetmin::config::Config;
use assetmin::minify::{minify_css, minify_js};

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

// Diagnostics go to stderr; stdout carries only the report.
fn init_tracing(log_level: &str) {
    let level = tracing::Level::from_str(log_level).unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None | Some(Command::Run) => {
            let config = Config::load(cli.config.as_deref(), cli.root.as_deref())?;
            let options = RunOptions {
                dry_run: cli.dry_run,
                json: cli.json,
            };
            run_batch(&config.batch, options)?;
            Ok(())
        }
        Some(Command::Css) => filter_stdin(minify_css),
        Some(Command::Js) => filter_stdin(minify_js),
    }
}

/// Read all of stdin, minify it, write the result to stdout.
fn filter_stdin(minify: fn(&str) -> String) -> Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    print!("{}", minify(&input));
    Ok(())
}
