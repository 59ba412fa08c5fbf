use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "assetmin", version, about = "Naive CSS/JS minifier for static site builds")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Specify configuration file path
    #[arg(long, env = "ASSETMIN_CONFIG")]
    pub config: Option<String>,

    /// Override the site root containing the css/ and js/ directories
    #[arg(long, env = "ASSETMIN_ROOT")]
    pub root: Option<String>,

    /// Log level
    #[arg(long, env = "ASSETMIN_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Dry run (don't write files)
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the batch report as a JSON document
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Minify all configured assets (the default when no command is given)
    Run,

    /// Minify CSS read from stdin and write it to stdout
    Css,

    /// Minify JavaScript read from stdin and write it to stdout
    Js,
}
