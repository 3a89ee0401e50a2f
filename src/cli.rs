use clap::Parser;
use pj_migrate::application::dto::OutputFormat;
use std::path::PathBuf;

/// Migrate project.json dependencies to MSBuild package references
#[derive(Parser, Debug)]
#[command(name = "pj-migrate")]
#[command(version)]
#[command(
    about = "Migrate project.json dependencies and tools to MSBuild PackageReference items",
    long_about = None
)]
pub struct Args {
    /// Output format: xml or json [default: xml]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Manifest file name inside the project directory [default: project.json]
    #[arg(short, long)]
    pub manifest: Option<String>,

    /// Path to a config file (defaults to pj-migrate.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Validate and translate the manifest without writing any output
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
