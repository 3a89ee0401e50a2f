mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use pj_migrate::adapters::outbound::console::StderrProgressReporter;
use pj_migrate::adapters::outbound::filesystem::{FileSystemReader, DEFAULT_MANIFEST_NAME};
use pj_migrate::application::dto::{MigrationRequest, OutputFormat};
use pj_migrate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pj_migrate::application::use_cases::MigrateDependenciesUseCase;
use pj_migrate::shared::error::{ExitCode, MigrationError};
use pj_migrate::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Effective settings after merging CLI arguments over the config file
#[derive(Debug, PartialEq)]
struct Settings {
    format: OutputFormat,
    manifest: String,
    output: Option<PathBuf>,
}

impl Settings {
    fn merge(args: &Args, config: Option<&ConfigFile>) -> Self {
        let format = args
            .format
            .or_else(|| config.and_then(ConfigFile::output_format))
            .unwrap_or_default();
        let manifest = args
            .manifest
            .clone()
            .or_else(|| config.and_then(|c| c.manifest.clone()))
            .unwrap_or_else(|| DEFAULT_MANIFEST_NAME.to_string());
        let output = args
            .output
            .clone()
            .or_else(|| config.and_then(|c| c.output.clone()));

        Self {
            format,
            manifest,
            output,
        }
    }
}

fn run(args: Args) -> Result<()> {
    // Validate project directory
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&project_path)?,
    };
    let settings = Settings::merge(&args, config.as_ref());
    tracing::debug!(?settings, "effective settings");

    // Create adapters (Dependency Injection)
    let manifest_reader = FileSystemReader::with_manifest_name(settings.manifest.as_str());
    let progress_reporter = StderrProgressReporter::new();

    let use_case = MigrateDependenciesUseCase::new(manifest_reader, progress_reporter);
    let response = use_case.execute(MigrationRequest::new(project_path, args.dry_run))?;

    if response.dry_run {
        return Ok(());
    }

    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    let formatter = FormatterFactory::create(settings.format);
    let items = response.document.into_items();
    let formatted_output = formatter.format(&items)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    let invalid = |reason: String| MigrationError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason,
    };

    if !path.exists() {
        return Err(invalid("Directory does not exist".to_string()).into());
    }

    let metadata = std::fs::symlink_metadata(path)
        .map_err(|e| invalid(format!("Failed to read path metadata: {}", e)))?;

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: Project path is a symbolic link, which is not allowed".to_string(),
        )
        .into());
    }

    if !path.is_dir() {
        return Err(invalid("Not a directory".to_string()).into());
    }

    Ok(())
}
