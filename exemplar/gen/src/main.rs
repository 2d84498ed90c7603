//! Exemplar Sample Generator
//!
//! Generates TypeScript usage samples from the examples recorded in a code model.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use exemplar_define::CodeModel;
use exemplar_gen::config::GeneratorSettings;
use exemplar_gen::diagnostics::{CollectingSink, Tee, TracingSink};
use exemplar_gen::errors::GeneratorError;
use exemplar_gen::output::{generate_fragments, generate_samples};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Exemplar sample generator - turns recorded API examples into TypeScript samples
#[derive(Parser, Debug)]
#[command(name = "exemplar-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Code model JSON document
    #[arg(short, long)]
    model: PathBuf,

    /// Output directory for generated samples
    #[arg(short, long, default_value = "samples")]
    output: PathBuf,

    /// Settings file (TOML)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// npm package the samples import the client from (overrides settings)
    #[arg(long)]
    package_name: Option<String>,

    /// Package version (overrides settings)
    #[arg(long)]
    package_version: Option<String>,

    /// Also write inline documentation fragments
    #[arg(long)]
    fragments: bool,

    /// Print generated samples without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,
}

fn init_tracing(verbose: u8, json: bool) {
    // RUST_LOG wins over -v flags
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,exemplar_gen=info".to_string(),
            2 => "info,exemplar_gen=debug".to_string(),
            _ => "debug,exemplar_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn load_settings(cli: &Cli) -> Result<GeneratorSettings, GeneratorError> {
    let mut settings = match &cli.settings {
        Some(path) => GeneratorSettings::from_path(path)?,
        None => GeneratorSettings::default(),
    };

    if let Some(name) = &cli.package_name {
        settings.package_name = name.clone();
    }
    if let Some(version) = &cli.package_version {
        settings.package_version = version.clone();
    }

    settings.validate()?;
    Ok(settings)
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json);

    let settings = load_settings(&cli)?;
    let model = CodeModel::from_path(&cli.model)?;

    tracing::info!(
        model = %model.name,
        output = %cli.output.display(),
        dry_run = cli.dry_run,
        "Generating samples"
    );

    let collected = CollectingSink::new();
    let sink = Tee(TracingSink, &collected);

    let summary = generate_samples(&model, &settings, &sink, &cli.output, cli.dry_run)?;
    // Fragments revisit the same examples; only log their diagnostics
    let fragments = if cli.fragments {
        generate_fragments(&model, &settings, &TracingSink, &cli.output, cli.dry_run)?
    } else {
        None
    };

    let files = summary.files.len() + usize::from(fragments.is_some());
    let verb = if cli.dry_run { "Rendered" } else { "Wrote" };
    eprintln!(
        "{} {} samples in {} files to {}",
        verb.green().bold(),
        summary.samples,
        files,
        cli.output.display()
    );

    if summary.suppressed > 0 || !collected.is_empty() {
        eprintln!(
            "{} {} suppressed samples, {} diagnostics ({} errors)",
            "Warning:".yellow().bold(),
            summary.suppressed,
            collected.len(),
            collected.error_count()
        );
    }

    Ok(())
}
