use anyhow::{Context, Result, bail};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use tde_core::{Extractor, ExtractorConfig, TracingReporter};

#[derive(Parser, Debug)]
#[command(
    name = "tde",
    about = "Extract item missing properties and presets from Tarkov resource dumps",
    version
)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, default_value = "tde.toml")]
    config: PathBuf,
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Extract both data sets, archiving the previous outputs (default)
    Extract(ExtractArgs),
    /// Print the output file of every data set
    Outputs,
    /// List archived outputs of previous runs, newest first
    Archives,
}

#[derive(ClapArgs, Debug, Default)]
struct ExtractArgs {
    /// Resource dump to read instead of the configured one
    #[arg(long)]
    resources: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ExtractorConfig::load(&cli.config)
        .with_context(|| format!("loading configuration {}", cli.config.display()))?;

    match cli.cmd.unwrap_or(Cmd::Extract(ExtractArgs::default())) {
        Cmd::Extract(a) => cmd_extract(config, a),
        Cmd::Outputs => cmd_outputs(&config),
        Cmd::Archives => cmd_archives(&config),
    }
}

fn cmd_extract(mut config: ExtractorConfig, args: ExtractArgs) -> Result<()> {
    if let Some(resources) = args.resources {
        config.resources_file_path = resources;
    }
    let reporter = TracingReporter;
    let report = Extractor::new(config, &reporter).run();
    for (data_set, outcome) in report.outcomes() {
        match outcome {
            Ok(o) => println!("{}\t{}\t{}", data_set, o.records, o.path.display()),
            Err(e) => println!("{}\tfailed\t{}", data_set, e),
        }
    }
    let failed = report.failures().len();
    if failed > 0 {
        bail!("{} of {} data sets failed to extract", failed, report.outcomes().len());
    }
    Ok(())
}

fn cmd_outputs(config: &ExtractorConfig) -> Result<()> {
    for (data_set, _) in config.output_files() {
        println!("{}\t{}", data_set, config.output_path(data_set).display());
    }
    Ok(())
}

fn cmd_archives(config: &ExtractorConfig) -> Result<()> {
    let dir = config.archive_directory();
    let archived = tde_core::list_archived(&dir)
        .with_context(|| format!("listing {}", dir.display()))?;
    for a in archived {
        println!(
            "{}\t{}\t{}",
            a.archived_at.format("%Y-%m-%d %H:%M:%S"),
            a.original_name,
            a.path.display()
        );
    }
    Ok(())
}
