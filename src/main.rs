//! cssmod-types CLI
//!
//! Usage: cssmod-types [PATH] [-a|--all]
//!
//! Scans PATH (default `.`) for CSS-module stylesheets and writes a
//! `<file>.d.ts` declaration next to each one whose content changed.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use cssmod_types::config;
use cssmod_types::infrastructure::load_template;
use cssmod_types::{GenerateOptions, GenerateResult, LocalGenerateUseCase};

use cli::Cli;

/// Env var holding an `EnvFilter` directive, overriding `-v`
const LOG_ENV_VAR: &str = "CSSMOD_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let (config, warnings) = config::load_or_default(&cwd, cli.config.as_deref())
        .context("failed to load configuration")?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    let template_path = cli.template.clone().or_else(|| config.generate.template.clone());
    let template = load_template(template_path.as_deref())?;

    let options = GenerateOptions::new()
        .with_root(cli.path.clone())
        .with_force_renew(cli.all)
        .with_dry_run(cli.dry_run);

    let use_case =
        LocalGenerateUseCase::local(config.convention(), cli.sort || config.generate.sort_paths);
    let result = use_case
        .execute(&options, &template)
        .with_context(|| format!("failed to generate declarations for {}", cli.path.display()))?;

    report(&result, cli.json)
}

fn report(result: &GenerateResult, json: bool) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "event": "generate",
            "changed": result.files_changed(),
            "skipped": result.skipped.len(),
            "ignored": result.ignored,
            "dry_run": result.dry_run,
            "files": result
                .written
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        if result.dry_run {
            for path in &result.written {
                println!("  ~ {}", path.display());
            }
        }
        println!("{}\n", result.summary());
    }
    Ok(())
}
