use std::path::PathBuf;

use clap::Parser;

/// cssmod-types - generate TypeScript declarations for CSS modules
#[derive(Parser, Debug)]
#[command(name = "cssmod-types")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Writes <file>.d.ts next to every *.module.scss found under PATH.")]
pub struct Cli {
    /// File or directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Regenerate every declaration file, even when it is up to date
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Dry run - report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Traverse directories in sorted order
    #[arg(long)]
    pub sort: bool,

    /// Custom declaration template ({{hash}} and {{typeDefinition}} placeholders)
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Config file (defaults to ./cssmod.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
