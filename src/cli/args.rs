//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Upgrade AlloyUI 1.x sources (CSS, JS, JSP) in place
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Files or directories to migrate (comma separated, repeatable)
    #[arg(short, long = "file", value_delimiter = ',', value_hint = clap::ValueHint::AnyPath)]
    pub files: Vec<PathBuf>,

    /// File extensions to process (default: js,jsp,jspf,css)
    #[arg(short, long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Optional TOML config file
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: one per core)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Report what would change without writing files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Also log unchanged files
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}
