use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueHint};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirtree",
    version,
    about = "Print a directory as an indented tree",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Directory to render
    #[arg(value_name = "PATH", value_hint = ValueHint::DirPath, allow_hyphen_values = true)]
    pub path: PathBuf,

    /// Pass `-f` to include files with their sizes; any other value is ignored
    #[arg(value_name = "FLAG", allow_hyphen_values = true)]
    pub flag: Option<String>,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if the tree cannot be rendered or written.
pub fn run() -> Result<()> {
    let args = Args::parse();
    run_impl::run_with_args(&args)
}
