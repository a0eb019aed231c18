use std::path::PathBuf;

use clap::Parser;

/// Terminal signup form with validation and a list of accepted entries.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "signup-form", version, about)]
pub struct Cli {
    /// Config file to load instead of <data-dir>/config.toml
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Directory for the config file and logs (default ~/.signup-form)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Tracing filter directive, e.g. "debug" or "signup_form=trace"
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable copying entries to the system clipboard
    #[arg(long)]
    pub no_clipboard: bool,
}
