use clap::Parser;
use std::path::PathBuf;

/// Headless driver for the calculator engine.
///
/// Keys are given as whitespace separated names: digits and points
/// (`12.5`), operators (`+ - x /`), `=`, functions (`sqrt sqr 1/x neg %`),
/// `ac`, `del`, `ch` and `recall:N`.
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print each view as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Keys to press; reads key scripts from stdin, one per line, when empty
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub keys: Vec<String>,
}
