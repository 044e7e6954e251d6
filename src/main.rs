mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use zcalc::calculator::Calculator;
use zcalc::config::Config;
use zcalc::items::CalculatorView;
use zcalc::keys::parse_keys;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let mut calculator = config.build_calculator();

    if !cli.keys.is_empty() {
        let script = cli.keys.join(" ");
        run_script(&mut calculator, &script)?;
        return print_view(&calculator, cli.json);
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match run_script(&mut calculator, &line) {
            Ok(()) => print_view(&calculator, cli.json)?,
            Err(e) => eprintln!("zcalc: {:#}", e),
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parse a key script and press its keys in order.
///
/// Nothing is pressed if any key in the script is unknown.
fn run_script(calculator: &mut Calculator, script: &str) -> Result<()> {
    let actions = parse_keys(script).with_context(|| format!("Invalid key script: {}", script))?;
    debug!(count = actions.len(), "running key script");
    calculator
        .apply_all(actions)
        .context("Failed to apply keys")?;
    Ok(())
}

fn print_view(calculator: &Calculator, json: bool) -> Result<()> {
    let view = CalculatorView::from_calculator(calculator);
    let mut out = io::stdout().lock();

    if json {
        let line = serde_json::to_string(&view).context("Failed to serialize view")?;
        writeln!(out, "{}", line)?;
    } else {
        if !view.equation.is_empty() {
            writeln!(out, "{}", view.equation)?;
        }
        writeln!(out, "{}", view.display)?;
    }

    out.flush()?;
    Ok(())
}
