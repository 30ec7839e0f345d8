use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use keycalc::CalcResult;
use keycalc::config::Config;
use tracing_subscriber::EnvFilter;

/// Evaluate keypad expressions left to right, without operator precedence.
#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about)]
struct Cli {
    /// Path to a config file (defaults to <config dir>/keycalc/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print `expression = result` instead of only the result
    #[arg(long)]
    echo: bool,

    /// Expressions to evaluate; reads stdin line by line when omitted
    expressions: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let echo = cli.echo || config.echo_expression;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.expressions.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            print_result(&mut out, &keycalc::calculate_result(&line), echo)?;
        }
    } else {
        for expression in &cli.expressions {
            print_result(&mut out, &keycalc::calculate_result(expression), echo)?;
        }
    }

    Ok(())
}

fn print_result(out: &mut impl Write, result: &CalcResult, echo: bool) -> Result<()> {
    if echo {
        writeln!(out, "{} = {}", result.expression(), result.display())?;
    } else {
        writeln!(out, "{}", result.display())?;
    }
    Ok(())
}
