use crate::input::read_lines;
use crate::strategy::{total_score, Rule};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Scores a rock/paper/scissors strategy guide", version)]
pub struct Args {
    /// Strategy guide to score; reads stdin when omitted
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Log every scored round
    #[arg(short, long)]
    pub verbose: bool,
}

/// Logs go to stderr so stdout only carries the result.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let directive = if verbose { "rps=debug" } else { "rps=warn" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install logger: {}", err))?;

    Ok(())
}

pub fn solve(args: &Args, rule: Rule) -> anyhow::Result<i64> {
    let lines = read_lines(args.input.as_deref())?;
    info!(lines = lines.len(), ?rule, "scoring strategy guide");

    Ok(total_score(&lines, rule)?)
}

/// Entry point shared by both puzzle binaries.
pub fn run(rule: Rule) -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let total = solve(&args, rule)?;
    println!("{}: {}", rule.label(), total);

    Ok(())
}
