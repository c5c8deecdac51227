//! circles CLI - friend-circle invitation lists from a JSON roster.
//!
//! Features:
//! - Breadth-first circle expansion from best-friend roots
//! - Gender filtering (all / male / female)
//! - Optional circle ceiling
//! - circles.toml configuration with CLI override
//! - Plain or JSON output

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use circles_core::{
    init_compact_logging, init_structured_logging, load_config, load_roster, print_json,
    print_plain, CirclesConfig, FilterKind, Guestlist,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Friend-circle invitation lists")]
struct Cli {
    /// Path to the friend roster (JSON array of person records)
    roster: PathBuf,

    /// Filter applied to the invitation list: all, male or female
    #[arg(long)]
    filter: Option<String>,

    /// Maximum number of circles to expand
    #[arg(long)]
    max_circles: Option<usize>,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Directory containing circles.toml (defaults to the roster's directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit structured JSON logs instead of compact output
    #[arg(long)]
    log_json: bool,
}

/// Resolve the directory circles.toml is looked up in.
fn config_dir(cli: &Cli) -> PathBuf {
    cli.config
        .clone()
        .or_else(|| cli.roster.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// CLI flags win over circles.toml values.
fn effective_filter(cli: &Cli, config: &CirclesConfig) -> Result<FilterKind> {
    match &cli.filter {
        Some(raw) => Ok(FilterKind::from_str(raw)?),
        None => Ok(config.filter.unwrap_or_default()),
    }
}

fn json_output(cli: &Cli, config: &CirclesConfig) -> bool {
    cli.json
        || config
            .output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        init_structured_logging();
    } else {
        init_compact_logging();
    }

    let config = load_config(&config_dir(&cli))?.unwrap_or_default();
    let filter = effective_filter(&cli, &config)?;
    let max_circles = cli.max_circles.or(config.max_circles);

    let people = load_roster(&cli.roster)
        .with_context(|| format!("Failed to load roster {}", cli.roster.display()))?;

    let mut guestlist = Guestlist::new(people).filter(filter);
    if let Some(max) = max_circles {
        guestlist = guestlist.max_circles(max);
    }
    let invited = guestlist.invite_all();

    if json_output(&cli, &config) {
        print_json(&invited);
    } else {
        print_plain(&invited);
    }

    Ok(())
}
