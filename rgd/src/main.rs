//! # Range Guard Demo (rgd)
//!
//! Runs small scenarios against a target whose methods carry declared range
//! constraints, through the interface proxy, the execution boundary, or both.
//!
//! ## Usage
//!
//! ```bash
//! rgd [--scenario all|sector|probability] [--strategy proxy|boundary|both]
//!     [--radius <r> --angle <a>]
//! ```
//!
//! With `--radius` and `--angle` the sector scenario makes that single call
//! instead of the built-in ones. Set `RUST_LOG` to filter output and
//! `RUST_LOG_FORMAT` (`pretty`, `compact` or `json`) to choose its shape.

#![warn(missing_docs)]

mod scenario;
mod shapes;

use std::env;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::scenario::{disagreements, Outcome, Scenario, Strategy, DEFAULT_SECTOR_CALLS};

/// Range Guard demo CLI arguments
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scenario to run
    #[arg(long, value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,

    /// Dispatch strategy to run it through
    #[arg(short, long, value_enum, default_value_t = Strategy::Both, env = "RG_STRATEGY")]
    strategy: Strategy,

    /// Radius for a single sector-area call
    #[arg(long, requires = "angle", allow_negative_numbers = true)]
    radius: Option<f64>,

    /// Angle for a single sector-area call, in radians
    #[arg(long, requires = "radius", allow_negative_numbers = true)]
    angle: Option<f64>,
}

fn main() -> Result<()> {
    initialize_tracing();

    let args = Args::parse();

    let sector_calls = match (args.radius, args.angle) {
        (Some(radius), Some(angle)) => vec![(radius, angle)],
        _ => DEFAULT_SECTOR_CALLS.to_vec(),
    };

    info!(scenario = ?args.scenario, strategy = ?args.strategy, "Running scenarios");
    let outcomes = scenario::run(args.scenario, args.strategy, &sector_calls)?;
    for outcome in &outcomes {
        report(outcome);
    }

    if args.strategy == Strategy::Both {
        let differing = disagreements(&outcomes);
        if !differing.is_empty() {
            error!(calls = ?differing, "Strategies disagree");
            bail!("proxy and boundary disagree on {} call(s)", differing.len());
        }
        info!("Proxy and boundary agree on all {} call(s)", outcomes.len() / 2);
    }

    Ok(())
}

/// Initialize the tracing system for logging
///
/// Records emitted through `log` by the interception layer are forwarded to
/// the same subscriber.
fn initialize_tracing() {
    let format = env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    match format.as_str() {
        "json" => subscriber.json().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.pretty().init(),
    }
}

fn report(outcome: &Outcome) {
    let dispatcher = outcome.dispatcher;
    match &outcome.result {
        Ok(value) => info!(%dispatcher, call = %outcome.call, "returned {value}"),
        Err(e) if e.is_range_violation() => {
            warn!(%dispatcher, call = %outcome.call, "rejected: {e}");
        },
        Err(e) => error!(%dispatcher, call = %outcome.call, "failed: {e}"),
    }
}
