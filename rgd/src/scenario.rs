//! Demo scenarios and the strategies they run under.

use core::fmt;

use anyhow::{Context, Result};
use clap::ValueEnum;
use rg_intercept::{RangeChecked, RangeProxy};
use tracing::debug;

use crate::shapes::{Geometry, Shapes};

/// Which scenarios to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Every scenario
    All,
    /// Sector area with range-checked radius and angle
    Sector,
    /// A method whose return value violates its range
    Probability,
}

/// Which dispatch strategy to run the scenarios through
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Interface proxy only
    Proxy,
    /// Execution boundary only
    Boundary,
    /// Both, and compare the outcomes
    Both,
}

/// A single dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatcher {
    /// [`RangeProxy`] over the target
    Proxy,
    /// [`rg_intercept::Boundary`] around the target
    Boundary,
}

impl fmt::Display for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Proxy => "proxy",
            Self::Boundary => "boundary",
        })
    }
}

impl Strategy {
    /// Dispatchers this strategy selects
    #[must_use]
    pub fn dispatchers(self) -> &'static [Dispatcher] {
        match self {
            Self::Proxy => &[Dispatcher::Proxy],
            Self::Boundary => &[Dispatcher::Boundary],
            Self::Both => &[Dispatcher::Proxy, Dispatcher::Boundary],
        }
    }
}

/// Result of one demo call
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Dispatcher the call went through
    pub dispatcher: Dispatcher,
    /// The call, rendered for display
    pub call: String,
    /// What the caller received
    pub result: rg_error::Result<f64>,
}

/// Sector calls made when none are given on the command line
pub const DEFAULT_SECTOR_CALLS: [(f64, f64); 3] = [(1.0, 1.0), (0.0, 0.0), (0.0, -0.5)];

fn geometry(dispatcher: Dispatcher) -> Result<Box<dyn Geometry>> {
    let geometry: Box<dyn Geometry> = match dispatcher {
        Dispatcher::Proxy => {
            let registry = Shapes::constraint_registry().context("invalid range declarations")?;
            Box::new(RangeProxy::new(Shapes::default(), registry))
        },
        Dispatcher::Boundary => Box::new(
            Shapes::default().into_boundary().context("failed to construct boundary")?,
        ),
    };
    debug!(%dispatcher, "Created dispatcher");
    Ok(geometry)
}

/// Run `scenario` through every dispatcher of `strategy`
///
/// # Errors
///
/// Fails only if a dispatcher cannot be created; call failures are reported
/// as outcomes.
pub fn run(
    scenario: Scenario,
    strategy: Strategy,
    sector_calls: &[(f64, f64)],
) -> Result<Vec<Outcome>> {
    let mut outcomes = Vec::new();
    for &dispatcher in strategy.dispatchers() {
        let target = geometry(dispatcher)?;

        if matches!(scenario, Scenario::All | Scenario::Sector) {
            for &(radius, angle) in sector_calls {
                outcomes.push(Outcome {
                    dispatcher,
                    call: format!("sector_area({radius}, {angle})"),
                    result: target.sector_area(radius, angle),
                });
            }
        }
        if matches!(scenario, Scenario::All | Scenario::Probability) {
            outcomes.push(Outcome {
                dispatcher,
                call: "probability()".to_string(),
                result: target.probability(),
            });
        }
    }
    Ok(outcomes)
}

/// Calls whose outcome differs between dispatchers
#[must_use]
pub fn disagreements(outcomes: &[Outcome]) -> Vec<&str> {
    let proxy = outcomes.iter().filter(|o| o.dispatcher == Dispatcher::Proxy);
    let boundary = outcomes.iter().filter(|o| o.dispatcher == Dispatcher::Boundary);
    proxy
        .zip(boundary)
        .filter(|(a, b)| a.call != b.call || a.result != b.result)
        .map(|(a, _)| a.call.as_str())
        .collect()
}
