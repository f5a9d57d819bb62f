//! rover-demo — drive a rover through a waypoint mission.
//!
//! Usage:
//!
//! ```text
//! rover-demo [CONFIG.toml] [--compare] [ROW,COL ...]
//! ```
//!
//! Without a config file a built-in map and mission are used.  Waypoints
//! given on the command line replace the configured ones.  `--compare` runs
//! the mission once per strategy instead of only the configured one.
//! Set `RUST_LOG=debug` to see every traversal attempt.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rover_core::{Cell, RoverConfig, StrategyKind};
use rover_grid::Grid;
use rover_nav::{Leg, Mission, MissionObserver, MissionReport, Rover};

// ── Defaults ──────────────────────────────────────────────────────────────────

const DEFAULT_MAP: &str = "\
.#...
.#.#.
...#.
##.#.
.....
";

// ── Config file ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    rover:     RoverConfig,
    start:     Cell,
    waypoints: Vec<Cell>,
    map:       String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rover:     RoverConfig::default(),
            start:     Cell::new(0, 0),
            waypoints: vec![Cell::new(0, 2), Cell::new(4, 4), Cell::new(4, 0)],
            map:       DEFAULT_MAP.to_string(),
        }
    }
}

fn load_config(path: &Path) -> Result<DemoConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Observer printing each leg over the map ──────────────────────────────────

struct LegPrinter<'a> {
    grid: &'a Grid,
}

impl MissionObserver for LegPrinter<'_> {
    fn on_leg_end(&mut self, index: usize, leg: &Leg) {
        match &leg.outcome {
            Ok(route) => {
                println!(
                    "  leg {index}: {} -> {}  {} steps, {} left",
                    leg.from, leg.destination, route.steps(), leg.budget_after
                );
                for line in self.grid.render_route(route.cells()).lines() {
                    println!("      {line}");
                }
            }
            Err(err) => println!(
                "  leg {index}: {} -> {}  FAILED: {err}",
                leg.from, leg.destination
            ),
        }
    }

    fn on_mission_end(&mut self, report: &MissionReport) {
        println!(
            "  reached {}/{} waypoints, {} steps, finished at {} with {} units",
            report.reached(),
            report.legs.len(),
            report.total_steps(),
            report.final_state.position(),
            report.final_state.budget(),
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config_path = None;
    let mut compare = false;
    let mut cli_waypoints = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--compare" {
            compare = true;
        } else if arg.ends_with(".toml") {
            config_path = Some(arg);
        } else {
            let cell: Cell = arg.parse().with_context(|| format!("waypoint argument {arg:?}"))?;
            cli_waypoints.push(cell);
        }
    }

    let mut config = match &config_path {
        Some(path) => load_config(Path::new(path))?,
        None => DemoConfig::default(),
    };
    if !cli_waypoints.is_empty() {
        config.waypoints = cli_waypoints;
    }

    let grid: Grid = config.map.parse().context("parsing map")?;
    if grid.is_empty() {
        bail!("map has no cells");
    }
    info!(
        rows = grid.rows(),
        cols = grid.cols(),
        open = grid.open_count(),
        waypoints = config.waypoints.len(),
        "loaded map"
    );
    print!("{grid}");

    let strategies: Vec<StrategyKind> = if compare {
        StrategyKind::ALL.to_vec()
    } else {
        vec![config.rover.strategy]
    };

    let mission = Mission::new(config.waypoints.clone());
    for strategy in strategies {
        let rover_config = config.rover.clone().with_strategy(strategy);
        let mut rover = Rover::from_config(&rover_config, &grid, config.start)
            .with_context(|| format!("placing rover at {}", config.start))?;

        println!();
        println!("== {strategy} (budget {}) ==", rover_config.initial_budget);
        mission.run(&mut rover, &grid, &mut LegPrinter { grid: &grid });
    }

    Ok(())
}
