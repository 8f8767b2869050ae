use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::{debug, info, warn};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use life_engine::{Coord, PatternLibrary, RedrawCause, SimulationConfig, SimulationController};

/// Headless driver: seed a board, run it for a number of generations, report.
#[derive(Parser, Debug)]
#[command(version, about = "Conway's Game of Life on a bounded square board")]
struct Cli {
    /// Side length of the board
    #[arg(short, long, default_value_t = 100, value_name = "CELLS")]
    dimension: usize,

    /// Milliseconds between generations
    #[arg(short, long = "interval-ms", default_value_t = 25, value_name = "MS")]
    interval_ms: u64,

    /// Seed pattern by name (repeatable, applied in order)
    #[arg(short, long = "pattern", value_name = "NAME")]
    patterns: Vec<String>,

    /// Flip a single cell, given as X,Y (repeatable, applied after patterns)
    #[arg(short, long = "toggle", value_name = "X,Y", value_parser = parse_coord)]
    toggles: Vec<Coord>,

    /// Generations to run before stopping
    #[arg(short, long, default_value_t = 100)]
    generations: u64,

    /// Print the live cells when done, one "X Y" pair per line
    #[arg(long)]
    print: bool,

    /// List the available patterns and exit
    #[arg(long)]
    list_patterns: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad X in '{s}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad Y in '{s}': {e}"))?;
    Ok(Coord::new(x, y))
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    // RUST_LOG still wins when set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_micros()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if cli.list_patterns {
        for pattern in PatternLibrary::all() {
            println!(
                "{:<20} {:>2}x{:<2} {}",
                pattern.name.as_str(),
                pattern.width(),
                pattern.height(),
                pattern.description
            );
        }
        return Ok(());
    }

    let config = SimulationConfig::default()
        .with_dimension(cli.dimension)
        .with_tick_interval(Duration::from_millis(cli.interval_ms));
    let (redraw_tx, mut redraw_rx) = mpsc::unbounded_channel();
    let sim = SimulationController::new(config, Handle::current(), redraw_tx)
        .context("invalid simulation settings")?;

    for name in &cli.patterns {
        sim.seed(name)
            .with_context(|| format!("failed to seed pattern '{name}'"))?;
    }
    for &coord in &cli.toggles {
        sim.toggle(coord)
            .with_context(|| format!("failed to toggle cell {coord}"))?;
    }
    info!(
        "board {0}x{0} ready with {1} live cells",
        config.dimension,
        sim.population()
    );

    if cli.generations > 0 {
        let interrupt = tokio::signal::ctrl_c();
        tokio::pin!(interrupt);

        sim.start();
        let mut ticks = 0;
        while ticks < cli.generations {
            tokio::select! {
                frame = redraw_rx.recv() => match frame {
                    Some(frame) if frame.cause == RedrawCause::Tick => {
                        ticks += 1;
                        debug!("generation {}: {} cells changed", frame.generation, frame.changed.len());
                    }
                    Some(_) => {}
                    None => break,
                },
                _ = &mut interrupt => {
                    warn!("interrupted after {ticks} generations");
                    break;
                }
            }
        }
        sim.stop();
    }

    println!(
        "generation {}: {} live cells",
        sim.generation(),
        sim.population()
    );
    if cli.print {
        for coord in sim.live_cells() {
            println!("{} {}", coord.x, coord.y);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinate_pairs() {
        assert_eq!(parse_coord("3,4"), Ok(Coord::new(3, 4)));
        assert_eq!(parse_coord(" 10 , 0 "), Ok(Coord::new(10, 0)));
    }

    #[test]
    fn rejects_malformed_coordinates() {
        assert!(parse_coord("3").is_err());
        assert!(parse_coord("-1,2").is_err());
        assert!(parse_coord("a,b").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_collects_repeated_flags() {
        let cli = Cli::parse_from([
            "life_engine",
            "-p",
            "Glider",
            "--pattern",
            "Spinner",
            "-t",
            "1,2",
            "-g",
            "5",
        ]);
        assert_eq!(cli.patterns, ["Glider", "Spinner"]);
        assert_eq!(cli.toggles, [Coord::new(1, 2)]);
        assert_eq!(cli.generations, 5);
        assert_eq!(cli.dimension, 100);
        assert_eq!(cli.interval_ms, 25);
    }
}
