#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use clumsy_crucible::{Grid, MoveGraph, RunBounds, solve};

/// Clumsy Crucible pathfinding solver.
///
/// Reads a digit-map grid file and prints the minimum total heat loss from
/// the top-left cell to the bottom-right cell, moving in straight runs of
/// bounded length that alternate between horizontal and vertical.
#[derive(Parser, Debug)]
struct Cli {
    /// The grid input file (one line per row, one digit per cell).
    input: PathBuf,

    /// Minimum run length before the crucible may turn.
    #[arg(long, value_name = "NUMBER", default_value_t = 1, conflicts_with = "ultra")]
    min_run: u32,

    /// Maximum run length before the crucible must turn.
    #[arg(long, value_name = "NUMBER", default_value_t = 3, conflicts_with = "ultra")]
    max_run: u32,

    /// Use the ultra crucible's run bounds (minimum 4, maximum 10).
    #[arg(long, action = ArgAction::SetTrue)]
    ultra: bool,

    /// Print the route's run endpoints after the cost.
    #[arg(long, action = ArgAction::SetTrue)]
    show_route: bool,

    /// Measure and print the durations of parsing, graph building, and
    /// solving.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,
}

/// Evaluate an expression once, returning its result and elapsed time.
fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

fn format_duration(duration: Duration) -> String {
    const ONE_SECOND: Duration = Duration::from_secs(1);
    const ONE_MILLISECOND: Duration = Duration::from_millis(1);
    const ONE_MICROSECOND: Duration = Duration::from_micros(1);
    const DECIMAL_PLACES: usize = 3;

    if duration >= ONE_SECOND {
        format!("{:.*} seconds", DECIMAL_PLACES, duration.as_secs_f32())
    } else {
        let nanos = duration.subsec_nanos();
        if duration >= ONE_MILLISECOND {
            format!("{:.*} milliseconds", DECIMAL_PLACES, f64::from(nanos) / 1e6)
        } else if duration >= ONE_MICROSECOND {
            format!("{:.*} microseconds", DECIMAL_PLACES, f64::from(nanos) / 1e3)
        } else {
            format!("{nanos} nanoseconds")
        }
    }
}

fn report_step(timed: bool, step: &str, duration: Duration) {
    if timed {
        println!("{step} in {}", format_duration(duration));
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let bounds = if args.ultra {
        RunBounds::ULTRA
    } else {
        RunBounds::new(args.min_run, args.max_run).context("invalid run bounds")?
    };

    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("could not read input file at: {}", args.input.display()))?;

    let (grid, parse_duration) = measure(|| input.parse::<Grid>());
    let grid = grid.context("failed to parse grid")?;
    report_step(args.timed, "Input parsed", parse_duration);

    let (graph, build_duration) = measure(|| MoveGraph::build(&grid, bounds));
    report_step(args.timed, "Move graph built", build_duration);

    let (route, solve_duration) = measure(|| solve(&graph, grid.top_left(), grid.bottom_right()));
    let route = route.context("failed to find a route")?;
    report_step(args.timed, "Solved", solve_duration);

    println!("{}", route.cost);
    if args.show_route {
        let endpoints: Vec<String> = route.cells.iter().map(ToString::to_string).collect();
        println!("{}", endpoints.join(" -> "));
    }

    Ok(())
}
