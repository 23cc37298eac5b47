use clap::{Parser, ValueEnum};
use greedy_gnomes::engine::{Grid, Path};
use greedy_gnomes::error::GridError;
use greedy_gnomes::logging;
use greedy_gnomes::solver::{greedy_gnomes_dyn_prog, greedy_gnomes_exhaustive};
use greedy_gnomes::utils::grid_from_str_array;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Exhaustive,
    DynProg,
    Both,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of rows of the random grid
    #[clap(short, long, default_value_t = 6)]
    rows: usize,

    /// Number of columns of the random grid
    #[clap(short, long, default_value_t = 6)]
    columns: usize,

    /// Seed for the random grid
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Inline grid with rows separated by ';', e.g. "1 3;2 X". Overrides the random grid
    #[clap(short, long)]
    grid: Option<String>,

    /// Which algorithm to run
    #[clap(short, long, value_enum, default_value_t = Algorithm::Both)]
    algorithm: Algorithm,
}

fn build_grid(args: &Args) -> Result<Grid, GridError> {
    let grid = match &args.grid {
        Some(text) => {
            let rows: Vec<&str> = text.split(';').map(str::trim).collect();
            grid_from_str_array(&rows)?
        }
        None => Grid::new_random_with_seed(args.rows, args.columns, args.seed)?,
    };
    grid.check_solvable()?;
    Ok(grid)
}

fn run_solver<'a>(name: &str, grid: &'a Grid, solver: fn(&'a Grid) -> Path<'a>) -> Path<'a> {
    let start = Instant::now();
    let path = solver(grid);
    let elapsed = start.elapsed();
    info!(solver = name, gold = path.total_gold(), ?elapsed, "solver finished");

    println!("{}:", name);
    println!("{}\n", grid.to_string_with_path(Some(&path)));
    println!("  Route ({} moves): {}", path.steps().len(), path);
    println!("  Stops at: ({}, {})", path.final_row(), path.final_column());
    println!("  Total gold: {}", path.total_gold());
    println!("  Elapsed: {:.3?}\n", elapsed);
    path
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    let grid = match build_grid(&args) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Invalid grid: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("Grid ({}x{}):\n{}\n", grid.rows(), grid.columns(), grid);

    let run_exhaustive = matches!(args.algorithm, Algorithm::Exhaustive | Algorithm::Both);
    let run_dyn_prog = matches!(args.algorithm, Algorithm::DynProg | Algorithm::Both);

    let mut exhaustive_gold = None;
    if run_exhaustive {
        if grid.max_steps() >= 64 {
            eprintln!(
                "Grid is too large for the exhaustive search (rows + columns - 2 = {}, must be below 64).",
                grid.max_steps()
            );
            return ExitCode::FAILURE;
        }
        if grid.max_steps() > 24 {
            warn!(
                max_steps = grid.max_steps(),
                "exhaustive search will enumerate over 2^{} candidates",
                grid.max_steps()
            );
        }
        exhaustive_gold = Some(run_solver("Exhaustive", &grid, greedy_gnomes_exhaustive).total_gold());
    }

    if run_dyn_prog {
        let dyn_prog_gold = run_solver("Dynamic programming", &grid, greedy_gnomes_dyn_prog).total_gold();
        if let Some(exhaustive_gold) = exhaustive_gold {
            if exhaustive_gold != dyn_prog_gold {
                eprintln!(
                    "Solvers disagree: exhaustive found {}, dynamic programming found {}",
                    exhaustive_gold, dyn_prog_gold
                );
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
