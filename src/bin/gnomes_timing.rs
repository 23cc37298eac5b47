use clap::Parser;
use greedy_gnomes::engine::Grid;
use greedy_gnomes::logging;
use greedy_gnomes::solver::{greedy_gnomes_dyn_prog, greedy_gnomes_exhaustive};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Largest square grid size to time
    #[clap(short, long, default_value_t = 12)]
    max_size: usize,

    /// Largest rows + columns - 2 the exhaustive search is run on
    #[clap(short, long, default_value_t = 20)]
    exhaustive_limit: usize,

    /// Seed of the first grid; grid n uses seed + n
    #[clap(short, long, default_value_t = 0)]
    seed: u64,
}

fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    // The exhaustive search cannot index more than 63 moves.
    let exhaustive_limit = args.exhaustive_limit.min(63);

    println!("Timing both solvers on square grids from 1x1 to {0}x{0}...\n", args.max_size);
    println!("{:>5} {:>8} {:>14} {:>8} {:>14}", "n", "dp gold", "dp time", "ex gold", "ex time");

    let mut disagreements = 0;
    for n in 1..=args.max_size {
        let seed = args.seed.wrapping_add(n as u64);
        let grid = match Grid::new_random_with_seed(n, n, seed) {
            Ok(grid) => grid,
            Err(e) => {
                eprintln!("Failed to build {}x{} grid: {}", n, n, e);
                return ExitCode::FAILURE;
            }
        };
        debug!(n, seed, "timing grid");

        let (dyn_prog_gold, dyn_prog_time) = time(|| greedy_gnomes_dyn_prog(&grid).total_gold());

        if grid.max_steps() <= exhaustive_limit {
            let (exhaustive_gold, exhaustive_time) =
                time(|| greedy_gnomes_exhaustive(&grid).total_gold());
            println!(
                "{:>5} {:>8} {:>14.3?} {:>8} {:>14.3?}",
                n, dyn_prog_gold, dyn_prog_time, exhaustive_gold, exhaustive_time
            );
            if exhaustive_gold != dyn_prog_gold {
                warn!(n, seed, exhaustive_gold, dyn_prog_gold, "solvers disagree");
                eprintln!("Solvers disagree on the {}x{} grid (seed {}):\n{}", n, n, seed, grid);
                disagreements += 1;
            }
        } else {
            println!(
                "{:>5} {:>8} {:>14.3?} {:>8} {:>14}",
                n, dyn_prog_gold, dyn_prog_time, "-", "skipped"
            );
        }
    }

    println!("\n--- Timing Complete ---");
    if disagreements > 0 {
        println!("{} grid(s) where the solvers disagreed.", disagreements);
        return ExitCode::FAILURE;
    }
    println!("Both solvers agreed on every grid they were both run on.");
    ExitCode::SUCCESS
}
