//! # Greedy Gnomes Library
//!
//! This library solves the greedy gnomes problem: starting from the top-left
//! cell of a grid and moving only right or down, never onto a rock, collect as
//! much gold as possible. The route may stop at any reachable cell.
//!
//! It is used by two binaries:
//! - `gnomes_solver`: Builds a random or inline grid, solves it, and prints the
//!   chosen route and its gold.
//! - `gnomes_timing`: Times both algorithms on growing random grids and checks
//!   that they agree.
//!
//! ## Modules
//! - `engine`: The grid (`Grid`, `Cell`) and path (`Path`, `StepDirection`) types.
//! - `solver`: `greedy_gnomes_exhaustive` and `greedy_gnomes_dyn_prog`.
//! - `utils`: Parsing grids from string slices.
//! - `error`: `GridError`, returned by the grid constructors.
//! - `logging`: Tracing subscriber set-up for the binaries.

pub mod engine;
pub mod error;
pub mod logging;
pub mod solver;
pub mod utils;

pub use engine::{Cell, Grid, Path, StepDirection};
pub use error::GridError;
pub use solver::{greedy_gnomes_dyn_prog, greedy_gnomes_exhaustive};
