//! Core types for the greedy gnomes problem.
//!
//! This module defines the problem's fundamental components:
//! - `Cell`: A single grid cell, either a rock or a pile of gold.
//! - `Grid`: The immutable rectangular field the gnomes walk over.
//! - `StepDirection`: The two moves a gnome may make (right or down).
//! - `Path`: An incrementally built route from the top-left cell, tracking
//!   its position and the gold collected so far.
use crate::error::GridError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// The state of one cell of a `Grid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// An impassable cell. No path may visit it.
    Rock,
    /// A passable cell holding the given amount of gold (possibly zero).
    Gold(u32),
}

// Used by `Grid::new_random_with_seed`. One cell in five is a rock.
fn generate_random_cell(rng: &mut impl Rng) -> Cell {
    if rng.gen_ratio(1, 5) {
        Cell::Rock
    } else {
        Cell::Gold(rng.gen_range(0..=9))
    }
}

impl Cell {
    /// Returns `true` if the cell is a rock.
    pub fn is_rock(&self) -> bool {
        matches!(self, Cell::Rock)
    }

    /// Returns the gold held by the cell. Rocks hold none.
    ///
    /// # Examples
    ///
    /// ```
    /// use greedy_gnomes::engine::Cell;
    /// assert_eq!(Cell::Gold(7).gold(), 7);
    /// assert_eq!(Cell::Rock.gold(), 0);
    /// ```
    pub fn gold(&self) -> u32 {
        match self {
            Cell::Rock => 0,
            Cell::Gold(amount) => *amount,
        }
    }
}

impl fmt::Display for Cell {
    /// Formats the cell the way `utils::grid_from_str_array` reads it:
    /// `X` for a rock, the amount for gold.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Rock => f.pad("X"),
            Cell::Gold(amount) => f.pad(&amount.to_string()),
        }
    }
}

/// An immutable rectangular grid of cells.
///
/// Cells are stored row-major. A `Grid` always has at least one row and one
/// column; the constructors reject anything else.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid from a flat, row-major vector of cells.
    ///
    /// # Errors
    /// * `GridError::EmptyGrid` if `rows` or `columns` is zero.
    /// * `GridError::CellCountMismatch` if `cells.len() != rows * columns`.
    ///
    /// # Examples
    /// ```
    /// use greedy_gnomes::engine::{Cell, Grid};
    /// let grid = Grid::from_cells(1, 2, vec![Cell::Gold(1), Cell::Rock]).unwrap();
    /// assert_eq!(grid.get(0, 1), Cell::Rock);
    /// assert!(Grid::from_cells(0, 2, Vec::new()).is_err());
    /// ```
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::EmptyGrid);
        }
        if cells.len() != rows * columns {
            return Err(GridError::CellCountMismatch {
                rows,
                columns,
                found: cells.len(),
            });
        }
        Ok(Grid {
            rows,
            columns,
            cells,
        })
    }

    /// Creates a grid from a vector of rows. Every row must be as wide as the first.
    ///
    /// # Errors
    /// * `GridError::EmptyGrid` if there are no rows or the first row is empty.
    /// * `GridError::RaggedRow` if a later row has a different width.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let columns = rows.first().map_or(0, Vec::len);
        if columns == 0 {
            return Err(GridError::EmptyGrid);
        }

        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * columns);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != columns {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: columns,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Grid::from_cells(row_count, columns, cells)
    }

    /// Creates a reproducible random grid using the provided seed.
    ///
    /// Roughly one cell in five is a rock, and the rest hold between 0 and 9
    /// gold. The top-left cell is never a rock, so the result is always
    /// solvable. The same seed and dimensions always produce the same grid.
    ///
    /// # Errors
    /// `GridError::EmptyGrid` if `rows` or `columns` is zero.
    pub fn new_random_with_seed(rows: usize, columns: usize, seed: u64) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut cells: Vec<Cell> = (0..rows * columns)
            .map(|_| generate_random_cell(&mut rng))
            .collect();
        if cells[0].is_rock() {
            cells[0] = Cell::Gold(rng.gen_range(0..=9));
        }
        Grid::from_cells(rows, columns, cells)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns `true` if `(row, column)` lies inside the grid.
    pub fn in_bounds(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Returns the cell at `(row, column)`.
    ///
    /// # Panics
    /// Panics if `(row, column)` is out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        assert!(
            self.in_bounds(row, column),
            "cell ({}, {}) is outside the {}x{} grid",
            row,
            column,
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + column]
    }

    /// Returns `true` if the in-bounds cell at `(row, column)` is a rock.
    pub fn is_rock(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_rock()
    }

    /// Returns the gold at the in-bounds cell `(row, column)`; zero for rocks.
    pub fn gold_at(&self, row: usize, column: usize) -> u32 {
        self.get(row, column).gold()
    }

    /// The largest number of moves any path over this grid can make.
    pub fn max_steps(&self) -> usize {
        self.rows + self.columns - 2
    }

    /// Checks that a `Path` can be started on this grid.
    ///
    /// # Errors
    /// `GridError::RockAtOrigin` if the top-left cell is a rock.
    pub fn check_solvable(&self) -> Result<(), GridError> {
        if self.is_rock(0, 0) {
            return Err(GridError::RockAtOrigin);
        }
        Ok(())
    }

    /// Renders the grid as text, optionally marking the cells visited by `path`.
    ///
    /// Without a path the output is the whitespace-separated format read by
    /// `utils::grid_from_str_array`, with cells right-aligned into columns.
    /// With a path, visited cells are wrapped in brackets.
    ///
    /// # Examples
    /// ```
    /// use greedy_gnomes::engine::{Path, StepDirection};
    /// use greedy_gnomes::utils::grid_from_str_array;
    ///
    /// let grid = grid_from_str_array(&["1 X", "2 5"]).unwrap();
    /// assert_eq!(grid.to_string_with_path(None), "1 X\n2 5");
    ///
    /// let mut path = Path::new(&grid);
    /// path.add_step(StepDirection::Down);
    /// assert_eq!(grid.to_string_with_path(Some(&path)), "[1] X \n[2] 5 ");
    /// ```
    pub fn to_string_with_path(&self, path: Option<&Path<'_>>) -> String {
        let width = self
            .cells
            .iter()
            .map(|cell| cell.to_string().len())
            .max()
            .unwrap_or(1);

        let mut visited = vec![false; self.cells.len()];
        if let Some(path) = path {
            for (r, c) in path.cells() {
                if self.in_bounds(r, c) {
                    visited[r * self.columns + c] = true;
                }
            }
        }

        let mut output = String::new();
        for r in 0..self.rows {
            for c in 0..self.columns {
                let cell = self.get(r, c);
                match path {
                    None => {
                        if c > 0 {
                            output.push(' ');
                        }
                        output.push_str(&format!("{:>width$}", cell, width = width));
                    }
                    Some(_) if visited[r * self.columns + c] => {
                        output.push_str(&format!("[{:>width$}]", cell, width = width));
                    }
                    Some(_) => {
                        output.push_str(&format!(" {:>width$} ", cell, width = width));
                    }
                }
            }
            if r < self.rows - 1 {
                output.push('\n');
            }
        }
        output
    }
}

impl fmt::Display for Grid {
    /// Formats the grid using `to_string_with_path(None)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_path(None))
    }
}

/// A single move of a `Path`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepDirection {
    /// Increments the column.
    Right,
    /// Increments the row.
    Down,
}

impl StepDirection {
    /// Returns the position reached by taking this step from `(row, column)`.
    pub fn advance(self, row: usize, column: usize) -> (usize, usize) {
        match self {
            StepDirection::Right => (row, column + 1),
            StepDirection::Down => (row + 1, column),
        }
    }
}

impl fmt::Display for StepDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepDirection::Right => write!(f, "right"),
            StepDirection::Down => write!(f, "down"),
        }
    }
}

/// A route over a `Grid` that starts at `(0, 0)` and moves only right or down.
///
/// A path borrows its grid, never leaves it, and never stands on a rock. The
/// gold of every visited cell, the start cell included, is accumulated in
/// `total_gold`. Cloning a path gives an independent copy over the same grid.
///
/// # Examples
/// ```
/// use greedy_gnomes::engine::{Path, StepDirection};
/// use greedy_gnomes::utils::grid_from_str_array;
///
/// let grid = grid_from_str_array(&["1 3", "2 5"]).unwrap();
/// let mut path = Path::new(&grid);
/// assert_eq!(path.total_gold(), 1);
///
/// assert!(path.is_step_valid(StepDirection::Right));
/// path.add_step(StepDirection::Right);
/// path.add_step(StepDirection::Down);
/// assert_eq!(path.total_gold(), 9);
/// assert!(!path.is_step_valid(StepDirection::Down));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<'a> {
    grid: &'a Grid,
    row: usize,
    column: usize,
    steps: Vec<StepDirection>,
    total_gold: u64,
}

impl<'a> Path<'a> {
    /// Starts a new path at the top-left cell of `grid`.
    ///
    /// # Panics
    /// Panics if the grid is empty or if `(0, 0)` is a rock.
    pub fn new(grid: &'a Grid) -> Self {
        assert!(grid.rows() > 0, "grid must have at least one row");
        assert!(grid.columns() > 0, "grid must have at least one column");
        assert!(!grid.is_rock(0, 0), "a path cannot start on a rock");

        Path {
            grid,
            row: 0,
            column: 0,
            steps: Vec::new(),
            total_gold: u64::from(grid.gold_at(0, 0)),
        }
    }

    /// The grid this path walks over.
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// The moves taken so far, in order.
    pub fn steps(&self) -> &[StepDirection] {
        &self.steps
    }

    /// Row of the current position.
    pub fn final_row(&self) -> usize {
        self.row
    }

    /// Column of the current position.
    pub fn final_column(&self) -> usize {
        self.column
    }

    /// Gold collected over every visited cell.
    pub fn total_gold(&self) -> u64 {
        self.total_gold
    }

    /// Returns `true` if `direction` stays inside the grid and does not land on a rock.
    pub fn is_step_valid(&self, direction: StepDirection) -> bool {
        let (row, column) = direction.advance(self.row, self.column);
        self.grid.in_bounds(row, column) && !self.grid.is_rock(row, column)
    }

    /// Moves one cell in `direction` and collects the gold there.
    ///
    /// # Panics
    /// Panics if `is_step_valid(direction)` is `false`.
    pub fn add_step(&mut self, direction: StepDirection) {
        assert!(
            self.is_step_valid(direction),
            "invalid step {} from ({}, {})",
            direction,
            self.row,
            self.column
        );

        let (row, column) = direction.advance(self.row, self.column);
        self.row = row;
        self.column = column;
        self.steps.push(direction);
        self.total_gold += u64::from(self.grid.gold_at(row, column));
    }

    /// Every visited `(row, column)`, starting with `(0, 0)`.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::with_capacity(self.steps.len() + 1);
        let (mut row, mut column) = (0, 0);
        cells.push((row, column));
        for step in &self.steps {
            (row, column) = step.advance(row, column);
            cells.push((row, column));
        }
        cells
    }
}

impl fmt::Display for Path<'_> {
    /// Formats the route as `start` followed by each move, e.g. `start, right, down`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "start")?;
        for step in &self.steps {
            write!(f, ", {}", step)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grid_from_str_array;

    #[test]
    fn test_grid_from_cells() {
        let grid = Grid::from_cells(
            2,
            3,
            vec![
                Cell::Gold(1),
                Cell::Rock,
                Cell::Gold(0),
                Cell::Gold(4),
                Cell::Gold(5),
                Cell::Rock,
            ],
        )
        .unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.get(0, 0), Cell::Gold(1));
        assert_eq!(grid.get(0, 1), Cell::Rock);
        assert_eq!(grid.get(1, 1), Cell::Gold(5));
        assert!(grid.is_rock(1, 2));
        assert_eq!(grid.gold_at(1, 0), 4);
        assert_eq!(grid.gold_at(0, 1), 0);
        assert_eq!(grid.max_steps(), 3);
    }

    #[test]
    fn test_grid_from_cells_rejects_empty() {
        assert_eq!(Grid::from_cells(0, 3, Vec::new()), Err(GridError::EmptyGrid));
        assert_eq!(Grid::from_cells(3, 0, Vec::new()), Err(GridError::EmptyGrid));
    }

    #[test]
    fn test_grid_from_cells_count_mismatch() {
        let result = Grid::from_cells(2, 2, vec![Cell::Gold(1); 3]);
        assert_eq!(
            result,
            Err(GridError::CellCountMismatch {
                rows: 2,
                columns: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_grid_from_rows() {
        let grid = Grid::from_rows(vec![
            vec![Cell::Gold(1), Cell::Gold(3)],
            vec![Cell::Gold(2), Cell::Gold(5)],
        ])
        .unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.get(1, 0), Cell::Gold(2));
    }

    #[test]
    fn test_grid_from_rows_ragged() {
        let result = Grid::from_rows(vec![
            vec![Cell::Gold(1), Cell::Gold(3)],
            vec![Cell::Gold(2)],
        ]);
        assert_eq!(
            result,
            Err(GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(Grid::from_rows(Vec::new()), Err(GridError::EmptyGrid));
        assert_eq!(Grid::from_rows(vec![Vec::new()]), Err(GridError::EmptyGrid));
    }

    #[test]
    fn test_new_random_with_seed_determinism() {
        let grid1 = Grid::new_random_with_seed(8, 5, 12345).unwrap();
        let grid2 = Grid::new_random_with_seed(8, 5, 12345).unwrap();
        assert_eq!(grid1, grid2, "Same seed should produce the same grid");

        let grid3 = Grid::new_random_with_seed(8, 5, 54321).unwrap();
        assert_ne!(grid1, grid3, "Different seeds should produce different grids");
    }

    #[test]
    fn test_new_random_with_seed_origin_is_passable() {
        for seed in 0..200 {
            let grid = Grid::new_random_with_seed(3, 3, seed).unwrap();
            assert!(!grid.is_rock(0, 0), "Origin is a rock for seed {}", seed);
            assert!(grid.check_solvable().is_ok());
            for r in 0..3 {
                for c in 0..3 {
                    assert!(grid.gold_at(r, c) <= 9);
                }
            }
        }
        assert_eq!(Grid::new_random_with_seed(0, 3, 1), Err(GridError::EmptyGrid));
    }

    #[test]
    fn test_check_solvable_rock_at_origin() {
        let grid = grid_from_str_array(&["X 1"]).unwrap();
        assert_eq!(grid.check_solvable(), Err(GridError::RockAtOrigin));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_grid_get_out_of_bounds() {
        let grid = grid_from_str_array(&["1 2"]).unwrap();
        grid.get(1, 0);
    }

    #[test]
    fn test_display_grid_formatting() {
        let grid = grid_from_str_array(&["1 12 X", "0 3 4"]).unwrap();
        assert_eq!(grid.to_string(), " 1 12  X\n 0  3  4");
        // The plain rendering reads back as the same grid.
        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(grid_from_str_array(&lines).unwrap(), grid);
    }

    #[test]
    fn test_display_grid_with_path() {
        let grid = grid_from_str_array(&["1 3", "2 5"]).unwrap();
        let mut path = Path::new(&grid);
        path.add_step(StepDirection::Right);
        path.add_step(StepDirection::Down);
        assert_eq!(grid.to_string_with_path(Some(&path)), "[1][3]\n 2 [5]");
    }

    #[test]
    fn test_path_new() {
        let grid = grid_from_str_array(&["4 1", "2 5"]).unwrap();
        let path = Path::new(&grid);
        assert_eq!(path.final_row(), 0);
        assert_eq!(path.final_column(), 0);
        assert!(path.steps().is_empty());
        assert_eq!(path.total_gold(), 4);
        assert_eq!(path.cells(), vec![(0, 0)]);
        assert_eq!(path.to_string(), "start");
    }

    #[test]
    #[should_panic(expected = "rock")]
    fn test_path_new_rock_at_origin() {
        let grid = grid_from_str_array(&["X 1"]).unwrap();
        Path::new(&grid);
    }

    #[test]
    fn test_is_step_valid_bounds_and_rocks() {
        let grid = grid_from_str_array(&["1 X", "2 5"]).unwrap();
        let mut path = Path::new(&grid);
        assert!(!path.is_step_valid(StepDirection::Right), "Right leads onto a rock");
        assert!(path.is_step_valid(StepDirection::Down));

        path.add_step(StepDirection::Down);
        assert!(!path.is_step_valid(StepDirection::Down), "Down leaves the grid");
        assert!(path.is_step_valid(StepDirection::Right));

        path.add_step(StepDirection::Right);
        assert!(!path.is_step_valid(StepDirection::Down));
        assert!(!path.is_step_valid(StepDirection::Right));
    }

    #[test]
    fn test_add_step_accumulates_gold() {
        let grid = grid_from_str_array(&["1 0 7", "2 5 3"]).unwrap();
        let mut path = Path::new(&grid);
        path.add_step(StepDirection::Right);
        assert_eq!(path.total_gold(), 1);
        path.add_step(StepDirection::Right);
        assert_eq!(path.total_gold(), 8);
        path.add_step(StepDirection::Down);
        assert_eq!(path.total_gold(), 11);

        assert_eq!(path.final_row(), 1);
        assert_eq!(path.final_column(), 2);
        assert_eq!(path.steps().len(), path.final_row() + path.final_column());
        assert_eq!(
            path.steps(),
            &[StepDirection::Right, StepDirection::Right, StepDirection::Down]
        );
        assert_eq!(path.cells(), vec![(0, 0), (0, 1), (0, 2), (1, 2)]);
        assert_eq!(path.to_string(), "start, right, right, down");
    }

    #[test]
    #[should_panic(expected = "invalid step")]
    fn test_add_step_onto_rock_panics() {
        let grid = grid_from_str_array(&["1 X"]).unwrap();
        let mut path = Path::new(&grid);
        path.add_step(StepDirection::Right);
    }

    #[test]
    #[should_panic(expected = "invalid step")]
    fn test_add_step_off_grid_panics() {
        let grid = grid_from_str_array(&["1 2"]).unwrap();
        let mut path = Path::new(&grid);
        path.add_step(StepDirection::Down);
    }

    #[test]
    fn test_path_clone_is_independent() {
        let grid = grid_from_str_array(&["1 3", "2 5"]).unwrap();
        let mut original = Path::new(&grid);
        original.add_step(StepDirection::Right);

        let mut copy = original.clone();
        copy.add_step(StepDirection::Down);

        assert_eq!(original.steps(), &[StepDirection::Right]);
        assert_eq!(original.total_gold(), 4);
        assert_eq!(copy.steps(), &[StepDirection::Right, StepDirection::Down]);
        assert_eq!(copy.total_gold(), 9);
        assert!(std::ptr::eq(original.grid(), copy.grid()));
    }
}
