use crate::engine::{Cell, Grid};
use crate::error::GridError;

/// Parses an array of string slices into a `Grid`.
///
/// Each string slice is one row, starting from row 0. Cells within a row are
/// separated by whitespace. Valid cells are:
/// - `X` or `x`: `Cell::Rock`
/// - a non-negative integer: `Cell::Gold(amount)`
///
/// Every row must hold the same number of cells. Blank rows are not skipped,
/// so trim the input first if it may contain them.
///
/// # Errors
/// * `GridError::EmptyGrid` if there are no rows or the first row is blank.
/// * `GridError::RaggedRow` if a row is wider or narrower than the first.
/// * `GridError::InvalidCell` for any other token, including negative numbers.
///
/// # Examples
/// ```
/// use greedy_gnomes::utils::grid_from_str_array;
/// use greedy_gnomes::engine::Cell;
///
/// let grid = grid_from_str_array(&[
///     "1 X 10", // Row 0
///     "2 5  0", // Row 1
/// ])
/// .unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.columns(), 3);
/// assert_eq!(grid.get(0, 1), Cell::Rock);
/// assert_eq!(grid.get(0, 2), Cell::Gold(10));
///
/// assert!(grid_from_str_array(&["1 -2"]).is_err());
/// assert!(grid_from_str_array(&["1 2", "3"]).is_err());
/// ```
pub fn grid_from_str_array(s: &[&str]) -> Result<Grid, GridError> {
    let mut rows = Vec::with_capacity(s.len());
    for (r, row_str) in s.iter().enumerate() {
        let row = row_str
            .split_whitespace()
            .enumerate()
            .map(|(c, token)| parse_cell(token, r, c))
            .collect::<Result<Vec<Cell>, GridError>>()?;
        rows.push(row);
    }
    Grid::from_rows(rows)
}

fn parse_cell(token: &str, row: usize, column: usize) -> Result<Cell, GridError> {
    if token.eq_ignore_ascii_case("x") {
        return Ok(Cell::Rock);
    }
    token
        .parse::<u32>()
        .map(Cell::Gold)
        .map_err(|_| GridError::InvalidCell {
            token: token.to_string(),
            row,
            column,
        })
}
