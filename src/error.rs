use thiserror::Error;

/// Errors raised while constructing a [`Grid`](crate::engine::Grid).
///
/// Solver preconditions are not represented here; those are programming
/// errors and panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has zero rows or zero columns.
    #[error("Grid must have at least one row and one column")]
    EmptyGrid,

    /// A flat cell vector does not hold `rows * columns` cells.
    #[error("Expected {rows}x{columns} cells, found {found}")]
    CellCountMismatch {
        rows: usize,
        columns: usize,
        found: usize,
    },

    /// A row is a different width than the first row.
    #[error("Row {row} has {found} cells (expected {expected})")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A text cell is neither `X` nor a non-negative integer.
    #[error("Unrecognized cell '{token}' in row {row} col {column}")]
    InvalidCell {
        token: String,
        row: usize,
        column: usize,
    },

    /// The top-left cell is a rock, so no path can start.
    #[error("Cell (0, 0) is a rock; no path can start there")]
    RockAtOrigin,
}
