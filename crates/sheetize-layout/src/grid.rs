//! Near-square grid sizing for tilesets.

use serde::Serialize;
use sheetize_spec::LayoutError;

/// Column/row shape of a tileset grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    /// Number of columns (tiles per row).
    pub cols: u32,
    /// Number of rows.
    pub rows: u32,
}

impl Grid {
    /// Number of cells in the grid.
    pub fn cells(&self) -> u64 {
        self.cols as u64 * self.rows as u64
    }

    /// Column and row of the cell at row-major `index`.
    pub fn cell(&self, index: u32) -> (u32, u32) {
        (index % self.cols, index / self.cols)
    }
}

/// Compute a near-square grid able to hold `count` tiles.
///
/// `cols = round(sqrt(count))` (half-up) and `rows = ceil(count / cols)`.
/// The rounding is done in integer arithmetic: with `k = floor(sqrt(n))`,
/// `sqrt(n)` rounds up exactly when `n > k^2 + k`, since `(k + 1/2)^2` is never
/// an integer.
///
/// ```
/// use sheetize_layout::grid::grid_dimensions;
///
/// let grid = grid_dimensions(7).unwrap();
/// assert_eq!((grid.cols, grid.rows), (3, 3));
/// ```
pub fn grid_dimensions(count: usize) -> Result<Grid, LayoutError> {
    if count == 0 {
        return Err(LayoutError::EmptyInput);
    }
    let n = u64::try_from(count)
        .ok()
        .filter(|n| *n <= u32::MAX as u64)
        .ok_or_else(|| LayoutError::InvalidOption(format!("too many tiles: {}", count)))?;

    let k = integer_sqrt(n);
    let cols = if n > k * k + k { k + 1 } else { k };
    let rows = n.div_ceil(cols);

    Ok(Grid {
        cols: cols as u32,
        rows: rows as u32,
    })
}

/// Largest `k` with `k * k <= n`.
fn integer_sqrt(n: u64) -> u64 {
    let mut k = (n as f64).sqrt() as u64;
    while k * k > n {
        k -= 1;
    }
    while (k + 1) * (k + 1) <= n {
        k += 1;
    }
    k
}
