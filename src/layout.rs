// ---------------------------------------------------------------------------
// Grid layout: label index → (row, column)
// ---------------------------------------------------------------------------

/// Subplots per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Position of one subplot in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
}

/// Row-major grid with a fixed column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    count: usize,
}

impl GridLayout {
    /// Layout for `count` subplots.
    pub fn for_count(count: usize) -> Self {
        GridLayout { count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn columns(&self) -> usize {
        GRID_COLUMNS
    }

    /// `ceil(count / 3)`.
    pub fn rows(&self) -> usize {
        self.count.div_ceil(GRID_COLUMNS)
    }

    /// Cell of the subplot at linear index `index`.
    pub fn cell(&self, index: usize) -> GridCell {
        GridCell {
            row: index / GRID_COLUMNS,
            column: index % GRID_COLUMNS,
        }
    }

    /// Index of the subplot shown at `(row, column)`, if that cell is used.
    pub fn index_at(&self, row: usize, column: usize) -> Option<usize> {
        let index = row * GRID_COLUMNS + column;
        (column < GRID_COLUMNS && index < self.count).then_some(index)
    }

    /// Occupied cells in order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.count).map(|i| self.cell(i))
    }
}
