use rand::Rng;
use thiserror::Error;

use crate::heading::Heading;

/// Absolute position of a grid cell's top-left corner.
///
/// All movement happens in exact `cell_size` steps, so positions compare with
/// plain equality and never need a tolerance.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Returns this cell moved one `cell_size` step along `heading`.
    #[must_use]
    pub fn step(self, heading: Heading, cell_size: i32) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

/// Errors from [`Grid::new`] parameter validation.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum GridError {
    #[error("cell count must be at least 2, got {0}")]
    TooFewCells(i32),
    #[error("area size must be positive, got {0}")]
    NonPositiveArea(i32),
    #[error("area size {area_size} must be divisible by cell count {cell_count}")]
    Indivisible { area_size: i32, cell_count: i32 },
}

/// Geometry of the square playable area.
///
/// Pure value type: computes the cell size and the four boundary coordinates
/// once at construction and never mutates. Snake and food both derive their
/// placement and bounds checks from the same `Grid` so the three always agree
/// within a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    origin_x: i32,
    origin_y: i32,
    area_size: i32,
    cell_count: i32,
    cell_size: i32,
}

impl Grid {
    /// Creates a grid of `cell_count`×`cell_count` cells covering a square of
    /// `area_size` units with its top-left corner at the origin.
    pub fn new(
        area_size: i32,
        cell_count: i32,
        origin_x: i32,
        origin_y: i32,
    ) -> Result<Self, GridError> {
        if cell_count < 2 {
            return Err(GridError::TooFewCells(cell_count));
        }
        if area_size <= 0 {
            return Err(GridError::NonPositiveArea(area_size));
        }
        if area_size % cell_count != 0 {
            return Err(GridError::Indivisible {
                area_size,
                cell_count,
            });
        }

        Ok(Self {
            origin_x,
            origin_y,
            area_size,
            cell_count,
            cell_size: area_size / cell_count,
        })
    }

    /// Returns the edge length of one cell.
    #[must_use]
    pub fn cell_size(self) -> i32 {
        self.cell_size
    }

    /// Returns the number of cells along each axis.
    #[must_use]
    pub fn cell_count(self) -> i32 {
        self.cell_count
    }

    /// Returns the y coordinate of the top boundary.
    #[must_use]
    pub fn top(self) -> i32 {
        self.origin_y
    }

    /// Returns the x coordinate of the right boundary (exclusive).
    #[must_use]
    pub fn right(self) -> i32 {
        self.origin_x + self.area_size
    }

    /// Returns the y coordinate of the bottom boundary (exclusive).
    #[must_use]
    pub fn bottom(self) -> i32 {
        self.origin_y + self.area_size
    }

    /// Returns the x coordinate of the left boundary.
    #[must_use]
    pub fn left(self) -> i32 {
        self.origin_x
    }

    /// Returns true when `cell` lies inside the playable rectangle.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.y >= self.top() && cell.x < self.right() && cell.y < self.bottom() && cell.x >= self.left()
    }

    /// Returns the absolute position of the cell at (`col`, `row`).
    #[must_use]
    pub fn cell_at(self, col: i32, row: i32) -> Cell {
        Cell {
            x: self.origin_x + col * self.cell_size,
            y: self.origin_y + row * self.cell_size,
        }
    }

    /// Returns the (column, row) index of `cell`, or `None` when it lies
    /// outside the grid or off the cell lattice.
    #[must_use]
    pub fn col_row(self, cell: Cell) -> Option<(i32, i32)> {
        if !self.contains(cell) {
            return None;
        }

        let dx = cell.x - self.origin_x;
        let dy = cell.y - self.origin_y;
        if dx % self.cell_size != 0 || dy % self.cell_size != 0 {
            return None;
        }

        Some((dx / self.cell_size, dy / self.cell_size))
    }

    /// Picks a uniformly random cell for spawning the snake or food.
    ///
    /// The range stops one short of the last row and column, so items never
    /// land on the far edge. Long-standing placement behavior, kept as-is.
    #[must_use]
    pub fn random_spawn_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        let col = rng.gen_range(0..self.cell_count - 1);
        let row = rng.gen_range(0..self.cell_count - 1);
        self.cell_at(col, row)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{Cell, Grid, GridError};
    use crate::heading::Heading;

    fn reference_grid() -> Grid {
        Grid::new(400, 20, 100, 100).expect("reference grid parameters are valid")
    }

    #[test]
    fn grid_computes_cell_size_and_borders() {
        let grid = reference_grid();

        assert_eq!(grid.cell_size(), 20);
        assert_eq!(grid.top(), 100);
        assert_eq!(grid.right(), 500);
        assert_eq!(grid.bottom(), 500);
        assert_eq!(grid.left(), 100);
    }

    #[test]
    fn grid_rejects_invalid_parameters() {
        assert_eq!(Grid::new(400, 1, 0, 0), Err(GridError::TooFewCells(1)));
        assert_eq!(Grid::new(0, 20, 0, 0), Err(GridError::NonPositiveArea(0)));
        assert_eq!(
            Grid::new(401, 20, 0, 0),
            Err(GridError::Indivisible {
                area_size: 401,
                cell_count: 20
            })
        );
    }

    #[test]
    fn contains_is_exclusive_on_right_and_bottom() {
        let grid = reference_grid();

        assert!(grid.contains(Cell { x: 100, y: 100 }));
        assert!(grid.contains(Cell { x: 480, y: 480 }));

        assert!(!grid.contains(Cell { x: 100, y: 80 }));
        assert!(!grid.contains(Cell { x: 500, y: 100 }));
        assert!(!grid.contains(Cell { x: 100, y: 500 }));
        assert!(!grid.contains(Cell { x: 80, y: 100 }));
    }

    #[test]
    fn cell_at_and_col_row_agree() {
        let grid = reference_grid();

        let cell = grid.cell_at(3, 7);
        assert_eq!(cell, Cell { x: 160, y: 240 });
        assert_eq!(grid.col_row(cell), Some((3, 7)));

        // Off-lattice and out-of-bounds positions have no index.
        assert_eq!(grid.col_row(Cell { x: 161, y: 240 }), None);
        assert_eq!(grid.col_row(Cell { x: 500, y: 240 }), None);
    }

    #[test]
    fn cell_step_moves_exactly_one_cell_size() {
        let cell = Cell { x: 200, y: 200 };

        assert_eq!(cell.step(Heading::Up, 20), Cell { x: 200, y: 180 });
        assert_eq!(cell.step(Heading::Right, 20), Cell { x: 220, y: 200 });
        assert_eq!(cell.step(Heading::Down, 20), Cell { x: 200, y: 220 });
        assert_eq!(cell.step(Heading::Left, 20), Cell { x: 180, y: 200 });
    }

    #[test]
    fn random_spawn_never_uses_last_row_or_column() {
        let grid = reference_grid();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..500 {
            let cell = grid.random_spawn_cell(&mut rng);
            let (col, row) = grid.col_row(cell).expect("spawn cell must be on the grid");
            assert!(col < grid.cell_count() - 1);
            assert!(row < grid.cell_count() - 1);
        }
    }
}
