use rand::Rng;

use crate::grid::{Cell, Grid};

/// The single food item on the board.
///
/// Independent of the snake: collision queries live on [`crate::snake::Snake`].
/// Placement uses the legacy spawn range (last row/column excluded) and makes
/// no attempt to avoid cells the snake already occupies, so food can appear
/// directly under the body. Both behaviors are kept as-is.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FoodSpot {
    pub cell: Cell,
}

impl FoodSpot {
    /// Places a new food item at a random cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: Grid) -> Self {
        Self {
            cell: grid.random_spawn_cell(rng),
        }
    }

    /// Moves this food item to a fresh random cell after being eaten.
    pub fn reposition<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: Grid) {
        self.cell = grid.random_spawn_cell(rng);
    }
}
