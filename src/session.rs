use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::food::FoodSpot;
use crate::grid::Grid;
use crate::heading::Heading;
use crate::snake::Snake;

/// Why a round was reset.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ResetReason {
    /// The head left the playable rectangle.
    Boundary,
    /// The head ran into the snake's own body.
    SelfCollision,
}

/// What happened during one tick, for collaborators such as the renderer.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct TickOutcome {
    /// The snake reached the food this tick and grew.
    pub ate: bool,
    /// Set when a collision ended the round; the session has already
    /// replaced the snake and food.
    pub reset: Option<ResetReason>,
}

/// Orchestrates one continuous play session: tick cadence, eating, and the
/// reset-on-collision contract.
///
/// Owns the snake and food by value. A collision discards both and constructs
/// fresh ones — queued turns disappear with the old snake, and play continues
/// immediately in a new round.
#[derive(Debug, Clone)]
pub struct Session {
    pub snake: Snake,
    pub food: FoodSpot,
    pub score: u32,
    pub round: u32,
    pub tick_count: u64,
    grid: Grid,
    rng: StdRng,
}

impl Session {
    /// Creates a session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(grid: Grid, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: Grid, mut rng: StdRng) -> Self {
        let snake = Snake::spawn(&mut rng, grid);
        let food = FoodSpot::spawn(&mut rng, grid);

        Self {
            snake,
            food,
            score: 0,
            round: 1,
            tick_count: 0,
            grid,
            rng,
        }
    }

    /// Returns the grid shared by snake and food this round.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Forwards a heading-change request to the snake.
    ///
    /// Requests land between ticks and take effect on the next advance;
    /// invalid reversals are silently dropped by the snake.
    pub fn apply_heading(&mut self, heading: Heading) {
        self.snake.change_heading(heading);
    }

    /// Runs one simulation tick: advance, then eat, then collision checks.
    pub fn tick(&mut self) -> TickOutcome {
        self.tick_count += 1;
        self.snake.advance_one_tick();

        let mut outcome = TickOutcome::default();
        if self.snake.hits_food(&self.food) {
            self.snake.grow();
            self.food.reposition(&mut self.rng, self.grid);
            self.score += 1;
            outcome.ate = true;
        }

        if self.snake.hits_self() {
            self.reset_round();
            outcome.reset = Some(ResetReason::SelfCollision);
            return outcome;
        }

        if self.snake.hits_boundary() {
            self.reset_round();
            outcome.reset = Some(ResetReason::Boundary);
            return outcome;
        }

        outcome
    }

    /// Replaces the snake and food wholesale and starts the next round.
    pub fn reset_round(&mut self) {
        self.snake = Snake::spawn(&mut self.rng, self.grid);
        self.food = FoodSpot::spawn(&mut self.rng, self.grid);
        self.score = 0;
        self.round += 1;
    }
}
