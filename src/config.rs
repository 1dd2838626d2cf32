/// Playable area edge length in absolute coordinate units.
pub const DEFAULT_AREA_SIZE: i32 = 400;

/// Number of cells along each axis of the square grid.
pub const DEFAULT_CELL_COUNT: i32 = 20;

/// Default x coordinate of the grid's top-left corner.
pub const DEFAULT_ORIGIN_X: i32 = 100;

/// Default y coordinate of the grid's top-left corner.
pub const DEFAULT_ORIGIN_Y: i32 = 100;

/// Tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LEN: usize = 3;
