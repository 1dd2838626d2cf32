use rand::Rng;

use crate::config::INITIAL_SNAKE_LEN;
use crate::food::FoodSpot;
use crate::grid::{Cell, Grid};
use crate::heading::Heading;
use crate::turns::TurnQueue;

/// One body unit: a cell position plus the heading it is currently moving in.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Segment {
    pub cell: Cell,
    pub heading: Heading,
}

impl Segment {
    /// Moves one cell-size step along the current heading.
    ///
    /// No bounds checking here; boundary detection is the snake's job.
    pub fn advance(&mut self, cell_size: i32) {
        self.cell = self.cell.step(self.heading, cell_size);
    }
}

/// The player-controlled chain of segments, head first.
///
/// Owns its segments and the queue of pending turns. Invariants: at least one
/// segment at all times, adjacent segments never share a cell, and the head
/// never reverses into its own neck in a single tick.
#[derive(Debug, Clone)]
pub struct Snake {
    segments: Vec<Segment>,
    turns: TurnQueue,
    grid: Grid,
}

impl Snake {
    /// Spawns a three-segment snake at a random cell.
    ///
    /// The start cell comes from the legacy spawn range (last row/column
    /// excluded). When fewer than three cells of room remain to the right of
    /// the start, the body trails left and the snake heads Right; otherwise
    /// the body trails right and the snake heads Left. Either way the whole
    /// body starts inside the grid.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: Grid) -> Self {
        let start = grid.random_spawn_cell(rng);
        let room_right = grid.right() - start.x;

        let heading = if room_right < grid.cell_size() * (INITIAL_SNAKE_LEN as i32) {
            Heading::Right
        } else {
            Heading::Left
        };

        // The body trails behind the head, opposite the travel direction.
        let trail = heading.opposite();
        let mut segments = Vec::with_capacity(INITIAL_SNAKE_LEN);
        let mut cell = start;
        for _ in 0..INITIAL_SNAKE_LEN {
            segments.push(Segment { cell, heading });
            cell = cell.step(trail, grid.cell_size());
        }

        Self {
            segments,
            turns: TurnQueue::new(),
            grid,
        }
    }

    /// Creates a snake from explicit segments (front is head). Panics on an
    /// empty list. Intended for tests and deterministic setups.
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>, grid: Grid) -> Self {
        assert!(!segments.is_empty(), "snake requires at least one segment");
        Self {
            segments,
            turns: TurnQueue::new(),
            grid,
        }
    }

    /// Requests a new heading for the head.
    ///
    /// Ignored when `new_heading` reverses the head's current heading, which
    /// would fold the head straight into its neck. Otherwise the head turns
    /// immediately and the head's pre-move cell is queued as the turn point
    /// for trailing segments.
    pub fn change_heading(&mut self, new_heading: Heading) {
        let head = *self.head();
        if new_heading.is_opposite(head.heading) {
            return;
        }

        self.segments[0].heading = new_heading;
        self.turns.record(head.cell, new_heading);
    }

    /// Advances every segment one cell and propagates queued turns.
    ///
    /// Each trailing segment adopts a queued heading the moment it arrives at
    /// the turn cell, so it entered the corner on its old heading and leaves
    /// on the new one next tick. The head is steered by input alone and never
    /// consults the queue. Afterwards the oldest record is retired if the
    /// tail has reached it.
    pub fn advance_one_tick(&mut self) {
        let cell_size = self.grid.cell_size();
        for (index, segment) in self.segments.iter_mut().enumerate() {
            segment.advance(cell_size);
            if index > 0 {
                self.turns.apply(segment);
            }
        }

        let tail_cell = self.tail().cell;
        self.turns.retire_if_consumed_by_tail(tail_cell);
    }

    /// Returns true when the head has left the playable rectangle.
    #[must_use]
    pub fn hits_boundary(&self) -> bool {
        !self.grid.contains(self.head().cell)
    }

    /// Returns true when the head occupies the same cell as any other
    /// segment.
    #[must_use]
    pub fn hits_self(&self) -> bool {
        let head_cell = self.head().cell;
        self.segments
            .iter()
            .skip(1)
            .any(|segment| segment.cell == head_cell)
    }

    /// Returns true when any segment sits on the food cell.
    ///
    /// Deliberately checks the whole body, not just the head: food directly
    /// under a body segment counts as eaten.
    #[must_use]
    pub fn hits_food(&self, food: &FoodSpot) -> bool {
        self.segments.iter().any(|segment| segment.cell == food.cell)
    }

    /// Appends a new tail segment one cell behind the current tail.
    ///
    /// The new segment sits opposite the tail's heading and inherits it, so
    /// the grown body continues the tail's line of travel.
    pub fn grow(&mut self) {
        let tail = *self.tail();
        let cell = tail.cell.step(tail.heading.opposite(), self.grid.cell_size());
        self.segments.push(Segment {
            cell,
            heading: tail.heading,
        });
    }

    /// Returns the head segment.
    #[must_use]
    pub fn head(&self) -> &Segment {
        self.segments
            .first()
            .expect("snake must always contain at least one segment")
    }

    /// Returns the tail segment.
    #[must_use]
    pub fn tail(&self) -> &Segment {
        self.segments
            .last()
            .expect("snake must always contain at least one segment")
    }

    /// Returns the current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true when there are no segments. Never true in practice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Returns the number of turns still pending in the queue.
    #[must_use]
    pub fn pending_turns(&self) -> usize {
        self.turns.len()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{Segment, Snake};
    use crate::food::FoodSpot;
    use crate::grid::{Cell, Grid};
    use crate::heading::Heading;

    fn test_grid() -> Grid {
        Grid::new(200, 20, 0, 0).expect("test grid parameters are valid")
    }

    fn row_snake(head: Cell, heading: Heading, len: usize, grid: Grid) -> Snake {
        // Body trails opposite the travel direction.
        let trail = heading.opposite();
        let mut segments = Vec::with_capacity(len);
        let mut cell = head;
        for _ in 0..len {
            segments.push(Segment { cell, heading });
            cell = cell.step(trail, grid.cell_size());
        }
        Snake::from_segments(segments, grid)
    }

    #[test]
    fn every_segment_moves_one_cell_per_tick() {
        let grid = test_grid();
        let mut snake = row_snake(Cell { x: 50, y: 50 }, Heading::Right, 3, grid);

        snake.advance_one_tick();

        let cells: Vec<Cell> = snake.segments().map(|segment| segment.cell).collect();
        assert_eq!(
            cells,
            vec![
                Cell { x: 60, y: 50 },
                Cell { x: 50, y: 50 },
                Cell { x: 40, y: 50 },
            ]
        );
    }

    #[test]
    fn reversal_request_is_silently_ignored() {
        let grid = test_grid();
        let mut snake = row_snake(Cell { x: 50, y: 50 }, Heading::Right, 3, grid);

        snake.change_heading(Heading::Left);

        assert_eq!(snake.head().heading, Heading::Right);
        assert_eq!(snake.pending_turns(), 0);
    }

    #[test]
    fn turn_propagates_to_trailing_segment_exactly_at_turn_cell() {
        let grid = test_grid();
        let corner = Cell { x: 50, y: 50 };
        let mut snake = row_snake(corner, Heading::Right, 3, grid);

        snake.change_heading(Heading::Up);
        assert_eq!(snake.head().heading, Heading::Up);
        assert_eq!(snake.pending_turns(), 1);

        // Tick 1: the second segment arrives at the corner and adopts Up.
        snake.advance_one_tick();
        let second = snake.segments().nth(1).copied().expect("segment exists");
        assert_eq!(second.cell, corner);
        assert_eq!(second.heading, Heading::Up);

        // The tail is still approaching the corner on its old heading.
        assert_eq!(snake.tail().heading, Heading::Right);
        assert_eq!(snake.pending_turns(), 1);

        // Tick 2: the tail reaches the corner, adopts Up, and the record is
        // retired.
        snake.advance_one_tick();
        assert_eq!(snake.tail().cell, corner);
        assert_eq!(snake.tail().heading, Heading::Up);
        assert_eq!(snake.pending_turns(), 0);

        // Tick 3: the whole body is stacked vertically above the corner.
        snake.advance_one_tick();
        let cells: Vec<Cell> = snake.segments().map(|segment| segment.cell).collect();
        assert_eq!(
            cells,
            vec![
                Cell { x: 50, y: 20 },
                Cell { x: 50, y: 30 },
                Cell { x: 50, y: 40 },
            ]
        );
    }

    #[test]
    fn adjacent_segments_never_share_a_cell_through_turns() {
        let grid = test_grid();
        let mut snake = row_snake(Cell { x: 100, y: 100 }, Heading::Right, 4, grid);

        // Each entry is perpendicular to the previous one, so every request
        // is accepted.
        let inputs = [Heading::Up, Heading::Left, Heading::Down, Heading::Right];
        for tick in 0..12usize {
            if tick % 2 == 0 {
                snake.change_heading(inputs[(tick / 2) % inputs.len()]);
            }
            snake.advance_one_tick();

            let cells: Vec<Cell> = snake.segments().map(|segment| segment.cell).collect();
            for pair in cells.windows(2) {
                assert_ne!(pair[0], pair[1], "adjacent segments collided at tick {tick}");
            }
        }
    }

    #[test]
    fn grow_places_new_tail_behind_current_tail() {
        let grid = test_grid();
        let mut snake = row_snake(Cell { x: 50, y: 50 }, Heading::Right, 3, grid);

        snake.grow();

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail().cell, Cell { x: 20, y: 50 });
        assert_eq!(snake.tail().heading, Heading::Right);
    }

    #[test]
    fn grow_follows_tail_heading_not_head_heading() {
        let grid = test_grid();
        let snake_cells = vec![
            Segment {
                cell: Cell { x: 50, y: 40 },
                heading: Heading::Up,
            },
            Segment {
                cell: Cell { x: 50, y: 50 },
                heading: Heading::Up,
            },
            Segment {
                cell: Cell { x: 40, y: 50 },
                heading: Heading::Right,
            },
        ];
        let mut snake = Snake::from_segments(snake_cells, grid);

        snake.grow();

        // New tail extends the old tail's rightward travel, not the head's.
        assert_eq!(snake.tail().cell, Cell { x: 30, y: 50 });
        assert_eq!(snake.tail().heading, Heading::Right);
    }

    #[test]
    fn boundary_collision_on_each_border() {
        let grid = test_grid();
        let inside = [
            (Cell { x: 50, y: 0 }, Heading::Up),
            (Cell { x: 190, y: 50 }, Heading::Right),
            (Cell { x: 50, y: 190 }, Heading::Down),
            (Cell { x: 0, y: 50 }, Heading::Left),
        ];

        for (cell, heading) in inside {
            let mut snake = Snake::from_segments(vec![Segment { cell, heading }], grid);
            assert!(!snake.hits_boundary(), "one cell inside {heading:?} border");

            snake.advance_one_tick();
            assert!(snake.hits_boundary(), "stepped past {heading:?} border");
        }
    }

    #[test]
    fn self_collision_detects_head_on_body_only() {
        let grid = test_grid();
        let segments = vec![
            Segment {
                cell: Cell { x: 50, y: 50 },
                heading: Heading::Left,
            },
            Segment {
                cell: Cell { x: 60, y: 50 },
                heading: Heading::Left,
            },
            Segment {
                cell: Cell { x: 50, y: 50 },
                heading: Heading::Down,
            },
        ];
        let snake = Snake::from_segments(segments, grid);
        assert!(snake.hits_self());

        let clear = row_snake(Cell { x: 50, y: 50 }, Heading::Right, 3, grid);
        assert!(!clear.hits_self());
    }

    #[test]
    fn food_under_any_segment_counts_as_eaten() {
        let grid = test_grid();
        let snake = row_snake(Cell { x: 50, y: 50 }, Heading::Right, 3, grid);

        // Under the tail, not the head.
        let under_tail = FoodSpot {
            cell: Cell { x: 30, y: 50 },
        };
        assert!(snake.hits_food(&under_tail));

        let elsewhere = FoodSpot {
            cell: Cell { x: 90, y: 90 },
        };
        assert!(!snake.hits_food(&elsewhere));
    }

    #[test]
    fn spawned_snake_starts_inside_grid_with_three_segments() {
        let grid = test_grid();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..200 {
            let snake = Snake::spawn(&mut rng, grid);
            assert_eq!(snake.len(), 3);
            assert!(!snake.hits_boundary());
            for segment in snake.segments() {
                assert!(grid.contains(segment.cell), "body must start inside");
                assert_eq!(segment.heading, snake.head().heading);
            }
        }
    }

    #[test]
    fn spawn_near_right_border_heads_right_with_body_to_the_left() {
        let grid = test_grid();
        let mut rng = StdRng::seed_from_u64(0);

        // The spawn rule keys off the room between start and the right
        // border, so exercise both branches across many seeds.
        let mut saw_right = false;
        let mut saw_left = false;
        for _ in 0..300 {
            let snake = Snake::spawn(&mut rng, grid);
            let head = *snake.head();
            let room_right = grid.right() - head.cell.x;
            if room_right < grid.cell_size() * 3 {
                assert_eq!(head.heading, Heading::Right);
                saw_right = true;
            } else {
                assert_eq!(head.heading, Heading::Left);
                saw_left = true;
            }
        }
        assert!(saw_right && saw_left, "both spawn branches should occur");
    }
}
