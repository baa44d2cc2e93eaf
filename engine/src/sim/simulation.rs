use crate::log;

use super::session_rng::SessionRng;
use super::settings::SimulationSettings;
use super::snake::SnakeBody;
use super::types::{Direction, EndReason, GamePhase, Point};

const FOOD_PLACEMENT_ATTEMPTS: usize = 100;
const INITIAL_DIRECTION: Direction = Direction::Up;

/// The game state machine: a snake on a pixel grid, one food cell, a score,
/// and a terminal phase. Untimed; `tick` advances the game by exactly one
/// cell and the caller owns the cadence.
pub struct SnakeSimulation {
    settings: SimulationSettings,
    rng: SessionRng,
    body: SnakeBody,
    direction: Direction,
    food: Point,
    score: u32,
    end_reason: Option<EndReason>,
}

impl SnakeSimulation {
    pub fn new(settings: SimulationSettings, seed: u64) -> Result<Self, String> {
        settings.validate()?;

        let start = Self::start_position(&settings);
        let mut simulation = Self {
            rng: SessionRng::new(seed),
            body: SnakeBody::single(start),
            direction: INITIAL_DIRECTION,
            food: start,
            score: 0,
            end_reason: None,
            settings,
        };
        simulation.place_food();
        Ok(simulation)
    }

    /// Puts the simulation back into its initial running state: single-cell
    /// snake at the start position heading up, score zero, fresh food.
    pub fn reset(&mut self) {
        self.body = SnakeBody::single(Self::start_position(&self.settings));
        self.direction = INITIAL_DIRECTION;
        self.score = 0;
        self.end_reason = None;
        self.place_food();
    }

    // Horizontally centered, one cell above the bottom row.
    fn start_position(settings: &SimulationSettings) -> Point {
        Point::new(
            settings.columns() / 2 * settings.grid_size,
            settings.board_height - 2 * settings.grid_size,
        )
    }

    /// Requests a direction change. Silently ignored once the game is over,
    /// and on the axis the snake is already travelling on, so the snake can
    /// never reverse into itself. The last accepted request before the next
    /// `tick` wins.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.phase() == GamePhase::Over {
            return;
        }
        if requested.axis() == self.direction.axis() {
            return;
        }
        self.direction = requested;
    }

    /// Advances the game by one step. No-op once the game is over.
    pub fn tick(&mut self) {
        if self.phase() == GamePhase::Over {
            return;
        }

        let (dx, dy) = self.direction.displacement(self.settings.grid_size);
        let next_head = self.body.head().translated(dx, dy);

        // Both collision checks are evaluated for every step; a failed move
        // never commits, so body and food are untouched on this path.
        let hits_wall = !self.in_bounds(next_head);
        let hits_self = self.body.contains(next_head);
        if hits_wall || hits_self {
            let reason = if hits_wall {
                EndReason::WallCollision
            } else {
                EndReason::SelfCollision
            };
            log!(
                "game over at ({}, {}): {:?}, final score {}",
                next_head.x,
                next_head.y,
                reason,
                self.score
            );
            self.end_reason = Some(reason);
            return;
        }

        self.body.push_head(next_head);

        if next_head == self.food {
            self.score += self.settings.score_increment;
            log!(
                "ate food at ({}, {}), score {}",
                next_head.x,
                next_head.y,
                self.score
            );
            // Tail retained: eating grows the snake by one cell.
            self.place_food();
        } else {
            self.body.pop_tail();
        }
    }

    fn in_bounds(&self, cell: Point) -> bool {
        cell.x >= 0
            && cell.x < self.settings.board_width
            && cell.y >= 0
            && cell.y < self.settings.board_height
    }

    fn place_food(&mut self) {
        let grid = self.settings.grid_size;

        for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
            let candidate = Point::new(
                self.rng.random_range(0..self.settings.columns()) * grid,
                self.rng.random_range(0..self.settings.rows()) * grid,
            );
            if !self.body.contains(candidate) {
                self.food = candidate;
                return;
            }
        }

        // The random draws kept landing on the snake; scan for the free
        // cells so a near-full board still terminates.
        let mut free_cells = Vec::new();
        for col in 0..self.settings.columns() {
            for row in 0..self.settings.rows() {
                let cell = Point::new(col * grid, row * grid);
                if !self.body.contains(cell) {
                    free_cells.push(cell);
                }
            }
        }

        if free_cells.is_empty() {
            log!("board is full, no cell left for food");
            self.end_reason = Some(EndReason::BoardFull);
            return;
        }

        self.food = free_cells[self.rng.random_range(0..free_cells.len())];
    }

    /// Body cells, head first.
    pub fn snake(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.segments()
    }

    pub fn snake_len(&self) -> usize {
        self.body.len()
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> GamePhase {
        if self.end_reason.is_none() {
            GamePhase::Running
        } else {
            GamePhase::Over
        }
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    #[cfg(test)]
    fn set_body(&mut self, cells: Vec<Point>) {
        self.body = SnakeBody::from_cells(cells);
    }

    #[cfg(test)]
    fn set_food(&mut self, cell: Point) {
        self.food = cell;
    }

    #[cfg(test)]
    fn force_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn test_settings() -> SimulationSettings {
        SimulationSettings {
            grid_size: 20,
            board_width: 400,
            board_height: 400,
            tick_interval: Duration::from_millis(150),
            score_increment: 10,
        }
    }

    fn create_simulation() -> SnakeSimulation {
        SnakeSimulation::new(test_settings(), 42).unwrap()
    }

    fn segments(simulation: &SnakeSimulation) -> Vec<Point> {
        simulation.snake().collect()
    }

    #[test]
    fn test_new_simulation_starts_running() {
        let simulation = create_simulation();

        assert_eq!(simulation.phase(), GamePhase::Running);
        assert_eq!(simulation.end_reason(), None);
        assert_eq!(simulation.score(), 0);
        assert_eq!(simulation.direction(), Direction::Up);
        assert_eq!(simulation.snake_len(), 1);
        // 20 columns -> centered at column 10, one cell above the bottom row.
        assert_eq!(segments(&simulation), vec![Point::new(200, 360)]);
    }

    #[test]
    fn test_initial_food_is_grid_aligned_and_off_the_snake() {
        let simulation = create_simulation();
        let food = simulation.food();

        assert_eq!(food.x % 20, 0);
        assert_eq!(food.y % 20, 0);
        assert!(food.x >= 0 && food.x < 400);
        assert!(food.y >= 0 && food.y < 400);
        assert!(!simulation.snake().any(|cell| cell == food));
    }

    #[test]
    fn test_snake_stays_grid_aligned_while_moving() {
        let mut simulation = create_simulation();
        for _ in 0..5 {
            simulation.tick();
        }

        assert_eq!(simulation.phase(), GamePhase::Running);
        for cell in simulation.snake() {
            assert_eq!(cell.x % 20, 0);
            assert_eq!(cell.y % 20, 0);
        }
    }

    #[test]
    fn test_move_without_food_keeps_length() {
        let mut simulation = create_simulation();
        simulation.set_body(vec![Point::new(100, 100)]);
        simulation.force_direction(Direction::Right);
        simulation.set_food(Point::new(300, 300));

        simulation.tick();

        assert_eq!(segments(&simulation), vec![Point::new(120, 100)]);
        assert_eq!(simulation.score(), 0);
        assert_eq!(simulation.phase(), GamePhase::Running);
    }

    #[test]
    fn test_eating_grows_snake_and_scores() {
        let mut simulation = create_simulation();
        simulation.set_body(vec![Point::new(100, 100)]);
        simulation.force_direction(Direction::Right);
        simulation.set_food(Point::new(120, 100));

        simulation.tick();

        assert_eq!(
            segments(&simulation),
            vec![Point::new(120, 100), Point::new(100, 100)]
        );
        assert_eq!(simulation.score(), 10);
        assert!(!simulation.snake().any(|cell| cell == simulation.food()));
    }

    #[test]
    fn test_reversing_direction_is_ignored() {
        let mut simulation = create_simulation();
        simulation.force_direction(Direction::Right);

        simulation.set_direction(Direction::Left);
        assert_eq!(simulation.direction(), Direction::Right);

        // Same-direction repeats share the axis and are ignored too.
        simulation.set_direction(Direction::Right);
        assert_eq!(simulation.direction(), Direction::Right);

        simulation.set_direction(Direction::Up);
        assert_eq!(simulation.direction(), Direction::Up);
    }

    #[test]
    fn test_direction_changes_between_ticks_compound() {
        let mut simulation = create_simulation();
        simulation.force_direction(Direction::Right);

        // Each accepted change is checked against the latest direction, so
        // two quick orthogonal requests can land between the same two ticks.
        simulation.set_direction(Direction::Up);
        simulation.set_direction(Direction::Left);
        assert_eq!(simulation.direction(), Direction::Left);
    }

    #[test]
    fn test_wall_collision_ends_game_without_moving() {
        let mut simulation = create_simulation();
        simulation.set_body(vec![Point::new(0, 100)]);
        simulation.force_direction(Direction::Left);
        simulation.set_food(Point::new(300, 300));

        simulation.tick();

        assert_eq!(simulation.phase(), GamePhase::Over);
        assert_eq!(simulation.end_reason(), Some(EndReason::WallCollision));
        // The head never committed past the boundary.
        assert_eq!(segments(&simulation), vec![Point::new(0, 100)]);
        assert_eq!(simulation.score(), 0);
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut simulation = create_simulation();
        simulation.set_body(vec![Point::new(100, 100), Point::new(120, 100)]);
        simulation.force_direction(Direction::Right);
        simulation.set_food(Point::new(300, 300));

        simulation.tick();

        assert_eq!(simulation.phase(), GamePhase::Over);
        assert_eq!(simulation.end_reason(), Some(EndReason::SelfCollision));
        assert_eq!(
            segments(&simulation),
            vec![Point::new(100, 100), Point::new(120, 100)]
        );
    }

    #[test]
    fn test_tick_is_noop_after_game_over() {
        let mut simulation = create_simulation();
        simulation.set_body(vec![Point::new(0, 100)]);
        simulation.force_direction(Direction::Left);
        simulation.tick();
        assert_eq!(simulation.phase(), GamePhase::Over);

        let segments_before = segments(&simulation);
        let food_before = simulation.food();
        let score_before = simulation.score();

        for _ in 0..3 {
            simulation.tick();
        }

        assert_eq!(segments(&simulation), segments_before);
        assert_eq!(simulation.food(), food_before);
        assert_eq!(simulation.score(), score_before);
    }

    #[test]
    fn test_set_direction_ignored_after_game_over() {
        let mut simulation = create_simulation();
        simulation.set_body(vec![Point::new(0, 100)]);
        simulation.force_direction(Direction::Left);
        simulation.tick();
        assert_eq!(simulation.phase(), GamePhase::Over);

        simulation.set_direction(Direction::Up);
        assert_eq!(simulation.direction(), Direction::Left);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut simulation = create_simulation();
        simulation.set_body(vec![Point::new(0, 100)]);
        simulation.force_direction(Direction::Left);
        simulation.tick();
        assert_eq!(simulation.phase(), GamePhase::Over);

        simulation.reset();

        assert_eq!(simulation.phase(), GamePhase::Running);
        assert_eq!(simulation.score(), 0);
        assert_eq!(simulation.direction(), Direction::Up);
        assert_eq!(segments(&simulation), vec![Point::new(200, 360)]);
        assert!(!simulation.snake().any(|cell| cell == simulation.food()));
    }

    #[test]
    fn test_food_lands_on_the_single_free_cell() {
        // 4x4-cell board with one cell left free: wherever the draw loop
        // gives up, placement must land on that cell.
        let settings = SimulationSettings {
            board_width: 80,
            board_height: 80,
            ..test_settings()
        };
        let mut simulation = SnakeSimulation::new(settings, 42).unwrap();

        let free = Point::new(60, 60);
        let mut occupied = Vec::new();
        for col in 0..4 {
            for row in 0..4 {
                let cell = Point::new(col * 20, row * 20);
                if cell != free {
                    occupied.push(cell);
                }
            }
        }
        simulation.set_body(occupied);

        simulation.place_food();

        assert_eq!(simulation.food(), free);
        assert_eq!(simulation.phase(), GamePhase::Running);
    }

    #[test]
    fn test_filling_the_board_ends_game_with_board_full() {
        // 2x2-cell board; eating the last free cell leaves nowhere for food.
        let settings = SimulationSettings {
            board_width: 40,
            board_height: 40,
            ..test_settings()
        };
        let mut simulation = SnakeSimulation::new(settings, 42).unwrap();
        simulation.set_body(vec![
            Point::new(0, 0),
            Point::new(20, 0),
            Point::new(20, 20),
        ]);
        simulation.force_direction(Direction::Down);
        simulation.set_food(Point::new(0, 20));

        simulation.tick();

        assert_eq!(simulation.snake_len(), 4);
        assert_eq!(simulation.score(), 10);
        assert_eq!(simulation.phase(), GamePhase::Over);
        assert_eq!(simulation.end_reason(), Some(EndReason::BoardFull));
    }

    #[test]
    fn test_same_seed_reproduces_food_sequence() {
        let mut first = SnakeSimulation::new(test_settings(), 7).unwrap();
        let mut second = SnakeSimulation::new(test_settings(), 7).unwrap();

        assert_eq!(first.food(), second.food());
        for _ in 0..5 {
            first.place_food();
            second.place_food();
            assert_eq!(first.food(), second.food());
        }
    }

    #[test]
    fn test_invalid_settings_rejected_at_construction() {
        let settings = SimulationSettings {
            grid_size: 0,
            ..test_settings()
        };
        assert!(SnakeSimulation::new(settings, 42).is_err());
    }
}
