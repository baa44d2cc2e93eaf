use crate::sim::{EndReason, GamePhase, Point, SnakeSimulation};

/// Immutable copy of the observable simulation state, captured after each
/// step. Renderers only ever see these; the simulation itself stays owned by
/// the session.
#[derive(Clone, Debug)]
pub struct GameSnapshot {
    pub tick: u64,
    /// Body cells, head first.
    pub segments: Vec<Point>,
    pub food: Point,
    pub score: u32,
    pub phase: GamePhase,
    pub end_reason: Option<EndReason>,
    pub grid_size: i32,
    pub board_width: i32,
    pub board_height: i32,
}

impl GameSnapshot {
    pub fn capture(simulation: &SnakeSimulation, tick: u64) -> Self {
        let settings = simulation.settings();
        Self {
            tick,
            segments: simulation.snake().collect(),
            food: simulation.food(),
            score: simulation.score(),
            phase: simulation.phase(),
            end_reason: simulation.end_reason(),
            grid_size: settings.grid_size,
            board_width: settings.board_width,
            board_height: settings.board_height,
        }
    }
}
