mod session_rng;
mod settings;
mod simulation;
mod snake;
mod types;

pub use session_rng::SessionRng;
pub use settings::SimulationSettings;
pub use simulation::SnakeSimulation;
pub use snake::SnakeBody;
pub use types::{Axis, Direction, EndReason, GamePhase, Point};
