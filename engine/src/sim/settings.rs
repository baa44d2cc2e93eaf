use std::time::Duration;

/// Simulation parameters, fixed at construction.
///
/// `tick_interval` is advisory: the simulation itself is untimed and the
/// session driver owns the cadence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationSettings {
    pub grid_size: i32,
    pub board_width: i32,
    pub board_height: i32,
    pub tick_interval: Duration,
    pub score_increment: u32,
}

impl SimulationSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size <= 0 {
            return Err("grid_size must be positive".to_string());
        }
        if self.board_width <= 0 || self.board_width % self.grid_size != 0 {
            return Err("board_width must be a positive multiple of grid_size".to_string());
        }
        if self.board_height <= 0 || self.board_height % self.grid_size != 0 {
            return Err("board_height must be a positive multiple of grid_size".to_string());
        }
        if self.columns() < 2 || self.rows() < 2 {
            return Err("board must be at least 2x2 cells".to_string());
        }
        if self.tick_interval.is_zero() {
            return Err("tick_interval must be non-zero".to_string());
        }
        if self.score_increment == 0 {
            return Err("score_increment must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn columns(&self) -> i32 {
        self.board_width / self.grid_size
    }

    pub fn rows(&self) -> i32 {
        self.board_height / self.grid_size
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            grid_size: 20,
            board_width: 640,
            board_height: 640,
            tick_interval: Duration::from_millis(150),
            score_increment: 10,
        }
    }
}
