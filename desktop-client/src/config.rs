use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use snake_engine::config::{self, Validate};
use snake_engine::sim::SimulationSettings;

const CONFIG_FILE_NAME: &str = "snake_client_config.yaml";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub grid_size: u32,
    pub board_width: u32,
    pub board_height: u32,
    pub tick_interval_ms: u64,
    pub score_increment: u32,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size == 0 {
            return Err("grid_size must be greater than 0".to_string());
        }
        if self.board_width == 0 || self.board_width % self.grid_size != 0 {
            return Err("board_width must be a positive multiple of grid_size".to_string());
        }
        if self.board_height == 0 || self.board_height % self.grid_size != 0 {
            return Err("board_height must be a positive multiple of grid_size".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("tick_interval_ms must be between 50 and 5000".to_string());
        }
        if self.score_increment == 0 {
            return Err("score_increment must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            board_width: 640,
            board_height: 640,
            tick_interval_ms: 150,
            score_increment: 10,
        }
    }
}

impl From<&GameConfig> for SimulationSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            grid_size: config.grid_size as i32,
            board_width: config.board_width as i32,
            board_height: config.board_height as i32,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            score_increment: config.score_increment,
        }
    }
}

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load(path_override: Option<&str>) -> Result<Config, String> {
    let path = match path_override {
        Some(path) => PathBuf::from(path),
        None => default_config_path(),
    };
    config::load_or_default(&path)
}
