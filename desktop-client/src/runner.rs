use snake_engine::log;
use snake_engine::session::{GameBroadcaster, GameSnapshot, SessionCommand, SnakeSession};
use snake_engine::sim::{SimulationSettings, SnakeSimulation};
use tokio::sync::mpsc;

use crate::state::SharedState;

#[derive(Clone)]
struct LocalBroadcaster {
    shared_state: SharedState,
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        self.shared_state.set_snapshot(snapshot);
    }

    async fn broadcast_game_over(&self, snapshot: GameSnapshot) {
        log!("game over with score {}", snapshot.score);
        self.shared_state.set_snapshot(snapshot);
    }
}

pub async fn run_game(
    settings: SimulationSettings,
    seed: u64,
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<SessionCommand>,
) {
    let simulation = match SnakeSimulation::new(settings, seed) {
        Ok(simulation) => simulation,
        Err(error) => {
            log!("failed to create simulation: {}", error);
            shared_state.set_error(error);
            return;
        }
    };

    let broadcaster = LocalBroadcaster { shared_state };
    SnakeSession::run(simulation, command_rx, broadcaster).await;
}
