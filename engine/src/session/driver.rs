use tokio::sync::mpsc;
use tokio::time::interval;

use crate::log;
use crate::sim::{Direction, GamePhase, SnakeSimulation};

use super::{GameBroadcaster, GameSnapshot};

/// Input-side requests, applied between ticks.
#[derive(Clone, Copy, Debug)]
pub enum SessionCommand {
    Turn(Direction),
    Restart,
    Quit,
}

pub struct SnakeSession;

impl SnakeSession {
    /// Runs one session to completion: steps the simulation on a fixed
    /// cadence while it is running and broadcasts a snapshot after every
    /// change. Once the game is over no further steps are scheduled; the
    /// loop keeps serving commands until `Restart` re-arms it or `Quit`
    /// (or a closed command channel) ends it.
    pub async fn run(
        mut simulation: SnakeSimulation,
        mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: impl GameBroadcaster,
    ) {
        let tick_interval = simulation.settings().tick_interval;
        let mut timer = interval(tick_interval);
        let mut tick: u64 = 0;

        broadcaster
            .broadcast_state(GameSnapshot::capture(&simulation, tick))
            .await;

        loop {
            tokio::select! {
                _ = timer.tick(), if simulation.phase() == GamePhase::Running => {
                    simulation.tick();
                    tick += 1;
                    let snapshot = GameSnapshot::capture(&simulation, tick);
                    if simulation.phase() == GamePhase::Over {
                        broadcaster.broadcast_game_over(snapshot).await;
                    } else {
                        broadcaster.broadcast_state(snapshot).await;
                    }
                }
                command = command_rx.recv() => {
                    match command {
                        Some(SessionCommand::Turn(direction)) => {
                            simulation.set_direction(direction);
                        }
                        Some(SessionCommand::Restart) => {
                            simulation.reset();
                            tick = 0;
                            // Fresh interval: ticks skipped while the game
                            // sat finished must not fire in a burst.
                            timer = interval(tick_interval);
                            log!("session restarted");
                            broadcaster
                                .broadcast_state(GameSnapshot::capture(&simulation, tick))
                                .await;
                        }
                        Some(SessionCommand::Quit) | None => {
                            log!("session finished after {} ticks", tick);
                            break;
                        }
                    }
                }
            }
        }
    }
}
