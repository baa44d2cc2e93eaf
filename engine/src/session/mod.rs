mod driver;
mod snapshot;

use std::future::Future;

pub use driver::{SessionCommand, SnakeSession};
pub use snapshot::GameSnapshot;

/// Receives state updates from a running session. Implementations decide how
/// snapshots reach the UI.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;
}
