mod app;
mod config;
mod runner;
mod state;

use clap::Parser;
use eframe::egui;
use snake_engine::sim::SimulationSettings;
use snake_engine::{log, logger};
use tokio::sync::mpsc;

use app::SnakeApp;
use state::SharedState;

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long)]
    config: Option<String>,

    /// Fixed RNG seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client")
    } else {
        None
    };
    logger::init(prefix);

    let loaded_config = config::load(args.config.as_deref())?;
    let settings = SimulationSettings::from(&loaded_config.game);
    let seed = args.seed.unwrap_or_else(rand::random);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let settings_clone = settings.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(runner::run_game(
            settings_clone,
            seed,
            shared_state_clone,
            command_rx,
        ));
    });

    log!("starting session with seed {}", seed);

    let window_width = settings.board_width as f32 + 40.0;
    let window_height = settings.board_height as f32 + 120.0;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window_width, window_height])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(|_cc| Ok(Box::new(SnakeApp::new(shared_state, command_tx)))),
    )?;

    Ok(())
}
