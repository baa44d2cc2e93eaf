use eframe::egui;
use snake_engine::session::{GameSnapshot, SessionCommand};
use snake_engine::sim::{Direction, EndReason, GamePhase};
use tokio::sync::mpsc;

use crate::state::SharedState;

const SWIPE_DEAD_ZONE: f32 = 20.0;

pub struct SnakeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<SessionCommand>,
    last_input_direction: Option<Direction>,
    swipe_origin: Option<egui::Pos2>,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<SessionCommand>,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            last_input_direction: None,
            swipe_origin: None,
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let mut requested = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowUp) {
                Some(Direction::Up)
            } else if i.key_pressed(egui::Key::ArrowDown) {
                Some(Direction::Down)
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                Some(Direction::Left)
            } else if i.key_pressed(egui::Key::ArrowRight) {
                Some(Direction::Right)
            } else {
                None
            }
        });

        if requested.is_none() {
            requested = self.detect_swipe(ctx);
        }

        if let Some(direction) = requested
            && Some(direction) != self.last_input_direction
        {
            let _ = self.command_tx.send(SessionCommand::Turn(direction));
            self.last_input_direction = Some(direction);
        }
    }

    /// Swipe = press, drag past the dead zone, release. The dominant axis of
    /// the drag picks the direction.
    fn detect_swipe(&mut self, ctx: &egui::Context) -> Option<Direction> {
        let swipe_origin = &mut self.swipe_origin;
        ctx.input(|i| {
            if i.pointer.any_pressed() {
                *swipe_origin = i.pointer.press_origin();
            }

            if !i.pointer.any_released() {
                return None;
            }
            let origin = swipe_origin.take()?;
            let end = i.pointer.latest_pos()?;

            let delta = end - origin;
            if delta.x.abs() < SWIPE_DEAD_ZONE && delta.y.abs() < SWIPE_DEAD_ZONE {
                return None;
            }

            if delta.x.abs() > delta.y.abs() {
                if delta.x > 0.0 {
                    Some(Direction::Right)
                } else {
                    Some(Direction::Left)
                }
            } else if delta.y > 0.0 {
                Some(Direction::Down)
            } else {
                Some(Direction::Up)
            }
        })
    }

    fn render_board(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let board_size = egui::Vec2::new(
            snapshot.board_width as f32,
            snapshot.board_height as f32,
        );
        let (response, painter) = ui.allocate_painter(board_size, egui::Sense::hover());

        let rect = response.rect;
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(0x10, 0x30, 0x10));

        let cell = egui::Vec2::splat(snapshot.grid_size as f32);

        let food_pos = rect.min + egui::vec2(snapshot.food.x as f32, snapshot.food.y as f32);
        painter.rect_filled(
            egui::Rect::from_min_size(food_pos, cell),
            0.0,
            egui::Color32::from_rgb(0xD0, 0x30, 0x30),
        );

        for (index, segment) in snapshot.segments.iter().enumerate() {
            let pos = rect.min + egui::vec2(segment.x as f32, segment.y as f32);
            let color = if index == 0 {
                egui::Color32::from_rgb(0xB0, 0xE0, 0x40)
            } else {
                egui::Color32::from_rgb(0x40, 0xA0, 0x40)
            };
            painter.rect_filled(egui::Rect::from_min_size(pos, cell), 0.0, color);
        }
    }

    fn render_game_over(&mut self, ctx: &egui::Context, snapshot: &GameSnapshot) {
        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                let reason = match snapshot.end_reason {
                    Some(EndReason::WallCollision) => "You hit a wall.",
                    Some(EndReason::SelfCollision) => "You ran into yourself.",
                    Some(EndReason::BoardFull) => "You filled the whole board!",
                    None => "",
                };
                if !reason.is_empty() {
                    ui.label(reason);
                }
                ui.label(format!("Final score: {}", snapshot.score));
                if ui.button("Play Again").clicked() {
                    let _ = self.command_tx.send(SessionCommand::Restart);
                    self.last_input_direction = None;
                }
            });
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(error) = self.shared_state.get_error() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading("Error");
                ui.label(error);
            });
            return;
        }

        let snapshot = self.shared_state.get_snapshot();

        egui::CentralPanel::default().show(ctx, |ui| match &snapshot {
            Some(snapshot) => {
                ui.heading(format!("Score: {}", snapshot.score));
                ui.separator();
                self.render_board(ui, snapshot);
            }
            None => {
                ui.heading("Waiting for game to start...");
                ui.spinner();
            }
        });

        if let Some(snapshot) = &snapshot {
            if snapshot.phase == GamePhase::Over {
                self.render_game_over(ctx, snapshot);
            } else {
                self.handle_input(ctx);
            }
        }

        ctx.request_repaint();
    }
}
