//! Learning path screen
//!
//! The ten-step track rendered as a vertical trail of level cards.
//! Steps with a mini-game open it; the rest open a challenge dialog
//! whose completion awards XP, marks the step done and unlocks the next
//! one.

use eframe::egui::{self, ProgressBar, RichText, ScrollArea};

use crate::catalog::PATH_LEVELS;

use super::app::{CodeQuestApp, Route};
use super::theme::{
    ACCENT_GREEN, BG_PRIMARY, BG_SECONDARY, STATE_AVAILABLE, STATE_COMPLETED, STATE_LOCKED,
    TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};

impl CodeQuestApp {
    pub(crate) fn render_learning_path(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new("Web Development Path")
                                .size(24.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                        ui.label(
                            RichText::new("Complete each step to unlock the next one.")
                                .color(TEXT_DIM),
                        );
                        ui.add_space(16.0);

                        for idx in 0..PATH_LEVELS.len() {
                            self.render_path_card(ui, idx);
                            ui.add_space(8.0);
                        }
                    });
            });

        self.render_challenge_dialog(ctx);
    }

    fn render_path_card(&mut self, ui: &mut egui::Ui, idx: usize) {
        let level = &PATH_LEVELS[idx];
        let node = self.path.nodes[idx].clone();

        let (badge, badge_color) = if node.completed {
            ("✔", STATE_COMPLETED)
        } else if node.locked {
            ("🔒", STATE_LOCKED)
        } else {
            ("▶", STATE_AVAILABLE)
        };

        egui::Frame::NONE
            .fill(BG_SECONDARY)
            .corner_radius(8.0)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(badge).size(22.0).color(badge_color));
                    ui.add_space(8.0);

                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("Level {}: {}", level.level, level.title))
                                .strong()
                                .color(if node.locked { TEXT_MUTED } else { TEXT_PRIMARY }),
                        );
                        ui.label(RichText::new(level.description).small().color(TEXT_MUTED));
                        if !node.locked {
                            ui.add(
                                ProgressBar::new(node.progress as f32 / 100.0)
                                    .desired_height(6.0)
                                    .fill(ACCENT_GREEN)
                                    .corner_radius(3.0),
                            );
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if node.locked {
                            ui.label(RichText::new("Locked").small().color(STATE_LOCKED));
                        } else if let Some(game) = level.game {
                            if ui.button("Play").clicked() {
                                self.navigate(Route::Game(game));
                            }
                        } else if !node.completed {
                            if ui.button("Start challenge").clicked() {
                                self.path.open_dialog = Some(idx);
                            }
                        }
                    });
                });
            });
    }

    /// Modal for the non-game steps. Completing it awards XP, marks the
    /// step done and unlocks the following one.
    fn render_challenge_dialog(&mut self, ctx: &egui::Context) {
        let Some(idx) = self.path.open_dialog else {
            return;
        };
        let level = &PATH_LEVELS[idx];
        let mut open = true;
        let mut completed = false;
        let mut closed = false;

        egui::Window::new(format!("Level {}: {}", level.level, level.title))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(RichText::new(level.description).color(TEXT_DIM));
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui
                        .add(
                            egui::Button::new(
                                RichText::new("Complete challenge")
                                    .strong()
                                    .color(BG_PRIMARY),
                            )
                            .fill(ACCENT_GREEN)
                            .corner_radius(6.0),
                        )
                        .clicked()
                    {
                        completed = true;
                    }
                    if ui.button("Close").clicked() {
                        closed = true;
                    }
                });
            });

        if completed {
            self.complete_path_level(idx);
            self.path.open_dialog = None;
        } else if !open || closed {
            self.path.open_dialog = None;
        }
    }

    fn complete_path_level(&mut self, idx: usize) {
        {
            let node = &mut self.path.nodes[idx];
            node.completed = true;
            node.progress = 100;
        }
        if let Some(next) = self.path.nodes.get_mut(idx + 1) {
            next.locked = false;
        }

        let id = format!("path-{}", PATH_LEVELS[idx].level);
        self.complete_step(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_completing_a_step_unlocks_the_next() {
        let start = Instant::now();
        let mut app = CodeQuestApp::new(start);
        app.store.poll_load(start + crate::progress::LOAD_DELAY);

        assert!(app.path.nodes[4].locked);
        app.complete_path_level(3);

        assert!(app.path.nodes[3].completed);
        assert_eq!(app.path.nodes[3].progress, 100);
        assert!(!app.path.nodes[4].locked);
    }

    #[test]
    fn test_step_awards_flat_challenge_xp_only() {
        use crate::progress::XpRewards;

        let start = Instant::now();
        let mut app = CodeQuestApp::new(start);
        app.store.poll_load(start + crate::progress::LOAD_DELAY);
        let before = app.store.stats().clone();

        app.complete_path_level(3);

        assert_eq!(
            app.store.stats().xp,
            before.xp + XpRewards::CHALLENGE_DONE
        );
        assert_eq!(
            app.store.stats().completed_challenges,
            before.completed_challenges + 1
        );
    }

    #[test]
    fn test_completing_the_last_step_has_no_next() {
        let start = Instant::now();
        let mut app = CodeQuestApp::new(start);
        let last = app.path.nodes.len() - 1;
        app.complete_path_level(last);
        assert!(app.path.nodes[last].completed);
    }
}
