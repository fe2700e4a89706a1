//! JS Commander game screen
//!
//! Code editor on the left, the robot grid and console output on the
//! right. Run executes the script against the level; landing on the star
//! passes the level.

use std::time::Instant;

use eframe::egui::{self, Color32, Pos2, Rect, RichText, ScrollArea, Stroke, TextEdit, Vec2};

use crate::catalog::commander::GRID_SIZE;
use crate::catalog::{Point, COMMANDER_LEVELS};
use crate::verify::run_script;

use super::super::app::{CodeQuestApp, Route, LEVEL_ADVANCE_DELAY};
use super::super::theme::{
    ACCENT_CYAN, ACCENT_GREEN, ACCENT_RED, ACCENT_YELLOW, BG_HIGHLIGHT, BG_PRIMARY, BG_SECONDARY,
    TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};
use super::{all_done_banner, game_header};

const CELL: f32 = 36.0;

impl CodeQuestApp {
    pub(crate) fn render_commander_game(&mut self, ctx: &egui::Context, now: Instant) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                if self.commander.all_done {
                    all_done_banner(self, ui, "Code Commanders");
                    return;
                }

                let level_idx = self.commander.level_idx;
                let level = &COMMANDER_LEVELS[level_idx];

                if game_header(ui, level.title, level.id, COMMANDER_LEVELS.len(), level.difficulty)
                {
                    self.navigate(Route::LearningPath);
                    return;
                }
                ui.add_space(8.0);
                ui.label(RichText::new(level.instructions).color(TEXT_DIM));
                ui.add_space(12.0);

                ui.columns(2, |columns| {
                    self.render_editor(&mut columns[0], level_idx, now);
                    self.render_world(&mut columns[1], level_idx);
                });
            });
    }

    fn render_editor(&mut self, ui: &mut egui::Ui, level_idx: usize, now: Instant) {
        let level = &COMMANDER_LEVELS[level_idx];
        ui.label(RichText::new("EDITOR").strong().color(ACCENT_CYAN));
        ui.add_space(4.0);

        ScrollArea::vertical()
            .id_salt("commander_editor")
            .max_height(260.0)
            .show(ui, |ui| {
                ui.add(
                    TextEdit::multiline(&mut self.commander.code)
                        .code_editor()
                        .desired_rows(14)
                        .desired_width(f32::INFINITY),
                );
            });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let running_locked = self.commander.advance_at.is_some();
            if ui
                .add_enabled(!running_locked, egui::Button::new("▶ Run code"))
                .clicked()
            {
                let report = run_script(level, &self.commander.code);
                if report.reached_star(level) {
                    self.commander.passed = true;
                    self.commander.advance_at = Some(now + LEVEL_ADVANCE_DELAY);
                    let (xp, id) = (level.xp_reward, format!("js-{}", level.id));
                    self.award_game_xp(xp, &id);
                }
                self.commander.report = Some(report);
            }

            if ui
                .add_enabled(!running_locked, egui::Button::new("Reset"))
                .clicked()
            {
                self.commander.code = level.initial_code.to_string();
                self.commander.report = None;
                self.commander.passed = false;
            }
        });

        if self.commander.passed {
            ui.label(RichText::new("⭐ The robot reached the star!").color(ACCENT_GREEN));
        } else if let Some(report) = &self.commander.report {
            if report.error.is_some() {
                ui.label(RichText::new("The run stopped with an error.").color(ACCENT_RED));
            }
        }

        ui.add_space(8.0);
        ui.label(RichText::new("SOLUTION CRITERIA").strong().color(ACCENT_CYAN));
        for criterion in &level.solution_criteria {
            ui.label(RichText::new(format!("• {}", criterion)).small().color(TEXT_DIM));
        }

        if !level.hints.is_empty() {
            ui.collapsing("Hints", |ui| {
                for hint in &level.hints {
                    ui.label(RichText::new(format!("• {}", hint)).color(TEXT_MUTED));
                }
            });
        }
    }

    fn render_world(&mut self, ui: &mut egui::Ui, level_idx: usize) {
        let level = &COMMANDER_LEVELS[level_idx];
        ui.label(RichText::new("WORLD").strong().color(ACCENT_CYAN));
        ui.add_space(4.0);

        let robot = self
            .commander
            .report
            .as_ref()
            .map(|r| r.position)
            .unwrap_or(level.robot_start);

        let size = CELL * GRID_SIZE as f32;
        let (response, painter) = ui.allocate_painter(Vec2::splat(size), egui::Sense::hover());
        let origin = response.rect.min;

        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let cell = Point::new(x, y);
                let rect = Rect::from_min_size(
                    Pos2::new(origin.x + x as f32 * CELL, origin.y + y as f32 * CELL),
                    Vec2::splat(CELL - 2.0),
                );
                let fill = if level.obstacles.contains(&cell) {
                    BG_HIGHLIGHT
                } else {
                    BG_SECONDARY
                };
                painter.rect(rect, 4.0, fill, Stroke::new(1.0, Color32::from_gray(40)), egui::StrokeKind::Inside);

                let glyph = if cell == robot {
                    Some(("🤖", TEXT_PRIMARY))
                } else if cell == level.star {
                    Some(("⭐", ACCENT_YELLOW))
                } else if level.obstacles.contains(&cell) {
                    Some(("⬛", TEXT_MUTED))
                } else {
                    None
                };
                if let Some((glyph, color)) = glyph {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        glyph,
                        egui::FontId::proportional(18.0),
                        color,
                    );
                }
            }
        }

        ui.add_space(8.0);
        ui.label(RichText::new("CONSOLE").strong().color(ACCENT_CYAN));
        egui::Frame::NONE
            .fill(BG_SECONDARY)
            .corner_radius(6.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .id_salt("commander_console")
                    .max_height(140.0)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        match &self.commander.report {
                            Some(report) if !report.log.is_empty() => {
                                for line in &report.log {
                                    let color = if line.starts_with("Error") {
                                        ACCENT_RED
                                    } else {
                                        TEXT_DIM
                                    };
                                    ui.label(RichText::new(line).monospace().small().color(color));
                                }
                            }
                            Some(_) => {
                                ui.label(
                                    RichText::new("(no output)").monospace().small().color(TEXT_MUTED),
                                );
                            }
                            None => {
                                ui.label(
                                    RichText::new("Run your code to see the output.")
                                        .small()
                                        .color(TEXT_MUTED),
                                );
                            }
                        }
                    });
            });
    }
}
