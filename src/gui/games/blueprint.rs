//! HTML Blueprint game screen
//!
//! Click tags from the palette to place them in order, then check the
//! structure against the level's blueprint. A passed level awards its XP
//! and auto-advances after a short delay.

use std::time::Instant;

use eframe::egui::{self, RichText, ScrollArea};

use crate::catalog::BLUEPRINT_LEVELS;
use crate::verify::blueprint::order_is_correct;

use super::super::app::{CodeQuestApp, Route, LEVEL_ADVANCE_DELAY};
use super::super::theme::{
    ACCENT_CYAN, ACCENT_GREEN, ACCENT_RED, BG_HIGHLIGHT, BG_PRIMARY, BG_SECONDARY, TEXT_DIM,
    TEXT_MUTED, TEXT_PRIMARY,
};
use super::{all_done_banner, game_header};

impl CodeQuestApp {
    pub(crate) fn render_blueprint_game(&mut self, ctx: &egui::Context, now: Instant) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                if self.blueprint.all_done {
                    all_done_banner(self, ui, "Build the Blueprint");
                    return;
                }

                let level_idx = self.blueprint.level_idx;
                let level = &BLUEPRINT_LEVELS[level_idx];

                if game_header(ui, level.title, level.id, BLUEPRINT_LEVELS.len(), level.difficulty)
                {
                    self.navigate(Route::LearningPath);
                    return;
                }
                ui.add_space(8.0);
                ui.label(RichText::new(level.description).color(TEXT_DIM));
                ui.label(
                    RichText::new(format!("Target: {}", level.target_preview))
                        .small()
                        .color(TEXT_MUTED),
                );
                ui.add_space(12.0);

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.columns(2, |columns| {
                            self.render_tag_palette(&mut columns[0], level_idx);
                            self.render_placed_area(&mut columns[1], level_idx);
                        });

                        ui.add_space(12.0);
                        self.render_blueprint_controls(ui, level_idx, now);
                    });
            });
    }

    fn render_tag_palette(&mut self, ui: &mut egui::Ui, level_idx: usize) {
        let level = &BLUEPRINT_LEVELS[level_idx];
        ui.label(RichText::new("AVAILABLE TAGS").strong().color(ACCENT_CYAN));
        ui.add_space(4.0);

        for tag in &level.tags {
            let used = self.blueprint.placed.contains(&tag.id);
            egui::Frame::NONE
                .fill(if used { BG_SECONDARY } else { BG_HIGHLIGHT })
                .corner_radius(6.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(tag.tag)
                                    .monospace()
                                    .color(if used { TEXT_MUTED } else { TEXT_PRIMARY }),
                            );
                            ui.label(RichText::new(tag.description).small().color(TEXT_MUTED));
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if !used && ui.button("Place").clicked() {
                                    self.blueprint.placed.push(tag.id);
                                }
                            },
                        );
                    });
                });
            ui.add_space(4.0);
        }
    }

    fn render_placed_area(&mut self, ui: &mut egui::Ui, level_idx: usize) {
        let level = &BLUEPRINT_LEVELS[level_idx];
        ui.label(RichText::new("YOUR STRUCTURE").strong().color(ACCENT_CYAN));
        ui.add_space(4.0);

        if self.blueprint.placed.is_empty() {
            ui.label(
                RichText::new("Place tags here in the order they should appear.")
                    .color(TEXT_MUTED),
            );
            return;
        }

        let mut remove: Option<usize> = None;
        for (pos, id) in self.blueprint.placed.iter().enumerate() {
            let Some(tag) = level.tags.iter().find(|t| t.id == *id) else {
                continue;
            };
            egui::Frame::NONE
                .fill(BG_SECONDARY)
                .corner_radius(6.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("{}.", pos + 1)).color(TEXT_MUTED).small(),
                        );
                        ui.label(RichText::new(tag.tag).monospace().color(TEXT_PRIMARY));
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("✖").clicked() {
                                    remove = Some(pos);
                                }
                            },
                        );
                    });
                });
            ui.add_space(4.0);
        }
        if let Some(pos) = remove {
            self.blueprint.placed.remove(pos);
            self.blueprint.feedback = None;
        }
    }

    fn render_blueprint_controls(&mut self, ui: &mut egui::Ui, level_idx: usize, now: Instant) {
        let level = &BLUEPRINT_LEVELS[level_idx];
        let checking_disabled = self.blueprint.advance_at.is_some();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!checking_disabled, egui::Button::new("Check structure"))
                .clicked()
            {
                if order_is_correct(&self.blueprint.placed, &level.correct_order) {
                    self.blueprint.feedback =
                        Some(("Perfect! That's exactly the right structure.".into(), true));
                    self.blueprint.advance_at = Some(now + LEVEL_ADVANCE_DELAY);
                    let (xp, id) = (level.xp_reward, format!("html-{}", level.id));
                    self.award_game_xp(xp, &id);
                } else {
                    self.blueprint.feedback = Some((
                        "Not quite. Check the order and try again.".into(),
                        false,
                    ));
                }
            }

            if ui
                .add_enabled(!checking_disabled, egui::Button::new("Reset"))
                .clicked()
            {
                self.blueprint.placed.clear();
                self.blueprint.feedback = None;
            }
        });

        if let Some((message, passed)) = &self.blueprint.feedback {
            let color = if *passed { ACCENT_GREEN } else { ACCENT_RED };
            ui.label(RichText::new(message).color(color));
        }
        if !level.hints.is_empty() {
            ui.collapsing("Hints", |ui| {
                for hint in &level.hints {
                    ui.label(RichText::new(format!("• {}", hint)).color(TEXT_MUTED));
                }
            });
        }
    }
}
