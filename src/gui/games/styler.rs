//! CSS Styler game screen
//!
//! Toggle declarations from the palette onto the element, watch the
//! generated CSS, and check against the design. A score of at least 80%
//! passes; below that a random "client request" hints at what is off.

use std::time::Instant;

use eframe::egui::{self, RichText, ScrollArea};

use crate::catalog::STYLER_LEVELS;
use crate::verify::styler::{check, client_request};

use super::super::app::{CodeQuestApp, Route, LEVEL_ADVANCE_DELAY};
use super::super::theme::{
    ACCENT_CYAN, ACCENT_GREEN, ACCENT_RED, BG_HIGHLIGHT, BG_PRIMARY, BG_SECONDARY, TEXT_DIM,
    TEXT_MUTED, TEXT_PRIMARY,
};
use super::{all_done_banner, game_header};

impl CodeQuestApp {
    pub(crate) fn render_styler_game(&mut self, ctx: &egui::Context, now: Instant) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                if self.styler.all_done {
                    all_done_banner(self, ui, "Style the Scene");
                    return;
                }

                let level_idx = self.styler.level_idx;
                let level = &STYLER_LEVELS[level_idx];

                if game_header(ui, level.title, level.id, STYLER_LEVELS.len(), level.difficulty) {
                    self.navigate(Route::LearningPath);
                    return;
                }
                ui.add_space(8.0);
                ui.label(RichText::new(level.description).color(TEXT_DIM));
                ui.label(
                    RichText::new(format!("Design brief: {}", level.target_image))
                        .small()
                        .color(TEXT_MUTED),
                );
                ui.add_space(12.0);

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.columns(2, |columns| {
                            self.render_property_palette(&mut columns[0], level_idx);
                            self.render_css_preview(&mut columns[1], level_idx);
                        });

                        ui.add_space(12.0);
                        self.render_styler_controls(ui, level_idx, now);
                    });
            });
    }

    fn render_property_palette(&mut self, ui: &mut egui::Ui, level_idx: usize) {
        let level = &STYLER_LEVELS[level_idx];
        ui.label(RichText::new("PROPERTIES").strong().color(ACCENT_CYAN));
        ui.add_space(4.0);

        for (i, prop) in level.available_properties.iter().enumerate() {
            let applied = self.styler.applied.contains(&i);
            egui::Frame::NONE
                .fill(if applied { BG_HIGHLIGHT } else { BG_SECONDARY })
                .corner_radius(6.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{}: {};", prop.property, prop.value))
                                    .monospace()
                                    .color(TEXT_PRIMARY),
                            );
                            ui.label(RichText::new(prop.description).small().color(TEXT_MUTED));
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                let label = if applied { "Remove" } else { "Apply" };
                                if ui.button(label).clicked() {
                                    if applied {
                                        self.styler.applied.retain(|&a| a != i);
                                    } else {
                                        self.styler.applied.push(i);
                                    }
                                    self.styler.feedback = None;
                                }
                            },
                        );
                    });
                });
            ui.add_space(4.0);
        }
    }

    fn render_css_preview(&self, ui: &mut egui::Ui, level_idx: usize) {
        let level = &STYLER_LEVELS[level_idx];
        ui.label(RichText::new("GENERATED CSS").strong().color(ACCENT_CYAN));
        ui.add_space(4.0);

        egui::Frame::NONE
            .fill(BG_SECONDARY)
            .corner_radius(6.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new(level.html).monospace().small().color(TEXT_MUTED));
                ui.add_space(8.0);

                let mut css = String::from(".target-element {\n");
                for &i in &self.styler.applied {
                    let prop = &level.available_properties[i];
                    css.push_str(&format!("  {}: {};\n", prop.property, prop.value));
                }
                css.push('}');
                ui.label(RichText::new(css).monospace().color(TEXT_PRIMARY));
            });
    }

    fn render_styler_controls(&mut self, ui: &mut egui::Ui, level_idx: usize, now: Instant) {
        let level = &STYLER_LEVELS[level_idx];
        let checking_disabled = self.styler.advance_at.is_some();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!checking_disabled, egui::Button::new("Check design"))
                .clicked()
            {
                let applied: Vec<_> = self
                    .styler
                    .applied
                    .iter()
                    .map(|&i| level.available_properties[i].clone())
                    .collect();
                let verdict = check(&applied, &level.target_css);

                if verdict.passed {
                    self.styler.feedback = Some((
                        format!("Great work! {}% match - the client loves it.", verdict.percent),
                        true,
                    ));
                    self.styler.advance_at = Some(now + LEVEL_ADVANCE_DELAY);
                    let (xp, id) = (level.xp_reward, format!("css-{}", level.id));
                    self.award_game_xp(xp, &id);
                    if verdict.percent == 100 {
                        let events = self
                            .store
                            .unlock_achievement(crate::progress::AchievementId::PerfectScore);
                        self.push_events(events);
                    }
                } else {
                    let request = client_request(&mut rand::thread_rng());
                    self.styler.feedback = Some((
                        format!("{}% match. Client says: \"{}\"", verdict.percent, request),
                        false,
                    ));
                }
            }

            if ui
                .add_enabled(!checking_disabled, egui::Button::new("Reset"))
                .clicked()
            {
                self.styler.applied.clear();
                self.styler.feedback = None;
            }
        });

        if let Some((message, passed)) = &self.styler.feedback {
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
