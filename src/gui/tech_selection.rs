//! Tech path selection screen
//!
//! Two-stage picker: choose a path (frontend, mobile, ...), then one of
//! its technologies. Continue jumps straight into the technology's game
//! when it has one, otherwise into the learning path.

use eframe::egui::{self, RichText, ScrollArea};

use crate::catalog::TECH_PATHS;

use super::app::{CodeQuestApp, Route};
use super::theme::{
    ACCENT_CYAN, ACCENT_GREEN, BG_PRIMARY, BG_SECONDARY, BG_SELECTED, TEXT_DIM, TEXT_MUTED,
    TEXT_PRIMARY,
};

impl CodeQuestApp {
    pub(crate) fn render_tech_selection(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new("Choose your path")
                                .size(24.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                        ui.label(
                            RichText::new("Pick a direction, then the technology to start with.")
                                .color(TEXT_DIM),
                        );
                        ui.add_space(16.0);

                        self.render_paths(ui);

                        if let Some(path_idx) = self.tech.selected_path {
                            ui.add_space(16.0);
                            self.render_technologies(ui, path_idx);
                        }

                        ui.add_space(24.0);
                        ui.vertical_centered(|ui| {
                            if ui
                                .add(
                                    egui::Button::new(
                                        RichText::new("Continue")
                                            .size(16.0)
                                            .strong()
                                            .color(BG_PRIMARY),
                                    )
                                    .fill(ACCENT_GREEN)
                                    .corner_radius(8.0)
                                    .min_size(egui::Vec2::new(160.0, 36.0)),
                                )
                                .clicked()
                            {
                                self.continue_from_selection();
                            }
                        });
                    });
            });
    }

    fn render_paths(&mut self, ui: &mut egui::Ui) {
        ui.columns(TECH_PATHS.len(), |columns| {
            for (i, (column, path)) in columns.iter_mut().zip(TECH_PATHS.iter()).enumerate() {
                let selected = self.tech.selected_path == Some(i);
                let fill = if selected { BG_SELECTED } else { BG_SECONDARY };

                let response = egui::Frame::NONE
                    .fill(fill)
                    .corner_radius(8.0)
                    .inner_margin(16.0)
                    .show(column, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(path.icon).size(28.0));
                            ui.label(RichText::new(path.name).strong().color(TEXT_PRIMARY));
                            ui.label(RichText::new(path.description).small().color(TEXT_MUTED));
                        });
                    })
                    .response
                    .interact(egui::Sense::click());

                if response.clicked() {
                    self.tech.selected_path = Some(i);
                    self.tech.selected_tech = None;
                }
            }
        });
    }

    fn render_technologies(&mut self, ui: &mut egui::Ui, path_idx: usize) {
        let path = &TECH_PATHS[path_idx];
        ui.label(
            RichText::new(format!("Technologies in {}", path.name))
                .strong()
                .color(ACCENT_CYAN),
        );
        ui.add_space(8.0);

        ui.columns(path.technologies.len(), |columns| {
            for (i, (column, tech)) in columns.iter_mut().zip(path.technologies.iter()).enumerate()
            {
                let selected = self.tech.selected_tech == Some(i);
                let fill = if selected { BG_SELECTED } else { BG_SECONDARY };

                let response = egui::Frame::NONE
                    .fill(fill)
                    .corner_radius(8.0)
                    .inner_margin(12.0)
                    .show(column, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(tech.icon).size(24.0));
                            ui.label(RichText::new(tech.name).strong().color(TEXT_PRIMARY));
                            ui.label(RichText::new(tech.description).small().color(TEXT_MUTED));
                        });
                    })
                    .response
                    .interact(egui::Sense::click());

                if response.clicked() {
                    self.tech.selected_tech = Some(i);
                }
            }
        });
    }

    /// Continue requires a technology; with none selected it surfaces an
    /// error toast instead of navigating.
    fn continue_from_selection(&mut self) {
        let Some(path_idx) = self.tech.selected_path else {
            self.push_error("Pick a path first");
            return;
        };
        let Some(tech_idx) = self.tech.selected_tech else {
            self.push_error("Pick a technology to continue");
            return;
        };

        let tech = &TECH_PATHS[path_idx].technologies[tech_idx];
        match tech.game {
            Some(game) => self.navigate(Route::Game(game)),
            None => self.navigate(Route::LearningPath),
        }
    }
}
