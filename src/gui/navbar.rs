//! Top navigation bar
//!
//! Shown on every signed-in screen: brand, navigation buttons, and the
//! level/XP progress readout.

use eframe::egui::{self, ProgressBar, RichText};

use super::app::{CodeQuestApp, Route};
use super::theme::{ACCENT_CYAN, ACCENT_GREEN, BG_SECONDARY, TEXT_MUTED, TEXT_PRIMARY};

impl CodeQuestApp {
    pub(crate) fn render_navbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("navbar")
            .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("⚡ CodeQuest")
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(24.0);

                    for (label, route) in [
                        ("Dashboard", Route::Dashboard),
                        ("Paths", Route::TechSelection),
                        ("Learning Path", Route::LearningPath),
                    ] {
                        let active = self.route == route;
                        let text = if active {
                            RichText::new(label).color(ACCENT_CYAN).strong()
                        } else {
                            RichText::new(label).color(TEXT_MUTED)
                        };
                        if ui.button(text).clicked() {
                            self.navigate(route);
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(RichText::new("Sign out").color(TEXT_MUTED))
                            .clicked()
                        {
                            self.navigate(Route::Landing);
                        }
                        ui.add_space(16.0);

                        let stats = self.store.stats();
                        ui.add_sized(
                            [120.0, 12.0],
                            ProgressBar::new(stats.level_fraction())
                                .fill(ACCENT_GREEN)
                                .corner_radius(4.0),
                        );
                        ui.label(
                            RichText::new(format!("{} / 100 XP", stats.level_progress()))
                                .small()
                                .color(TEXT_MUTED),
                        );
                        ui.label(
                            RichText::new(format!("Lv {}", stats.level))
                                .color(ACCENT_CYAN)
                                .strong(),
                        );
                    });
                });
            });
    }
}
