//! Dashboard screen
//!
//! Stat cards (level, streak, challenges, achievements), the overall
//! progress bar, the achievements gallery and the continue-learning
//! call-to-action. Shows a loading spinner until the mock snapshot
//! arrives.

use eframe::egui::{self, ProgressBar, RichText, ScrollArea};

use crate::progress::{Achievement, AchievementId};

use super::app::{CodeQuestApp, Route};
use super::theme::{
    ACCENT_CYAN, ACCENT_GREEN, ACCENT_PURPLE, ACCENT_YELLOW, BG_HIGHLIGHT, BG_PRIMARY,
    BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};

impl CodeQuestApp {
    pub(crate) fn render_dashboard(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                if self.store.is_loading() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.spinner();
                        ui.label(RichText::new("Loading your progress...").color(TEXT_MUTED));
                    });
                    return;
                }

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new("Welcome back, explorer!")
                                .size(24.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                        ui.label(
                            RichText::new("Pick up where you left off and keep the streak alive.")
                                .color(TEXT_DIM),
                        );
                        ui.add_space(16.0);

                        self.render_stat_cards(ui);
                        ui.add_space(8.0);
                        self.render_check_in(ui);
                        ui.add_space(16.0);
                        self.render_overall_progress(ui);
                        ui.add_space(16.0);
                        self.render_achievements(ui);
                        ui.add_space(24.0);

                        ui.vertical_centered(|ui| {
                            if ui
                                .add(
                                    egui::Button::new(
                                        RichText::new("Continue learning")
                                            .size(16.0)
                                            .strong()
                                            .color(BG_PRIMARY),
                                    )
                                    .fill(ACCENT_GREEN)
                                    .corner_radius(8.0)
                                    .min_size(egui::Vec2::new(200.0, 40.0)),
                                )
                                .clicked()
                            {
                                self.navigate(Route::TechSelection);
                            }
                        });
                    });
            });
    }

    fn render_stat_cards(&self, ui: &mut egui::Ui) {
        let stats = self.store.stats();
        let cards = [
            ("Level", format!("{}", stats.level), ACCENT_CYAN),
            ("Day streak", format!("{} 🔥", stats.streak), ACCENT_YELLOW),
            (
                "Challenges",
                format!("{} / {}", stats.completed_challenges, stats.total_challenges),
                ACCENT_GREEN,
            ),
            (
                "Achievements",
                format!("{} / {}", stats.achievements.len(), Achievement::total_count()),
                ACCENT_PURPLE,
            ),
        ];

        ui.columns(cards.len(), |columns| {
            for (column, (label, value, color)) in columns.iter_mut().zip(cards) {
                egui::Frame::NONE
                    .fill(BG_SECONDARY)
                    .corner_radius(8.0)
                    .inner_margin(16.0)
                    .show(column, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(value).size(24.0).strong().color(color));
                            ui.label(RichText::new(label).small().color(TEXT_MUTED));
                        });
                    });
            }
        });
    }

    /// Once-per-session streak check-in
    fn render_check_in(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.checked_in {
                ui.label(RichText::new("Checked in for today ✔").small().color(TEXT_MUTED));
                return;
            }
            if ui.button("🔥 Daily check-in").clicked() {
                self.checked_in = true;
                let mut events = self.store.increase_streak();
                if self.store.stats().streak >= 3 {
                    events.extend(self.store.unlock_achievement(AchievementId::Consistency));
                }
                self.push_events(events);
            }
        });
    }

    fn render_overall_progress(&self, ui: &mut egui::Ui) {
        let stats = self.store.stats();
        egui::Frame::NONE
            .fill(BG_SECONDARY)
            .corner_radius(8.0)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Course progress").strong().color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{}%", stats.percent_complete()))
                                .color(ACCENT_GREEN)
                                .strong(),
                        );
                    });
                });
                ui.add(
                    ProgressBar::new(
                        stats.completed_challenges as f32 / stats.total_challenges.max(1) as f32,
                    )
                    .fill(ACCENT_GREEN)
                    .corner_radius(4.0),
                );
            });
    }

    fn render_achievements(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new("ACHIEVEMENTS").strong().color(ACCENT_YELLOW));
        ui.add_space(8.0);

        ui.columns(3, |columns| {
            for (i, id) in AchievementId::all().iter().enumerate() {
                let achievement = Achievement::get(*id);
                let unlocked = self.store.has_achievement(*id);
                let column = &mut columns[i % 3];

                let fill = if unlocked { BG_HIGHLIGHT } else { BG_SECONDARY };
                egui::Frame::NONE
                    .fill(fill)
                    .corner_radius(8.0)
                    .inner_margin(12.0)
                    .show(column, |ui| {
                        ui.horizontal(|ui| {
                            let icon = if unlocked { achievement.icon } else { "🔒" };
                            ui.label(RichText::new(icon).size(24.0));
                            ui.vertical(|ui| {
                                let name_color = if unlocked { TEXT_PRIMARY } else { TEXT_MUTED };
                                ui.label(
                                    RichText::new(achievement.name).strong().color(name_color),
                                );
                                ui.label(
                                    RichText::new(achievement.description)
                                        .small()
                                        .color(TEXT_MUTED),
                                );
                            });
                        });
                    });
                column.add_space(8.0);
            }
        });
    }
}
