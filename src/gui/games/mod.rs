//! Mini-game screens
//!
//! One module per game plus the shared chrome (header, level stepper,
//! completion banner). The Ranger and Forge games share the card-ladder
//! screen in `challenge`.

mod blueprint;
mod challenge;
mod commander;
mod styler;

use std::time::Instant;

use eframe::egui::{self, RichText};

use crate::catalog::{Difficulty, GameKind};

use super::app::{CodeQuestApp, Route};
use super::theme::{
    ACCENT_CYAN, ACCENT_GREEN, ACCENT_RED, ACCENT_YELLOW, BG_SECONDARY, TEXT_MUTED, TEXT_PRIMARY,
};

impl CodeQuestApp {
    pub(crate) fn render_game(&mut self, ctx: &egui::Context, kind: GameKind, now: Instant) {
        match kind {
            GameKind::HtmlBlueprint => self.render_blueprint_game(ctx, now),
            GameKind::CssStyler => self.render_styler_game(ctx, now),
            GameKind::JsCommander => self.render_commander_game(ctx, now),
            GameKind::ReactNativeRanger | GameKind::FlutterForge => {
                self.render_challenge_game(ctx, kind)
            }
        }
    }
}

pub(crate) fn difficulty_color(difficulty: Difficulty) -> egui::Color32 {
    match difficulty {
        Difficulty::Beginner => ACCENT_GREEN,
        Difficulty::Intermediate => ACCENT_YELLOW,
        Difficulty::Advanced => ACCENT_RED,
    }
}

/// Shared game header: back link, title, level counter
pub(crate) fn game_header(
    ui: &mut egui::Ui,
    title: &str,
    level_no: u32,
    level_count: usize,
    difficulty: Difficulty,
) -> bool {
    let mut back = false;
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("< Back").color(TEXT_MUTED))
                    .clicked()
                {
                    back = true;
                }
                ui.add_space(12.0);
                ui.label(RichText::new(title).size(18.0).strong().color(TEXT_PRIMARY));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(difficulty.label())
                            .small()
                            .color(difficulty_color(difficulty)),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("Level {} / {}", level_no, level_count))
                            .color(ACCENT_CYAN),
                    );
                });
            });
        });
    back
}

/// Banner shown once every level of a game is cleared
pub(crate) fn all_done_banner(app: &mut CodeQuestApp, ui: &mut egui::Ui, title: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(RichText::new("🏆").size(48.0));
        ui.label(
            RichText::new(format!("{} complete!", title))
                .size(24.0)
                .strong()
                .color(ACCENT_GREEN),
        );
        ui.label(
            RichText::new("You cleared every level. On to the next technology!")
                .color(TEXT_MUTED),
        );
        ui.add_space(16.0);
        if ui.button("Back to learning path").clicked() {
            app.navigate(Route::LearningPath);
        }
    });
}
