//! Landing page
//!
//! Hero section with the product pitch, feature cards for every
//! mini-game, and the call-to-action that leads into auth.

use eframe::egui::{self, RichText, ScrollArea, Vec2};

use crate::catalog::GameKind;

use super::app::{CodeQuestApp, Route};
use super::theme::{
    ACCENT_CYAN, ACCENT_GREEN, BG_PRIMARY, BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};

const GAME_ICONS: [(&str, GameKind); 5] = [
    ("🏗", GameKind::HtmlBlueprint),
    ("🎨", GameKind::CssStyler),
    ("🤖", GameKind::JsCommander),
    ("📱", GameKind::ReactNativeRanger),
    ("💙", GameKind::FlutterForge),
];

impl CodeQuestApp {
    pub(crate) fn render_landing(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(24.0))
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.label(
                                RichText::new("⚡ CodeQuest")
                                    .size(42.0)
                                    .strong()
                                    .color(TEXT_PRIMARY),
                            );
                            ui.add_space(8.0);
                            ui.label(
                                RichText::new("Learn to code by playing")
                                    .size(20.0)
                                    .color(ACCENT_CYAN),
                            );
                            ui.label(
                                RichText::new(
                                    "Master HTML, CSS, JavaScript, React Native and Flutter \
                                     through bite-sized games. Earn XP, keep your streak, \
                                     unlock achievements.",
                                )
                                .color(TEXT_DIM),
                            );
                            ui.add_space(24.0);

                            if ui
                                .add_sized(
                                    Vec2::new(200.0, 40.0),
                                    egui::Button::new(
                                        RichText::new("Start your quest")
                                            .size(16.0)
                                            .strong()
                                            .color(BG_PRIMARY),
                                    )
                                    .fill(ACCENT_GREEN)
                                    .corner_radius(8.0),
                                )
                                .clicked()
                            {
                                self.navigate(Route::Auth);
                            }
                            ui.add_space(40.0);
                        });

                        self.render_feature_cards(ui);
                    });
            });
    }

    fn render_feature_cards(&mut self, ui: &mut egui::Ui) {
        ui.columns(GAME_ICONS.len(), |columns| {
            for (column, (icon, game)) in columns.iter_mut().zip(GAME_ICONS) {
                egui::Frame::NONE
                    .fill(BG_SECONDARY)
                    .corner_radius(8.0)
                    .inner_margin(16.0)
                    .show(column, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(icon).size(32.0));
                            ui.label(
                                RichText::new(game.title())
                                    .strong()
                                    .color(TEXT_PRIMARY),
                            );
                            ui.label(
                                RichText::new(game.tagline())
                                    .small()
                                    .color(TEXT_MUTED),
                            );
                        });
                    });
            }
        });
    }
}
