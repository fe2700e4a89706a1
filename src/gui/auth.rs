//! Sign in / sign up screen
//!
//! Any non-empty credentials are accepted; the submit spinner runs for a
//! fixed delay to mimic a backend round-trip, then lands on the dashboard.

use std::time::Instant;

use eframe::egui::{self, RichText, TextEdit, Vec2};

use super::app::{CodeQuestApp, Route, AUTH_DELAY};
use super::theme::{ACCENT_CYAN, ACCENT_GREEN, BG_PRIMARY, BG_SECONDARY, TEXT_MUTED, TEXT_PRIMARY};

impl CodeQuestApp {
    pub(crate) fn render_auth(&mut self, ctx: &egui::Context, now: Instant) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.label(
                        RichText::new("⚡ CodeQuest")
                            .size(28.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(24.0);

                    egui::Frame::NONE
                        .fill(BG_SECONDARY)
                        .corner_radius(8.0)
                        .inner_margin(24.0)
                        .show(ui, |ui| {
                            ui.set_width(320.0);
                            self.render_auth_form(ui, now);
                        });

                    ui.add_space(12.0);
                    if ui
                        .button(RichText::new("< Back").color(TEXT_MUTED))
                        .clicked()
                    {
                        self.navigate(Route::Landing);
                    }
                });
            });
    }

    fn render_auth_form(&mut self, ui: &mut egui::Ui, now: Instant) {
        let submitting = self.auth.submit_done_at.is_some();

        ui.horizontal(|ui| {
            if ui
                .selectable_label(!self.auth.sign_up, "Sign in")
                .clicked()
            {
                self.auth.sign_up = false;
            }
            if ui
                .selectable_label(self.auth.sign_up, "Sign up")
                .clicked()
            {
                self.auth.sign_up = true;
            }
        });
        ui.add_space(12.0);

        if self.auth.sign_up {
            ui.label(RichText::new("Name").small().color(TEXT_MUTED));
            ui.add(TextEdit::singleline(&mut self.auth.name).desired_width(f32::INFINITY));
            ui.add_space(8.0);
        }

        ui.label(RichText::new("Email").small().color(TEXT_MUTED));
        ui.add(TextEdit::singleline(&mut self.auth.email).desired_width(f32::INFINITY));
        ui.add_space(8.0);

        ui.label(RichText::new("Password").small().color(TEXT_MUTED));
        ui.add(
            TextEdit::singleline(&mut self.auth.password)
                .password(true)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(16.0);

        let valid = !self.auth.email.trim().is_empty()
            && !self.auth.password.trim().is_empty()
            && (!self.auth.sign_up || !self.auth.name.trim().is_empty());

        if submitting {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Signing in...").color(ACCENT_CYAN));
            });
        } else {
            let label = if self.auth.sign_up { "Create account" } else { "Sign in" };
            let button = egui::Button::new(
                RichText::new(label).strong().color(BG_PRIMARY),
            )
            .fill(ACCENT_GREEN)
            .corner_radius(6.0);

            if ui
                .add_enabled(valid, button.min_size(Vec2::new(120.0, 32.0)))
                .clicked()
            {
                self.auth.submit_done_at = Some(now + AUTH_DELAY);
            }
        }
    }
}
