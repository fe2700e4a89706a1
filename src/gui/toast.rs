//! Toast notification system for gamification events
//!
//! Displays achievement unlocks, level-ups, streak updates and error
//! notices as temporary notifications in the top-right corner.

use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, Id, RichText, Vec2};

use crate::progress::{Achievement, ProgressEvent};

use super::app::{CodeQuestApp, Toast};
use super::theme::{ACCENT_CYAN, ACCENT_GREEN, ACCENT_PURPLE, ACCENT_RED, ACCENT_YELLOW, BG_SECONDARY};

/// How long a toast is displayed
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Animation duration for fade in/out
const FADE_DURATION: f32 = 0.3;

impl CodeQuestApp {
    /// Render toast notifications for queued events
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        if self.current_toast.is_none() {
            if let Some(toast) = self.toasts.pop_front() {
                self.current_toast = Some((toast, Instant::now()));
            }
        }

        let Some((toast, start_time)) = &self.current_toast else {
            return;
        };

        let elapsed = start_time.elapsed();
        if elapsed > TOAST_DURATION {
            self.current_toast = None;
            ctx.request_repaint(); // Check for next toast
            return;
        }

        // Fade in, hold, fade out
        let progress = elapsed.as_secs_f32();
        let alpha = if progress < FADE_DURATION {
            progress / FADE_DURATION
        } else if progress > TOAST_DURATION.as_secs_f32() - FADE_DURATION {
            (TOAST_DURATION.as_secs_f32() - progress) / FADE_DURATION
        } else {
            1.0
        };

        let animated_alpha = ctx.animate_value_with_time(Id::new("toast_alpha"), alpha, 0.1);
        let toast = toast.clone();

        egui::Area::new(Id::new("codequest_toast"))
            .anchor(Align2::RIGHT_TOP, Vec2::new(-20.0, 60.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let bg_color = Color32::from_rgba_unmultiplied(
                    BG_SECONDARY.r(),
                    BG_SECONDARY.g(),
                    BG_SECONDARY.b(),
                    (animated_alpha * 240.0) as u8,
                );

                egui::Frame::NONE
                    .fill(bg_color)
                    .stroke(egui::Stroke::new(
                        1.0,
                        Color32::from_rgba_unmultiplied(100, 100, 100, (animated_alpha * 150.0) as u8),
                    ))
                    .corner_radius(8.0)
                    .inner_margin(16.0)
                    .shadow(egui::Shadow {
                        spread: 4,
                        blur: 8,
                        color: Color32::from_rgba_unmultiplied(0, 0, 0, (animated_alpha * 100.0) as u8),
                        offset: [0, 2],
                    })
                    .show(ui, |ui| {
                        ui.set_min_width(280.0);
                        render_toast_content(ui, &toast, animated_alpha);
                    });
            });

        // Keep repainting for animation
        ctx.request_repaint();
    }
}

fn render_toast_content(ui: &mut egui::Ui, toast: &Toast, alpha: f32) {
    match toast {
        Toast::Event(ProgressEvent::AchievementUnlocked { id }) => {
            let achievement = Achievement::get(*id);
            ui.horizontal(|ui| {
                ui.label(RichText::new(achievement.icon).size(32.0));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new("Achievement Unlocked!")
                            .color(apply_alpha(ACCENT_YELLOW, alpha))
                            .size(12.0),
                    );
                    ui.label(
                        RichText::new(achievement.name)
                            .color(apply_alpha(Color32::WHITE, alpha))
                            .strong()
                            .size(16.0),
                    );
                    ui.label(
                        RichText::new(achievement.description)
                            .color(apply_alpha(Color32::GRAY, alpha))
                            .size(11.0),
                    );
                });
            });
        }
        Toast::Event(ProgressEvent::LevelUp { old_level, new_level }) => {
            ui.horizontal(|ui| {
                ui.label(RichText::new("🎉").size(32.0));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new("LEVEL UP!")
                            .color(apply_alpha(ACCENT_PURPLE, alpha))
                            .strong()
                            .size(14.0),
                    );
                    ui.label(
                        RichText::new(format!("Level {} → {}", old_level, new_level))
                            .color(apply_alpha(Color32::WHITE, alpha))
                            .size(18.0)
                            .strong(),
                    );
                });
            });
        }
        Toast::Event(ProgressEvent::ChallengeCompleted { id }) => {
            ui.horizontal(|ui| {
                ui.label(RichText::new("✅").size(28.0));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new("Challenge Complete!")
                            .color(apply_alpha(ACCENT_CYAN, alpha))
                            .size(12.0),
                    );
                    ui.label(
                        RichText::new(id)
                            .color(apply_alpha(Color32::WHITE, alpha))
                            .strong()
                            .size(16.0),
                    );
                });
            });
        }
        Toast::Event(ProgressEvent::StreakExtended { count }) => {
            ui.horizontal(|ui| {
                ui.label(RichText::new("🔥").size(28.0));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new("Daily Streak")
                            .color(apply_alpha(ACCENT_YELLOW, alpha))
                            .size(12.0),
                    );
                    ui.label(
                        RichText::new(format!("{} days!", count))
                            .color(apply_alpha(Color32::WHITE, alpha))
                            .strong()
                            .size(18.0),
                    );
                });
            });
        }
        Toast::Event(ProgressEvent::XpAwarded { amount, .. }) => {
            // Only show for larger XP gains
            if *amount < 20 {
                return;
            }
            ui.horizontal(|ui| {
                ui.label(RichText::new("⭐").size(24.0));
                ui.label(
                    RichText::new(format!("+{} XP", amount))
                        .color(apply_alpha(ACCENT_GREEN, alpha))
                        .strong()
                        .size(16.0),
                );
            });
        }
        Toast::Info(message) => {
            ui.horizontal(|ui| {
                ui.label(RichText::new("✔").size(24.0).color(apply_alpha(ACCENT_GREEN, alpha)));
                ui.label(
                    RichText::new(message)
                        .color(apply_alpha(Color32::WHITE, alpha))
                        .size(14.0),
                );
            });
        }
        Toast::Error(message) => {
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚠").size(24.0).color(apply_alpha(ACCENT_RED, alpha)));
                ui.label(
                    RichText::new(message)
                        .color(apply_alpha(Color32::WHITE, alpha))
                        .size(14.0),
                );
            });
        }
    }
}

/// Apply alpha to a color
fn apply_alpha(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (color.a() as f32 * alpha) as u8,
    )
}
