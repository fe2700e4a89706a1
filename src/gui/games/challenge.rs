//! Card-ladder challenge screen (React Native Ranger, Flutter Forge)
//!
//! Both games share this layout: a ladder of challenge cards where each
//! completion unlocks the next, and a dialog with a Challenge tab
//! (brief, expected output, hints) and a Code tab (editor plus submit).

use eframe::egui::{self, RichText, ScrollArea, TextEdit};

use crate::catalog::{ChallengeLevel, GameKind, FLUTTER_LEVELS, REACT_NATIVE_LEVELS};
use crate::verify::keywords;

use super::super::app::{ChallengeTab, CodeQuestApp, Route};
use super::super::theme::{
    ACCENT_CYAN, ACCENT_GREEN, ACCENT_RED, BG_PRIMARY, BG_SECONDARY, STATE_COMPLETED, STATE_LOCKED,
    TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};
use super::difficulty_color;

fn levels_for(kind: GameKind) -> &'static [ChallengeLevel] {
    match kind {
        GameKind::FlutterForge => &FLUTTER_LEVELS,
        _ => &REACT_NATIVE_LEVELS,
    }
}

impl CodeQuestApp {
    pub(crate) fn render_challenge_game(&mut self, ctx: &egui::Context, kind: GameKind) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .button(RichText::new("< Back").color(TEXT_MUTED))
                        .clicked()
                    {
                        self.navigate(Route::LearningPath);
                    }
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(kind.title())
                            .size(22.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                });
                ui.label(RichText::new(kind.tagline()).color(TEXT_DIM));
                ui.add_space(16.0);

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for idx in 0..levels_for(kind).len() {
                            self.render_challenge_card(ui, kind, idx);
                            ui.add_space(8.0);
                        }
                    });
            });

        self.render_challenge_window(ctx, kind);
    }

    fn render_challenge_card(&mut self, ui: &mut egui::Ui, kind: GameKind, idx: usize) {
        let level = &levels_for(kind)[idx];
        let screen = self.challenge_screen_mut(kind);
        let unlocked = screen.unlocked[idx];
        let completed = screen.completed[idx];

        egui::Frame::NONE
            .fill(BG_SECONDARY)
            .corner_radius(8.0)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let badge = if completed {
                        ("✔", STATE_COMPLETED)
                    } else if unlocked {
                        ("▶", ACCENT_CYAN)
                    } else {
                        ("🔒", STATE_LOCKED)
                    };
                    ui.label(RichText::new(badge.0).size(20.0).color(badge.1));
                    ui.add_space(8.0);

                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(level.title)
                                .strong()
                                .color(if unlocked { TEXT_PRIMARY } else { TEXT_MUTED }),
                        );
                        ui.label(RichText::new(level.description).small().color(TEXT_MUTED));
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(level.difficulty.label())
                                    .small()
                                    .color(difficulty_color(level.difficulty)),
                            );
                            ui.label(
                                RichText::new(format!("⏱ {} min", level.time_limit_min))
                                    .small()
                                    .color(TEXT_MUTED),
                            );
                            ui.label(
                                RichText::new(format!("+{} XP", level.xp_reward))
                                    .small()
                                    .color(ACCENT_GREEN),
                            );
                        });
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if unlocked && !completed {
                            if ui.button("Open").clicked() {
                                self.open_challenge(kind, idx);
                            }
                        } else if completed {
                            ui.label(RichText::new("Completed").small().color(STATE_COMPLETED));
                        }
                    });
                });
            });
    }

    fn open_challenge(&mut self, kind: GameKind, idx: usize) {
        let initial = levels_for(kind)[idx].initial_code.to_string();
        let screen = self.challenge_screen_mut(kind);
        screen.open = Some(idx);
        screen.tab = ChallengeTab::Challenge;
        screen.code = initial;
        screen.feedback = None;
        screen.hints_shown = 0;
    }

    fn render_challenge_window(&mut self, ctx: &egui::Context, kind: GameKind) {
        let Some(idx) = self.challenge_screen_mut(kind).open else {
            return;
        };
        let level = &levels_for(kind)[idx];
        let mut open = true;
        let mut submit = false;

        {
            let screen = self.challenge_screen_mut(kind);
            egui::Window::new(level.title)
                .open(&mut open)
                .collapsible(false)
                .default_width(560.0)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui
                            .selectable_label(screen.tab == ChallengeTab::Challenge, "Challenge")
                            .clicked()
                        {
                            screen.tab = ChallengeTab::Challenge;
                        }
                        if ui
                            .selectable_label(screen.tab == ChallengeTab::Code, "Code")
                            .clicked()
                        {
                            screen.tab = ChallengeTab::Code;
                        }
                    });
                    ui.separator();

                    match screen.tab {
                        ChallengeTab::Challenge => {
                            ui.label(
                                RichText::new(level.challenge_description).color(TEXT_DIM),
                            );
                            ui.add_space(8.0);
                            ui.label(
                                RichText::new("Expected result").strong().color(ACCENT_CYAN),
                            );
                            ui.label(
                                RichText::new(level.expected_output)
                                    .monospace()
                                    .small()
                                    .color(TEXT_MUTED),
                            );
                            ui.add_space(8.0);

                            if screen.hints_shown < level.hints.len() {
                                if ui
                                    .button(format!(
                                        "Show hint ({} left)",
                                        level.hints.len() - screen.hints_shown
                                    ))
                                    .clicked()
                                {
                                    screen.hints_shown += 1;
                                }
                            }
                            for hint in &level.hints[..screen.hints_shown] {
                                ui.label(
                                    RichText::new(format!("💡 {}", hint)).color(TEXT_MUTED),
                                );
                            }
                        }
                        ChallengeTab::Code => {
                            ScrollArea::vertical()
                                .id_salt("challenge_editor")
                                .max_height(280.0)
                                .show(ui, |ui| {
                                    ui.add(
                                        TextEdit::multiline(&mut screen.code)
                                            .code_editor()
                                            .desired_rows(14)
                                            .desired_width(f32::INFINITY),
                                    );
                                });
                            ui.add_space(8.0);

                            if ui
                                .add(
                                    egui::Button::new(
                                        RichText::new("Submit solution")
                                            .strong()
                                            .color(BG_PRIMARY),
                                    )
                                    .fill(ACCENT_GREEN)
                                    .corner_radius(6.0),
                                )
                                .clicked()
                            {
                                submit = true;
                            }

                            if let Some((message, passed)) = &screen.feedback {
                                let color = if *passed { ACCENT_GREEN } else { ACCENT_RED };
                                ui.label(RichText::new(message).color(color));
                            }
                        }
                    }
                });
        }

        if submit {
            self.submit_challenge(kind, idx);
        }
        if !open {
            self.challenge_screen_mut(kind).open = None;
        }
    }

    fn submit_challenge(&mut self, kind: GameKind, idx: usize) {
        let level = &levels_for(kind)[idx];
        let verdict = {
            let screen = self.challenge_screen_mut(kind);
            keywords::check(&screen.code, &level.criteria)
        };

        if verdict.passed {
            {
                let screen = self.challenge_screen_mut(kind);
                screen.completed[idx] = true;
                if let Some(next) = screen.unlocked.get_mut(idx + 1) {
                    *next = true;
                }
                screen.open = None;
            }
            let prefix = match kind {
                GameKind::FlutterForge => "flutter",
                _ => "rn",
            };
            let (xp, id) = (level.xp_reward, format!("{}-{}", prefix, level.id));
            self.award_challenge(xp, &id);
            if verdict.percent == 100 {
                let events = self
                    .store
                    .unlock_achievement(crate::progress::AchievementId::PerfectScore);
                self.push_events(events);
            }
        } else {
            let screen = self.challenge_screen_mut(kind);
            let message = if verdict.missing.is_empty() {
                format!("{}% of the criteria met. Keep going!", verdict.percent)
            } else {
                format!(
                    "{}% met. Still missing: {}",
                    verdict.percent,
                    verdict.missing.join(", ")
                )
            };
            screen.feedback = Some((message, false));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_passing_submit_unlocks_next_challenge() {
        let start = Instant::now();
        let mut app = CodeQuestApp::new(start);
        app.store.poll_load(start + crate::progress::LOAD_DELAY);

        app.open_challenge(GameKind::ReactNativeRanger, 0);
        // Level 1 checks setItems / setCart-style state updates
        app.ranger.code = REACT_NATIVE_LEVELS[0]
            .criteria
            .iter()
            .flat_map(|c| c.keywords.iter())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        app.submit_challenge(GameKind::ReactNativeRanger, 0);

        assert!(app.ranger.completed[0]);
        assert!(app.ranger.unlocked[1]);
        assert!(app.ranger.open.is_none());
    }

    #[test]
    fn test_failing_submit_keeps_dialog_open() {
        let start = Instant::now();
        let mut app = CodeQuestApp::new(start);
        app.open_challenge(GameKind::FlutterForge, 0);
        app.forge.code = "nothing relevant".to_string();
        app.submit_challenge(GameKind::FlutterForge, 0);

        assert!(!app.forge.completed[0]);
        assert!(app.forge.open.is_some());
        let (message, passed) = app.forge.feedback.clone().unwrap();
        assert!(!passed);
        assert!(message.contains('%'));
    }
}
