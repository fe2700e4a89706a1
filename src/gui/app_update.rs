//! Update loop helpers for CodeQuestApp
//!
//! Timer polling methods extracted from the main update loop. All timers
//! are deadlines compared against the frame's `now`, never background
//! threads.

use std::time::Instant;

use crate::catalog::{GameKind, BLUEPRINT_LEVELS, COMMANDER_LEVELS, STYLER_LEVELS};
use crate::progress::AchievementId;

use super::app::{CodeQuestApp, Route};

impl CodeQuestApp {
    /// Complete a pending auth submit once its fake round-trip elapses
    pub(crate) fn poll_auth_submit(&mut self, now: Instant) {
        let Some(done_at) = self.auth.submit_done_at else {
            return;
        };
        if now < done_at {
            return;
        }
        self.auth.submit_done_at = None;
        tracing::info!("auth submit accepted for {}", self.auth.email);

        let events = self.store.unlock_achievement(AchievementId::FirstLogin);
        self.push_events(events);
        self.push_info("Welcome back! You're signed in.");
        self.navigate(Route::Dashboard);
    }

    /// Advance game levels whose post-success delay has elapsed
    pub(crate) fn poll_game_timers(&mut self, now: Instant) {
        if let Some(at) = self.blueprint.advance_at {
            if now >= at {
                self.blueprint.advance_at = None;
                if self.blueprint.level_idx + 1 < BLUEPRINT_LEVELS.len() {
                    self.blueprint.level_idx += 1;
                    self.blueprint.placed.clear();
                    self.blueprint.feedback = None;
                } else {
                    self.blueprint.all_done = true;
                    self.on_course_cleared(None);
                }
            }
        }

        if let Some(at) = self.styler.advance_at {
            if now >= at {
                self.styler.advance_at = None;
                if self.styler.level_idx + 1 < STYLER_LEVELS.len() {
                    self.styler.level_idx += 1;
                    self.styler.applied.clear();
                    self.styler.feedback = None;
                } else {
                    self.styler.all_done = true;
                    self.on_course_cleared(Some(AchievementId::CssMaster));
                }
            }
        }

        if let Some(at) = self.commander.advance_at {
            if now >= at {
                self.commander.advance_at = None;
                if self.commander.level_idx + 1 < COMMANDER_LEVELS.len() {
                    self.commander.level_idx += 1;
                    self.commander.code =
                        COMMANDER_LEVELS[self.commander.level_idx].initial_code.to_string();
                    self.commander.report = None;
                    self.commander.passed = false;
                } else {
                    self.commander.all_done = true;
                    self.on_course_cleared(None);
                }
            }
        }
    }

    /// Achievements for clearing every level of a game, plus any
    /// game-specific one
    fn on_course_cleared(&mut self, extra: Option<AchievementId>) {
        let mut events = self.store.unlock_achievement(AchievementId::FirstSteps);
        if let Some(id) = extra {
            events.extend(self.store.unlock_achievement(id));
        }
        self.push_events(events);
    }

    /// Per-session challenge state for the two card-ladder games
    pub(crate) fn challenge_screen_mut(&mut self, kind: GameKind) -> &mut super::app::ChallengeScreen {
        match kind {
            GameKind::FlutterForge => &mut self.forge,
            _ => &mut self.ranger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::app::LEVEL_ADVANCE_DELAY;

    #[test]
    fn test_auth_submit_completes_after_delay() {
        let start = Instant::now();
        let mut app = CodeQuestApp::new(start);
        app.store.poll_load(start + crate::progress::LOAD_DELAY);
        app.route = Route::Auth;
        app.auth.submit_done_at = Some(start + crate::gui::app::AUTH_DELAY);

        app.poll_auth_submit(start);
        assert_eq!(app.route, Route::Auth);

        app.poll_auth_submit(start + crate::gui::app::AUTH_DELAY);
        assert_eq!(app.route, Route::Dashboard);
        assert!(app.auth.submit_done_at.is_none());
    }

    #[test]
    fn test_auth_does_not_reaward_first_login() {
        let start = Instant::now();
        let mut app = CodeQuestApp::new(start);
        // Loaded snapshot already contains first_login
        app.store.poll_load(start + crate::progress::LOAD_DELAY);
        let xp = app.store.stats().xp;

        app.auth.submit_done_at = Some(start);
        app.poll_auth_submit(start);
        assert_eq!(app.store.stats().xp, xp);
        assert!(!app
            .toasts
            .iter()
            .any(|t| matches!(t, crate::gui::app::Toast::Event(_))));
    }

    #[test]
    fn test_blueprint_advances_to_next_level() {
        let start = Instant::now();
        let mut app = CodeQuestApp::new(start);
        app.blueprint.placed = vec!["h1", "p", "img"];
        app.blueprint.advance_at = Some(start + LEVEL_ADVANCE_DELAY);

        app.poll_game_timers(start);
        assert_eq!(app.blueprint.level_idx, 0);

        app.poll_game_timers(start + LEVEL_ADVANCE_DELAY);
        assert_eq!(app.blueprint.level_idx, 1);
        assert!(app.blueprint.placed.is_empty());
    }

    #[test]
    fn test_last_commander_level_sets_all_done() {
        let start = Instant::now();
        let mut app = CodeQuestApp::new(start);
        app.commander.level_idx = COMMANDER_LEVELS.len() - 1;
        app.commander.advance_at = Some(start);

        app.poll_game_timers(start);
        assert!(app.commander.all_done);
        assert_eq!(app.commander.level_idx, COMMANDER_LEVELS.len() - 1);
    }
}
