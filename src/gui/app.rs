//! Main application state for the CodeQuest GUI
//!
//! `CodeQuestApp` owns the progress store, the current route, and the
//! per-session state of every screen. Level catalogs stay immutable;
//! each screen keeps its own mutable copy of whatever it changes
//! (placed tags, lock flags, editor buffers).

use std::collections::VecDeque;
use std::time::Instant;

use crate::catalog::{GameKind, COMMANDER_LEVELS, FLUTTER_LEVELS, PATH_LEVELS, REACT_NATIVE_LEVELS};
use crate::progress::{ProgressEvent, ProgressStore};
use crate::verify::RunReport;

/// Delay between passing a game level and auto-advancing to the next
pub const LEVEL_ADVANCE_DELAY: std::time::Duration = std::time::Duration::from_millis(1500);

/// Delay simulating the auth backend round-trip
pub const AUTH_DELAY: std::time::Duration = std::time::Duration::from_millis(1500);

/// The screen currently shown. Every navigation target is a variant, so
/// there is no dead-link state to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Auth,
    Dashboard,
    TechSelection,
    LearningPath,
    Game(GameKind),
}

/// A queued toast notification
#[derive(Debug, Clone)]
pub enum Toast {
    Event(ProgressEvent),
    Info(String),
    Error(String),
}

/// Sign-in / sign-up form state
#[derive(Default)]
pub struct AuthScreen {
    pub sign_up: bool,
    pub name: String,
    pub email: String,
    pub password: String,
    /// When a submit is in flight, the instant it completes
    pub submit_done_at: Option<Instant>,
}

/// Tech path selection state
#[derive(Default)]
pub struct TechScreen {
    pub selected_path: Option<usize>,
    pub selected_tech: Option<usize>,
}

/// Per-session copy of one learning path node
#[derive(Debug, Clone)]
pub struct PathNode {
    pub locked: bool,
    pub completed: bool,
    pub progress: u32,
}

/// Learning path screen state
pub struct PathScreen {
    pub nodes: Vec<PathNode>,
    /// Index of the node whose challenge dialog is open
    pub open_dialog: Option<usize>,
}

impl Default for PathScreen {
    fn default() -> Self {
        let nodes = PATH_LEVELS
            .iter()
            .map(|level| PathNode {
                locked: level.starts_locked,
                completed: level.starts_completed,
                progress: level.progress,
            })
            .collect();
        Self {
            nodes,
            open_dialog: None,
        }
    }
}

/// HTML Blueprint game state
#[derive(Default)]
pub struct BlueprintScreen {
    pub level_idx: usize,
    /// Tag IDs placed so far, in order
    pub placed: Vec<&'static str>,
    pub feedback: Option<(String, bool)>,
    pub advance_at: Option<Instant>,
    pub all_done: bool,
}

/// CSS Styler game state
#[derive(Default)]
pub struct StylerScreen {
    pub level_idx: usize,
    /// Indexes into the level's available_properties
    pub applied: Vec<usize>,
    pub feedback: Option<(String, bool)>,
    pub advance_at: Option<Instant>,
    pub all_done: bool,
}

/// JS Commander game state
pub struct CommanderScreen {
    pub level_idx: usize,
    pub code: String,
    pub report: Option<RunReport>,
    pub passed: bool,
    pub advance_at: Option<Instant>,
    pub all_done: bool,
}

impl Default for CommanderScreen {
    fn default() -> Self {
        Self {
            level_idx: 0,
            code: COMMANDER_LEVELS[0].initial_code.to_string(),
            report: None,
            passed: false,
            advance_at: None,
            all_done: false,
        }
    }
}

/// Which tab of the challenge dialog is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChallengeTab {
    #[default]
    Challenge,
    Code,
}

/// Shared state for the card-ladder challenge games (Ranger, Forge)
pub struct ChallengeScreen {
    pub unlocked: Vec<bool>,
    pub completed: Vec<bool>,
    /// Index of the open challenge dialog
    pub open: Option<usize>,
    pub tab: ChallengeTab,
    pub code: String,
    pub feedback: Option<(String, bool)>,
    pub hints_shown: usize,
}

impl ChallengeScreen {
    pub fn for_game(game: GameKind) -> Self {
        let levels = match game {
            GameKind::FlutterForge => &*FLUTTER_LEVELS,
            _ => &*REACT_NATIVE_LEVELS,
        };
        Self {
            unlocked: levels.iter().map(|l| !l.starts_locked).collect(),
            completed: vec![false; levels.len()],
            open: None,
            tab: ChallengeTab::default(),
            code: String::new(),
            feedback: None,
            hints_shown: 0,
        }
    }
}

/// Top-level application state
pub struct CodeQuestApp {
    pub(crate) route: Route,
    pub(crate) store: ProgressStore,

    pub(crate) toasts: VecDeque<Toast>,
    pub(crate) current_toast: Option<(Toast, Instant)>,

    /// Whether the daily streak check-in was used this session
    pub(crate) checked_in: bool,

    pub(crate) auth: AuthScreen,
    pub(crate) tech: TechScreen,
    pub(crate) path: PathScreen,
    pub(crate) blueprint: BlueprintScreen,
    pub(crate) styler: StylerScreen,
    pub(crate) commander: CommanderScreen,
    pub(crate) ranger: ChallengeScreen,
    pub(crate) forge: ChallengeScreen,
}

impl CodeQuestApp {
    pub fn new(now: Instant) -> Self {
        Self {
            route: Route::Landing,
            store: ProgressStore::new(now),
            toasts: VecDeque::new(),
            current_toast: None,
            checked_in: false,
            auth: AuthScreen::default(),
            tech: TechScreen::default(),
            path: PathScreen::default(),
            blueprint: BlueprintScreen::default(),
            styler: StylerScreen::default(),
            commander: CommanderScreen::default(),
            ranger: ChallengeScreen::for_game(GameKind::ReactNativeRanger),
            forge: ChallengeScreen::for_game(GameKind::FlutterForge),
        }
    }

    pub(crate) fn navigate(&mut self, route: Route) {
        self.route = route;
    }

    /// Queue progress events as toasts
    pub(crate) fn push_events(&mut self, events: Vec<ProgressEvent>) {
        for event in events {
            self.toasts.push_back(Toast::Event(event));
        }
    }

    pub(crate) fn push_info(&mut self, message: impl Into<String>) {
        self.toasts.push_back(Toast::Info(message.into()));
    }

    pub(crate) fn push_error(&mut self, message: impl Into<String>) {
        self.toasts.push_back(Toast::Error(message.into()));
    }

    /// Award XP for a passed level of one of the skill games. The level
    /// reward only; the challenge counter is untouched.
    pub(crate) fn award_game_xp(&mut self, xp: u32, reason: &str) {
        tracing::info!("level passed: {} (+{} xp)", reason, xp);
        let events = self.store.add_xp(xp, reason);
        self.push_events(events);
    }

    /// Record a completed coding challenge: its XP reward plus the flat
    /// challenge bonus and counter bump.
    pub(crate) fn award_challenge(&mut self, xp: u32, challenge_id: &str) {
        tracing::info!("challenge passed: {} (+{} xp)", challenge_id, xp);
        let mut events = self.store.add_xp(xp, challenge_id);
        events.extend(self.store.complete_challenge(challenge_id));
        events.extend(
            self.store
                .unlock_achievement(crate::progress::AchievementId::FirstChallenge),
        );
        self.push_events(events);
    }

    /// Mark a learning-path step done: the flat challenge reward only
    pub(crate) fn complete_step(&mut self, challenge_id: &str) {
        tracing::info!("path step completed: {}", challenge_id);
        let mut events = self.store.complete_challenge(challenge_id);
        events.extend(
            self.store
                .unlock_achievement(crate::progress::AchievementId::FirstChallenge),
        );
        self.push_events(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_landing() {
        let app = CodeQuestApp::new(Instant::now());
        assert_eq!(app.route, Route::Landing);
        assert!(app.store.is_loading());
    }

    #[test]
    fn test_path_nodes_copy_catalog_defaults() {
        let app = CodeQuestApp::new(Instant::now());
        assert_eq!(app.path.nodes.len(), PATH_LEVELS.len());
        assert!(app.path.nodes[0].completed);
        assert!(!app.path.nodes[0].locked);
        assert!(app.path.nodes[3].locked);
    }

    #[test]
    fn test_challenge_ladder_starts_with_first_unlocked() {
        let screen = ChallengeScreen::for_game(GameKind::ReactNativeRanger);
        assert_eq!(screen.unlocked, vec![true, false, false]);
        assert_eq!(screen.completed, vec![false, false, false]);
    }

    #[test]
    fn test_game_level_award_is_xp_only() {
        let start = Instant::now();
        let mut app = CodeQuestApp::new(start);
        app.store.poll_load(start + crate::progress::LOAD_DELAY);
        let before = app.store.stats().clone();

        app.award_game_xp(50, "html-1");

        assert_eq!(app.store.stats().xp, before.xp + 50);
        assert_eq!(
            app.store.stats().completed_challenges,
            before.completed_challenges
        );
        assert!(!app.toasts.is_empty());
    }

    #[test]
    fn test_challenge_award_includes_flat_bonus() {
        let start = Instant::now();
        let mut app = CodeQuestApp::new(start);
        app.store.poll_load(start + crate::progress::LOAD_DELAY);
        let before = app.store.stats().clone();

        app.award_challenge(75, "rn-2");

        assert_eq!(
            app.store.stats().xp,
            before.xp + 75 + crate::progress::XpRewards::CHALLENGE_DONE
        );
        assert_eq!(
            app.store.stats().completed_challenges,
            before.completed_challenges + 1
        );
    }
}
