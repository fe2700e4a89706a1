//! Progress store - XP, levels, streaks and challenge counts
//!
//! The store is created with defaults when the app starts, replaced
//! wholesale by a mock "backend" snapshot after a fixed delay, and mutated
//! in place from then on. Every mutating operation returns the events it
//! produced so the GUI can surface them as toasts.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::achievements::AchievementId;

/// Delay before the mock progress snapshot replaces the defaults
pub const LOAD_DELAY: Duration = Duration::from_millis(1000);

/// XP awards for progress operations
pub struct XpRewards;

impl XpRewards {
    /// XP for completing a challenge
    pub const CHALLENGE_DONE: u32 = 50;

    /// XP for extending the daily streak
    pub const STREAK_DAY: u32 = 10;

    /// XP for unlocking an achievement
    pub const ACHIEVEMENT: u32 = 25;

    /// XP needed per level
    pub const XP_PER_LEVEL: u32 = 100;
}

/// Player progress snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressStats {
    pub level: u32,
    pub xp: u32,
    pub streak: u32,
    pub total_challenges: u32,
    pub completed_challenges: u32,
    /// Unlocked achievement IDs in unlock order
    pub achievements: Vec<String>,
}

impl Default for ProgressStats {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            streak: 0,
            total_challenges: 10,
            completed_challenges: 0,
            achievements: Vec::new(),
        }
    }
}

impl ProgressStats {
    /// The snapshot the mock backend "returns" after [`LOAD_DELAY`]
    pub fn mock_loaded() -> Self {
        Self {
            level: 2,
            xp: 150,
            streak: 3,
            total_challenges: 10,
            completed_challenges: 3,
            achievements: vec![
                AchievementId::FirstLogin.as_str().to_string(),
                AchievementId::FirstChallenge.as_str().to_string(),
            ],
        }
    }

    /// XP gathered within the current level (0-99)
    pub fn level_progress(&self) -> u32 {
        self.xp % XpRewards::XP_PER_LEVEL
    }

    /// Fraction of the current level already earned (0.0 - 1.0)
    pub fn level_fraction(&self) -> f32 {
        self.level_progress() as f32 / XpRewards::XP_PER_LEVEL as f32
    }

    /// Rounded percentage of challenges completed
    pub fn percent_complete(&self) -> u32 {
        if self.total_challenges == 0 {
            return 0;
        }
        (self.completed_challenges as f64 / self.total_challenges as f64 * 100.0).round() as u32
    }

    fn level_for_xp(xp: u32) -> u32 {
        xp / XpRewards::XP_PER_LEVEL + 1
    }
}

/// Events produced by progress operations, consumed by the toast layer
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    XpAwarded { amount: u32, reason: String },
    LevelUp { old_level: u32, new_level: u32 },
    ChallengeCompleted { id: String },
    StreakExtended { count: u32 },
    AchievementUnlocked { id: AchievementId },
}

/// Load state of the mock backend fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting for the fake fetch to "complete"
    Pending { ready_at: Instant },
    Loaded,
}

/// In-memory progress store
///
/// All operations are synchronous and total. The current instant is passed
/// in by the caller so tests can drive the load timer without sleeping.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    stats: ProgressStats,
    load: LoadState,
}

impl ProgressStore {
    /// Create a store with default stats and the mock load pending
    pub fn new(now: Instant) -> Self {
        Self {
            stats: ProgressStats::default(),
            load: LoadState::Pending {
                ready_at: now + LOAD_DELAY,
            },
        }
    }

    /// Current stats snapshot
    pub fn stats(&self) -> &ProgressStats {
        &self.stats
    }

    /// Whether the mock load is still pending
    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Pending { .. })
    }

    /// Poll the mock load timer. Returns true exactly once, on the frame
    /// where the fake fetch completes and replaces the stats.
    pub fn poll_load(&mut self, now: Instant) -> bool {
        match self.load {
            LoadState::Pending { ready_at } if now >= ready_at => {
                self.stats = ProgressStats::mock_loaded();
                self.load = LoadState::Loaded;
                info!("progress loaded: level {} ({} xp)", self.stats.level, self.stats.xp);
                true
            }
            _ => false,
        }
    }

    /// Award XP, recomputing the level from cumulative XP
    pub fn add_xp(&mut self, amount: u32, reason: &str) -> Vec<ProgressEvent> {
        let old_level = self.stats.level;
        self.stats.xp += amount;
        self.stats.level = ProgressStats::level_for_xp(self.stats.xp);
        debug!("+{} xp ({}) -> {} total", amount, reason, self.stats.xp);

        let mut events = vec![ProgressEvent::XpAwarded {
            amount,
            reason: reason.to_string(),
        }];
        if self.stats.level > old_level {
            events.push(ProgressEvent::LevelUp {
                old_level,
                new_level: self.stats.level,
            });
        }
        events
    }

    /// Mark a challenge as completed and award its base XP
    pub fn complete_challenge(&mut self, id: &str) -> Vec<ProgressEvent> {
        self.stats.completed_challenges += 1;
        let mut events = vec![ProgressEvent::ChallengeCompleted { id: id.to_string() }];
        events.extend(self.add_xp(XpRewards::CHALLENGE_DONE, "challenge completed"));
        events
    }

    /// Extend the streak by one day and award streak XP
    pub fn increase_streak(&mut self) -> Vec<ProgressEvent> {
        self.stats.streak += 1;
        let mut events = vec![ProgressEvent::StreakExtended {
            count: self.stats.streak,
        }];
        events.extend(self.add_xp(XpRewards::STREAK_DAY, "streak extended"));
        events
    }

    /// Unlock an achievement. Idempotent: a second unlock of the same ID
    /// changes nothing and awards no XP.
    pub fn unlock_achievement(&mut self, id: AchievementId) -> Vec<ProgressEvent> {
        let key = id.as_str();
        if self.stats.achievements.iter().any(|a| a == key) {
            return Vec::new();
        }
        self.stats.achievements.push(key.to_string());
        let mut events = vec![ProgressEvent::AchievementUnlocked { id }];
        events.extend(self.add_xp(XpRewards::ACHIEVEMENT, "achievement unlocked"));
        events
    }

    /// Whether the given achievement has been unlocked
    pub fn has_achievement(&self, id: AchievementId) -> bool {
        self.stats.achievements.iter().any(|a| a == id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_store() -> ProgressStore {
        let start = Instant::now();
        let mut store = ProgressStore::new(start);
        assert!(store.is_loading());
        assert!(store.poll_load(start + LOAD_DELAY));
        store
    }

    #[test]
    fn test_load_replaces_defaults_once() {
        let start = Instant::now();
        let mut store = ProgressStore::new(start);
        assert!(!store.poll_load(start));
        assert_eq!(store.stats().xp, 0);

        assert!(store.poll_load(start + LOAD_DELAY));
        assert_eq!(store.stats().level, 2);
        assert_eq!(store.stats().xp, 150);
        assert_eq!(store.stats().streak, 3);
        assert_eq!(store.stats().completed_challenges, 3);

        // Second poll does nothing
        assert!(!store.poll_load(start + LOAD_DELAY * 2));
    }

    #[test]
    fn test_level_invariant_holds_after_any_sequence() {
        let mut store = loaded_store();
        store.add_xp(37, "test");
        store.complete_challenge("css-2");
        store.increase_streak();
        store.unlock_achievement(AchievementId::PerfectScore);
        store.complete_challenge("html-1");

        let stats = store.stats();
        assert_eq!(stats.level, stats.xp / 100 + 1);
        assert_eq!(stats.level_progress(), stats.xp % 100);
    }

    #[test]
    fn test_level_up_event_on_boundary() {
        let mut store = loaded_store();
        // 150 xp -> level 2; +50 crosses 200 into level 3
        let events = store.add_xp(50, "test");
        assert!(events.iter().any(|e| matches!(
            e,
            ProgressEvent::LevelUp { old_level: 2, new_level: 3 }
        )));
    }

    #[test]
    fn test_unlock_achievement_is_idempotent() {
        let mut store = loaded_store();
        let xp_before = store.stats().xp;

        let first = store.unlock_achievement(AchievementId::Consistency);
        assert!(!first.is_empty());
        assert_eq!(store.stats().xp, xp_before + XpRewards::ACHIEVEMENT);

        let second = store.unlock_achievement(AchievementId::Consistency);
        assert!(second.is_empty());
        assert_eq!(store.stats().xp, xp_before + XpRewards::ACHIEVEMENT);
        assert_eq!(
            store
                .stats()
                .achievements
                .iter()
                .filter(|a| *a == "consistency")
                .count(),
            1
        );
    }

    #[test]
    fn test_percent_complete() {
        let store = loaded_store();
        assert_eq!(store.stats().percent_complete(), 30);
    }
}
