//! Player progress tracking
//!
//! Holds the in-memory progress store: XP, level, streak, challenge counts
//! and unlocked achievements. There is no backing database - everything
//! lives for the lifetime of the process and resets on restart.
//!
//! Levels are derived from cumulative XP: every 100 XP is one level, so
//! `level == xp / 100 + 1` holds after every operation.

mod achievements;
mod store;

pub use achievements::{Achievement, AchievementId};
pub use store::{LoadState, ProgressEvent, ProgressStats, ProgressStore, XpRewards, LOAD_DELAY};
