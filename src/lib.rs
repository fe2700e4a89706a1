//! CodeQuest - learn to code by playing
//!
//! A desktop learning game: pick a tech path, work through a learning
//! track, and clear mini-games for HTML, CSS, JavaScript, React Native
//! and Flutter. Progress (XP, levels, streaks, achievements) lives in an
//! in-memory store and is fed by the games through event-producing
//! operations.
//!
//! Modules:
//! - [`catalog`]: immutable level, path and achievement definitions
//! - [`progress`]: the XP/level/streak/achievement store
//! - [`verify`]: per-game answer checkers, including the robot script
//!   interpreter
//! - [`gui`]: the egui frontend

pub mod catalog;
pub mod gui;
pub mod progress;
pub mod verify;
