//! GUI module for the CodeQuest application
//!
//! Native egui frontend: the route-driven screens (landing, auth,
//! dashboard, tech selection, learning path) and the five mini-game
//! screens, plus the toast overlay for gamification events.

pub mod app;
mod app_eframe;
mod app_theme;
mod app_update;
mod auth;
mod dashboard;
mod games;
mod landing;
mod learning_path;
mod navbar;
pub mod runner;
mod tech_selection;
pub mod theme;
mod toast;

pub use app::{CodeQuestApp, Route};
pub use runner::run_gui;
