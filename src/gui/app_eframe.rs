//! eframe::App implementation for CodeQuestApp
//!
//! Contains the main update loop that runs every frame: poll the fake
//! load and the pending screen timers, render the current route, then
//! the toast overlay.

use std::time::Instant;

use eframe::egui;

use super::app::{CodeQuestApp, Route};

impl eframe::App for CodeQuestApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // The mock backend "responds" after its fixed delay
        if self.store.poll_load(now) {
            ctx.request_repaint();
        }

        // Screen timers: auth submit, level auto-advance
        self.poll_auth_submit(now);
        self.poll_game_timers(now);

        self.apply_theme(ctx);

        // Navbar on every screen except the landing and auth pages
        if !matches!(self.route, Route::Landing | Route::Auth) {
            self.render_navbar(ctx);
        }

        match self.route {
            Route::Landing => self.render_landing(ctx),
            Route::Auth => self.render_auth(ctx, now),
            Route::Dashboard => self.render_dashboard(ctx),
            Route::TechSelection => self.render_tech_selection(ctx),
            Route::LearningPath => self.render_learning_path(ctx),
            Route::Game(kind) => self.render_game(ctx, kind, now),
        }

        // Toast overlay on top of everything
        self.render_toast(ctx);

        // Timers are polled per frame, so keep frames coming
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
