//! Learning path level definitions
//!
//! The ten-step web development track shown on the learning path screen.
//! The first three steps open their mini-game; the rest start locked and
//! complete through the challenge dialog.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::GameKind;

/// One step of the learning path
#[derive(Debug, Clone, Serialize)]
pub struct PathLevel {
    pub level: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Initial progress percentage from the mock snapshot
    pub progress: u32,
    pub starts_locked: bool,
    pub starts_completed: bool,
    /// Mini-game this step opens, if any
    pub game: Option<GameKind>,
}

pub static PATH_LEVELS: Lazy<Vec<PathLevel>> = Lazy::new(|| {
    vec![
        PathLevel {
            level: 1,
            title: "Introduction to HTML",
            description: "Learn the basics of HTML, the backbone of the web. Understand tags, elements, and document structure.",
            progress: 100,
            starts_locked: false,
            starts_completed: true,
            game: Some(GameKind::HtmlBlueprint),
        },
        PathLevel {
            level: 2,
            title: "CSS Fundamentals",
            description: "Master CSS to style your web pages. Learn selectors, properties, and the box model.",
            progress: 70,
            starts_locked: false,
            starts_completed: false,
            game: Some(GameKind::CssStyler),
        },
        PathLevel {
            level: 3,
            title: "JavaScript Basics",
            description: "Get started with JavaScript, the language that powers web interactivity. Learn variables, functions, and control flow.",
            progress: 0,
            starts_locked: false,
            starts_completed: false,
            game: Some(GameKind::JsCommander),
        },
        PathLevel {
            level: 4,
            title: "DOM Manipulation",
            description: "Learn to interact with HTML using JavaScript. Manipulate the Document Object Model to create dynamic websites.",
            progress: 0,
            starts_locked: true,
            starts_completed: false,
            game: None,
        },
        PathLevel {
            level: 5,
            title: "Building Interactive Forms",
            description: "Create and validate web forms. Handle user input and provide feedback with JavaScript.",
            progress: 0,
            starts_locked: true,
            starts_completed: false,
            game: None,
        },
        PathLevel {
            level: 6,
            title: "Introduction to APIs",
            description: "Learn to communicate with external services. Make HTTP requests and handle responses.",
            progress: 0,
            starts_locked: true,
            starts_completed: false,
            game: None,
        },
        PathLevel {
            level: 7,
            title: "Responsive Web Design",
            description: "Build websites that work on any device. Use media queries and flexible layouts.",
            progress: 0,
            starts_locked: true,
            starts_completed: false,
            game: None,
        },
        PathLevel {
            level: 8,
            title: "JavaScript ES6+ Features",
            description: "Learn modern JavaScript syntax and features. Use arrow functions, destructuring, and more.",
            progress: 0,
            starts_locked: true,
            starts_completed: false,
            game: None,
        },
        PathLevel {
            level: 9,
            title: "Introduction to React",
            description: "Get started with React, a popular JavaScript library for building user interfaces.",
            progress: 0,
            starts_locked: true,
            starts_completed: false,
            game: None,
        },
        PathLevel {
            level: 10,
            title: "Building a Complete Web App",
            description: "Apply everything you've learned to build a complete web application from scratch.",
            progress: 0,
            starts_locked: true,
            starts_completed: false,
            game: None,
        },
    ]
});
