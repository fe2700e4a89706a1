//! Static challenge catalog
//!
//! Hand-authored level tables for every mini-game, plus the learning path
//! and tech-path definitions. Catalog entries are immutable templates;
//! anything mutable (placed tags, applied properties, lock flags) lives in
//! per-session screen state, never on the catalog itself.

pub mod blueprint;
pub mod challenges;
pub mod commander;
pub mod path;
pub mod styler;
pub mod tech;

use serde::Serialize;

pub use blueprint::{BlueprintLevel, HtmlTag, BLUEPRINT_LEVELS};
pub use challenges::{ChallengeLevel, KeywordCriterion, FLUTTER_LEVELS, REACT_NATIVE_LEVELS};
pub use commander::{CommanderLevel, Point, COMMANDER_LEVELS};
pub use path::{PathLevel, PATH_LEVELS};
pub use styler::{CssProperty, StylerLevel, STYLER_LEVELS};
pub use tech::{TechPath, Technology, TECH_PATHS};

/// Challenge difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// The five embedded mini-games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameKind {
    HtmlBlueprint,
    CssStyler,
    JsCommander,
    ReactNativeRanger,
    FlutterForge,
}

impl GameKind {
    /// Display title of the game screen
    pub fn title(&self) -> &'static str {
        match self {
            Self::HtmlBlueprint => "Build the Blueprint",
            Self::CssStyler => "Style the Scene",
            Self::JsCommander => "Code Commanders",
            Self::ReactNativeRanger => "React Native Ranger",
            Self::FlutterForge => "Flutter Forge",
        }
    }

    /// One-line tagline shown under the title
    pub fn tagline(&self) -> &'static str {
        match self {
            Self::HtmlBlueprint => "Drag and drop HTML tags to build the page structure",
            Self::CssStyler => "Apply CSS properties to transform plain HTML into beautiful designs",
            Self::JsCommander => "Use JavaScript to command objects in the virtual world",
            Self::ReactNativeRanger => {
                "Debug and build React Native applications through engaging challenges"
            }
            Self::FlutterForge => "Craft beautiful Flutter UIs and bring designs to life",
        }
    }
}

/// Serialize the whole catalog as pretty JSON (for the `catalog` subcommand)
pub fn catalog_json() -> anyhow::Result<String> {
    #[derive(Serialize)]
    struct Catalog<'a> {
        blueprint: &'a [BlueprintLevel],
        styler: &'a [StylerLevel],
        commander: &'a [CommanderLevel],
        react_native: &'a [ChallengeLevel],
        flutter: &'a [ChallengeLevel],
        learning_path: &'a [PathLevel],
        tech_paths: &'a [TechPath],
    }

    let catalog = Catalog {
        blueprint: &BLUEPRINT_LEVELS,
        styler: &STYLER_LEVELS,
        commander: &COMMANDER_LEVELS,
        react_native: &REACT_NATIVE_LEVELS,
        flutter: &FLUTTER_LEVELS,
        learning_path: &PATH_LEVELS,
        tech_paths: &TECH_PATHS,
    };
    Ok(serde_json::to_string_pretty(&catalog)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_serializes() {
        let json = catalog_json().unwrap();
        assert!(json.contains("Build the Blueprint") || json.contains("Simple Blog Post"));
        assert!(json.contains("learning_path"));
    }

    #[test]
    fn test_every_game_has_three_levels() {
        assert_eq!(BLUEPRINT_LEVELS.len(), 3);
        assert_eq!(STYLER_LEVELS.len(), 3);
        assert_eq!(COMMANDER_LEVELS.len(), 3);
        assert_eq!(REACT_NATIVE_LEVELS.len(), 3);
        assert_eq!(FLUTTER_LEVELS.len(), 3);
    }
}
