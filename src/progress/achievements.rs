//! Achievement definitions and metadata
//!
//! All achievements are defined here with their display fields. Unlock
//! state lives in the progress store, not on the definition.

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    FirstLogin,
    FirstChallenge,
    FirstSteps,
    Consistency,
    PerfectScore,
    CssMaster,
}

impl AchievementId {
    /// Get the string ID used in the progress store
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstLogin => "first_login",
            Self::FirstChallenge => "first_challenge",
            Self::FirstSteps => "first_steps",
            Self::Consistency => "consistency",
            Self::PerfectScore => "perfect_score",
            Self::CssMaster => "css_master",
        }
    }

    /// Parse from a stored string ID
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_login" => Some(Self::FirstLogin),
            "first_challenge" => Some(Self::FirstChallenge),
            "first_steps" => Some(Self::FirstSteps),
            "consistency" => Some(Self::Consistency),
            "perfect_score" => Some(Self::PerfectScore),
            "css_master" => Some(Self::CssMaster),
            _ => None,
        }
    }

    /// Get all achievement IDs
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::FirstLogin,
            Self::FirstChallenge,
            Self::FirstSteps,
            Self::Consistency,
            Self::PerfectScore,
            Self::CssMaster,
        ]
    }
}

/// Achievement metadata for display
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl Achievement {
    /// Get the full definition for an achievement ID
    pub fn get(id: AchievementId) -> &'static Achievement {
        ALL_ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .unwrap_or(&ALL_ACHIEVEMENTS[0])
    }

    /// Total number of defined achievements
    pub fn total_count() -> usize {
        ALL_ACHIEVEMENTS.len()
    }

    /// All achievement definitions in display order
    pub fn all() -> &'static [Achievement] {
        ALL_ACHIEVEMENTS
    }
}

static ALL_ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::FirstLogin,
        name: "Welcome Aboard",
        description: "Sign in for the first time",
        icon: "\u{1F44B}",
    },
    Achievement {
        id: AchievementId::FirstChallenge,
        name: "Getting Started",
        description: "Attempt your first challenge",
        icon: "\u{1F331}",
    },
    Achievement {
        id: AchievementId::FirstSteps,
        name: "First Steps",
        description: "Complete your first course",
        icon: "\u{1F463}",
    },
    Achievement {
        id: AchievementId::Consistency,
        name: "Consistency",
        description: "Maintain a 3-day streak",
        icon: "\u{1F525}",
    },
    Achievement {
        id: AchievementId::PerfectScore,
        name: "Perfect Score",
        description: "Ace a challenge with 100%",
        icon: "\u{1F3AF}",
    },
    Achievement {
        id: AchievementId::CssMaster,
        name: "CSS Master",
        description: "Complete all CSS challenges",
        icon: "\u{1F3A8}",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_string_roundtrip() {
        for id in AchievementId::all() {
            assert_eq!(AchievementId::from_str(id.as_str()), Some(*id));
        }
    }

    #[test]
    fn test_every_id_has_a_definition() {
        for id in AchievementId::all() {
            assert_eq!(Achievement::get(*id).id, *id);
        }
        assert_eq!(Achievement::total_count(), AchievementId::all().len());
    }
}
