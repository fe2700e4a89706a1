//! JS Commander level definitions
//!
//! Each level places a robot on a grid with a target star and optional
//! obstacles, and ships the starter script shown in the editor.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::Difficulty;

/// Grid coordinate. The origin is the top-left cell; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One commander level
#[derive(Debug, Clone, Serialize)]
pub struct CommanderLevel {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub instructions: &'static str,
    pub difficulty: Difficulty,
    pub initial_code: &'static str,
    pub solution_criteria: Vec<&'static str>,
    pub hints: Vec<&'static str>,
    pub robot_start: Point,
    pub star: Point,
    pub obstacles: Vec<Point>,
    pub xp_reward: u32,
}

/// Grid size used by all commander levels
pub const GRID_SIZE: i32 = 6;

pub static COMMANDER_LEVELS: Lazy<Vec<CommanderLevel>> = Lazy::new(|| {
    vec![
        CommanderLevel {
            id: 1,
            title: "Moving the Robot",
            description: "Write JavaScript code to move the robot to the star.",
            instructions: "Use moveRight(), moveDown(), etc. functions to move the robot to the star. The robot starts at (0,0) and the star is at (3,2).",
            difficulty: Difficulty::Beginner,
            initial_code: "// Use these functions to move the robot:\n// moveRight() - moves right by 1\n// moveLeft() - moves left by 1\n// moveUp() - moves up by 1\n// moveDown() - moves down by 1\n\nfunction runRobot() {\n  // Your code here\n\n}",
            solution_criteria: vec![
                "Robot must reach position (3,2)",
                "Code must include movement functions",
            ],
            hints: vec![
                "Try using moveRight() multiple times to move horizontally",
                "Then use moveDown() to move vertically",
                "The robot needs to reach coordinates (3,2)",
            ],
            robot_start: Point::new(0, 0),
            star: Point::new(3, 2),
            obstacles: vec![],
            xp_reward: 50,
        },
        CommanderLevel {
            id: 2,
            title: "Looping Commands",
            description: "Use loops to make your code more efficient.",
            instructions: "Use a loop to move the robot to the star. The robot starts at (0,0) and the star is at (5,0).",
            difficulty: Difficulty::Intermediate,
            initial_code: "// Use these functions to move the robot:\n// moveRight() - moves right by 1\n// moveLeft() - moves left by 1\n// moveUp() - moves up by 1\n// moveDown() - moves down by 1\n\nfunction runRobot() {\n  // Instead of writing moveRight() 5 times,\n  // can you use a loop?\n\n}",
            solution_criteria: vec![
                "Robot must reach position (5,0)",
                "Code must include at least one loop",
                "Code should be less than 5 lines",
            ],
            hints: vec![
                "Use a for loop to repeat moveRight() multiple times",
                "The loop syntax is: for (let i = 0; i < 5; i++) { ... }",
                "You need exactly 5 moves to the right",
            ],
            robot_start: Point::new(0, 0),
            star: Point::new(5, 0),
            obstacles: vec![],
            xp_reward: 75,
        },
        CommanderLevel {
            id: 3,
            title: "Conditional Movement",
            description: "Use conditions to navigate around obstacles.",
            instructions: "Move the robot to the star while avoiding obstacles. Use hasObstacle() to check if there's an obstacle in the way.",
            difficulty: Difficulty::Advanced,
            initial_code: "// Use these functions:\n// moveRight(), moveLeft(), moveUp(), moveDown()\n// hasObstacle(direction) - returns true if there's an obstacle\n// in the specified direction (\"right\", \"left\", \"up\", \"down\")\n\nfunction runRobot() {\n  // Use if statements to check for obstacles\n  // and navigate around them\n\n}",
            solution_criteria: vec![
                "Robot must reach position (4,3)",
                "Robot must not hit any obstacles",
                "Code must include conditional statements",
            ],
            hints: vec![
                "Check for obstacles before moving: if (hasObstacle(\"right\")) { ... }",
                "If there's an obstacle, try a different direction",
                "You'll need to use multiple if/else statements to handle different scenarios",
            ],
            robot_start: Point::new(0, 0),
            star: Point::new(4, 3),
            obstacles: vec![Point::new(2, 0), Point::new(2, 1), Point::new(3, 2)],
            xp_reward: 100,
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_lists_criteria_and_hints() {
        for level in COMMANDER_LEVELS.iter() {
            assert!(!level.solution_criteria.is_empty(), "level {}", level.id);
            assert!(!level.hints.is_empty(), "level {}", level.id);
        }
    }
}
