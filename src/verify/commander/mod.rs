//! JS Commander script runner
//!
//! Runs the player's robot script against a level's grid. Instead of
//! evaluating arbitrary code, the script is parsed into a small AST
//! covering exactly what the levels teach - movement calls, counted
//! `for` loops, and `if`/`else` on `hasObstacle("dir")` - and executed
//! against the level's obstacle map.

mod exec;
mod parser;

use thiserror::Error;

use crate::catalog::{CommanderLevel, Point};

pub use exec::STEP_LIMIT;

/// Errors a script run can produce. Parse errors and runtime errors are
/// both surfaced as console lines, never as panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("Syntax error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unknown function {0}()")]
    UnknownFunction(String),

    #[error("Unknown direction \"{0}\" - use \"right\", \"left\", \"up\" or \"down\"")]
    UnknownDirection(String),

    #[error("Robot hit an obstacle at ({0}, {1})")]
    HitObstacle(i32, i32),

    #[error("Script stopped after {0} steps - is there an endless loop?")]
    StepLimit(usize),
}

/// Outcome of running a script against a level
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Where the robot ended up
    pub position: Point,
    /// Console-style lines produced during the run
    pub log: Vec<String>,
    /// The error that stopped the run, if any
    pub error: Option<ScriptError>,
}

impl RunReport {
    /// Whether the robot finished on the star
    pub fn reached_star(&self, level: &CommanderLevel) -> bool {
        self.error.is_none() && self.position == level.star
    }
}

/// Parse and execute a robot script for the given level
pub fn run_script(level: &CommanderLevel, source: &str) -> RunReport {
    let program = match parser::parse(source) {
        Ok(program) => program,
        Err(err) => {
            return RunReport {
                position: level.robot_start,
                log: vec![format!("Error executing code: {}", err)],
                error: Some(err),
            };
        }
    };

    let mut world = exec::World::new(level);
    let error = world.run(&program).err();
    let (position, mut log) = world.into_parts();
    if let Some(err) = &error {
        log.push(format!("Error executing code: {}", err));
    }

    RunReport {
        position,
        log,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::COMMANDER_LEVELS;

    #[test]
    fn test_straight_walk_reaches_star() {
        let level = &COMMANDER_LEVELS[0]; // star at (3,2)
        let source = "function runRobot() {\n  moveRight();\n  moveRight();\n  moveRight();\n  moveDown();\n  moveDown();\n}";
        let report = run_script(level, source);
        assert_eq!(report.position, Point::new(3, 2));
        assert!(report.reached_star(level));
        assert!(report
            .log
            .iter()
            .any(|l| l == "Robot moved right to (1, 0)"));
    }

    #[test]
    fn test_loop_reaches_star() {
        let level = &COMMANDER_LEVELS[1]; // star at (5,0)
        let source = "function runRobot() {\n  for (let i = 0; i < 5; i++) {\n    moveRight();\n  }\n}";
        let report = run_script(level, source);
        assert_eq!(report.position, Point::new(5, 0));
        assert!(report.reached_star(level));
    }

    #[test]
    fn test_conditional_route_around_obstacles() {
        let level = &COMMANDER_LEVELS[2]; // star (4,3), obstacles (2,0) (2,1) (3,2)
        let source = "function runRobot() {\n  moveRight();\n  if (hasObstacle(\"right\")) {\n    moveDown();\n    moveDown();\n  }\n  moveDown();\n  moveRight();\n  moveRight();\n  moveRight();\n}";
        let report = run_script(level, source);
        assert_eq!(report.position, Point::new(4, 3));
        assert!(report.reached_star(level));
    }

    #[test]
    fn test_wrong_destination_is_not_a_pass() {
        let level = &COMMANDER_LEVELS[0];
        let report = run_script(level, "moveRight();");
        assert_eq!(report.position, Point::new(1, 0));
        assert!(!report.reached_star(level));
        assert!(report.error.is_none());
    }

    #[test]
    fn test_walking_into_obstacle_is_an_error() {
        let level = &COMMANDER_LEVELS[2]; // obstacle at (2,0)
        let report = run_script(level, "moveRight();\nmoveRight();");
        assert_eq!(report.error, Some(ScriptError::HitObstacle(2, 0)));
        assert!(report.log.iter().any(|l| l.contains("hit an obstacle")));
    }

    #[test]
    fn test_parse_error_is_reported_not_fatal() {
        let level = &COMMANDER_LEVELS[0];
        let report = run_script(level, "moveRight(");
        assert!(matches!(report.error, Some(ScriptError::Parse { .. })));
        assert_eq!(report.position, level.robot_start);
        assert!(report.log[0].starts_with("Error executing code:"));
    }

    #[test]
    fn test_unknown_function_is_an_error() {
        let level = &COMMANDER_LEVELS[0];
        let report = run_script(level, "teleport();");
        assert_eq!(
            report.error,
            Some(ScriptError::UnknownFunction("teleport".to_string()))
        );
    }

    #[test]
    fn test_console_log_lines_pass_through() {
        let level = &COMMANDER_LEVELS[0];
        let report = run_script(level, "console.log(\"hello\");\nmoveRight();");
        assert_eq!(report.log[0], "hello");
    }
}
