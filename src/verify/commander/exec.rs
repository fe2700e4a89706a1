//! Robot script executor
//!
//! Walks the parsed statement list against a level's grid, producing the
//! console log the game shows after a run.

use crate::catalog::commander::GRID_SIZE;
use crate::catalog::{CommanderLevel, Point};

use super::parser::Stmt;
use super::ScriptError;

/// Maximum executed statements before a run is aborted
pub const STEP_LIMIT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "right" => Some(Direction::Right),
            "left" => Some(Direction::Left),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// Execution state for one script run
pub struct World<'a> {
    level: &'a CommanderLevel,
    position: Point,
    log: Vec<String>,
    steps: usize,
}

impl<'a> World<'a> {
    pub fn new(level: &'a CommanderLevel) -> Self {
        Self {
            level,
            position: level.robot_start,
            log: Vec::new(),
            steps: 0,
        }
    }

    /// Consume the world, yielding the final position and console log
    pub fn into_parts(self) -> (Point, Vec<String>) {
        (self.position, self.log)
    }

    pub fn run(&mut self, program: &[Stmt]) -> Result<(), ScriptError> {
        for stmt in program {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> Result<(), ScriptError> {
        self.steps += 1;
        if self.steps > STEP_LIMIT {
            return Err(ScriptError::StepLimit(STEP_LIMIT));
        }

        match stmt {
            Stmt::Call { name, arg, .. } => self.exec_call(name, arg.as_deref()),
            Stmt::Repeat { count, body } => {
                for _ in 0..*count {
                    for stmt in body {
                        self.exec_stmt(stmt)?;
                    }
                }
                Ok(())
            }
            Stmt::If {
                negated,
                direction,
                then_body,
                else_body,
                ..
            } => {
                let dir = Direction::from_name(direction)
                    .ok_or_else(|| ScriptError::UnknownDirection(direction.clone()))?;
                let blocked = self.has_obstacle(dir) != *negated;
                let branch = if blocked { then_body } else { else_body };
                for stmt in branch {
                    self.exec_stmt(stmt)?;
                }
                Ok(())
            }
        }
    }

    fn exec_call(&mut self, name: &str, arg: Option<&str>) -> Result<(), ScriptError> {
        match name {
            "moveRight" => self.step(Direction::Right),
            "moveLeft" => self.step(Direction::Left),
            "moveUp" => self.step(Direction::Up),
            "moveDown" => self.step(Direction::Down),
            "console.log" => {
                self.log.push(arg.unwrap_or("").to_string());
                Ok(())
            }
            // A bare predicate call does nothing but is not an error
            "hasObstacle" => match arg {
                Some(dir) if Direction::from_name(dir).is_some() => Ok(()),
                Some(dir) => Err(ScriptError::UnknownDirection(dir.to_string())),
                None => Err(ScriptError::UnknownDirection(String::new())),
            },
            _ => Err(ScriptError::UnknownFunction(name.to_string())),
        }
    }

    /// Move one cell, clamping at the grid edge
    fn step(&mut self, dir: Direction) -> Result<(), ScriptError> {
        let (dx, dy) = dir.delta();
        let next = Point::new(
            (self.position.x + dx).clamp(0, GRID_SIZE - 1),
            (self.position.y + dy).clamp(0, GRID_SIZE - 1),
        );

        if self.level.obstacles.contains(&next) {
            return Err(ScriptError::HitObstacle(next.x, next.y));
        }

        self.position = next;
        self.log.push(format!(
            "Robot moved {} to ({}, {})",
            dir.label(),
            next.x,
            next.y
        ));
        Ok(())
    }

    fn has_obstacle(&self, dir: Direction) -> bool {
        let (dx, dy) = dir.delta();
        let probe = Point::new(self.position.x + dx, self.position.y + dy);
        self.level.obstacles.contains(&probe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::COMMANDER_LEVELS;

    #[test]
    fn test_moves_clamp_at_grid_edge() {
        let level = &COMMANDER_LEVELS[0];
        let mut world = World::new(level);
        world.exec_call("moveLeft", None).unwrap();
        world.exec_call("moveUp", None).unwrap();
        let (position, _) = world.into_parts();
        assert_eq!(position, Point::new(0, 0));
    }

    #[test]
    fn test_obstacle_probe_is_relative() {
        let level = &COMMANDER_LEVELS[2]; // obstacles (2,0) (2,1) (3,2)
        let mut world = World::new(level);
        assert!(!world.has_obstacle(Direction::Right));
        world.exec_call("moveRight", None).unwrap();
        assert!(world.has_obstacle(Direction::Right));
        assert!(!world.has_obstacle(Direction::Down));
    }

    #[test]
    fn test_step_limit_stops_runaway_loops() {
        let level = &COMMANDER_LEVELS[0];
        let mut world = World::new(level);
        let body = vec![Stmt::Call {
            name: "console.log".to_string(),
            arg: Some("tick".to_string()),
            line: 1,
        }];
        let program = vec![Stmt::Repeat {
            count: 5000,
            body,
        }];
        let result = world.run(&program);
        assert_eq!(result, Err(ScriptError::StepLimit(STEP_LIMIT)));
    }
}
