//! Answer verifiers
//!
//! Per-game heuristics that compare user-submitted state against a level's
//! target specification and decide pass/fail. These are deliberately
//! simple string and position checks, not a real evaluator - the games
//! need "close enough" feedback, not correctness proofs.

pub mod blueprint;
pub mod commander;
pub mod keywords;
pub mod styler;

pub use commander::{run_script, RunReport, ScriptError};
pub use keywords::KeywordVerdict;

/// Minimum match percentage for the percentage-scored verifiers
pub const PASS_THRESHOLD: u32 = 80;
