//! HTML Blueprint verifier
//!
//! Pass condition: the placed tag IDs equal the level's correct order,
//! element for element.

/// Check whether the placed tags are in exactly the correct order
pub fn order_is_correct(placed: &[&str], correct: &[&str]) -> bool {
    placed.len() == correct.len() && placed.iter().zip(correct).all(|(a, b)| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BLUEPRINT_LEVELS;

    #[test]
    fn test_exact_order_passes() {
        let level = &BLUEPRINT_LEVELS[0];
        let placed: Vec<&str> = level.correct_order.clone();
        assert!(order_is_correct(&placed, &level.correct_order));
    }

    #[test]
    fn test_swapped_order_fails() {
        assert!(!order_is_correct(&["p", "h1", "img"], &["h1", "p", "img"]));
    }

    #[test]
    fn test_partial_placement_fails() {
        assert!(!order_is_correct(&["h1", "p"], &["h1", "p", "img"]));
    }
}
