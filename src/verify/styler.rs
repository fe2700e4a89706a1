//! CSS Styler verifier
//!
//! Scores the applied declarations against the level's target map. Plain
//! targets match on exact property/value equality. Nested targets use a
//! `sel:prop` key and match a palette entry whose `property` field holds
//! the `prop: value` pair and whose `value` field names the selector.

use rand::Rng;

use crate::catalog::styler::CLIENT_REQUESTS;
use crate::catalog::CssProperty;

use super::PASS_THRESHOLD;

/// Result of a styler check
#[derive(Debug, Clone, PartialEq)]
pub struct StylerVerdict {
    pub percent: u32,
    pub passed: bool,
}

/// Compare applied declarations against the target map
pub fn check(applied: &[CssProperty], target: &[(&str, &str)]) -> StylerVerdict {
    if target.is_empty() {
        return StylerVerdict {
            percent: 100,
            passed: true,
        };
    }

    let matched = target
        .iter()
        .filter(|(key, value)| applied.iter().any(|p| matches_target(p, key, value)))
        .count();

    let percent = (matched as f64 / target.len() as f64 * 100.0).round() as u32;
    StylerVerdict {
        percent,
        passed: percent >= PASS_THRESHOLD,
    }
}

/// Whether a single applied declaration satisfies one target entry
fn matches_target(applied: &CssProperty, key: &str, value: &str) -> bool {
    match key.split_once(':') {
        // Nested target like ("h2:margin-bottom", "10px"): the palette
        // stores these as property = "margin-bottom: 10px", value = "h2".
        Some((selector, prop)) => {
            let Some((applied_prop, applied_value)) = applied.property.split_once(':') else {
                return false;
            };
            applied.value == selector
                && applied_prop.trim() == prop
                && applied_value.trim() == value
        }
        // Plain target: exact property/value equality
        None => applied.property == key && applied.value == value,
    }
}

/// Pick a "client request" hint for a failed check
pub fn client_request<R: Rng>(rng: &mut R) -> &'static str {
    CLIENT_REQUESTS[rng.gen_range(0..CLIENT_REQUESTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::STYLER_LEVELS;

    #[test]
    fn test_all_properties_match_fully() {
        for level in STYLER_LEVELS.iter() {
            let verdict = check(&level.available_properties, &level.target_css);
            assert_eq!(verdict.percent, 100, "level {}", level.id);
            assert!(verdict.passed);
        }
    }

    #[test]
    fn test_eighty_percent_passes() {
        let level = &STYLER_LEVELS[2]; // 10 targets
        let applied: Vec<_> = level.available_properties[..8].to_vec();
        let verdict = check(&applied, &level.target_css);
        assert_eq!(verdict.percent, 80);
        assert!(verdict.passed);
    }

    #[test]
    fn test_below_threshold_fails() {
        let level = &STYLER_LEVELS[0]; // 6 targets
        let applied: Vec<_> = level.available_properties[..3].to_vec();
        let verdict = check(&applied, &level.target_css);
        assert_eq!(verdict.percent, 50);
        assert!(!verdict.passed);
    }

    #[test]
    fn test_nested_selector_match() {
        let applied = CssProperty {
            id: "mtitle2",
            property: "margin-bottom: 10px",
            value: "h2",
            description: "",
        };
        assert!(matches_target(&applied, "h2:margin-bottom", "10px"));
        assert!(!matches_target(&applied, "a:margin-bottom", "10px"));
        assert!(!matches_target(&applied, "h2:margin-bottom", "12px"));
    }

    #[test]
    fn test_client_request_from_fixed_set() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let hint = client_request(&mut rng);
            assert!(CLIENT_REQUESTS.contains(&hint));
        }
    }
}
